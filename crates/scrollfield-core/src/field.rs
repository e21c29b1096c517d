//! Procedural starfield and node cloud, memoized against their inputs.

use crate::constants::{NODE_BASE_Z_OFFSET, STAR_HALF_EXTENT, STAR_MAX_SIZE};
use crate::layout::RenderConfig;
use crate::theme::Theme;
use glam::Vec3;
use rand::prelude::*;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarField {
    pub stars: Vec<Star>,
}

impl StarField {
    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePlacement {
    pub position: Vec3,
    /// Uniform in [0, 1); offsets the node's float animation phase.
    pub rotation_seed: f32,
    /// Uniform in [0, 1); added to the base float speed.
    pub float_seed: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeCloud {
    pub nodes: Vec<NodePlacement>,
}

impl NodeCloud {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * extent
}

/// Uniform points inside a cube of the given half extent, sizes in `[0, STAR_MAX_SIZE)`.
pub fn generate_stars<R: Rng + ?Sized>(count: usize, half_extent: f32, rng: &mut R) -> StarField {
    let edge = half_extent * 2.0;
    let stars = (0..count)
        .map(|_| Star {
            position: Vec3::new(
                centered(rng, edge),
                centered(rng, edge),
                centered(rng, edge),
            ),
            size: rng.gen::<f32>() * STAR_MAX_SIZE,
        })
        .collect();
    StarField { stars }
}

/// Nodes spread laterally at random, evenly stepped in depth so the camera
/// meets them one after another.
pub fn generate_nodes<R: Rng + ?Sized>(
    count: usize,
    spread_xy: f32,
    spread_z_step: f32,
    rng: &mut R,
) -> NodeCloud {
    let nodes = (0..count)
        .map(|i| NodePlacement {
            position: Vec3::new(
                centered(rng, spread_xy),
                centered(rng, spread_xy),
                -(i as f32) * spread_z_step - NODE_BASE_Z_OFFSET,
            ),
            rotation_seed: rng.gen::<f32>(),
            float_seed: rng.gen::<f32>(),
        })
        .collect();
    NodeCloud { nodes }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StarKey {
    count: usize,
    theme: Theme,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeKey {
    count: usize,
    spread_xy_bits: u32,
    spread_z_bits: u32,
}

/// Owns the generated fields and only regenerates them when their declared
/// inputs change. `generation` bumps on every regeneration so GPU buffers can
/// be re-uploaded lazily.
pub struct FieldCache {
    rng: StdRng,
    stars: StarField,
    nodes: NodeCloud,
    star_key: Option<StarKey>,
    node_key: Option<NodeKey>,
    generation: u64,
}

impl FieldCache {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stars: StarField::default(),
            nodes: NodeCloud::default(),
            star_key: None,
            node_key: None,
            generation: 0,
        }
    }

    /// Bring both fields in line with `config`; returns true if anything was regenerated.
    pub fn sync(&mut self, config: &RenderConfig, theme: Theme) -> bool {
        let mut changed = false;
        let star_key = StarKey {
            count: config.star_count,
            theme,
        };
        if self.star_key != Some(star_key) {
            self.stars = generate_stars(config.star_count, STAR_HALF_EXTENT, &mut self.rng);
            self.star_key = Some(star_key);
            changed = true;
        }
        let node_key = NodeKey {
            count: config.node_count,
            spread_xy_bits: config.node_spread_xy.to_bits(),
            spread_z_bits: config.node_spread_z_step.to_bits(),
        };
        if self.node_key != Some(node_key) {
            self.nodes = generate_nodes(
                config.node_count,
                config.node_spread_xy,
                config.node_spread_z_step,
                &mut self.rng,
            );
            self.node_key = Some(node_key);
            changed = true;
        }
        if changed {
            self.generation += 1;
            log::info!(
                "[field] regenerated stars={} nodes={} generation={}",
                self.stars.len(),
                self.nodes.len(),
                self.generation
            );
        }
        changed
    }

    #[inline]
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    #[inline]
    pub fn nodes(&self) -> &NodeCloud {
        &self.nodes
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
