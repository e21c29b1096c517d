//! Fixed image-space effect chain parameterized by theme.

use crate::constants::*;
use crate::theme::Theme;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomParams {
    pub threshold: f32,
    pub intensity: f32,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VignetteParams {
    pub offset: f32,
    pub darkness: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PostEffect {
    Bloom(BloomParams),
    ChromaticAberration { offset: Vec2 },
    Noise { opacity: f32 },
    Vignette(VignetteParams),
}

impl PostEffect {
    pub fn name(&self) -> &'static str {
        match self {
            PostEffect::Bloom(_) => "bloom",
            PostEffect::ChromaticAberration { .. } => "chromatic_aberration",
            PostEffect::Noise { .. } => "noise",
            PostEffect::Vignette(_) => "vignette",
        }
    }
}

/// WebGPU only accepts 1 or 4 samples per pixel for render attachments.
#[inline]
pub fn msaa_sample_count(requested: u32) -> u32 {
    if requested > 1 {
        4
    } else {
        1
    }
}

/// Ordered effect stages; each one consumes the output of the previous.
#[derive(Clone, Debug, PartialEq)]
pub struct PostChain {
    stages: SmallVec<[PostEffect; 4]>,
    multisampling: u32,
}

impl PostChain {
    pub fn for_theme(theme: Theme, multisampling: u32) -> Self {
        let dark = theme.is_dark();
        let mut stages = SmallVec::new();
        stages.push(PostEffect::Bloom(BloomParams {
            threshold: if dark {
                DARK_BLOOM_THRESHOLD
            } else {
                LIGHT_BLOOM_THRESHOLD
            },
            intensity: if dark {
                DARK_BLOOM_INTENSITY
            } else {
                LIGHT_BLOOM_INTENSITY
            },
            radius: BLOOM_RADIUS,
        }));
        stages.push(PostEffect::ChromaticAberration {
            offset: Vec2::from(CHROMATIC_OFFSET),
        });
        stages.push(PostEffect::Noise {
            opacity: if dark {
                DARK_NOISE_OPACITY
            } else {
                LIGHT_NOISE_OPACITY
            },
        });
        stages.push(PostEffect::Vignette(VignetteParams {
            offset: VIGNETTE_OFFSET,
            darkness: if dark {
                DARK_VIGNETTE_DARKNESS
            } else {
                LIGHT_VIGNETTE_DARKNESS
            },
        }));
        Self {
            stages,
            multisampling,
        }
    }

    #[inline]
    pub fn stages(&self) -> &[PostEffect] {
        &self.stages
    }

    #[inline]
    pub fn multisampling(&self) -> u32 {
        self.multisampling
    }

    #[inline]
    pub fn sample_count(&self) -> u32 {
        msaa_sample_count(self.multisampling)
    }

    pub fn bloom(&self) -> Option<BloomParams> {
        self.stages.iter().find_map(|s| match s {
            PostEffect::Bloom(b) => Some(*b),
            _ => None,
        })
    }

    pub fn chromatic_offset(&self) -> Vec2 {
        self.stages
            .iter()
            .find_map(|s| match s {
                PostEffect::ChromaticAberration { offset } => Some(*offset),
                _ => None,
            })
            .unwrap_or(Vec2::ZERO)
    }

    pub fn noise_opacity(&self) -> f32 {
        self.stages
            .iter()
            .find_map(|s| match s {
                PostEffect::Noise { opacity } => Some(*opacity),
                _ => None,
            })
            .unwrap_or(0.0)
    }

    pub fn vignette(&self) -> Option<VignetteParams> {
        self.stages.iter().find_map(|s| match s {
            PostEffect::Vignette(v) => Some(*v),
            _ => None,
        })
    }
}
