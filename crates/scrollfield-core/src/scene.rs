//! Per-frame scene assembly: palette, lights, starfield, node cloud,
//! central mesh, grid and post chain.

use crate::camera::CameraState;
use crate::constants::*;
use crate::field::FieldCache;
use crate::layout::RenderConfig;
use crate::math::linear_hex;
use crate::post::PostChain;
use crate::theme::Theme;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshMaterial {
    pub color: Vec3,
    /// Emissive color already multiplied by its intensity.
    pub emissive: Vec3,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub angle: f32,
    pub penumbra: f32,
    pub intensity: f32,
    pub color: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub color: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLights {
    pub ambient: f32,
    pub spot: SpotLight,
    pub point: PointLight,
}

/// Theme-dependent colors, all in linear space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePalette {
    pub background: Vec3,
    pub star_color: Vec3,
    pub grid_section: Vec3,
    pub grid_cell: Vec3,
    pub central: MeshMaterial,
    pub node_colors: [Vec3; 2],
    pub node_opacity: f32,
    pub lights: SceneLights,
}

pub fn palette(theme: Theme) -> ScenePalette {
    let dark = theme.is_dark();
    let i = if dark { 0 } else { 1 };
    let spot_position = Vec3::from(SPOT_POSITION);
    ScenePalette {
        background: linear_hex(BACKGROUND_HEX[i]),
        star_color: linear_hex(STAR_COLOR_HEX[i]),
        grid_section: linear_hex(GRID_SECTION_HEX[i]),
        grid_cell: linear_hex(GRID_CELL_HEX[i]),
        central: MeshMaterial {
            color: linear_hex(CENTRAL_COLOR_HEX[i]),
            emissive: linear_hex(CENTRAL_EMISSIVE_HEX[i]) * CENTRAL_EMISSIVE_INTENSITY[i],
            opacity: CENTRAL_OPACITY[i],
        },
        node_colors: if dark {
            DARK_NODE_COLORS_HEX.map(linear_hex)
        } else {
            [linear_hex(LIGHT_NODE_COLOR_HEX); 2]
        },
        node_opacity: NODE_OPACITY[i],
        lights: SceneLights {
            ambient: AMBIENT_INTENSITY[i],
            spot: SpotLight {
                position: spot_position,
                direction: (-spot_position).normalize(),
                angle: SPOT_ANGLE,
                penumbra: SPOT_PENUMBRA,
                intensity: SPOT_INTENSITY[i],
                color: linear_hex(SPOT_COLOR_HEX),
            },
            point: PointLight {
                position: Vec3::from(POINT_POSITION),
                intensity: POINT_INTENSITY[i],
                color: linear_hex(POINT_COLOR_HEX[i]),
            },
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

/// Gentle bobbing and wobbling applied around an object's parent group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub rotation: Vec3,
    pub offset_y: f32,
}

impl FloatMotion {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            Vec3::new(0.0, self.offset_y, 0.0),
        )
    }
}

pub fn float_motion(params: FloatParams, phase: f32, elapsed: f32) -> FloatMotion {
    let a = (phase + elapsed) / 4.0 * params.speed;
    let ri = params.rotation_intensity;
    FloatMotion {
        rotation: Vec3::new(a.cos() / 8.0 * ri, a.sin() / 8.0 * ri, a.sin() / 20.0 * ri),
        offset_y: a.sin() / 10.0 * params.float_intensity,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshInstance {
    pub model: Mat4,
    pub color: Vec3,
    pub emissive: Vec3,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarsLayer {
    pub rotation_y: f32,
    pub point_size: f32,
    pub color: Vec3,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub y: f32,
    pub cell_size: f32,
    pub section_size: f32,
    pub fade_distance: f32,
    pub cell_color: Vec3,
    pub section_color: Vec3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSample {
    /// Seconds since the scene mounted.
    pub elapsed: f32,
    pub scroll_offset: f32,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub background: Vec3,
    pub lights: SceneLights,
    pub stars: StarsLayer,
    pub central: MeshInstance,
    pub nodes: Vec<MeshInstance>,
    pub grid: GridParams,
    pub camera: CameraState,
    pub post: PostChain,
    /// Bumps whenever the star or node fields were regenerated.
    pub field_generation: u64,
}

/// Owns the memoized fields and the central mesh spin. Camera state is
/// read, never written.
pub struct SceneComposer {
    fields: FieldCache,
    central_spin: Vec2,
}

impl SceneComposer {
    pub fn new(seed: u64) -> Self {
        Self {
            fields: FieldCache::new(seed),
            central_spin: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn fields(&self) -> &FieldCache {
        &self.fields
    }

    /// Regenerates fields only when counts, spread or theme changed.
    pub fn sync_fields(&mut self, config: &RenderConfig, theme: Theme) -> bool {
        self.fields.sync(config, theme)
    }

    pub fn compose(
        &mut self,
        sample: &FrameSample,
        config: &RenderConfig,
        theme: Theme,
        camera: &CameraState,
    ) -> SceneFrame {
        self.sync_fields(config, theme);
        let pal = palette(theme);

        self.central_spin.x += CENTRAL_SPIN_X_PER_FRAME;
        self.central_spin.y += CENTRAL_SPIN_Y_PER_FRAME;
        let central_float = float_motion(
            FloatParams {
                speed: CENTRAL_FLOAT_SPEED,
                rotation_intensity: CENTRAL_FLOAT_ROTATION,
                float_intensity: CENTRAL_FLOAT_INTENSITY,
            },
            0.0,
            sample.elapsed,
        );
        let central_scale =
            config.central_scale * (1.0 + sample.scroll_offset * CENTRAL_SCROLL_GROWTH);
        let central = MeshInstance {
            model: central_float.matrix()
                * Mat4::from_scale_rotation_translation(
                    Vec3::splat(central_scale),
                    Quat::from_euler(
                        EulerRot::XYZ,
                        self.central_spin.x,
                        self.central_spin.y,
                        0.0,
                    ),
                    Vec3::new(0.0, 0.0, CENTRAL_Z),
                ),
            color: pal.central.color,
            emissive: pal.central.emissive,
            opacity: pal.central.opacity,
        };

        let nodes = self
            .fields
            .nodes()
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let motion = float_motion(
                    FloatParams {
                        speed: NODE_FLOAT_SPEED_BASE + n.float_seed,
                        rotation_intensity: NODE_FLOAT_ROTATION,
                        float_intensity: NODE_FLOAT_INTENSITY,
                    },
                    n.rotation_seed * NODE_PHASE_SCALE,
                    sample.elapsed,
                );
                MeshInstance {
                    model: motion.matrix()
                        * Mat4::from_scale_rotation_translation(
                            Vec3::splat(config.node_scale),
                            Quat::IDENTITY,
                            n.position,
                        ),
                    color: pal.node_colors[i % 2],
                    emissive: Vec3::ZERO,
                    opacity: pal.node_opacity,
                }
            })
            .collect();

        SceneFrame {
            background: pal.background,
            lights: pal.lights,
            stars: StarsLayer {
                rotation_y: sample.elapsed * STAR_ROTATION_SPEED,
                point_size: STAR_POINT_SIZE,
                color: pal.star_color,
                opacity: STAR_OPACITY,
            },
            central,
            nodes,
            grid: GridParams {
                y: GRID_Y,
                cell_size: GRID_CELL_SIZE,
                section_size: GRID_SECTION_SIZE,
                fade_distance: config.fade_distance,
                cell_color: pal.grid_cell,
                section_color: pal.grid_section,
            },
            camera: *camera,
            post: PostChain::for_theme(theme, config.multisampling),
            field_generation: self.fields.generation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_motion_is_bounded() {
        let p = FloatParams {
            speed: 1.5,
            rotation_intensity: 2.0,
            float_intensity: 1.0,
        };
        for k in 0..200 {
            let m = float_motion(p, 3.0, k as f32 * 0.37);
            assert!(m.rotation.x.abs() <= 2.0 / 8.0 + 1e-6);
            assert!(m.rotation.z.abs() <= 2.0 / 20.0 + 1e-6);
            assert!(m.offset_y.abs() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn dark_palette_alternates_node_colors() {
        let p = palette(Theme::Dark);
        assert_ne!(p.node_colors[0], p.node_colors[1]);
        let l = palette(Theme::Light);
        assert_eq!(l.node_colors[0], l.node_colors[1]);
        assert!(p.lights.ambient < l.lights.ambient);
    }
}
