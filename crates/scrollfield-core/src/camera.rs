//! Scroll-driven camera controller.
//!
//! Smoothing is frame-rate coupled: each call to [`ScrollCamera::update`]
//! applies one fixed easing step regardless of how much wall time passed.
//! At 60 Hz a 0.05 factor settles within ~1% in about 90 frames; faster
//! displays travel proportionally faster.

use crate::constants::*;
use crate::error::SceneError;
use crate::layout::{RenderConfig, ViewportDescriptor};
use crate::math::lerp;
use crate::state::Camera;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub look_at_z_offset: f32,
}

impl CameraState {
    #[inline]
    pub fn look_at(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.position.z - self.look_at_z_offset)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.fov.is_finite()
    }
}

/// Per-frame samples from the scroll host and pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Expected in [0, 1]; the scroll host clamps.
    pub scroll_offset: f32,
    /// Normalized device coordinates in [-1, 1].
    pub pointer: Vec2,
}

#[inline]
pub fn target_z(config: &RenderConfig, scroll_offset: f32) -> f32 {
    lerp(config.camera_start_z, config.camera_end_z, scroll_offset)
}

#[inline]
pub fn target_fov(config: &RenderConfig, scroll_offset: f32) -> f32 {
    lerp(config.fov_start, config.fov_end, scroll_offset)
}

/// Frames of exponential smoothing with `factor` before the remaining gap
/// falls below `epsilon` of its initial size.
pub fn frames_to_converge(factor: f32, epsilon: f32) -> u32 {
    if factor <= 0.0 || factor >= 1.0 || epsilon <= 0.0 || epsilon >= 1.0 {
        return 0;
    }
    (epsilon.ln() / (1.0 - factor).ln()).ceil() as u32
}

/// Owns [`CameraState`] for the lifetime of the scene.
pub struct ScrollCamera {
    state: CameraState,
    out_of_range_frames: u64,
    out_of_range: bool,
}

impl ScrollCamera {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            state: CameraState {
                position: Vec3::new(0.0, 0.0, config.camera_start_z),
                fov: config.fov_start,
                look_at_z_offset: LOOK_AT_Z_OFFSET,
            },
            out_of_range_frames: 0,
            out_of_range: false,
        }
    }

    #[inline]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Frames in which the scroll host handed over an offset outside [0, 1].
    #[inline]
    pub fn out_of_range_frames(&self) -> u64 {
        self.out_of_range_frames
    }

    /// One easing step toward the scroll/pointer targets.
    ///
    /// Offsets outside [0, 1] are not clamped here: targets extrapolate
    /// linearly past the configured endpoints. Each excursion is logged once
    /// and every affected frame is counted. A non-finite result leaves the
    /// previous state untouched.
    pub fn update(
        &mut self,
        input: FrameInput,
        config: &RenderConfig,
        viewport: &ViewportDescriptor,
    ) -> Result<&CameraState, SceneError> {
        let s = input.scroll_offset;
        if (0.0..=1.0).contains(&s) {
            self.out_of_range = false;
        } else {
            self.out_of_range_frames += 1;
            if !self.out_of_range {
                log::warn!("[camera] scroll offset {s} outside [0, 1]; extrapolating");
                self.out_of_range = true;
            }
        }

        let (scene_w, scene_h) = if viewport.is_valid() {
            (viewport.scene_width, viewport.scene_height)
        } else {
            (0.0, 0.0)
        };
        let parallax = Vec2::new(
            input.pointer.x * scene_w / PARALLAX_DIVISOR * config.mouse_influence,
            input.pointer.y * scene_h / PARALLAX_DIVISOR * config.mouse_influence,
        );

        let prev = self.state;
        let next = CameraState {
            position: Vec3::new(
                lerp(prev.position.x, parallax.x, PARALLAX_SMOOTHING),
                lerp(prev.position.y, parallax.y, PARALLAX_SMOOTHING),
                lerp(prev.position.z, target_z(config, s), POSITION_SMOOTHING),
            ),
            fov: lerp(prev.fov, target_fov(config, s), FOV_SMOOTHING),
            look_at_z_offset: prev.look_at_z_offset,
        };
        if !next.is_finite() {
            return Err(SceneError::NonFiniteCamera {
                z: next.position.z,
                fov: next.fov,
            });
        }
        self.state = next;
        Ok(&self.state)
    }

    /// Push position, orientation and fov onto the renderable camera.
    pub fn apply_to(&self, camera: &mut Camera, aspect: f32) {
        camera.eye = self.state.position;
        camera.target = self.state.look_at();
        camera.up = Vec3::Y;
        camera.fovy_radians = self.state.fov.to_radians();
        if aspect.is_finite() && aspect > 0.0 {
            camera.aspect = aspect;
        }
    }
}
