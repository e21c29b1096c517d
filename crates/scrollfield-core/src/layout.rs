//! Responsive layout: maps viewport geometry and theme to a [`RenderConfig`].

use crate::constants::*;
use crate::error::SceneError;
use crate::theme::Theme;

/// Pixel size of the render surface and the matching scene-space size at the
/// camera's focal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDescriptor {
    pub pixel_width: f32,
    pub pixel_height: f32,
    pub scene_width: f32,
    pub scene_height: f32,
}

impl ViewportDescriptor {
    /// Measure the scene-space extent through the reference camera.
    pub fn from_pixels(pixel_width: f32, pixel_height: f32) -> Self {
        let scene_height = 2.0 * (REFERENCE_FOV_DEG.to_radians() * 0.5).tan() * REFERENCE_DISTANCE;
        let aspect = pixel_width / pixel_height;
        Self {
            pixel_width,
            pixel_height,
            scene_width: scene_height * aspect,
            scene_height,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.pixel_width / self.pixel_height
    }

    pub fn is_valid(&self) -> bool {
        [
            self.pixel_width,
            self.pixel_height,
            self.scene_width,
            self.scene_height,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SceneError::InvalidViewport {
                width: self.pixel_width,
                height: self.pixel_height,
            })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayClass {
    Portrait,
    Desktop,
    LargeDesktop,
}

impl DisplayClass {
    /// Portrait wins over width so a tall 4K panel still frames like a phone.
    pub fn classify(viewport: &ViewportDescriptor) -> Self {
        if viewport.aspect() < 1.0 {
            DisplayClass::Portrait
        } else if viewport.pixel_width > LARGE_DESKTOP_MIN_WIDTH_PX {
            DisplayClass::LargeDesktop
        } else {
            DisplayClass::Desktop
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            DisplayClass::Portrait => 0,
            DisplayClass::Desktop => 1,
            DisplayClass::LargeDesktop => 2,
        }
    }
}

/// Scene parameters derived once per (viewport, theme) change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub class: DisplayClass,
    pub star_count: usize,
    pub node_count: usize,
    pub node_spread_xy: f32,
    pub node_spread_z_step: f32,
    pub central_scale: f32,
    pub node_scale: f32,
    pub camera_start_z: f32,
    pub camera_end_z: f32,
    pub fov_start: f32,
    pub fov_end: f32,
    pub mouse_influence: f32,
    pub fade_distance: f32,
    pub multisampling: u32,
}

impl RenderConfig {
    /// Minimal config used while the surface has no usable size.
    pub fn fallback(theme: Theme) -> Self {
        Self {
            class: DisplayClass::Desktop,
            star_count: FALLBACK_STAR_COUNT,
            node_count: FALLBACK_NODE_COUNT,
            node_spread_xy: NODE_SPREAD_XY,
            node_spread_z_step: NODE_SPREAD_Z_STEP,
            central_scale: SCALE_MIN,
            node_scale: SCALE_MIN,
            camera_start_z: CAMERA_START_Z,
            camera_end_z: camera_end_z(theme),
            fov_start: FOV_START_DEG,
            fov_end: FOV_END_DEG,
            mouse_influence: MOUSE_INFLUENCE,
            fade_distance: GRID_FADE_DISTANCE,
            multisampling: 1,
        }
    }
}

#[inline]
fn camera_end_z(theme: Theme) -> f32 {
    if theme.is_dark() {
        CAMERA_END_Z_DARK
    } else {
        CAMERA_END_Z_LIGHT
    }
}

/// Pure mapping from viewport and theme to scene parameters.
///
/// Unusable viewports (zero, negative or non-finite sizes) yield
/// [`RenderConfig::fallback`] so nothing downstream sees NaN.
pub fn derive_config(viewport: &ViewportDescriptor, theme: Theme) -> RenderConfig {
    if !viewport.is_valid() {
        return RenderConfig::fallback(theme);
    }
    let class = DisplayClass::classify(viewport);
    let idx = class.index();
    let portrait = class == DisplayClass::Portrait;

    let (star_counts, node_counts) = if theme.is_dark() {
        (DARK_STAR_COUNTS, DARK_NODE_COUNTS)
    } else {
        (LIGHT_STAR_COUNTS, LIGHT_NODE_COUNTS)
    };

    let boost = if class == DisplayClass::LargeDesktop {
        LARGE_DESKTOP_SCALE_BOOST
    } else {
        1.0
    };
    let scale = (viewport.scene_width / SCALE_REFERENCE_WIDTH).clamp(SCALE_MIN, SCALE_MAX) * boost;

    RenderConfig {
        class,
        star_count: star_counts[idx],
        node_count: node_counts[idx],
        node_spread_xy: if portrait {
            NODE_SPREAD_XY_PORTRAIT
        } else {
            NODE_SPREAD_XY
        },
        node_spread_z_step: NODE_SPREAD_Z_STEP,
        central_scale: scale,
        node_scale: scale,
        camera_start_z: if portrait {
            CAMERA_START_Z_PORTRAIT
        } else {
            CAMERA_START_Z
        },
        camera_end_z: camera_end_z(theme),
        fov_start: if portrait {
            FOV_START_DEG_PORTRAIT
        } else {
            FOV_START_DEG
        },
        fov_end: if portrait {
            FOV_END_DEG_PORTRAIT
        } else {
            FOV_END_DEG
        },
        mouse_influence: if portrait {
            MOUSE_INFLUENCE_PORTRAIT
        } else {
            MOUSE_INFLUENCE
        },
        fade_distance: if portrait {
            GRID_FADE_DISTANCE_PORTRAIT
        } else {
            GRID_FADE_DISTANCE
        },
        multisampling: MULTISAMPLING[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_size_follows_aspect() {
        let v = ViewportDescriptor::from_pixels(1600.0, 800.0);
        assert!((v.scene_width / v.scene_height - 2.0).abs() < 1e-5);
        assert!((v.scene_height - 22.935).abs() < 0.01);
    }

    #[test]
    fn square_viewport_is_desktop() {
        let v = ViewportDescriptor::from_pixels(900.0, 900.0);
        assert_eq!(DisplayClass::classify(&v), DisplayClass::Desktop);
    }

    #[test]
    fn tall_wide_panel_is_portrait() {
        let v = ViewportDescriptor::from_pixels(2160.0, 3840.0);
        assert_eq!(DisplayClass::classify(&v), DisplayClass::Portrait);
    }

    #[test]
    fn invalid_viewport_reports_error() {
        let v = ViewportDescriptor::from_pixels(0.0, 0.0);
        assert!(!v.is_valid());
        assert!(matches!(
            v.validate(),
            Err(SceneError::InvalidViewport { .. })
        ));
    }
}
