use thiserror::Error;

/// Faults raised by the per-frame scene update.
///
/// None of these are fatal: the frame loop logs them, keeps the previous
/// state and carries on with the next input sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("camera update produced a non-finite state (z={z}, fov={fov})")]
    NonFiniteCamera { z: f32, fov: f32 },
    #[error("viewport {width}x{height} is not usable for layout")]
    InvalidViewport { width: f32, height: f32 },
}
