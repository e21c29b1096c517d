use crate::constants::{SCROLL_DAMPING_MAX_SEC, SCROLL_DAMPING_SEC};
use scrollfield_core::Theme;

/// Runtime options read from `data-*` attributes on `<body>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BootConfig {
    pub theme: Theme,
    /// Fixed field seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    pub scroll_damping_sec: f32,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            seed: None,
            scroll_damping_sec: SCROLL_DAMPING_SEC,
        }
    }
}

impl BootConfig {
    pub fn from_attributes(
        theme: Option<&str>,
        seed: Option<&str>,
        scroll_damping: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            theme: theme.and_then(Theme::parse).unwrap_or(defaults.theme),
            seed: parse_seed(seed),
            scroll_damping_sec: parse_damping(scroll_damping).unwrap_or(defaults.scroll_damping_sec),
        }
    }
}

pub fn parse_seed(value: Option<&str>) -> Option<u64> {
    value.and_then(|v| v.trim().parse::<u64>().ok())
}

/// Damping in seconds; zero disables easing, bad values fall back to the default.
pub fn parse_damping(value: Option<&str>) -> Option<f32> {
    let v = value?.trim().parse::<f32>().ok()?;
    (v.is_finite() && v >= 0.0).then(|| v.min(SCROLL_DAMPING_MAX_SEC))
}
