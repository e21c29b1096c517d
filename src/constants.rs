// Page wiring and frame-loop tuning constants for the web frontend.

// Element ids
pub const CANVAS_ID: &str = "scene-canvas";
pub const SCROLL_CONTAINER_ID: &str = "scroll-container";
pub const SCROLL_SPACER_ID: &str = "scroll-spacer";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const ENTER_BUTTON_ID: &str = "enter-experience";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const BACK_TO_TOP_ID: &str = "back-to-top";
pub const NAV_LINK_SELECTOR: &str = "[data-scroll-target]";
pub const NAV_TARGET_ATTR: &str = "data-scroll-target";

// Body attributes read at boot
pub const THEME_ATTR: &str = "data-theme";
pub const SEED_ATTR: &str = "data-seed";
pub const DAMPING_ATTR: &str = "data-scroll-damping";

// CSS classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADING_CLASS: &str = "fading";
pub const VISIBLE_CLASS: &str = "visible";

// Render surface
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Scroll host
pub const SCROLL_PAGES: f32 = 5.0; // content height in viewport heights
pub const SCROLL_DAMPING_SEC: f32 = 0.15; // time constant for progress easing
pub const SCROLL_DAMPING_MAX_SEC: f32 = 2.0;
pub const SCROLL_SNAP_EPSILON: f32 = 1e-4;
pub const BACK_TO_TOP_FRACTION: f64 = 0.5; // of window inner height

// Start overlay fade before removal
pub const OVERLAY_FADE_MS: i32 = 1000;

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Audio cues
pub const AMBIENT_URL: &str = "https://assets.mixkit.co/active_storage/sfx/2556/2556-preview.mp3";
pub const CLICK_URL: &str = "https://assets.mixkit.co/active_storage/sfx/2568/2568-preview.mp3";
pub const AMBIENT_VOLUME: f64 = 0.08;
pub const CLICK_VOLUME: f64 = 0.15;
