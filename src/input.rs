use glam::Vec2;

/// Pointer position in normalized device coordinates, Y up.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Map a client-space point onto the canvas rect as NDC in [-1, 1].
#[inline]
pub fn client_to_ndc(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    rect_width: f32,
    rect_height: f32,
) -> PointerState {
    if !(rect_width > 0.0 && rect_height > 0.0) {
        return PointerState::default();
    }
    let u = (client_x - rect_left) / rect_width;
    let v = (client_y - rect_top) / rect_height;
    PointerState {
        x: (u * 2.0 - 1.0).clamp(-1.0, 1.0),
        y: (1.0 - v * 2.0).clamp(-1.0, 1.0),
    }
}

// ---------------- Scroll helpers ----------------

/// Normalized scroll progress of a container; 0 when nothing can scroll.
#[inline]
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
    let range = scroll_height - client_height;
    if !(range > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// Exponential approach of `current` to `target` with time constant `tau_sec`.
#[inline]
pub fn damp_toward(current: f32, target: f32, tau_sec: f32, dt_sec: f32, snap: f32) -> f32 {
    if tau_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt_sec.max(0.0) / tau_sec).exp();
    let next = current + (target - current) * alpha;
    if (target - next).abs() < snap {
        target
    } else {
        next
    }
}

#[inline]
pub fn back_to_top_visible(scroll_top: f64, viewport_height: f64, fraction: f64) -> bool {
    scroll_top > viewport_height * fraction
}

// ---------------- Keyboard ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleTheme,
    ScrollToTop,
    ToggleMute,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "t" | "T" => Some(KeyAction::ToggleTheme),
        "Home" => Some(KeyAction::ScrollToTop),
        "m" | "M" => Some(KeyAction::ToggleMute),
        _ => None,
    }
}
