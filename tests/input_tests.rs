// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pointer_maps_to_ndc_with_y_up() {
    let p = client_to_ndc(100.0, 50.0, 0.0, 0.0, 200.0, 100.0);
    assert_eq!(p, PointerState { x: 0.0, y: 0.0 });

    let top_left = client_to_ndc(10.0, 20.0, 10.0, 20.0, 200.0, 100.0);
    assert_eq!(top_left.as_vec2(), glam::Vec2::new(-1.0, 1.0));

    let bottom_right = client_to_ndc(210.0, 120.0, 10.0, 20.0, 200.0, 100.0);
    assert_eq!(bottom_right.as_vec2(), glam::Vec2::new(1.0, -1.0));
}

#[test]
fn pointer_outside_canvas_is_clamped() {
    let p = client_to_ndc(-500.0, 900.0, 0.0, 0.0, 200.0, 100.0);
    assert_eq!(p.x, -1.0);
    assert_eq!(p.y, -1.0);
}

#[test]
fn zero_sized_canvas_yields_center() {
    assert_eq!(
        client_to_ndc(10.0, 10.0, 0.0, 0.0, 0.0, 100.0),
        PointerState::default()
    );
    assert_eq!(
        client_to_ndc(10.0, 10.0, 0.0, 0.0, 100.0, f32::NAN),
        PointerState::default()
    );
}

#[test]
fn scroll_progress_is_normalized() {
    assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(4000.0, 5000.0, 1000.0), 1.0);
    // Overscroll (rubber-banding) stays inside [0, 1].
    assert_eq!(scroll_progress(-30.0, 5000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(4100.0, 5000.0, 1000.0), 1.0);
}

#[test]
fn unscrollable_content_reports_zero_progress() {
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(f32::NAN, 5000.0, 1000.0), 0.0);
}

#[test]
fn damping_approaches_target_monotonically() {
    let mut v = 0.0;
    let mut prev = v;
    for _ in 0..120 {
        v = damp_toward(v, 1.0, 0.15, 1.0 / 60.0, 1e-4);
        assert!(v >= prev && v <= 1.0);
        prev = v;
    }
    assert_eq!(v, 1.0, "snaps once within epsilon");
}

#[test]
fn zero_damping_jumps_to_target() {
    assert_eq!(damp_toward(0.2, 0.9, 0.0, 1.0 / 60.0, 1e-4), 0.9);
}

#[test]
fn negative_dt_does_not_move_value() {
    assert_eq!(damp_toward(0.3, 0.9, 0.15, -1.0, 1e-4), 0.3);
}

#[test]
fn back_to_top_appears_after_half_a_screen() {
    assert!(!back_to_top_visible(0.0, 800.0, 0.5));
    assert!(!back_to_top_visible(400.0, 800.0, 0.5));
    assert!(back_to_top_visible(401.0, 800.0, 0.5));
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(action_for_key("t"), Some(KeyAction::ToggleTheme));
    assert_eq!(action_for_key("T"), Some(KeyAction::ToggleTheme));
    assert_eq!(action_for_key("Home"), Some(KeyAction::ScrollToTop));
    assert_eq!(action_for_key("m"), Some(KeyAction::ToggleMute));
    assert_eq!(action_for_key("M"), Some(KeyAction::ToggleMute));
    assert_eq!(action_for_key("x"), None);
    assert_eq!(action_for_key(""), None);
}
