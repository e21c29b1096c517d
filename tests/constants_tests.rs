// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use scrollfield_core::constants as scene;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_constants_are_within_reasonable_bounds() {
    assert!(DPR_MIN >= 1.0 && DPR_MIN <= DPR_MAX);
    assert!(SCROLL_PAGES > 1.0);
    assert!(SCROLL_DAMPING_SEC > 0.0 && SCROLL_DAMPING_SEC <= SCROLL_DAMPING_MAX_SEC);
    assert!(SCROLL_SNAP_EPSILON > 0.0 && SCROLL_SNAP_EPSILON < 1e-2);
    assert!(BACK_TO_TOP_FRACTION > 0.0 && BACK_TO_TOP_FRACTION < 1.0);
    assert!(OVERLAY_FADE_MS > 0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);
    assert!((0.0..=1.0).contains(&AMBIENT_VOLUME));
    assert!((0.0..=1.0).contains(&CLICK_VOLUME));
    assert!(AMBIENT_VOLUME < CLICK_VOLUME);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        SCROLL_CONTAINER_ID,
        SCROLL_SPACER_ID,
        START_OVERLAY_ID,
        ENTER_BUTTON_ID,
        THEME_TOGGLE_ID,
        BACK_TO_TOP_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(NAV_LINK_SELECTOR.contains(NAV_TARGET_ATTR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_consistent() {
    assert!(scene::CAMERA_START_Z > scene::CAMERA_END_Z_LIGHT);
    assert!(scene::CAMERA_END_Z_LIGHT > scene::CAMERA_END_Z_DARK);
    assert!(scene::FOV_START_DEG < scene::FOV_END_DEG);
    assert!(scene::FOV_START_DEG_PORTRAIT < scene::FOV_END_DEG_PORTRAIT);
    assert!(scene::CAMERA_ZNEAR > 0.0 && scene::CAMERA_ZNEAR < scene::CAMERA_ZFAR);
    // The far plane must reach past the deepest node at the end of travel.
    let deepest = -(13.0 * scene::NODE_SPREAD_Z_STEP) - scene::NODE_BASE_Z_OFFSET;
    assert!(scene::CAMERA_END_Z_DARK - deepest < scene::CAMERA_ZFAR);
    assert!(scene::SCALE_MIN < scene::SCALE_MAX);
    assert!(scene::MULTISAMPLING.windows(2).all(|w| w[0] <= w[1]));
    assert!(scene::DARK_STAR_COUNTS.windows(2).all(|w| w[0] <= w[1]));
    assert!(scene::FALLBACK_STAR_COUNT <= scene::LIGHT_STAR_COUNTS[0]);
    assert!(scene::FALLBACK_NODE_COUNT <= scene::LIGHT_NODE_COUNTS[0]);
    for (p, d) in [
        (scene::POSITION_SMOOTHING, "position"),
        (scene::FOV_SMOOTHING, "fov"),
        (scene::PARALLAX_SMOOTHING, "parallax"),
    ] {
        assert!(p > 0.0 && p < 1.0, "{d} smoothing");
    }
}
