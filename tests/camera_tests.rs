// Host-side tests for the scroll-driven camera controller.

use glam::Vec2;
use scrollfield_core::constants::*;
use scrollfield_core::{
    derive_config, frames_to_converge, target_fov, target_z, Camera, FrameInput, RenderConfig,
    SceneError, ScrollCamera, Theme, ViewportDescriptor,
};

fn desktop(theme: Theme) -> (ViewportDescriptor, RenderConfig) {
    let vp = ViewportDescriptor::from_pixels(1280.0, 720.0);
    (vp, derive_config(&vp, theme))
}

fn at(scroll_offset: f32) -> FrameInput {
    FrameInput {
        scroll_offset,
        pointer: Vec2::ZERO,
    }
}

#[test]
fn camera_starts_at_configured_endpoint() {
    let (_, cfg) = desktop(Theme::Dark);
    let cam = ScrollCamera::new(&cfg);
    assert_eq!(cam.state().position.z, cfg.camera_start_z);
    assert_eq!(cam.state().fov, cfg.fov_start);
    assert_eq!(cam.state().look_at().z, cfg.camera_start_z - LOOK_AT_Z_OFFSET);
}

#[test]
fn target_depth_decreases_and_fov_widens_with_scroll() {
    let (_, cfg) = desktop(Theme::Dark);
    let mut prev_z = f32::INFINITY;
    let mut prev_fov = f32::NEG_INFINITY;
    for i in 0..=20 {
        let s = i as f32 / 20.0;
        let z = target_z(&cfg, s);
        let fov = target_fov(&cfg, s);
        assert!(z < prev_z);
        assert!(fov > prev_fov);
        prev_z = z;
        prev_fov = fov;
    }
    assert_eq!(target_z(&cfg, 0.0), cfg.camera_start_z);
    assert_eq!(target_z(&cfg, 1.0), cfg.camera_end_z);
}

#[test]
fn convergence_bound_matches_smoothing_factor() {
    assert_eq!(frames_to_converge(0.05, 0.01), 90);
    assert_eq!(frames_to_converge(0.0, 0.01), 0);
    assert_eq!(frames_to_converge(0.05, 0.0), 0);
}

#[test]
fn camera_reaches_end_within_convergence_bound() {
    let (vp, cfg) = desktop(Theme::Dark);
    let mut cam = ScrollCamera::new(&cfg);
    let gap0 = (cfg.camera_start_z - cfg.camera_end_z).abs();
    let frames = frames_to_converge(POSITION_SMOOTHING, 0.01);
    for _ in 0..frames {
        assert!(cam.update(at(1.0), &cfg, &vp).is_ok());
    }
    let gap = (cam.state().position.z - cfg.camera_end_z).abs();
    assert!(gap <= gap0 * 0.0101, "gap {gap} of {gap0}");
    let fov_gap = (cam.state().fov - cfg.fov_end).abs();
    assert!(fov_gap <= (cfg.fov_end - cfg.fov_start) * 0.0101);
}

#[test]
fn camera_returns_to_start_when_scrolled_back_to_top() {
    let (vp, cfg) = desktop(Theme::Dark);
    let mut cam = ScrollCamera::new(&cfg);
    for _ in 0..300 {
        let _ = cam.update(at(1.0), &cfg, &vp);
    }
    let gap0 = (cam.state().position.z - cfg.camera_start_z).abs();
    assert!(gap0 > 100.0);
    for _ in 0..frames_to_converge(POSITION_SMOOTHING, 0.01) {
        assert!(cam.update(at(0.0), &cfg, &vp).is_ok());
    }
    let span = (cfg.camera_start_z - cfg.camera_end_z).abs();
    let gap = (cam.state().position.z - cfg.camera_start_z).abs();
    assert!(gap <= span * 0.0101, "gap {gap} of {span}");
    let fov_gap = (cam.state().fov - cfg.fov_start).abs();
    assert!(fov_gap <= (cfg.fov_end - cfg.fov_start) * 0.0101);
}

#[test]
fn scrolling_forward_never_moves_camera_backward() {
    let (vp, cfg) = desktop(Theme::Light);
    let mut cam = ScrollCamera::new(&cfg);
    let mut prev = cam.state().position.z;
    for i in 0..200 {
        let s = (i as f32 / 100.0).min(1.0);
        let z = match cam.update(at(s), &cfg, &vp) {
            Ok(state) => state.position.z,
            Err(e) => panic!("unexpected {e}"),
        };
        assert!(z <= prev + 1e-5);
        prev = z;
    }
}

#[test]
fn theme_switch_mid_scroll_eases_instead_of_jumping() {
    let (vp, dark) = desktop(Theme::Dark);
    let (_, light) = desktop(Theme::Light);
    let mut cam = ScrollCamera::new(&dark);
    for _ in 0..300 {
        let _ = cam.update(at(1.0), &dark, &vp);
    }
    let before = cam.state().position.z;
    let after = match cam.update(at(1.0), &light, &vp) {
        Ok(state) => state.position.z,
        Err(e) => panic!("unexpected {e}"),
    };
    let gap = (light.camera_end_z - before).abs();
    assert!((after - before).abs() <= POSITION_SMOOTHING * gap + 1e-4);
    assert!(after > before, "light theme travels less far");
}

#[test]
fn pointer_parallax_settles_on_scaled_offset() {
    let (vp, cfg) = desktop(Theme::Dark);
    let mut cam = ScrollCamera::new(&cfg);
    let input = FrameInput {
        scroll_offset: 0.0,
        pointer: Vec2::new(1.0, -1.0),
    };
    for _ in 0..1000 {
        let _ = cam.update(input, &cfg, &vp);
    }
    let want_x = vp.scene_width / PARALLAX_DIVISOR * cfg.mouse_influence;
    let want_y = -vp.scene_height / PARALLAX_DIVISOR * cfg.mouse_influence;
    assert!((cam.state().position.x - want_x).abs() < 1e-3);
    assert!((cam.state().position.y - want_y).abs() < 1e-3);
}

#[test]
fn out_of_range_offsets_are_counted_and_extrapolated() {
    let (vp, cfg) = desktop(Theme::Dark);
    let mut cam = ScrollCamera::new(&cfg);
    let _ = cam.update(at(1.2), &cfg, &vp);
    let _ = cam.update(at(-0.1), &cfg, &vp);
    let _ = cam.update(at(0.5), &cfg, &vp);
    assert_eq!(cam.out_of_range_frames(), 2);
    assert!(target_z(&cfg, 1.2) < cfg.camera_end_z);
    assert!(target_fov(&cfg, -0.1) < cfg.fov_start);
}

#[test]
fn non_finite_input_keeps_previous_state() {
    let (vp, cfg) = desktop(Theme::Dark);
    let mut cam = ScrollCamera::new(&cfg);
    let _ = cam.update(at(0.3), &cfg, &vp);
    let before = *cam.state();
    let res = cam.update(at(f32::NAN), &cfg, &vp);
    assert!(matches!(res, Err(SceneError::NonFiniteCamera { .. })));
    assert_eq!(*cam.state(), before);
}

#[test]
fn invalid_viewport_disables_parallax() {
    let vp = ViewportDescriptor::from_pixels(0.0, 0.0);
    let cfg = derive_config(&vp, Theme::Dark);
    let mut cam = ScrollCamera::new(&cfg);
    let input = FrameInput {
        scroll_offset: 0.0,
        pointer: Vec2::new(1.0, 1.0),
    };
    assert!(cam.update(input, &cfg, &vp).is_ok());
    assert_eq!(cam.state().position.x, 0.0);
    assert_eq!(cam.state().position.y, 0.0);
}

#[test]
fn apply_to_drives_render_camera() {
    let (vp, cfg) = desktop(Theme::Dark);
    let mut ctl = ScrollCamera::new(&cfg);
    let _ = ctl.update(at(0.5), &cfg, &vp);
    let mut cam = Camera::default();
    ctl.apply_to(&mut cam, vp.aspect());
    assert_eq!(cam.eye, ctl.state().position);
    assert_eq!(cam.target, ctl.state().look_at());
    assert!((cam.fovy_radians - ctl.state().fov.to_radians()).abs() < 1e-6);
    assert!((cam.aspect - vp.aspect()).abs() < 1e-6);

    // A degenerate aspect leaves the previous one in place.
    ctl.apply_to(&mut cam, f32::NAN);
    assert!((cam.aspect - vp.aspect()).abs() < 1e-6);
    assert!(cam.view_proj().is_finite());
}
