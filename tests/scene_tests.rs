// Host-side tests for scene composition and the post-processing chain.

use glam::Vec3;
use scrollfield_core::constants::*;
use scrollfield_core::{
    derive_config, linear_hex, msaa_sample_count, palette, CameraState, FrameSample, PostChain,
    PostEffect, RenderConfig, SceneComposer, ScrollCamera, Theme, ViewportDescriptor,
};

fn setup(theme: Theme) -> (RenderConfig, CameraState) {
    let cfg = derive_config(&ViewportDescriptor::from_pixels(1600.0, 900.0), theme);
    let cam = *ScrollCamera::new(&cfg).state();
    (cfg, cam)
}

fn sample(elapsed: f32, scroll_offset: f32) -> FrameSample {
    FrameSample {
        elapsed,
        scroll_offset,
    }
}

#[test]
fn frame_carries_one_instance_per_node() {
    for theme in [Theme::Dark, Theme::Light] {
        let (cfg, cam) = setup(theme);
        let mut composer = SceneComposer::new(1);
        let frame = composer.compose(&sample(0.0, 0.0), &cfg, theme, &cam);
        assert_eq!(frame.nodes.len(), cfg.node_count);
        assert_eq!(composer.fields().stars().len(), cfg.star_count);
        assert_eq!(frame.camera, cam);
        assert_eq!(frame.background, palette(theme).background);
    }
}

#[test]
fn central_mesh_grows_with_scroll() {
    let (cfg, cam) = setup(Theme::Dark);
    let mut composer = SceneComposer::new(2);
    let scale_at = |composer: &mut SceneComposer, s: f32| {
        let frame = composer.compose(&sample(1.0, s), &cfg, Theme::Dark, &cam);
        frame.central.model.to_scale_rotation_translation().0.x
    };
    let start = scale_at(&mut composer, 0.0);
    let end = scale_at(&mut composer, 1.0);
    assert!((start - cfg.central_scale).abs() < 1e-4);
    assert!((end - cfg.central_scale * (1.0 + CENTRAL_SCROLL_GROWTH)).abs() < 1e-4);
}

#[test]
fn fields_are_stable_across_frames() {
    let (cfg, cam) = setup(Theme::Dark);
    let mut composer = SceneComposer::new(3);
    let first = composer.compose(&sample(0.0, 0.0), &cfg, Theme::Dark, &cam);
    let stars = composer.fields().stars().clone();
    for i in 1..60 {
        let frame = composer.compose(&sample(i as f32 / 60.0, 0.2), &cfg, Theme::Dark, &cam);
        assert_eq!(frame.field_generation, first.field_generation);
    }
    assert_eq!(composer.fields().stars(), &stars);
}

#[test]
fn theme_switch_rebuilds_stars_but_not_camera() {
    let (dark, cam) = setup(Theme::Dark);
    let (light, _) = setup(Theme::Light);
    let mut composer = SceneComposer::new(4);
    let a = composer.compose(&sample(0.0, 0.5), &dark, Theme::Dark, &cam);
    let b = composer.compose(&sample(0.1, 0.5), &light, Theme::Light, &cam);
    assert!(b.field_generation > a.field_generation);
    assert_eq!(b.camera, a.camera);
    assert_ne!(a.background, b.background);
    assert_eq!(b.nodes.len(), light.node_count);
}

#[test]
fn stars_rotate_slowly_over_time() {
    let (cfg, cam) = setup(Theme::Dark);
    let mut composer = SceneComposer::new(5);
    let f = composer.compose(&sample(10.0, 0.0), &cfg, Theme::Dark, &cam);
    assert!((f.stars.rotation_y - 10.0 * STAR_ROTATION_SPEED).abs() < 1e-6);
    assert_eq!(f.grid.fade_distance, cfg.fade_distance);
    assert_eq!(f.grid.y, GRID_Y);
}

#[test]
fn nodes_float_around_their_placement() {
    let (cfg, cam) = setup(Theme::Light);
    let mut composer = SceneComposer::new(6);
    let frame = composer.compose(&sample(3.0, 0.0), &cfg, Theme::Light, &cam);
    for (inst, placement) in frame.nodes.iter().zip(&composer.fields().nodes().nodes) {
        let t = inst.model.transform_point3(Vec3::ZERO);
        // Float wobble rotates about the group origin and bobs at most a tenth of a unit.
        let r = placement.position.length();
        assert!((t.length() - r).abs() <= 0.1 * NODE_FLOAT_INTENSITY + 1e-3);
    }
}

#[test]
fn palette_tracks_theme_constants() {
    let dark = palette(Theme::Dark);
    let light = palette(Theme::Light);
    assert_eq!(dark.background, linear_hex(BACKGROUND_HEX[0]));
    assert_eq!(light.background, linear_hex(BACKGROUND_HEX[1]));
    assert_eq!(dark.node_colors, DARK_NODE_COLORS_HEX.map(linear_hex));
    assert_eq!(light.node_colors, [linear_hex(LIGHT_NODE_COLOR_HEX); 2]);
    assert_eq!(dark.central.opacity, CENTRAL_OPACITY[0]);
    assert_eq!(light.node_opacity, NODE_OPACITY[1]);
    assert_eq!(dark.lights.ambient, AMBIENT_INTENSITY[0]);
    assert_eq!(light.lights.spot.intensity, SPOT_INTENSITY[1]);
    assert_eq!(dark.lights.point.intensity, POINT_INTENSITY[0]);
    assert!(dark.lights.spot.intensity > light.lights.spot.intensity);
}

#[test]
fn post_chain_runs_in_fixed_order() {
    for theme in [Theme::Dark, Theme::Light] {
        let chain = PostChain::for_theme(theme, 4);
        let names: Vec<_> = chain.stages().iter().map(PostEffect::name).collect();
        assert_eq!(names, ["bloom", "chromatic_aberration", "noise", "vignette"]);
    }
}

#[test]
fn post_values_follow_theme() {
    let dark = PostChain::for_theme(Theme::Dark, 2);
    let light = PostChain::for_theme(Theme::Light, 8);

    let (db, lb) = match (dark.bloom(), light.bloom()) {
        (Some(d), Some(l)) => (d, l),
        _ => panic!("bloom stage missing"),
    };
    assert_eq!((db.threshold, db.intensity), (0.05, 1.0));
    assert_eq!((lb.threshold, lb.intensity), (0.8, 0.3));
    assert_eq!(db.threshold, DARK_BLOOM_THRESHOLD);
    assert_eq!(lb.intensity, LIGHT_BLOOM_INTENSITY);
    assert_eq!(db.radius, BLOOM_RADIUS);

    assert_eq!(dark.noise_opacity(), 0.08);
    assert_eq!(dark.noise_opacity(), DARK_NOISE_OPACITY);
    assert_eq!(light.noise_opacity(), 0.03);
    assert_eq!(dark.chromatic_offset(), light.chromatic_offset());

    assert_eq!(dark.vignette().map(|v| v.darkness), Some(1.05));
    assert_eq!(light.vignette().map(|v| v.darkness), Some(0.6));
    assert_eq!(light.vignette().map(|v| v.offset), Some(VIGNETTE_OFFSET));
}

#[test]
fn multisampling_maps_to_supported_sample_counts() {
    assert_eq!(msaa_sample_count(0), 1);
    assert_eq!(msaa_sample_count(1), 1);
    for requested in MULTISAMPLING {
        assert_eq!(msaa_sample_count(requested), 4);
        assert_eq!(PostChain::for_theme(Theme::Dark, requested).sample_count(), 4);
        assert_eq!(
            PostChain::for_theme(Theme::Dark, requested).multisampling(),
            requested
        );
    }
}
