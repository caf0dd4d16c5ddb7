// Host-side tests for pointer-reactive transforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use crate::constants::*;
use crate::core::pointer::*;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1600.0, 900.0);

#[test]
fn normalization_maps_corners_and_centre() {
    assert_eq!(normalize_centered(Vec2::ZERO, VIEWPORT), Vec2::new(-1.0, -1.0));
    assert_eq!(normalize_centered(VIEWPORT, VIEWPORT), Vec2::new(1.0, 1.0));
    assert_eq!(normalize_centered(VIEWPORT * 0.5, VIEWPORT), Vec2::ZERO);
    assert_eq!(normalize_unit(VIEWPORT * 0.5, VIEWPORT), Vec2::splat(0.5));
}

#[test]
fn normalization_clamps_outside_points_and_empty_viewports() {
    let far = normalize_centered(Vec2::new(-500.0, 5000.0), VIEWPORT);
    assert_eq!(far, Vec2::new(-1.0, 1.0));
    assert_eq!(normalize_unit(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::splat(0.5));
    assert_eq!(normalize_centered(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn meadow_parallax_matches_gains() {
    let p = Vec2::new(1.0, -0.5);
    let px = meadow_parallax(p);
    assert_eq!(px.tree, Vec2::new(TREE_SHIFT_X, -0.5 * TREE_SHIFT_Y));
    assert_eq!(px.sun, Vec2::new(SUN_SHIFT_X, -0.5 * SUN_SHIFT_Y));
    assert!((px.sun_scale - (1.0 - 0.5 * SUN_SCALE_GAIN)).abs() < 1e-6);
    assert_eq!(px.tree_transform(), "translate(-8.00px, 2.00px)");
    assert_eq!(px.sun_transform(), "translate(15.00px, -5.00px) scale(0.9900)");
}

#[test]
fn centred_pointer_leaves_scene_at_rest() {
    let px = meadow_parallax(Vec2::ZERO);
    assert_eq!(px.tree, Vec2::ZERO);
    assert_eq!(px.sun, Vec2::ZERO);
    assert_eq!(px.sun_scale, 1.0);
    for i in 0..4 {
        assert_eq!(cloud_margin(i, Vec2::ZERO), 0.0);
    }
}

#[test]
fn farther_clouds_move_more() {
    let p = Vec2::new(0.0, 0.8);
    let margins: Vec<f32> = (0..4).map(|i| cloud_margin(i, p)).collect();
    assert!(margins.windows(2).all(|w| w[1] > w[0]));
    assert!((margins[0] - 0.8 * CLOUD_MARGIN_STEP).abs() < 1e-6);
}

#[test]
fn transforms_are_pure_functions_of_the_sample() {
    let samples = [
        Vec2::new(12.0, 400.0),
        Vec2::new(1599.0, 2.0),
        Vec2::new(800.0, 450.0),
        Vec2::new(12.0, 400.0),
    ];
    let probe = Vec2::new(321.0, 654.0);
    let expected_glow = lamp_glow(normalize_unit(probe, VIEWPORT));
    let expected_px = meadow_parallax(normalize_centered(probe, VIEWPORT));
    let expected_shelf = shelf_parallax(normalize_centered(probe, VIEWPORT));

    // interleave unrelated samples; the probe must always map the same way
    for s in samples {
        _ = lamp_glow(normalize_unit(s, VIEWPORT));
        _ = meadow_parallax(normalize_centered(s, VIEWPORT));
        assert_eq!(lamp_glow(normalize_unit(probe, VIEWPORT)), expected_glow);
        assert_eq!(meadow_parallax(normalize_centered(probe, VIEWPORT)), expected_px);
        assert_eq!(shelf_parallax(normalize_centered(probe, VIEWPORT)), expected_shelf);
    }
}

#[test]
fn lamp_glow_focus_tracks_pointer_within_span() {
    let top_left = lamp_glow(Vec2::ZERO);
    let bottom_right = lamp_glow(Vec2::ONE);
    assert_eq!(top_left.focal_x_pct, LAMP_FOCAL_BASE_PCT - LAMP_FOCAL_SPAN_PCT);
    assert_eq!(bottom_right.focal_y_pct, LAMP_FOCAL_BASE_PCT + LAMP_FOCAL_SPAN_PCT);
    // brighter with the pointer near the top
    assert!(top_left.intensity > bottom_right.intensity);
    assert!(top_left.background().starts_with("radial-gradient(circle at 30.0% 30.0%"));
}

#[test]
fn cursor_aura_is_centred_on_pointer() {
    let at = cursor_aura(Vec2::new(500.0, 300.0));
    assert_eq!(at + Vec2::splat(CURSOR_AURA_SIZE * 0.5), Vec2::new(500.0, 300.0));
}
