// Pointer-reactive transforms.
//
// Each function maps one pointer sample to style values; none of them keep
// state between events.

use crate::constants::*;
use glam::Vec2;

/// Pointer position mapped to [-1, 1] on both axes, centre at 0.
#[inline]
pub fn normalize_centered(client: Vec2, viewport: Vec2) -> Vec2 {
    (normalize_unit(client, viewport) - Vec2::splat(0.5)) * 2.0
}

/// Pointer position mapped to [0, 1] on both axes; empty viewports map to the centre.
#[inline]
pub fn normalize_unit(client: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        (client / viewport).clamp(Vec2::ZERO, Vec2::ONE)
    } else {
        Vec2::splat(0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeadowParallax {
    pub tree: Vec2,
    pub sun: Vec2,
    pub sun_scale: f32,
}

impl MeadowParallax {
    pub fn tree_transform(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.tree.x, self.tree.y)
    }

    pub fn sun_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            self.sun.x, self.sun.y, self.sun_scale
        )
    }
}

/// Tree drifts against the pointer, the sun with it.
pub fn meadow_parallax(p: Vec2) -> MeadowParallax {
    MeadowParallax {
        tree: Vec2::new(p.x * TREE_SHIFT_X, p.y * TREE_SHIFT_Y),
        sun: Vec2::new(p.x * SUN_SHIFT_X, p.y * SUN_SHIFT_Y),
        sun_scale: 1.0 + p.y * SUN_SCALE_GAIN,
    }
}

/// Vertical offset for the `index`-th cloud; farther clouds move more.
#[inline]
pub fn cloud_margin(index: usize, p: Vec2) -> f32 {
    p.y * (index as f32 + 1.0) * CLOUD_MARGIN_STEP
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LampGlow {
    pub focal_x_pct: f32,
    pub focal_y_pct: f32,
    pub intensity: f32,
}

impl LampGlow {
    pub fn background(&self) -> String {
        format!(
            "radial-gradient(circle at {:.1}% {:.1}%, rgba(255, 200, 120, {:.3}) 0%, rgba(255, 170, 80, 0) 60%)",
            self.focal_x_pct, self.focal_y_pct, self.intensity
        )
    }
}

/// Gradient focus follows the pointer; brighter towards the top of the page.
pub fn lamp_glow(unit: Vec2) -> LampGlow {
    let c = (unit - Vec2::splat(0.5)) * 2.0;
    LampGlow {
        focal_x_pct: LAMP_FOCAL_BASE_PCT + c.x * LAMP_FOCAL_SPAN_PCT,
        focal_y_pct: LAMP_FOCAL_BASE_PCT + c.y * LAMP_FOCAL_SPAN_PCT,
        intensity: LAMP_INTENSITY_BASE + (1.0 - unit.y) * LAMP_INTENSITY_SPAN,
    }
}

/// Top-left corner that centres the aura on the pointer.
#[inline]
pub fn cursor_aura(client: Vec2) -> Vec2 {
    client - Vec2::splat(CURSOR_AURA_SIZE * 0.5)
}

pub fn shelf_parallax(p: Vec2) -> String {
    format!(
        "translate({:.2}px, {:.2}px)",
        p.x * SHELF_PARALLAX_X,
        p.y * SHELF_PARALLAX_Y
    )
}
