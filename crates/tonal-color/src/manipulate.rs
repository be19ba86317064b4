//! Tonal manipulation: deterministic lighten/darken blends.
//!
//! Both functions blend per channel toward an anchor (white or black) by a
//! coefficient in `[0.0, 1.0]`. A coefficient of `0.0` returns the color
//! unchanged; `1.0` returns the anchor. Alpha is preserved.

use crate::rgba::Rgba;

/// Blends `color` toward white by `coefficient`.
#[must_use]
pub fn lighten(color: Rgba, coefficient: f32) -> Rgba {
    blend(color, Rgba::WHITE, clamp_coefficient(coefficient, "lighten"))
}

/// Blends `color` toward black by `coefficient`.
#[must_use]
pub fn darken(color: Rgba, coefficient: f32) -> Rgba {
    blend(color, Rgba::BLACK, clamp_coefficient(coefficient, "darken"))
}

/// Linear per-channel interpolation from `color` to `target`.
fn blend(color: Rgba, target: Rgba, t: f32) -> Rgba {
    Rgba {
        r: blend_channel(color.r, target.r, t),
        g: blend_channel(color.g, target.g, t),
        b: blend_channel(color.b, target.b, t),
        a: color.a,
    }
}

fn blend_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

/// Coefficients outside `[0.0, 1.0]` (or non-finite) are diagnosed and
/// clamped rather than rejected.
fn clamp_coefficient(value: f32, op: &'static str) -> f32 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    tracing::warn!(op, value, "tonal coefficient out of [0, 1], clamping");
    if value > 1.0 { 1.0 } else { 0.0 }
}
