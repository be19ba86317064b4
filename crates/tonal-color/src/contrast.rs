//! WCAG contrast utilities.
//!
//! Relative luminance follows the WCAG 2.x definition: channels are
//! linearized out of sRGB gamma and weighted 0.2126/0.7152/0.0722. Alpha is
//! ignored; callers composite before measuring if they need translucency.

use crate::rgba::Rgba;

/// Minimum contrast for WCAG AA normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum contrast for WCAG AA large text.
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// Minimum contrast for WCAG AAA normal text.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;
/// Minimum contrast for WCAG AAA large text.
pub const WCAG_AAA_LARGE_TEXT: f64 = 4.5;

/// Linearizes one sRGB channel in `[0.0, 1.0]`.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color in `[0.0, 1.0]`.
pub fn relative_luminance(color: Rgba) -> f64 {
    let r = srgb_to_linear(color.r as f64 / 255.0);
    let g = srgb_to_linear(color.g as f64 / 255.0);
    let b = srgb_to_linear(color.b as f64 / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// Symmetric in its arguments: lighter-over-darker by construction.
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// True when `fg` on `bg` meets WCAG AA for normal text.
pub fn meets_wcag_aa(fg: Rgba, bg: Rgba) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

/// True when `fg` on `bg` meets WCAG AA for large text.
pub fn meets_wcag_aa_large_text(fg: Rgba, bg: Rgba) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_LARGE_TEXT
}
