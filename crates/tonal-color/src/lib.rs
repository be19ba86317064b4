#![forbid(unsafe_code)]

//! Color primitives for Tonal.
//!
//! # Role in Tonal
//! `tonal-color` is the shared vocabulary for color values. The palette
//! layer derives theme roles from these primitives without dragging in any
//! configuration or assembly concerns.
//!
//! # This crate provides
//! - [`Rgba`] as the single color value type, with hex parsing/formatting.
//! - WCAG contrast utilities: [`relative_luminance`], [`contrast_ratio`],
//!   and the AA/AAA threshold constants.
//! - Tonal manipulation: [`lighten`] and [`darken`] blends.
//! - The named Material color scales ([`INDIGO`], [`PINK`], [`RED`], ...)
//!   used for builtin palette defaults.
//!
//! # How it fits in the system
//! `tonal-palette` completes partial color roles with `lighten`/`darken`,
//! picks contrast text via `contrast_ratio`, and seeds its defaults from the
//! scales. This crate keeps that math deterministic and reusable.

/// WCAG contrast and luminance utilities.
pub mod contrast;
/// Lighten/darken blends with out-of-range diagnostics.
pub mod manipulate;
/// The RGBA color value type.
pub mod rgba;
/// Named Material color scales.
pub mod scales;

pub use contrast::{
    WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT, WCAG_AAA_LARGE_TEXT, WCAG_AAA_NORMAL_TEXT,
    contrast_ratio, meets_wcag_aa, meets_wcag_aa_large_text, relative_luminance,
};
pub use manipulate::{darken, lighten};
pub use rgba::{ParseColorError, Rgba};
pub use scales::{DEEP_ORANGE, GREEN, GREY, INDIGO, PINK, RED, Scale};
