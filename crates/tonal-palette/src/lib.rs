#![forbid(unsafe_code)]

//! Palette derivation for Tonal.
//!
//! # Role in Tonal
//! `tonal-palette` turns a partial, user-supplied [`PaletteConfig`] into a
//! fully resolved [`Palette`]: three completed color roles (primary,
//! secondary, error) plus the fixed text/background/divider/action groups
//! for the selected light or dark mode.
//!
//! # This crate provides
//! - [`create_palette`] as the single entry point.
//! - [`RoleSpec`]/[`Role`] for partial and completed color roles.
//! - The [`LIGHT`]/[`DARK`] mode base tables and the
//!   [`contrast_text_for`] decision rule.
//! - [`PaletteError`] for the two construction-time failures.
//!
//! # How it fits in the system
//! Downstream theme assembly consumes the palette as a plain value object.
//! Derivation is pure and synchronous: omitted role fields are completed
//! with [`tonal_color`]'s lighten/darken blends and the WCAG contrast-text
//! rule, and the only side effect anywhere is a `tracing` warning on the
//! invalid-mode path.

/// Palette construction errors.
pub mod error;
/// Light/dark mode selection.
pub mod mode;
/// Configuration and top-level assembly.
pub mod palette;
/// Role completion.
pub mod role;
/// Mode base tables and the contrast-text rule.
pub mod tones;

pub use error::{PaletteError, Result, RoleName};
pub use mode::Mode;
pub use palette::{
    DEFAULT_CONTRAST_THRESHOLD, DEFAULT_TONAL_OFFSET, Palette, PaletteConfig, create_palette,
};
pub use role::{DARK_OFFSET_RATIO, Role, RoleSpec};
pub use tones::{
    ActionTones, BackgroundTones, DARK, LIGHT, ModeTones, TextTones, contrast_text_for,
};
