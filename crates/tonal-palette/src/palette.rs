//! Top-level palette assembly.

use tonal_color::{Rgba, WCAG_AA_LARGE_TEXT};

use crate::error::{PaletteError, Result, RoleName};
use crate::mode::Mode;
use crate::role::{
    ERROR_DEFAULT, PRIMARY_DEFAULT, Role, RoleSpec, SECONDARY_DEFAULT, resolve_role,
};
use crate::tones::{ActionTones, BackgroundTones, TextTones, contrast_text_for};

/// Default tonal offset for deriving light/dark variants.
pub const DEFAULT_TONAL_OFFSET: f32 = 0.2;

/// Default contrast threshold: WCAG AA for large text.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = WCAG_AA_LARGE_TEXT;

/// Partial palette configuration.
///
/// Every field is optional in spirit: `Default` supplies light mode, a 3.0
/// contrast threshold, a 0.2 tonal offset, and no role overrides. The mode
/// is carried as a string so invalid values reach [`create_palette`] for
/// diagnosis instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaletteConfig {
    pub primary: Option<RoleSpec>,
    pub secondary: Option<RoleSpec>,
    pub error: Option<RoleSpec>,
    pub mode: String,
    pub contrast_threshold: f64,
    pub tonal_offset: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary: None,
            secondary: None,
            error: None,
            mode: Mode::Light.as_str().to_owned(),
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            tonal_offset: DEFAULT_TONAL_OFFSET,
        }
    }
}

impl PaletteConfig {
    #[must_use]
    pub fn primary(mut self, spec: RoleSpec) -> Self {
        self.primary = Some(spec);
        self
    }

    #[must_use]
    pub fn secondary(mut self, spec: RoleSpec) -> Self {
        self.secondary = Some(spec);
        self
    }

    #[must_use]
    pub fn error(mut self, spec: RoleSpec) -> Self {
        self.error = Some(spec);
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    #[must_use]
    pub fn contrast_threshold(mut self, threshold: f64) -> Self {
        self.contrast_threshold = threshold;
        self
    }

    #[must_use]
    pub fn tonal_offset(mut self, offset: f32) -> Self {
        self.tonal_offset = offset;
        self
    }
}

/// A fully resolved palette.
///
/// A pure value object: constructed once per theme build, never mutated.
/// Later theme layers merge over it structurally.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    pub primary: Role,
    pub secondary: Role,
    pub error: Role,
    pub mode: Mode,
    pub text: TextTones,
    pub background: BackgroundTones,
    pub divider: Rgba,
    pub action: ActionTones,
    contrast_threshold: f64,
}

impl Palette {
    /// Readable text color for an arbitrary background, using the contrast
    /// threshold this palette was resolved with.
    pub fn contrast_text(&self, background: Rgba) -> Rgba {
        contrast_text_for(background, self.contrast_threshold)
    }

    /// The contrast threshold this palette was resolved with.
    pub fn contrast_threshold(&self) -> f64 {
        self.contrast_threshold
    }
}

/// Derives a full [`Palette`] from a partial [`PaletteConfig`].
///
/// Validates the mode, completes the primary/secondary/error roles (builtin
/// defaults fill roles that are omitted entirely), and attaches the fixed
/// base group for the mode. Pure apart from the diagnostic warning on the
/// invalid-mode path; structurally equal configs yield structurally equal
/// palettes.
pub fn create_palette(config: PaletteConfig) -> Result<Palette> {
    let mode = match Mode::parse(&config.mode) {
        Some(mode) => mode,
        None => {
            tracing::warn!(
                mode = %config.mode,
                "unsupported palette mode, expected `light` or `dark`"
            );
            return Err(PaletteError::UnsupportedMode(config.mode));
        }
    };

    let offset = config.tonal_offset;
    let threshold = config.contrast_threshold;
    let primary = resolve_role(
        RoleName::Primary,
        config.primary,
        PRIMARY_DEFAULT,
        offset,
        threshold,
    )?;
    let secondary = resolve_role(
        RoleName::Secondary,
        config.secondary,
        SECONDARY_DEFAULT,
        offset,
        threshold,
    )?;
    let error = resolve_role(
        RoleName::Error,
        config.error,
        ERROR_DEFAULT,
        offset,
        threshold,
    )?;

    let tones = mode.tones();
    Ok(Palette {
        primary,
        secondary,
        error,
        mode,
        text: tones.text,
        background: tones.background,
        divider: tones.divider,
        action: tones.action,
        contrast_threshold: threshold,
    })
}
