//! Role completion: turning a partial color spec into a fully resolved role.

use tonal_color::{INDIGO, PINK, RED, Rgba, darken, lighten};

use crate::error::{PaletteError, Result, RoleName};
use crate::tones::contrast_text_for;

/// Fixed ratio between the dark and light derivation coefficients.
///
/// `dark = darken(main, tonal_offset * DARK_OFFSET_RATIO)`. The ratio is a
/// design constant; the derived dark variant always moves further from main
/// than the derived light one.
pub const DARK_OFFSET_RATIO: f32 = 1.5;

/// A partial color role: `main` plus optional overrides.
///
/// Omitted fields are backfilled by [`resolve_role`]. Setters follow the
/// builder style so specs read as a chain:
///
/// ```
/// use tonal_color::DEEP_ORANGE;
/// use tonal_palette::RoleSpec;
///
/// let spec = RoleSpec::from_main(DEEP_ORANGE.s500).light(DEEP_ORANGE.s300);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoleSpec {
    pub main: Option<Rgba>,
    pub light: Option<Rgba>,
    pub dark: Option<Rgba>,
    pub contrast_text: Option<Rgba>,
}

impl RoleSpec {
    /// A spec carrying only a main color.
    pub const fn from_main(main: Rgba) -> Self {
        Self {
            main: Some(main),
            light: None,
            dark: None,
            contrast_text: None,
        }
    }

    #[must_use]
    pub const fn light(mut self, light: Rgba) -> Self {
        self.light = Some(light);
        self
    }

    #[must_use]
    pub const fn dark(mut self, dark: Rgba) -> Self {
        self.dark = Some(dark);
        self
    }

    #[must_use]
    pub const fn contrast_text(mut self, contrast_text: Rgba) -> Self {
        self.contrast_text = Some(contrast_text);
        self
    }
}

/// A fully resolved color role. All four fields are always populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Role {
    pub main: Rgba,
    pub light: Rgba,
    pub dark: Rgba,
    pub contrast_text: Rgba,
}

/// Builtin main/light/dark triplet used when a role is omitted entirely.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DefaultTriplet {
    pub main: Rgba,
    pub light: Rgba,
    pub dark: Rgba,
}

pub(crate) const PRIMARY_DEFAULT: DefaultTriplet = DefaultTriplet {
    main: INDIGO.s500,
    light: INDIGO.s300,
    dark: INDIGO.s700,
};

pub(crate) const SECONDARY_DEFAULT: DefaultTriplet = DefaultTriplet {
    main: PINK.a400,
    light: PINK.a200,
    dark: PINK.a700,
};

pub(crate) const ERROR_DEFAULT: DefaultTriplet = DefaultTriplet {
    main: RED.s500,
    light: RED.s300,
    dark: RED.s700,
};

/// Completes a partial role spec.
///
/// An omitted spec resolves to the builtin triplet. A present spec must
/// carry `main`; its missing fields derive from `main` via the tonal offset
/// and the contrast-text rule. Supplied fields pass through verbatim.
pub(crate) fn resolve_role(
    name: RoleName,
    spec: Option<RoleSpec>,
    default: DefaultTriplet,
    tonal_offset: f32,
    contrast_threshold: f64,
) -> Result<Role> {
    let (main, light, dark, contrast_text) = match spec {
        None => (default.main, Some(default.light), Some(default.dark), None),
        Some(spec) => {
            let main = spec
                .main
                .ok_or(PaletteError::MissingMainColor(name))?;
            (main, spec.light, spec.dark, spec.contrast_text)
        }
    };
    Ok(Role {
        main,
        light: light.unwrap_or_else(|| lighten(main, tonal_offset)),
        dark: dark.unwrap_or_else(|| darken(main, tonal_offset * DARK_OFFSET_RATIO)),
        contrast_text: contrast_text.unwrap_or_else(|| contrast_text_for(main, contrast_threshold)),
    })
}
