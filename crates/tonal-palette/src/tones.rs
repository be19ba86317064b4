//! Mode base tables and the contrast-text decision rule.
//!
//! [`LIGHT`] and [`DARK`] hold the fixed text/background/divider/action
//! groups for each mode. They are selected verbatim by [`Mode`]; nothing at
//! this layer is computed or user-overridable.
//!
//! Fractional alphas from the original material values are quantized to
//! 8-bit channels (0.87 -> 222, 0.54 -> 138, and so on).

use tonal_color::{GREY, Rgba, contrast_ratio};

use crate::mode::Mode;

/// Text colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTones {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub disabled: Rgba,
    pub hint: Rgba,
    pub icon: Rgba,
}

/// Surface colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundTones {
    pub paper: Rgba,
    pub default: Rgba,
}

/// Interaction-state colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTones {
    pub active: Rgba,
    pub hover: Rgba,
    pub selected: Rgba,
    pub disabled: Rgba,
    pub disabled_background: Rgba,
}

/// The full fixed group for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeTones {
    pub text: TextTones,
    pub background: BackgroundTones,
    pub divider: Rgba,
    pub action: ActionTones,
}

/// Base tones for light mode: black text at graded alphas on light surfaces.
pub const LIGHT: ModeTones = ModeTones {
    text: TextTones {
        primary: Rgba::rgba(0, 0, 0, 222),
        secondary: Rgba::rgba(0, 0, 0, 138),
        disabled: Rgba::rgba(0, 0, 0, 97),
        hint: Rgba::rgba(0, 0, 0, 97),
        icon: Rgba::rgba(0, 0, 0, 97),
    },
    background: BackgroundTones {
        paper: Rgba::WHITE,
        default: GREY.s50,
    },
    divider: Rgba::rgba(0, 0, 0, 31),
    action: ActionTones {
        active: Rgba::rgba(0, 0, 0, 138),
        hover: Rgba::rgba(0, 0, 0, 20),
        selected: Rgba::rgba(0, 0, 0, 36),
        disabled: Rgba::rgba(0, 0, 0, 66),
        disabled_background: Rgba::rgba(0, 0, 0, 31),
    },
};

/// Base tones for dark mode: white text at graded alphas on dark surfaces.
pub const DARK: ModeTones = ModeTones {
    text: TextTones {
        primary: Rgba::WHITE,
        secondary: Rgba::rgba(255, 255, 255, 179),
        disabled: Rgba::rgba(255, 255, 255, 128),
        hint: Rgba::rgba(255, 255, 255, 128),
        icon: Rgba::rgba(255, 255, 255, 128),
    },
    background: BackgroundTones {
        paper: GREY.s800,
        default: Rgba::hex(0x303030),
    },
    divider: Rgba::rgba(255, 255, 255, 31),
    action: ActionTones {
        active: Rgba::WHITE,
        hover: Rgba::rgba(255, 255, 255, 26),
        selected: Rgba::rgba(255, 255, 255, 51),
        disabled: Rgba::rgba(255, 255, 255, 77),
        disabled_background: Rgba::rgba(255, 255, 255, 31),
    },
};

impl Mode {
    /// The fixed base group for this mode.
    pub const fn tones(self) -> &'static ModeTones {
        match self {
            Mode::Light => &LIGHT,
            Mode::Dark => &DARK,
        }
    }
}

/// Picks readable text for `background`.
///
/// Returns the dark-mode text primary (white) when its contrast against the
/// background reaches `threshold`, the light-mode text primary otherwise.
/// Monotonic in `threshold`: raising it can only flip choices from white to
/// the light-mode text, never the reverse.
pub fn contrast_text_for(background: Rgba, threshold: f64) -> Rgba {
    if contrast_ratio(background, DARK.text.primary) >= threshold {
        DARK.text.primary
    } else {
        LIGHT.text.primary
    }
}
