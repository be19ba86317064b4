//! The [`Rgba`] color value type.
//!
//! Colors are stored as four 8-bit channels. Alpha is carried through every
//! operation so downstream compositing can use it, but luminance and contrast
//! math ignore it (see [`crate::contrast`]).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    /// An opaque color from red/green/blue channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color from all four channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// The same color with its alpha replaced by `opacity` in `[0.0, 1.0]`.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// True when the alpha channel is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// Lowercase hex: `#rrggbb`, or `#rrggbbaa` when not opaque.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Failure to parse a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color `{0}` must have 3, 6, or 8 digits")]
    InvalidLength(String),
    #[error("hex color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa` (leading `#` optional).
impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        // Length checks below count bytes; multi-byte input would split a
        // char boundary when slicing digit pairs.
        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidDigit(s.to_owned()));
        }
        let parse2 = |pair: &str| {
            u8::from_str_radix(pair, 16).map_err(|_| ParseColorError::InvalidDigit(s.to_owned()))
        };
        match digits.len() {
            3 => {
                // Shorthand: each digit doubles, `#f0c` = `#ff00cc`.
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = ch
                        .to_digit(16)
                        .ok_or_else(|| ParseColorError::InvalidDigit(s.to_owned()))?
                        as u8;
                    *slot = nibble << 4 | nibble;
                }
                Ok(Rgba::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Rgba::rgb(
                parse2(&digits[0..2])?,
                parse2(&digits[2..4])?,
                parse2(&digits[4..6])?,
            )),
            8 => Ok(Rgba::rgba(
                parse2(&digits[0..2])?,
                parse2(&digits[2..4])?,
                parse2(&digits[4..6])?,
                parse2(&digits[6..8])?,
            )),
            _ => Err(ParseColorError::InvalidLength(s.to_owned())),
        }
    }
}

impl From<[u8; 3]> for Rgba {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = Rgba;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color string like `#3f51b5`")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Rgba, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
