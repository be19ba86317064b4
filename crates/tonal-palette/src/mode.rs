//! Light/dark mode selection.

/// The two supported palette modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Parses a mode string; anything other than `light`/`dark` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Mode::Light),
            "dark" => Some(Mode::Dark),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_the_two_modes() {
        assert_eq!(Mode::parse("light"), Some(Mode::Light));
        assert_eq!(Mode::parse("dark"), Some(Mode::Dark));
        assert_eq!(Mode::parse("Dark"), None);
        assert_eq!(Mode::parse("foo"), None);
        assert_eq!(Mode::parse(""), None);
    }

    #[test]
    fn default_mode_is_light() {
        assert_eq!(Mode::default(), Mode::Light);
        assert!(!Mode::default().is_dark());
    }
}
