use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaletteError>;

/// Failures raised while deriving a palette.
///
/// Both variants are construction-time failures: nothing partial is ever
/// returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A role was supplied without a main color and has no builtin default
    /// to fall back to.
    #[error("the {0} color spec needs a main color")]
    MissingMainColor(RoleName),

    /// The configured mode is neither `light` nor `dark`. A diagnostic
    /// warning naming the value is emitted before this error is returned.
    #[error("unsupported palette mode `{0}`, expected `light` or `dark`")]
    UnsupportedMode(String),
}

/// The named color roles a palette resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleName {
    Primary,
    Secondary,
    Error,
}

impl RoleName {
    pub const fn as_str(self) -> &'static str {
        match self {
            RoleName::Primary => "primary",
            RoleName::Secondary => "secondary",
            RoleName::Error => "error",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
