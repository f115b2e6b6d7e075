use std::str::FromStr;

use crate::foundation::error::{BlitError, BlitResult};

/// Interpolation strategy selected for a blit.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Copy the `(ix, iy + 1)` lattice sample of the mapped position.
    ///
    /// This is not rounding-based nearest neighbor. Output matches existing blits that rely
    /// on this lattice pick.
    #[default]
    Nearest,
    /// Bilinear interpolation over the unit lattice cell around the mapped position.
    Bilinear,
    /// Reserved for bicubic interpolation, which is not implemented yet.
    ///
    /// Blits in this mode read nothing and write nothing; every destination pixel is
    /// reported in [`BlitStats::pixels_reserved`](crate::BlitStats::pixels_reserved).
    Bicubic,
}

impl FilterMode {
    /// Raw numeric value (`0` nearest, `1` bilinear, `2` bicubic).
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Nearest => 0,
            Self::Bilinear => 1,
            Self::Bicubic => 2,
        }
    }

    /// Lenient conversion: unknown values fall back to [`FilterMode::Nearest`].
    pub fn from_raw(raw: i32) -> Self {
        Self::try_from(raw).unwrap_or_default()
    }

    /// `false` for reserved modes that leave the destination untouched.
    pub fn is_implemented(self) -> bool {
        !matches!(self, Self::Bicubic)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
        }
    }
}

impl TryFrom<i32> for FilterMode {
    type Error = BlitError;

    fn try_from(raw: i32) -> BlitResult<Self> {
        match raw {
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Bilinear),
            2 => Ok(Self::Bicubic),
            other => Err(BlitError::validation(format!(
                "unknown filter mode {other} (expected 0, 1 or 2)"
            ))),
        }
    }
}

impl FromStr for FilterMode {
    type Err = BlitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "nn" => Ok(Self::Nearest),
            "bilinear" => Ok(Self::Bilinear),
            "bicubic" => Ok(Self::Bicubic),
            other => Err(BlitError::validation(format!(
                "unknown filter mode '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blit/filter.rs"]
mod tests;
