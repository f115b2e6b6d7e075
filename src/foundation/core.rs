use std::str::FromStr;

use crate::foundation::error::{BlitError, BlitResult};

/// One color sample as `[r, g, b, a]`, in host-native 8-bit channel scale (`0.0..=255.0`).
///
/// The blit engine never clamps; out-of-range values only get clamped when an adapter stores
/// them into an integer raster.
pub type Rgba = [f64; 4];

/// Fully transparent black.
pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

/// Widen an 8-bit RGBA pixel into an [`Rgba`] sample.
pub fn rgba_from_u8(px: [u8; 4]) -> Rgba {
    px.map(f64::from)
}

/// Narrow an [`Rgba`] sample to 8-bit RGBA.
///
/// Channels are clamped to `0..=255` and truncated toward zero, the same as storing a
/// float channel into an integer pixel. NaN stores as 0.
pub fn rgba_to_u8(c: Rgba) -> [u8; 4] {
    c.map(channel_to_u8)
}

fn channel_to_u8(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    v.clamp(0.0, 255.0) as u8
}

/// An axis-aligned integer rectangle: origin plus extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent. Must be `>= 0`.
    pub width: i32,
    /// Vertical extent. Must be `>= 0`.
    pub height: i32,
}

impl Region {
    /// Build a region from origin and extent.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region anchored at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// `true` when the region covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of pixels covered, 0 for empty regions.
    pub fn area(self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        u64::from(self.width.unsigned_abs()) * u64::from(self.height.unsigned_abs())
    }

    /// Reject negative extents.
    pub fn validate(self, what: &str) -> BlitResult<()> {
        if self.width < 0 || self.height < 0 {
            return Err(BlitError::validation(format!(
                "{what} extent must be non-negative, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl FromStr for Region {
    type Err = BlitError;

    /// Parse `"x,y,w,h"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| {
                p.trim().parse::<i32>().map_err(|e| {
                    BlitError::validation(format!("invalid region component '{p}': {e}"))
                })
            })
            .collect::<BlitResult<Vec<_>>>()?;
        let [x, y, width, height] = parts[..] else {
            return Err(BlitError::validation(format!(
                "region must have 4 components 'x,y,w,h', got '{s}'"
            )));
        };
        Ok(Self::new(x, y, width, height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
