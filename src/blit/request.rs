use crate::{
    blit::filter::FilterMode,
    foundation::core::Region,
    foundation::error::{BlitError, BlitResult},
};

/// One blit: copy `src` of the source raster into `dst` of the destination raster.
///
/// Extents must be non-negative. Any zero extent makes the blit a no-op. Negative extents are
/// a caller error; [`BlitRequest::validate`] rejects them, and the blit loop treats them as empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlitRequest {
    /// Destination origin `(dx, dy)` and extent `(dw, dh)`.
    pub dst: Region,
    /// Source origin `(sx, sy)` and extent `(sw, sh)`.
    pub src: Region,
    /// Interpolation filter.
    #[serde(default)]
    pub mode: FilterMode,
}

impl BlitRequest {
    /// Build a request from its regions and filter.
    pub fn new(dst: Region, src: Region, mode: FilterMode) -> Self {
        Self { dst, src, mode }
    }

    /// Build a request from flat coordinates, in `dx, dy, dw, dh, sx, sy, sw, sh` order.
    #[allow(clippy::too_many_arguments)]
    pub fn from_coords(
        dx: i32,
        dy: i32,
        dw: i32,
        dh: i32,
        sx: i32,
        sy: i32,
        sw: i32,
        sh: i32,
        mode: FilterMode,
    ) -> Self {
        Self::new(Region::new(dx, dy, dw, dh), Region::new(sx, sy, sw, sh), mode)
    }

    /// Same-size copy of `src` to `(dx, dy)`.
    pub fn copy(dx: i32, dy: i32, src: Region, mode: FilterMode) -> Self {
        Self::new(Region::new(dx, dy, src.width, src.height), src, mode)
    }

    /// Replace the filter mode.
    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    /// `true` when the blit visits no destination pixels.
    pub fn is_empty(&self) -> bool {
        self.dst.is_empty() || self.src.is_empty()
    }

    /// Caller-side precondition check: reject negative extents.
    pub fn validate(&self) -> BlitResult<()> {
        self.dst.validate("destination")?;
        self.src.validate("source")?;
        Ok(())
    }

    /// Parse and validate a JSON request.
    pub fn from_json(json: &str) -> BlitResult<Self> {
        let req: Self = serde_json::from_str(json)
            .map_err(|e| BlitError::serde(format!("parse blit request: {e}")))?;
        req.validate()?;
        Ok(req)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> BlitResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BlitError::serde(format!("serialize blit request: {e}")))
    }

    /// Map a destination-local pixel to its fractional source position `(x, y)`.
    ///
    /// `sx` offsets the `y` axis and `sy` offsets the `x` axis. Existing output depends on
    /// this pairing, so it stays as is.
    pub fn source_position(&self, x1: i32, y1: i32) -> (f64, f64) {
        let y = (f64::from(y1) / f64::from(self.dst.height)) * f64::from(self.src.height)
            + f64::from(self.src.x);
        let x = (f64::from(x1) / f64::from(self.dst.width)) * f64::from(self.src.width)
            + f64::from(self.src.y);
        (x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blit/request.rs"]
mod tests;
