use crate::foundation::core::Rgba;

/// Read capability of a raster.
///
/// Implementations bounds-check against their own extent and return `None` for coordinates
/// outside it. The blitter never sees the raster behind it.
pub trait PixelSource {
    /// Sample at `(x, y)`, or `None` when out of bounds.
    fn read(&self, x: i32, y: i32) -> Option<Rgba>;
}

/// Write capability of a raster.
pub trait PixelSink {
    /// Store `color` at `(x, y)`. Returns `false` when the coordinate is out of bounds and
    /// nothing was stored.
    fn write(&mut self, x: i32, y: i32, color: Rgba) -> bool;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn read(&self, x: i32, y: i32) -> Option<Rgba> {
        (**self).read(x, y)
    }
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    fn write(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        (**self).write(x, y, color)
    }
}

/// Adapts a closure `Fn(x, y) -> Option<Rgba>` into a [`PixelSource`].
#[derive(Clone, Copy, Debug)]
pub struct FnSource<F>(pub F);

impl<F> PixelSource for FnSource<F>
where
    F: Fn(i32, i32) -> Option<Rgba>,
{
    fn read(&self, x: i32, y: i32) -> Option<Rgba> {
        (self.0)(x, y)
    }
}

/// Adapts a closure `FnMut(x, y, color) -> bool` into a [`PixelSink`].
#[derive(Clone, Copy, Debug)]
pub struct FnSink<F>(pub F);

impl<F> PixelSink for FnSink<F>
where
    F: FnMut(i32, i32, Rgba) -> bool,
{
    fn write(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        (self.0)(x, y, color)
    }
}

/// Convert signed coordinates to unsigned ones inside `width x height`.
pub(crate) fn checked_coords(width: u32, height: u32, x: i32, y: i32) -> Option<(u32, u32)> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    (x < width && y < height).then_some((x, y))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/accessor.rs"]
mod tests;
