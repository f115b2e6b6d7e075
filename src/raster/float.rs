use image::RgbaImage;

use crate::{
    foundation::core::{Rgba, TRANSPARENT, rgba_from_u8, rgba_to_u8},
    foundation::error::{BlitError, BlitResult},
    raster::accessor::{PixelSink, PixelSource, checked_coords},
};

/// Owned raster of unclamped [`Rgba`] samples, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatRaster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl FloatRaster {
    /// Transparent raster of the given extent.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Raster with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Raster whose pixel `(x, y)` is `f(x, y)`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> BlitResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| BlitError::validation("raster size overflow"))?;
        if pixels.len() != expected {
            return Err(BlitError::validation(format!(
                "raster expects {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Widen an 8-bit RGBA image.
    pub fn from_rgba8(img: &RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.pixels().map(|p| rgba_from_u8(p.0)).collect(),
        }
    }

    /// Narrow to an 8-bit RGBA image (clamp + truncate per channel).
    pub fn to_rgba8(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(rgba_to_u8(self.pixels[self.index(x, y)]))
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel buffer.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        let (x, y) = checked_coords(self.width, self.height, x, y)?;
        Some(self.pixels[self.index(x, y)])
    }

    /// Store `color` at `(x, y)`. Returns `false` when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        let Some((x, y)) = checked_coords(self.width, self.height, x, y) else {
            return false;
        };
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        true
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl PixelSource for FloatRaster {
    fn read(&self, x: i32, y: i32) -> Option<Rgba> {
        self.get(x, y)
    }
}

impl PixelSink for FloatRaster {
    fn write(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        self.set(x, y, color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/float.rs"]
mod tests;
