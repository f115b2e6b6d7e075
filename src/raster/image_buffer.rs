//! Accessor impls for `image` buffers.
//!
//! `RgbaImage` carries alpha through. `RgbImage` has no alpha channel: reads report an opaque
//! alpha of 255 and writes discard alpha.

use image::{Rgb, RgbImage, Rgba as ImageRgba, RgbaImage};

use crate::{
    foundation::core::{Rgba, rgba_from_u8, rgba_to_u8},
    raster::accessor::{PixelSink, PixelSource, checked_coords},
};

impl PixelSource for RgbaImage {
    fn read(&self, x: i32, y: i32) -> Option<Rgba> {
        let (x, y) = checked_coords(self.width(), self.height(), x, y)?;
        Some(rgba_from_u8(self.get_pixel(x, y).0))
    }
}

impl PixelSink for RgbaImage {
    fn write(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        let Some((x, y)) = checked_coords(self.width(), self.height(), x, y) else {
            return false;
        };
        self.put_pixel(x, y, ImageRgba(rgba_to_u8(color)));
        true
    }
}

impl PixelSource for RgbImage {
    fn read(&self, x: i32, y: i32) -> Option<Rgba> {
        let (x, y) = checked_coords(self.width(), self.height(), x, y)?;
        let [r, g, b] = self.get_pixel(x, y).0;
        Some(rgba_from_u8([r, g, b, u8::MAX]))
    }
}

impl PixelSink for RgbImage {
    fn write(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        let Some((x, y)) = checked_coords(self.width(), self.height(), x, y) else {
            return false;
        };
        let [r, g, b, _] = rgba_to_u8(color);
        self.put_pixel(x, y, Rgb([r, g, b]));
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/image_buffer.rs"]
mod tests;
