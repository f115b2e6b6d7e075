use crate::{foundation::core::Rgba, raster::accessor::PixelSource};

/// Bounding box of the lattice cell an interpolated sample falls into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeCell {
    /// Left lattice coordinate.
    pub x1: f64,
    /// Top lattice coordinate.
    pub y1: f64,
    /// Right lattice coordinate.
    pub x2: f64,
    /// Bottom lattice coordinate.
    pub y2: f64,
}

impl LatticeCell {
    /// The unit cell `[ix, ix + 1] x [iy, iy + 1]`.
    pub fn unit(ix: i32, iy: i32) -> Self {
        let x1 = f64::from(ix);
        let y1 = f64::from(iy);
        Self {
            x1,
            y1,
            x2: x1 + 1.0,
            y2: y1 + 1.0,
        }
    }
}

/// The four lattice samples around a fractional position, in the order they are read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatticeSamples {
    /// Sample at `(ix, iy + 1)`.
    pub c0: Rgba,
    /// Sample at `(ix, iy)`.
    pub c1: Rgba,
    /// Sample at `(ix + 1, iy)`.
    pub c2: Rgba,
    /// Sample at `(ix + 1, iy + 1)`.
    pub c3: Rgba,
}

impl LatticeSamples {
    /// Read the cell whose top-left lattice point is `(ix, iy)`.
    ///
    /// All four samples are read, in `c0..c3` order, before checking them. Returns `None`
    /// if any of them is missing.
    pub fn fetch<S: PixelSource + ?Sized>(src: &S, ix: i32, iy: i32) -> Option<Self> {
        let right = ix.checked_add(1)?;
        let below = iy.checked_add(1)?;
        let c0 = src.read(ix, below);
        let c1 = src.read(ix, iy);
        let c2 = src.read(right, iy);
        let c3 = src.read(right, below);
        Some(Self {
            c0: c0?,
            c1: c1?,
            c2: c2?,
            c3: c3?,
        })
    }
}

/// Bilinear interpolation of one channel.
///
/// `q11` sits at `(x1, y1)`, `q21` at `(x2, y1)`, `q12` at `(x1, y2)` and `q22` at `(x2, y2)`.
/// A degenerate cell (`x1 == x2` or `y1 == y2`) yields a non-finite result.
pub fn bilinear(
    q11: f64,
    q12: f64,
    q21: f64,
    q22: f64,
    cell: LatticeCell,
    x: f64,
    y: f64,
) -> f64 {
    let x2x1 = cell.x2 - cell.x1;
    let y2y1 = cell.y2 - cell.y1;
    let x2x = cell.x2 - x;
    let y2y = cell.y2 - y;
    let yy1 = y - cell.y1;
    let xx1 = x - cell.x1;
    1.0 / (x2x1 * y2y1)
        * (q11 * x2x * y2y + q21 * xx1 * y2y + q12 * x2x * yy1 + q22 * xx1 * yy1)
}

/// Bilinear interpolation of all four channels over the unit cell at `(ix, iy)`.
pub fn bilinear_rgba(samples: &LatticeSamples, ix: i32, iy: i32, x: f64, y: f64) -> Rgba {
    let cell = LatticeCell::unit(ix, iy);
    std::array::from_fn(|ch| {
        bilinear(
            samples.c1[ch],
            samples.c0[ch],
            samples.c2[ch],
            samples.c3[ch],
            cell,
            x,
            y,
        )
    })
}

/// Private working colors of one resampling unit: the four lattice samples plus the output.
///
/// Each sequential iteration and each parallel worker owns its own instance.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Scratch {
    pub(crate) lattice: LatticeSamples,
    pub(crate) out: Rgba,
}

#[cfg(test)]
#[path = "../../tests/unit/blit/kernel.rs"]
mod tests;
