//! Rasterblit copies a rectangular region of one raster into a rectangular region of another,
//! resampling every destination pixel with a selectable filter.
//!
//! # Overview
//!
//! 1. **Describe** the copy as a [`BlitRequest`]: destination region, source region, [`FilterMode`].
//! 2. **Adapt** both rasters to the accessor traits [`PixelSource`] and [`PixelSink`]. Impls exist
//!    for closures ([`FnSource`], [`FnSink`]), `image::RgbaImage`, `image::RgbImage` and
//!    [`FloatRaster`].
//! 3. **Blit** with [`blit`], or with [`blit_with_threading`] to resample rows on a rayon pool.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never fails per pixel**: missing source samples skip the pixel, rejected writes are
//!   dropped, and both are counted in [`BlitStats`].
//! - **Deterministic**: sequential and parallel blits produce identical output for any chunking.
//! - **Raster-agnostic**: the engine only sees the two accessor traits.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blit;
mod foundation;
mod layout;
mod raster;

pub use blit::engine::{BlitStats, blit};
pub use blit::filter::FilterMode;
pub use blit::kernel::{LatticeCell, LatticeSamples, bilinear, bilinear_rgba};
pub use blit::parallel::{BlitThreading, blit_with_threading};
pub use blit::request::BlitRequest;
pub use foundation::core::{Region, Rgba, TRANSPARENT, rgba_from_u8, rgba_to_u8};
pub use foundation::error::{BlitError, BlitResult};
pub use layout::fit::fit_extent;
pub use raster::accessor::{FnSink, FnSource, PixelSink, PixelSource};
pub use raster::float::FloatRaster;
