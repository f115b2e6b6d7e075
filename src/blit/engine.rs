use crate::{
    blit::filter::FilterMode,
    blit::kernel::{LatticeSamples, Scratch, bilinear_rgba},
    blit::request::BlitRequest,
    foundation::core::Rgba,
    raster::accessor::{PixelSink, PixelSource},
};

/// Per-call counters of a blit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlitStats {
    /// Destination pixels visited.
    pub pixels_total: u64,
    /// Writes accepted by the sink.
    pub pixels_written: u64,
    /// Pixels skipped because one of their lattice samples was missing from the source.
    pub pixels_skipped_source: u64,
    /// Writes rejected by the sink (destination out of bounds).
    pub pixels_dropped_dest: u64,
    /// Pixels left untouched because the filter mode is reserved.
    pub pixels_reserved: u64,
}

/// Result of resampling one destination pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PixelOutcome {
    Color(Rgba),
    SourceMissing,
    Reserved,
}

/// Copy `req.src` of `src` into `req.dst` of `dst`, resampling with `req.mode`.
///
/// For each destination pixel `(x1, y1)` the source position is
/// `x = (x1 / dw) * sw + sy`, `y = (y1 / dh) * sh + sx`. The lattice samples around it are
/// read, and the filtered color is written at `(dx + x1, dy + y1)`.
///
/// Never fails. A pixel with any missing lattice sample is skipped, and a write the sink
/// rejects is dropped. Both show up in the returned [`BlitStats`].
#[tracing::instrument(level = "debug", skip(dst, src))]
pub fn blit<D, S>(dst: &mut D, src: &S, req: &BlitRequest) -> BlitStats
where
    D: PixelSink + ?Sized,
    S: PixelSource + ?Sized,
{
    let mut stats = BlitStats::default();
    if req.is_empty() {
        return stats;
    }
    warn_if_reserved(req.mode);

    for y1 in 0..req.dst.height {
        for x1 in 0..req.dst.width {
            let mut scratch = Scratch::default();
            let outcome = resample_pixel(src, req, x1, y1, &mut scratch);
            apply_outcome(dst, req, x1, y1, outcome, &mut stats);
        }
    }

    tracing::debug!(?stats, "blit finished");
    stats
}

pub(crate) fn resample_pixel<S: PixelSource + ?Sized>(
    src: &S,
    req: &BlitRequest,
    x1: i32,
    y1: i32,
    scratch: &mut Scratch,
) -> PixelOutcome {
    if !req.mode.is_implemented() {
        return PixelOutcome::Reserved;
    }

    let (x, y) = req.source_position(x1, y1);
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let Some(lattice) = LatticeSamples::fetch(src, ix, iy) else {
        return PixelOutcome::SourceMissing;
    };
    scratch.lattice = lattice;

    scratch.out = match req.mode {
        FilterMode::Nearest => scratch.lattice.c0,
        FilterMode::Bilinear => bilinear_rgba(&scratch.lattice, ix, iy, x, y),
        FilterMode::Bicubic => return PixelOutcome::Reserved,
    };
    PixelOutcome::Color(scratch.out)
}

pub(crate) fn resample_row<S: PixelSource + ?Sized>(
    src: &S,
    req: &BlitRequest,
    y1: i32,
    scratch: &mut Scratch,
) -> Vec<PixelOutcome> {
    (0..req.dst.width)
        .map(|x1| resample_pixel(src, req, x1, y1, scratch))
        .collect()
}

pub(crate) fn apply_outcome<D: PixelSink + ?Sized>(
    dst: &mut D,
    req: &BlitRequest,
    x1: i32,
    y1: i32,
    outcome: PixelOutcome,
    stats: &mut BlitStats,
) {
    stats.pixels_total += 1;
    match outcome {
        PixelOutcome::Color(c) => {
            let landed = match (req.dst.x.checked_add(x1), req.dst.y.checked_add(y1)) {
                (Some(x), Some(y)) => dst.write(x, y, c),
                _ => false,
            };
            if landed {
                stats.pixels_written += 1;
            } else {
                stats.pixels_dropped_dest += 1;
            }
        }
        PixelOutcome::SourceMissing => stats.pixels_skipped_source += 1,
        PixelOutcome::Reserved => stats.pixels_reserved += 1,
    }
}

pub(crate) fn warn_if_reserved(mode: FilterMode) {
    if !mode.is_implemented() {
        tracing::warn!(
            mode = mode.name(),
            "filter mode is not implemented; destination left untouched"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blit/engine.rs"]
mod tests;
