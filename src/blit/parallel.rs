use rayon::prelude::*;

use crate::{
    blit::engine::{BlitStats, apply_outcome, blit, resample_row, warn_if_reserved},
    blit::kernel::Scratch,
    blit::request::BlitRequest,
    foundation::error::{BlitError, BlitResult},
    raster::accessor::{PixelSink, PixelSource},
};

/// Options controlling how a blit is spread across threads.
#[derive(Clone, Debug)]
pub struct BlitThreading {
    /// Resample destination rows in parallel on a dedicated rayon pool.
    pub parallel: bool,
    /// Destination rows resampled per parallel batch. `0` is treated as `1`.
    pub chunk_rows: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for BlitThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_rows: 64,
            threads: None,
        }
    }
}

impl BlitThreading {
    /// Parallel threading with the given worker count (`None` for rayon defaults).
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            parallel: true,
            threads,
            ..Self::default()
        }
    }
}

/// Blit with optional row-level parallelism.
///
/// Rows of each `chunk_rows` batch are resampled on the pool, each worker with its own
/// scratch colors. Results are then written to `dst` on the calling thread in row-major
/// order, so the sink never needs to be `Sync`. Output and stats match [`blit`] exactly.
#[tracing::instrument(level = "debug", skip(dst, src))]
pub fn blit_with_threading<D, S>(
    dst: &mut D,
    src: &S,
    req: &BlitRequest,
    threading: &BlitThreading,
) -> BlitResult<BlitStats>
where
    D: PixelSink + ?Sized,
    S: PixelSource + Sync + ?Sized,
{
    if !threading.parallel {
        return Ok(blit(dst, src, req));
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_rows = normalized_chunk_rows(threading.chunk_rows);
    let mut stats = BlitStats::default();
    if req.is_empty() {
        return Ok(stats);
    }
    warn_if_reserved(req.mode);

    let mut row_start = 0;
    while row_start < req.dst.height {
        let row_end = row_start.saturating_add(chunk_rows).min(req.dst.height);
        let rows = pool.install(|| {
            (row_start..row_end)
                .into_par_iter()
                .map_init(Scratch::default, |scratch, y1| {
                    resample_row(src, req, y1, scratch)
                })
                .collect::<Vec<_>>()
        });

        for (y1, row) in (row_start..row_end).zip(rows) {
            for (x1, outcome) in (0..).zip(row) {
                apply_outcome(dst, req, x1, y1, outcome, &mut stats);
            }
        }
        row_start = row_end;
    }

    tracing::debug!(?stats, "parallel blit finished");
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> BlitResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BlitError::validation(
            "blit threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BlitError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_rows(chunk_rows: usize) -> i32 {
    i32::try_from(chunk_rows.max(1)).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/blit/parallel.rs"]
mod tests;
