use rayon::prelude::*;

use crate::{
    convert::{
        config::ConversionConfig,
        row::{RowPath, generate_row_path},
    },
    document::svg::assemble_document,
    foundation::error::{PolarwaveError, PolarwaveResult},
    raster::grid::PixelGrid,
};

#[derive(Clone, Debug, Default)]
/// Threading controls for row generation.
pub struct RowThreading {
    /// Generate rows on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Counters describing one conversion.
pub struct ConversionStats {
    /// Source grid width in pixels.
    pub width: u32,
    /// Source grid height in pixels (rows visited).
    pub height: u32,
    /// Rows that produced a `<path>` element.
    pub rows_emitted: u32,
    /// Emitted rows whose points all sit on the baseline.
    pub rows_flat: u32,
    /// Points across all rows.
    pub points_total: u64,
}

impl ConversionStats {
    fn collect(grid: &PixelGrid, rows: &[RowPath], config: &ConversionConfig) -> Self {
        let mut stats = Self {
            width: grid.width(),
            height: grid.height(),
            ..Self::default()
        };
        for (row, path) in (0u32..).zip(rows) {
            if path.is_empty() {
                continue;
            }
            stats.rows_emitted += 1;
            stats.points_total += path.len() as u64;
            if path.is_flat_at(config.baseline(row)) {
                stats.rows_flat += 1;
            }
        }
        stats
    }
}

/// Generate every row path of `grid`, in row order.
///
/// Parallel mode fills row-indexed slots on a rayon pool; the result is identical to sequential
/// mode.
#[tracing::instrument(
    skip_all,
    fields(width = grid.width(), height = grid.height(), parallel = threading.parallel)
)]
pub fn generate_rows(
    grid: &PixelGrid,
    config: &ConversionConfig,
    threading: &RowThreading,
) -> PolarwaveResult<Vec<RowPath>> {
    if !threading.parallel {
        return Ok(trace_rows_sequential(grid, config));
    }

    let width = grid.width();
    let pool = build_row_pool(threading.threads)?;
    Ok(pool.install(|| {
        (0..grid.height())
            .into_par_iter()
            .map(|row| generate_row_path(grid, row, width, config))
            .collect()
    }))
}

fn trace_rows_sequential(grid: &PixelGrid, config: &ConversionConfig) -> Vec<RowPath> {
    (0..grid.height())
        .map(|row| generate_row_path(grid, row, grid.width(), config))
        .collect()
}

/// Convert a grid to an SVG document on the calling thread.
pub fn convert_to_svg(grid: &PixelGrid, config: &ConversionConfig) -> String {
    let rows = trace_rows_sequential(grid, config);
    assemble_document(&rows, grid.width(), grid.height(), config)
}

/// Convert a grid to an SVG document and report what was drawn.
pub fn convert_with_stats(
    grid: &PixelGrid,
    config: &ConversionConfig,
    threading: &RowThreading,
) -> PolarwaveResult<(String, ConversionStats)> {
    let rows = generate_rows(grid, config, threading)?;
    let stats = ConversionStats::collect(grid, &rows, config);
    tracing::debug!(
        rows_emitted = stats.rows_emitted,
        rows_flat = stats.rows_flat,
        points_total = stats.points_total,
        "rows generated"
    );
    let svg = assemble_document(&rows, grid.width(), grid.height(), config);
    Ok((svg, stats))
}

const ROW_THREAD_PREFIX: &str = "polarwave-row";

/// Dedicated pool for row tracing; workers are named `polarwave-row-<index>`.
fn build_row_pool(threads: Option<usize>) -> PolarwaveResult<rayon::ThreadPool> {
    let builder = match threads {
        Some(0) => {
            return Err(PolarwaveError::validation(
                "row tracing needs at least one worker thread",
            ));
        }
        Some(n) => rayon::ThreadPoolBuilder::new().num_threads(n),
        None => rayon::ThreadPoolBuilder::new(),
    };
    builder
        .thread_name(|i| format!("{ROW_THREAD_PREFIX}-{i}"))
        .build()
        .map_err(|e| PolarwaveError::Other(anyhow::anyhow!("start row tracing pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/convert/pipeline.rs"]
mod tests;
