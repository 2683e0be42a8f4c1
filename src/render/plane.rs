use rayon::prelude::*;

use crate::engine::row::{Row, RowChannel};
use crate::foundation::channel::{Channel, ChannelSet};
use crate::foundation::core::IBox;
use crate::foundation::error::{FlatcolorError, FlatcolorResult};
use crate::op::constant::RowFiller;

/// How a plane render spreads scanlines over threads.
#[derive(Clone, Debug, Default)]
pub struct PlaneThreading {
    /// Render scanlines in parallel.
    pub parallel: bool,
    /// Worker count for a dedicated pool. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

/// Run `op` over every scanline of `bbox` and pack `layout` into RGBA.
///
/// Erased or absent channels read as zero. Scanline `y` of `bbox` becomes image
/// row `y - bbox.y`.
#[tracing::instrument(skip(op))]
pub fn render_rgba32f<F: RowFiller + Sync + ?Sized>(
    op: &F,
    bbox: IBox,
    layout: [Channel; 4],
    threading: &PlaneThreading,
) -> FlatcolorResult<image::Rgba32FImage> {
    if bbox.is_empty() {
        return Err(FlatcolorError::validation("render box must not be empty"));
    }
    let width = bbox.width();
    let height = bbox.height();
    let stride = width as usize * 4;
    let mask: ChannelSet = layout.into_iter().collect();

    let mut data = vec![0.0f32; stride * height as usize];
    let render_row = |row: &mut Row, out: &mut [f32]| {
        row.reset();
        op.fill(bbox.x, bbox.r, mask, row);
        pack_row(row, layout, out);
    };

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let mut run = || {
            data.par_chunks_mut(stride).for_each_init(
                || Row::new(bbox.x, bbox.r),
                |row, out| render_row(row, out),
            );
        };
        match &pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    } else {
        let mut row = Row::new(bbox.x, bbox.r);
        for out in data.chunks_mut(stride) {
            render_row(&mut row, out);
        }
    }

    tracing::debug!(width, height, "rendered constant plane");
    image::Rgba32FImage::from_raw(width, height, data)
        .ok_or_else(|| anyhow::anyhow!("rgba32f buffer does not match {width}x{height}").into())
}

fn pack_row(row: &Row, layout: [Channel; 4], out: &mut [f32]) {
    for (k, channel) in layout.into_iter().enumerate() {
        match row.channel(channel) {
            RowChannel::Filled(values) => {
                for (px, v) in out.chunks_exact_mut(4).zip(values) {
                    px[k] = *v;
                }
            }
            RowChannel::Erased | RowChannel::Absent => {
                for px in out.chunks_exact_mut(4) {
                    px[k] = 0.0;
                }
            }
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> FlatcolorResult<Option<rayon::ThreadPool>> {
    let Some(n) = threads else {
        return Ok(None);
    };
    if n == 0 {
        return Err(FlatcolorError::validation(
            "plane threading 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build()
        .map(Some)
        .map_err(|e| FlatcolorError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/plane.rs"]
mod tests;
