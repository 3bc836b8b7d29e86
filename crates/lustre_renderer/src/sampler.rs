//! Per-pixel multi-sampling.

use lustre_core::Color;
use lustre_math::Line;

use crate::entropy::stream;
use crate::reflect::disperse;
use crate::trace::trace_one;
use crate::RenderContext;

/// Primary ray through the grid point of pixel (column, row).
pub fn primary_ray(ctx: &RenderContext<'_>, column: u32, row: u32) -> Line {
    ctx.world
        .viewport()
        .pixel_ray(column, row, ctx.width, ctx.height)
}

/// Trace sample number `sample` of pixel (column, row).
///
/// The primary ray is jittered by the anti-aliasing dispersion using a
/// fresh uniform draw for this (pixel, sample) stream.
pub fn trace_sample(ctx: &RenderContext<'_>, column: u32, row: u32, sample: u32) -> Color {
    let pixel = row as usize * ctx.width as usize + column as usize;
    let stream = stream(ctx.world.seed(), pixel, sample);

    let ray = primary_ray(ctx, column, row);
    let jitter_seed = ctx.entropy.uniform(stream) ^ stream;
    let ray = Line::new(ray.p, disperse(ray.b, ctx.jitter, jitter_seed, ctx.entropy));

    trace_one(ctx, ray, stream)
}

/// Per-channel integer mean, truncating.
pub fn average(samples: impl IntoIterator<Item = Color>) -> Color {
    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for c in samples {
        sum[0] += c.r as u64;
        sum[1] += c.g as u64;
        sum[2] += c.b as u64;
        count += 1;
    }

    if count == 0 {
        return Color::BLACK;
    }
    Color::new(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    )
}

/// Render one pixel by averaging `ctx.samples` traced samples.
pub fn render_pixel(ctx: &RenderContext<'_>, column: u32, row: u32) -> Color {
    average((0..ctx.samples).map(|sample| trace_sample(ctx, column, row, sample)))
}
