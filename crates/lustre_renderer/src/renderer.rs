//! Two-phase frame rendering.
//!
//! Phase 1 traces one sample per (row, column, sample) into an intermediate
//! buffer laid out as `(row * width + column) * samples + sample`. Phase 2
//! averages each pixel's samples into the output. The end of the phase 1
//! dispatch is the only barrier.

use std::time::Instant;

use lustre_core::{Color, RenderSettings, SettingsError, World};
use thiserror::Error;

use crate::backend::ComputeBackend;
use crate::entropy::{EntropyError, EntropyPool};
use crate::buffer::ImageBuffer;
use crate::sampler::{average, render_pixel, trace_sample};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("At least one sample per pixel is required")]
    ZeroSamples,

    #[error("Maximum depth must be at least 1")]
    ZeroDepth,

    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Entropy error: {0}")]
    Entropy(#[from] EntropyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Read-only inputs shared by every invocation of one render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub world: &'a World,
    pub entropy: &'a EntropyPool,
    pub width: u32,
    pub height: u32,
    pub samples: u32,
    pub max_depth: u32,
    pub jitter: f32,
}

impl<'a> RenderContext<'a> {
    pub fn new(world: &'a World, entropy: &'a EntropyPool, settings: &RenderSettings) -> Self {
        Self {
            world,
            entropy,
            width: settings.width,
            height: settings.height,
            samples: settings.samples,
            max_depth: settings.max_depth,
            jitter: settings.jitter,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Renders frames with fixed settings and entropy pools.
pub struct Renderer<B: ComputeBackend> {
    settings: RenderSettings,
    entropy: EntropyPool,
    backend: B,
}

impl<B: ComputeBackend> Renderer<B> {
    /// Validate `settings` and generate the entropy pools they describe.
    pub fn new(settings: RenderSettings, backend: B) -> Result<Self, RenderError> {
        check_dimensions(&settings)?;
        settings.validate()?;
        let entropy = EntropyPool::generate(
            settings.uniform_pool,
            settings.normal_pool,
            settings.entropy_seed,
        )?;
        Self::with_entropy(settings, entropy, backend)
    }

    /// Use host-supplied entropy pools.
    pub fn with_entropy(
        settings: RenderSettings,
        entropy: EntropyPool,
        backend: B,
    ) -> Result<Self, RenderError> {
        check_dimensions(&settings)?;
        settings.validate()?;
        Ok(Self {
            settings,
            entropy,
            backend,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn entropy(&self) -> &EntropyPool {
        &self.entropy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render `world` to a new image.
    pub fn render(&self, world: &World) -> ImageBuffer {
        let ctx = RenderContext::new(world, &self.entropy, &self.settings);
        let width = ctx.width;
        let samples = ctx.samples as usize;

        log::info!(
            "Rendering {}x{} @ {} spp, depth {} ({} backend, {} objects)",
            ctx.width,
            ctx.height,
            ctx.samples,
            ctx.max_depth,
            self.backend.name(),
            world.len()
        );

        // Phase 1: trace
        let start = Instant::now();
        let mut traced = vec![Color::BLACK; ctx.pixel_count() * samples];
        self.backend.dispatch(&mut traced, |i| {
            let pixel = i / samples;
            let sample = (i % samples) as u32;
            let column = (pixel % width as usize) as u32;
            let row = (pixel / width as usize) as u32;
            trace_sample(&ctx, column, row, sample)
        });
        log::debug!("Trace phase: {} samples in {:?}", traced.len(), start.elapsed());

        // Phase 2: reduce
        let reduce_start = Instant::now();
        let mut pixels = vec![Color::BLACK; ctx.pixel_count()];
        self.backend.dispatch(&mut pixels, |p| {
            average(traced[p * samples..(p + 1) * samples].iter().copied())
        });
        log::debug!("Reduce phase: {} pixels in {:?}", pixels.len(), reduce_start.elapsed());

        log::info!("Rendered in {:?}", start.elapsed());
        ImageBuffer::from_pixels(ctx.width, ctx.height, pixels)
    }
}

fn check_dimensions(settings: &RenderSettings) -> Result<(), RenderError> {
    if settings.width == 0 || settings.height == 0 {
        return Err(RenderError::ZeroResolution {
            width: settings.width,
            height: settings.height,
        });
    }
    if settings.samples == 0 {
        return Err(RenderError::ZeroSamples);
    }
    if settings.max_depth == 0 {
        return Err(RenderError::ZeroDepth);
    }
    Ok(())
}

/// Single-threaded reference: one `render_pixel` call per pixel, no
/// intermediate buffer. Matches [`Renderer::render`] exactly.
pub fn render_reference(ctx: &RenderContext<'_>) -> ImageBuffer {
    let mut image = ImageBuffer::new(ctx.width, ctx.height);

    for row in 0..ctx.height {
        for column in 0..ctx.width {
            image.set(column, row, render_pixel(ctx, column, row));
        }
    }

    image
}
