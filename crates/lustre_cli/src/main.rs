use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use lustre_core::demo::orbit_frame;
use lustre_core::{PixelFormat, RenderSettings};
use lustre_renderer::{Backend, FrameSink, ImageBuffer, PpmSequence, RawStream, Renderer};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    args.apply(&mut settings);
    settings.validate().context("Invalid render settings")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
    }

    let renderer = Renderer::new(settings, Backend::from(args.backend))
        .context("Failed to set up the renderer")?;

    if args.animate {
        render_sequence(&renderer, &args)
    } else {
        render_frame(&renderer, &args)
    }
}

fn render_frame(renderer: &Renderer<Backend>, args: &Args) -> Result<()> {
    let settings = renderer.settings();
    let world = orbit_frame(args.frame, settings).context("Failed to build the demo scene")?;

    let image = renderer.render(&world);

    let output = args.output_path();
    save(&image, &output, settings.pixel_format)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Saved {}", output.display());
    Ok(())
}

fn render_sequence(renderer: &Renderer<Backend>, args: &Args) -> Result<()> {
    let settings = renderer.settings();
    let total = settings.frame_count();
    let frames = args.frames.map_or(total, |limit| limit.min(total));
    let dir = args.output_path();

    let mut sink = PpmSequence::create(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    info!("Rendering {} of {} frames to {}", frames, total, dir.display());
    let start = Instant::now();
    for frame in 0..frames {
        let world = orbit_frame(frame, settings)
            .with_context(|| format!("Failed to build frame {}", frame))?;
        let image = renderer.render(&world);
        sink.submit(frame, &image)
            .with_context(|| format!("Failed to write frame {}", frame))?;
    }
    sink.finish()?;

    info!("Sequence finished in {:?}", start.elapsed());
    Ok(())
}

/// Pick an encoding from the file extension.
fn save(image: &ImageBuffer, path: &Path, format: PixelFormat) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("ppm") | None => image.save_ppm(path)?,
        Some("raw") => {
            let mut sink = RawStream::new(BufWriter::new(File::create(path)?), format);
            sink.submit(0, image)?;
            sink.finish()?;
        }
        Some(_) => image.save_image(path)?,
    }
    Ok(())
}
