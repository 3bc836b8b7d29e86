use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lustre_core::{PixelFormat, RenderSettings};
use lustre_renderer::Backend;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Rgb,
    Bgra,
}

impl From<FormatArg> for PixelFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Rgb => PixelFormat::Rgb,
            FormatArg::Bgra => PixelFormat::Bgra,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Serial,
    Rayon,
}

impl From<BackendArg> for Backend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Serial => Backend::Serial,
            BackendArg::Rayon => Backend::Rayon,
        }
    }
}

/// Command line arguments. Flags override values from `--config`.
#[derive(Debug, Parser)]
#[command(name = "lustre")]
#[command(about = "Dispersive mirror ray tracer")]
pub struct Args {
    /// JSON render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Anti-aliasing dispersion of primary rays
    #[arg(long)]
    pub jitter: Option<f32>,

    /// Seed for the entropy pools
    #[arg(long)]
    pub seed: Option<u64>,

    /// Byte layout for raw output
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Execution backend
    #[arg(long, value_enum, default_value = "rayon")]
    pub backend: BackendArg,

    /// Worker threads for the rayon backend (default: all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Render the whole animation as a PPM sequence into the output directory
    #[arg(long)]
    pub animate: bool,

    /// Limit the number of animation frames
    #[arg(long)]
    pub frames: Option<u32>,

    /// Animation frame index to render as a single image
    #[arg(long, default_value = "0")]
    pub frame: u32,

    /// Output file (.ppm, .png or .raw) or, with --animate, directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Apply command line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(samples) = self.samples {
            settings.samples = samples;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(jitter) = self.jitter {
            settings.jitter = jitter;
        }
        if let Some(seed) = self.seed {
            settings.entropy_seed = seed;
        }
        if let Some(format) = self.format {
            settings.pixel_format = format.into();
        }
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None if self.animate => PathBuf::from("frames"),
            None => PathBuf::from("lustre.ppm"),
        }
    }
}
