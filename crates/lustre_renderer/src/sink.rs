//! Destinations for finished frames.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use lustre_core::PixelFormat;

use crate::buffer::ImageBuffer;
use crate::renderer::RenderError;

/// Receives frames in order as they finish rendering.
pub trait FrameSink {
    fn submit(&mut self, frame: u32, image: &ImageBuffer) -> Result<(), RenderError>;

    /// Flush anything buffered. Called once after the last frame.
    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Writes `<dir>/frame_<index:05>.ppm` per frame.
#[derive(Debug)]
pub struct PpmSequence {
    dir: PathBuf,
    written: u32,
}

impl PpmSequence {
    /// Create `dir` if needed.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: 0 })
    }

    pub fn frame_path(&self, frame: u32) -> PathBuf {
        self.dir.join(format!("frame_{:05}.ppm", frame))
    }

    pub fn written(&self) -> u32 {
        self.written
    }
}

impl FrameSink for PpmSequence {
    fn submit(&mut self, frame: u32, image: &ImageBuffer) -> Result<(), RenderError> {
        let path = self.frame_path(frame);
        image.save_ppm(&path)?;
        self.written += 1;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        log::info!("Wrote {} frames to {}", self.written, self.dir.display());
        Ok(())
    }
}

/// Concatenates raw frames in one pixel format, e.g. for piping into an
/// encoder.
#[derive(Debug)]
pub struct RawStream<W: Write> {
    writer: W,
    format: PixelFormat,
}

impl<W: Write> RawStream<W> {
    pub fn new(writer: W, format: PixelFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for RawStream<W> {
    fn submit(&mut self, _frame: u32, image: &ImageBuffer) -> Result<(), RenderError> {
        image.write_raw(&mut self.writer, self.format)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}
