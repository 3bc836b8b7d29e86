//! Rendered frames and their byte encodings.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lustre_core::{Color, PixelFormat};

use crate::renderer::RenderError;

/// Row-major `width x height` frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Wrap already computed pixels. `pixels.len()` must be `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Tightly packed RGB bytes, without copying.
    pub fn as_rgb_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Encode every pixel in `format`.
    pub fn to_bytes(&self, format: PixelFormat) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * format.bytes_per_pixel());
        for color in &self.pixels {
            format.encode(*color, &mut bytes);
        }
        bytes
    }

    /// Write a binary PPM (P6).
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(self.as_rgb_bytes())
    }

    /// Write the raw pixel bytes in `format`, with no header.
    pub fn write_raw<W: Write>(&self, writer: &mut W, format: PixelFormat) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes(format))
    }

    pub fn save_ppm(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Save as PNG (or any other format the `image` crate infers from the
    /// extension).
    pub fn save_image(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        image::save_buffer(
            path,
            self.as_rgb_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }
}
