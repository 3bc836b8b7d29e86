//! 8-bit RGB colors with saturating arithmetic.

use serde::{Deserialize, Serialize};

/// An RGB color with one byte per channel.
///
/// `#[repr(C)]` with no padding, so a `&[Color]` casts to packed RGB bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);
    pub const VIOLET: Color = Color::new(0x7f, 0x00, 0xff);
    pub const ORANGE: Color = Color::new(0xff, 0x80, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiplicative blend: each channel is `a * b / 255`.
    ///
    /// Used to tint incoming light by a surface albedo.
    pub fn mix(self, other: Color) -> Color {
        #[inline]
        fn channel(a: u8, b: u8) -> u8 {
            ((a as u16 * b as u16) / 255) as u8
        }
        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Additive blend, saturating at 255.
    pub fn add(self, other: Color) -> Color {
        Color::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

/// Byte layout of a pixel handed to an encoder or display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// r, g, b
    #[default]
    Rgb,
    /// b, g, r, padding (framebuffer layout)
    Bgra,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Bgra => 4,
        }
    }

    /// Append `color` to `out` in this layout.
    #[inline]
    pub fn encode(self, color: Color, out: &mut Vec<u8>) {
        match self {
            PixelFormat::Rgb => out.extend_from_slice(&[color.r, color.g, color.b]),
            PixelFormat::Bgra => out.extend_from_slice(&[color.b, color.g, color.r, 0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix() {
        assert_eq!(Color::GREEN.mix(Color::WHITE), Color::GREEN);
        assert_eq!(Color::WHITE.mix(Color::BLACK), Color::BLACK);
        assert_eq!(
            Color::new(0x80, 0xff, 0x00).mix(Color::new(0x80, 0x80, 0xff)),
            Color::new(0x40, 0x80, 0x00)
        );
    }

    #[test]
    fn test_add_saturates() {
        assert_eq!(Color::RED.add(Color::GREEN), Color::new(0xff, 0xff, 0x00));
        assert_eq!(Color::ORANGE.add(Color::ORANGE), Color::new(0xff, 0xff, 0x00));
        assert_eq!(Color::new(1, 2, 3).add(Color::BLACK), Color::new(1, 2, 3));
    }

    #[test]
    fn test_cast_to_bytes() {
        let pixels = [Color::RED, Color::new(1, 2, 3)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[0xff, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_pixel_format_encode() {
        let mut out = Vec::new();
        PixelFormat::Rgb.encode(Color::new(1, 2, 3), &mut out);
        PixelFormat::Bgra.encode(Color::new(1, 2, 3), &mut out);
        assert_eq!(out, vec![1, 2, 3, 3, 2, 1, 0]);
        assert_eq!(PixelFormat::Bgra.bytes_per_pixel(), 4);
    }
}
