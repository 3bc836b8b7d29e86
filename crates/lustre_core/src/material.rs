//! Surface materials.

use crate::Color;

/// Emissive/albedo/dispersion material.
///
/// Each bounce tints whatever light arrives from further down the path by
/// `color` and adds its own `light`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Albedo
    pub color: Color,
    /// Emission
    pub light: Color,
    /// Roughness of the reflection, 0.0 = perfect mirror
    pub dispersion: f32,
}

impl Material {
    pub fn new(color: Color, light: Color, dispersion: f32) -> Self {
        Self {
            color,
            light,
            dispersion,
        }
    }

    /// Non-emissive surface reflecting with the given albedo.
    pub fn reflective(color: Color, dispersion: f32) -> Self {
        Self::new(color, Color::BLACK, dispersion)
    }

    /// Pure light source: emits `light` and reflects nothing.
    pub fn emissive(light: Color) -> Self {
        Self::new(Color::BLACK, light, 0.0)
    }

    /// The material a ray "hits" when it escapes the scene.
    pub fn sky(emission: Color) -> Self {
        Self::emissive(emission)
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.light != Color::BLACK
    }
}
