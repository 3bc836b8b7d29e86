//! Render settings, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PixelFormat;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Everything the renderer needs besides the world.
///
/// Missing JSON keys fall back to [`RenderSettings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel
    pub samples: u32,
    /// Maximum number of bounces before a path counts as absorbed
    pub max_depth: u32,
    /// Anti-aliasing dispersion applied to primary rays
    pub jitter: f32,
    /// Length of the uniform entropy pool
    pub uniform_pool: usize,
    /// Length of the standard-normal entropy pool
    pub normal_pool: usize,
    /// Seed the entropy pools are generated from
    pub entropy_seed: u64,
    /// Output byte layout
    pub pixel_format: PixelFormat,
    /// Frames per second of an animated render
    pub fps: u32,
    /// Length of an animated render in seconds
    pub duration: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
            samples: 17,
            max_depth: 16,
            jitter: 0.0005,
            uniform_pool: 128,
            normal_pool: 128,
            entropy_seed: 0x5eed,
            pixel_format: PixelFormat::Rgb,
            fps: 24,
            duration: 15.0,
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: RenderSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples == 0 {
            return Err(SettingsError::Invalid("samples must be at least 1".into()));
        }
        if self.max_depth == 0 {
            return Err(SettingsError::Invalid("max_depth must be at least 1".into()));
        }
        if !(self.jitter.is_finite() && self.jitter >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "jitter must be non-negative, got {}",
                self.jitter
            )));
        }
        if self.uniform_pool == 0 || self.normal_pool == 0 {
            return Err(SettingsError::Invalid("entropy pools must not be empty".into()));
        }
        if self.fps == 0 || !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "animation needs positive fps and duration, got {} fps for {}s",
                self.fps, self.duration
            )));
        }
        Ok(())
    }

    /// Total number of frames of an animated render.
    pub fn frame_count(&self) -> u32 {
        (self.fps as f32 * self.duration).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = RenderSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_count(), 360);
    }

    #[test]
    fn test_partial_json() {
        let settings =
            RenderSettings::from_json_str(r#"{ "width": 16, "height": 8, "pixel_format": "bgra" }"#)
                .unwrap();

        assert_eq!(settings.width, 16);
        assert_eq!(settings.height, 8);
        assert_eq!(settings.pixel_format, PixelFormat::Bgra);
        assert_eq!(settings.samples, RenderSettings::default().samples);
    }

    #[test]
    fn test_unknown_field() {
        let err = RenderSettings::from_json_str(r#"{ "widht": 16 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = RenderSettings::from_json_str(r#"{ "samples": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = RenderSettings::from_json_str(r#"{ "jitter": -1.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }
}
