//! Lustre Core - scene description for the Lustre ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Color`, `Material`, `Shape`, `Object`, `Viewport`, `World`
//! - **Validation**: `WorldBuilder` rejects degenerate geometry up front
//! - **Packed records**: flat `Pod` objects for compute backends
//! - **Settings**: JSON-loadable `RenderSettings`
//! - **Demo**: the animated orbit scene
//!
//! # Example
//!
//! ```ignore
//! use lustre_core::{Color, Material, Shape, Viewport, WorldBuilder};
//!
//! let world = WorldBuilder::new(viewport)
//!     .with_sky(Color::WHITE)
//!     .with_object(Shape::sphere(center, 5.0), Material::reflective(Color::GREEN, 0.0))
//!     .build()?;
//! ```

pub mod color;
pub mod demo;
pub mod material;
pub mod object;
pub mod packed;
pub mod settings;
pub mod viewport;
pub mod world;

// Re-export commonly used types
pub use color::{Color, PixelFormat};
pub use material::Material;
pub use object::{Object, ObjectId, Shape};
pub use packed::PackedObject;
pub use settings::{RenderSettings, SettingsError};
pub use viewport::Viewport;
pub use world::{SceneError, World, WorldBuilder};
