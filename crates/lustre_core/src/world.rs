//! The immutable world snapshot a frame is rendered from.
//!
//! Worlds are only constructed through [`WorldBuilder`], which rejects
//! degenerate geometry so the tracer never sees it.

use std::sync::Arc;

use lustre_math::{approx_eq, Vec3, EPSILON};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::{Color, Material, Object, ObjectId, Shape, Viewport};

/// Seed used when none is given to the builder.
pub const DEFAULT_SCENE_SEED: u64 = 0x6c75_7374_7265;

/// Errors found while building a world.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("object {index}: sphere radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("object {index}: plane normal is zero")]
    DegenerateNormal { index: usize },

    #[error("object {index}: {kind} has non-finite coordinates")]
    NonFiniteGeometry { index: usize, kind: &'static str },

    #[error("object {index}: dispersion must be non-negative and finite, got {dispersion}")]
    InvalidDispersion { index: usize, dispersion: f32 },

    #[error("object {index}: camera lies in the plane")]
    CameraOnPlane { index: usize },

    #[error("object {index}: unsupported shape tag {tag}")]
    UnsupportedShape { index: usize, tag: u32 },

    #[error("viewport has non-finite coordinates")]
    NonFiniteViewport,

    #[error("image plane basis vectors are zero or parallel")]
    DegenerateImagePlane,

    #[error("camera lies in the image plane")]
    CameraInImagePlane,
}

/// A fully built, read-only scene.
///
/// Cloning is cheap: the object list is shared.
#[derive(Debug, Clone)]
pub struct World {
    objects: Arc<[Object]>,
    viewport: Viewport,
    sky: Color,
    seed: u64,
}

impl World {
    /// All objects, indexable by [`ObjectId::index`].
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Iterate over objects together with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i), o))
    }

    /// Look up an object by id.
    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    /// Objects that emit light.
    pub fn emitters(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.iter().filter(|(_, o)| o.material.is_emissive())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Emission of the sky.
    pub fn sky(&self) -> Color {
        self.sky
    }

    /// Material recorded when a ray escapes the scene.
    pub fn sky_material(&self) -> Material {
        Material::sky(self.sky)
    }

    /// Per-frame seed, mixed into every sample's entropy stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Builder for [`World`].
///
/// Objects without an explicit seed receive one from an RNG seeded with the
/// builder's seed when [`build`](WorldBuilder::build) runs, so the same
/// builder input always yields the same world.
#[derive(Debug, Clone)]
pub struct WorldBuilder {
    viewport: Viewport,
    sky: Color,
    seed: u64,
    objects: Vec<(Shape, Material, Option<u64>)>,
}

impl WorldBuilder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sky: Color::BLACK,
            seed: DEFAULT_SCENE_SEED,
            objects: Vec::new(),
        }
    }

    /// Set the sky emission.
    pub fn with_sky(mut self, sky: Color) -> Self {
        self.sky = sky;
        self
    }

    /// Set the world seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Add an object; its noise seed is assigned at build time.
    pub fn with_object(mut self, shape: Shape, material: Material) -> Self {
        self.objects.push((shape, material, None));
        self
    }

    /// Add an object with a fixed noise seed.
    pub fn with_seeded_object(mut self, shape: Shape, material: Material, seed: u64) -> Self {
        self.objects.push((shape, material, Some(seed)));
        self
    }

    /// Validate and freeze the world.
    pub fn build(self) -> Result<World, SceneError> {
        validate_viewport(&self.viewport)?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut objects = Vec::with_capacity(self.objects.len());
        for (index, (shape, material, seed)) in self.objects.into_iter().enumerate() {
            validate_object(index, &shape, &material, &self.viewport)?;
            let seed = seed.unwrap_or_else(|| rng.gen());
            objects.push(Object::new(shape, material, seed));
        }

        let world = World {
            objects: objects.into(),
            viewport: self.viewport,
            sky: self.sky,
            seed: self.seed,
        };
        log::debug!(
            "Built world: {} objects ({} emitters), seed {:#x}",
            world.len(),
            world.emitters().count(),
            world.seed
        );

        Ok(world)
    }
}

fn finite(v: Vec3) -> bool {
    v.is_finite()
}

fn validate_viewport(viewport: &Viewport) -> Result<(), SceneError> {
    let grid = &viewport.plane;
    if !finite(viewport.camera) || !finite(grid.p) || !finite(grid.b[0]) || !finite(grid.b[1]) {
        return Err(SceneError::NonFiniteViewport);
    }

    // |b0 x b1|^2 = |b0|^2 |b1|^2 sin^2(angle), so this is scale independent
    let normal = grid.normal();
    let scale = grid.b[0].length_squared() * grid.b[1].length_squared();
    if normal.length_squared() <= f32::EPSILON * scale {
        return Err(SceneError::DegenerateImagePlane);
    }

    // A camera in the image plane would produce zero-length primary rays
    if approx_eq((viewport.camera - grid.p).dot(normal.normalize()), 0.0) {
        return Err(SceneError::CameraInImagePlane);
    }

    Ok(())
}

fn validate_object(
    index: usize,
    shape: &Shape,
    material: &Material,
    viewport: &Viewport,
) -> Result<(), SceneError> {
    match shape {
        Shape::Sphere(s) => {
            if !finite(s.c) {
                return Err(SceneError::NonFiniteGeometry {
                    index,
                    kind: shape.kind(),
                });
            }
            if !(s.r.is_finite() && s.r > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: s.r,
                });
            }
        }
        Shape::Plane(p) => {
            if !finite(p.p) || !finite(p.n) {
                return Err(SceneError::NonFiniteGeometry {
                    index,
                    kind: shape.kind(),
                });
            }
            if p.n.length_squared() < EPSILON {
                return Err(SceneError::DegenerateNormal { index });
            }
            if p.contains(viewport.camera) {
                return Err(SceneError::CameraOnPlane { index });
            }
        }
    }

    let dispersion = material.dispersion;
    if !(dispersion.is_finite() && dispersion >= 0.0) {
        return Err(SceneError::InvalidDispersion { index, dispersion });
    }

    Ok(())
}
