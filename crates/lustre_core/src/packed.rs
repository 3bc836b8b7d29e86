//! Flat object records for upload to a compute backend.
//!
//! A compute kernel cannot match on a Rust enum, so shapes travel as a raw
//! tag plus a shared payload. Decoding an unknown tag is a fatal
//! configuration error.

use lustre_math::Vec3;

use crate::{Color, Material, SceneError, Shape, World, WorldBuilder};

pub const SHAPE_TAG_SPHERE: u32 = 0;
pub const SHAPE_TAG_PLANE: u32 = 1;

/// One object as a plain-old-data record (64 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedObject {
    pub seed: u64,
    pub shape_tag: u32,
    /// Sphere radius, unused for planes
    pub radius: f32,
    /// Sphere center or point on the plane (w unused)
    pub position: [f32; 4],
    /// Plane normal, unused for spheres (w unused)
    pub normal: [f32; 4],
    /// Albedo rgb + padding
    pub color: [u8; 4],
    /// Emission rgb + padding
    pub light: [u8; 4],
    pub dispersion: f32,
    _pad: u32,
}

fn vec4(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

fn vec3(v: [f32; 4]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

fn rgb(c: Color) -> [u8; 4] {
    [c.r, c.g, c.b, 0]
}

impl PackedObject {
    /// Decode back into a shape and material.
    pub fn unpack(&self, index: usize) -> Result<(Shape, Material), SceneError> {
        let shape = match self.shape_tag {
            SHAPE_TAG_SPHERE => Shape::sphere(vec3(self.position), self.radius),
            SHAPE_TAG_PLANE => Shape::plane(vec3(self.position), vec3(self.normal)),
            tag => return Err(SceneError::UnsupportedShape { index, tag }),
        };
        let material = Material::new(
            Color::new(self.color[0], self.color[1], self.color[2]),
            Color::new(self.light[0], self.light[1], self.light[2]),
            self.dispersion,
        );
        Ok((shape, material))
    }
}

impl World {
    /// Flatten the object list for a compute backend.
    pub fn pack(&self) -> Vec<PackedObject> {
        self.objects()
            .iter()
            .map(|object| {
                let (shape_tag, radius, position, normal) = match object.shape {
                    Shape::Sphere(s) => (SHAPE_TAG_SPHERE, s.r, s.c, Vec3::ZERO),
                    Shape::Plane(p) => (SHAPE_TAG_PLANE, 0.0, p.p, p.n),
                };
                PackedObject {
                    seed: object.seed,
                    shape_tag,
                    radius,
                    position: vec4(position),
                    normal: vec4(normal),
                    color: rgb(object.material.color),
                    light: rgb(object.material.light),
                    dispersion: object.material.dispersion,
                    _pad: 0,
                }
            })
            .collect()
    }
}

impl WorldBuilder {
    /// Add every packed record, keeping their seeds.
    pub fn with_packed(mut self, records: &[PackedObject]) -> Result<Self, SceneError> {
        for (index, record) in records.iter().enumerate() {
            let (shape, material) = record.unpack(index)?;
            self = self.with_seeded_object(shape, material, record.seed);
        }
        Ok(self)
    }
}
