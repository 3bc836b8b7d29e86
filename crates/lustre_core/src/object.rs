//! Scene objects: a shape, a material and a noise seed.

use lustre_math::{Intersect, Line, Plane, Roots, Sphere, Vec3};

use crate::Material;

/// Geometry of an object.
///
/// Every consumer matches exhaustively; adding a shape means adding a
/// variant and extending `Intersect` below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    pub fn sphere(c: Vec3, r: f32) -> Self {
        Shape::Sphere(Sphere::new(c, r))
    }

    pub fn plane(p: Vec3, n: Vec3) -> Self {
        Shape::Plane(Plane::new(p, n))
    }

    /// Short name, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
        }
    }
}

impl Intersect for Shape {
    fn intersect(&self, line: &Line) -> Roots {
        match self {
            Shape::Sphere(s) => s.intersect(line),
            Shape::Plane(p) => p.intersect(line),
        }
    }

    fn normal_at(&self, p: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(s) => s.normal_at(p),
            Shape::Plane(pl) => pl.normal_at(p),
        }
    }
}

/// Stable identity of an object: its index in the world's object slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An object in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    pub shape: Shape,
    pub material: Material,
    /// Random value assigned when the world is built; only used to
    /// decorrelate dispersion noise between objects.
    pub seed: u64,
}

impl Object {
    pub fn new(shape: Shape, material: Material, seed: u64) -> Self {
        Self {
            shape,
            material,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_dispatch() {
        let line = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::X);

        let sphere = Shape::sphere(Vec3::new(10.0, 0.0, 0.0), 5.0);
        assert_eq!(sphere.intersect(&line).min_non_negative(), Some(8.0));
        assert_eq!(sphere.kind(), "sphere");

        let wall = Shape::plane(Vec3::new(2.0, 0.0, 0.0), Vec3::X);
        assert_eq!(wall.intersect(&line), Roots::One(5.0));
        assert_eq!(wall.normal_at(Vec3::ZERO), Vec3::X);
    }
}
