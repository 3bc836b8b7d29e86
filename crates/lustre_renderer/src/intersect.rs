//! Nearest-hit search.

use lustre_core::{Object, ObjectId, World};
use lustre_math::{Intersect, Line, Roots};

/// The closest surface a line reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: ObjectId,
    /// Line parameter of the hit point, always `>= 0`
    pub t: f32,
}

impl Hit {
    /// Resolve the hit object.
    pub fn object<'a>(&self, world: &'a World) -> &'a Object {
        world.object(self.id)
    }
}

/// All parametric hits of `line` with `object`.
#[inline]
pub fn intersect(line: &Line, object: &Object) -> Roots {
    object.shape.intersect(line)
}

/// Find the object `line` reaches first, ignoring `exclude`.
///
/// `exclude` is the object the line just left; skipping it avoids
/// re-hitting the bounce point. Ties go to the earlier object.
pub fn find_nearest(line: &Line, world: &World, exclude: Option<ObjectId>) -> Option<Hit> {
    let mut nearest: Option<Hit> = None;

    for (id, object) in world.iter() {
        if Some(id) == exclude {
            continue;
        }

        let Some(t) = intersect(line, object).min_non_negative() else {
            continue;
        };

        if nearest.map_or(true, |hit| t < hit.t) {
            nearest = Some(Hit { id, t });
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use lustre_core::{Color, Material, Shape, Viewport, WorldBuilder};
    use lustre_math::{Grid, Vec3};

    fn world() -> World {
        let viewport = Viewport::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Grid::new(Vec3::ZERO, Vec3::Y, -Vec3::Z),
        );
        let m = Material::reflective(Color::WHITE, 0.0);
        WorldBuilder::new(viewport)
            // far sphere first so ordering is not what picks the winner
            .with_object(Shape::sphere(Vec3::new(30.0, 0.0, 0.0), 5.0), m)
            .with_object(Shape::sphere(Vec3::new(10.0, 0.0, 0.0), 5.0), m)
            .with_object(Shape::plane(Vec3::new(0.0, 0.0, -20.0), Vec3::Z), m)
            .build()
            .unwrap()
    }

    #[test]
    fn test_intersect_object() {
        let world = world();
        let line = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::X);
        let roots: Vec<f32> = intersect(&line, &world.objects()[1]).iter().collect();
        assert_eq!(roots, vec![18.0, 8.0]);
    }

    #[test]
    fn test_find_nearest() {
        let world = world();
        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);

        let hit = find_nearest(&line, &world, None).unwrap();
        assert_eq!(hit.id.index(), 1);
        assert_eq!(hit.t, 15.0);
        assert_eq!(hit.object(&world).shape, world.objects()[1].shape);
    }

    #[test]
    fn test_tie_goes_to_earlier_object() {
        let viewport = Viewport::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Grid::new(Vec3::ZERO, Vec3::Y, -Vec3::Z),
        );
        let sphere = Shape::sphere(Vec3::new(10.0, 0.0, 0.0), 5.0);
        let world = WorldBuilder::new(viewport)
            .with_object(sphere, Material::reflective(Color::RED, 0.0))
            .with_object(sphere, Material::reflective(Color::GREEN, 0.0))
            .build()
            .unwrap();

        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);
        let hit = find_nearest(&line, &world, None).unwrap();
        assert_eq!(hit.id.index(), 0);
        assert_eq!(hit.t, 15.0);
        assert_eq!(hit.object(&world).material.color, Color::RED);

        // Excluding the winner falls through to its twin
        let hit = find_nearest(&line, &world, Some(hit.id)).unwrap();
        assert_eq!(hit.id.index(), 1);
    }

    #[test]
    fn test_find_nearest_never_returns_excluded() {
        let world = world();
        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::X);
        let nearest = find_nearest(&line, &world, None).unwrap().id;

        let hit = find_nearest(&line, &world, Some(nearest)).unwrap();
        assert_ne!(hit.id, nearest);
        assert_eq!(hit.id.index(), 0);
        assert_eq!(hit.t, 35.0);
    }

    #[test]
    fn test_inside_sphere_uses_exit_root() {
        let world = world();
        // From the center of the near sphere: one root behind, one ahead
        let line = Line::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Y);
        let hit = find_nearest(&line, &world, None).unwrap();
        assert_eq!(hit.id.index(), 1);
        assert_eq!(hit.t, 5.0);
    }

    #[test]
    fn test_behind_is_ignored() {
        let world = world();
        // Pointing away from everything except the floor, which is behind
        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(find_nearest(&line, &world, None), None);
    }

    #[test]
    fn test_floor_hit() {
        let world = world();
        let line = Line::new(Vec3::new(-10.0, 0.0, 0.0), -Vec3::Z);
        let hit = find_nearest(&line, &world, None).unwrap();
        assert_eq!(hit.id.index(), 2);
        assert_eq!(hit.t, 20.0);
    }
}
