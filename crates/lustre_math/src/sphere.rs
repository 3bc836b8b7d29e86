use crate::{solve, Intersect, Line, Roots, Vec3};

/// A sphere `|v - c| = r`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    pub c: Vec3,
    pub r: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(c: Vec3, r: f32) -> Self {
        Self { c, r }
    }
}

impl Intersect for Sphere {
    fn intersect(&self, line: &Line) -> Roots {
        // |p + t*b - c|^2 = r^2
        let d = line.p - self.c;
        solve(
            line.b.length_squared(),
            2.0 * line.b.dot(d),
            d.length_squared() - self.r * self.r,
        )
    }

    fn normal_at(&self, p: Vec3) -> Vec3 {
        p - self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_intersect() {
        let line = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::X);
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 5.0);

        let roots = sphere.intersect(&line);
        assert_eq!(roots, Roots::Two(18.0, 8.0));
    }

    #[test]
    fn test_sphere_intersect_scaled_direction() {
        // Same line, direction twice as long: t values halve
        let line = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 5.0);

        assert_eq!(sphere.intersect(&line).min_non_negative(), Some(4.0));
    }

    #[test]
    fn test_sphere_miss() {
        let line = Line::new(Vec3::ZERO, Vec3::Y);
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 5.0);

        assert!(sphere.intersect(&line).is_empty());
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 5.0);
        assert_eq!(sphere.normal_at(Vec3::new(5.0, 0.0, 0.0)), Vec3::new(-5.0, 0.0, 0.0));
    }
}
