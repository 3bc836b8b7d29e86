//! Camera position and image plane.

use lustre_math::{Grid, Line, Vec3};

/// Camera plus the image-plane grid rays are fired through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub camera: Vec3,
    pub plane: Grid,
}

impl Viewport {
    pub fn new(camera: Vec3, plane: Grid) -> Self {
        Self { camera, plane }
    }

    /// Build a viewport from look-at parameters.
    ///
    /// The image plane sits one unit in front of the camera. Grid steps are
    /// one pixel wide, so `(0, 0)` is the view center and `(width/2, height/2)`
    /// the lower right corner. `fov` is the horizontal field of view in
    /// radians.
    pub fn look_at(camera: Vec3, target: Vec3, up: Vec3, fov: f32, width: u32) -> Self {
        let forward = (target - camera).normalize();
        let right = forward.cross(up).normalize();
        let true_up = right.cross(forward);

        let viewport_width = 2.0 * (fov / 2.0).tan();
        let pixel = viewport_width / width.max(1) as f32;

        let plane = Grid::new(camera + forward, right * pixel, -true_up * pixel);
        Self { camera, plane }
    }

    /// Grid coordinates of pixel (column, row) in a `width` x `height` image.
    ///
    /// The image center maps to the grid origin.
    #[inline]
    pub fn pixel_coords(column: u32, row: u32, width: u32, height: u32) -> (f32, f32) {
        (
            column as f32 - (width / 2) as f32,
            row as f32 - (height / 2) as f32,
        )
    }

    /// Primary ray from the camera through grid point (s, t).
    #[inline]
    pub fn ray(&self, s: f32, t: f32) -> Line {
        Line::through(self.camera, self.plane.coord(s, t))
    }

    /// Primary ray through pixel (column, row).
    pub fn pixel_ray(&self, column: u32, row: u32, width: u32, height: u32) -> Line {
        let (s, t) = Self::pixel_coords(column, row, width, height);
        self.ray(s, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_coords() {
        assert_eq!(Viewport::pixel_coords(0, 0, 16, 16), (-8.0, -8.0));
        assert_eq!(Viewport::pixel_coords(8, 8, 16, 16), (0.0, 0.0));
        assert_eq!(Viewport::pixel_coords(4, 2, 9, 5), (0.0, 0.0));
    }

    #[test]
    fn test_pixel_ray() {
        let viewport = Viewport::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Grid::new(Vec3::ZERO, Vec3::Y, -Vec3::Z),
        );

        let ray = viewport.pixel_ray(8, 8, 16, 16);
        assert_eq!(ray.p, Vec3::new(-10.0, 0.0, 0.0));
        assert_eq!(ray.b, Vec3::new(10.0, 0.0, 0.0));

        let corner = viewport.pixel_ray(0, 0, 16, 16);
        assert_eq!(corner.b, Vec3::new(10.0, -8.0, 8.0));
    }

    #[test]
    fn test_look_at() {
        let viewport = Viewport::look_at(
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::Z,
            std::f32::consts::FRAC_PI_2,
            100,
        );

        // Center ray points at the target
        let center = viewport.ray(0.0, 0.0);
        assert!((center.b - Vec3::X).length() < 1e-6);

        // 90 degree field of view: the right edge is 45 degrees off axis
        let edge = viewport.ray(50.0, 0.0);
        assert!((edge.b.x - 1.0).abs() < 1e-5);
        assert!((edge.b.y.abs() - 1.0).abs() < 1e-5);

        // Rows grow downwards
        assert!(viewport.ray(0.0, 10.0).b.z < 0.0);
    }
}
