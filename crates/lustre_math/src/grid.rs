use crate::Vec3;

/// A parametrized plane `p + span(b[0], b[1])`, used as the image plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    pub p: Vec3,
    pub b: [Vec3; 2],
}

impl Grid {
    /// Create a new grid from an origin and two basis vectors.
    pub fn new(p: Vec3, b0: Vec3, b1: Vec3) -> Self {
        Self { p, b: [b0, b1] }
    }

    /// Point at grid coordinates (s, t).
    ///
    /// Returns: p + s * b[0] + t * b[1]
    #[inline]
    pub fn coord(&self, s: f32, t: f32) -> Vec3 {
        self.p + s * self.b[0] + t * self.b[1]
    }

    /// Normal of the plane spanned by the grid (zero if the basis is degenerate).
    pub fn normal(&self) -> Vec3 {
        self.b[0].cross(self.b[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_coord() {
        let grid = Grid::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.01, 0.0),
            Vec3::new(0.0, 0.0, -0.01),
        );

        assert_eq!(grid.coord(0.0, 0.0), Vec3::new(0.0, 0.0, 5.0));
        let v = grid.coord(100.0, 100.0);
        assert!((v - Vec3::new(0.0, 1.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_grid_normal() {
        let grid = Grid::new(Vec3::ZERO, Vec3::Y, -Vec3::Z);
        assert_eq!(grid.normal(), -Vec3::X);

        let flat = Grid::new(Vec3::ZERO, Vec3::Y, 2.0 * Vec3::Y);
        assert_eq!(flat.normal(), Vec3::ZERO);
    }
}
