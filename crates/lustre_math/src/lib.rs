// Re-export glam for convenience
pub use glam::*;

// Lustre geometry types
mod line;
mod plane;
mod sphere;
mod grid;
mod solve;

pub use line::Line;
pub use plane::Plane;
pub use sphere::Sphere;
pub use grid::Grid;
pub use solve::{solve, Roots};

/// Tolerance used for every "is this zero" test in the geometry code.
///
/// Absolute, not relative: results near the tolerance are approximate,
/// not exact.
pub const EPSILON: f32 = 1e-8;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Shapes that a [`Line`] can be intersected with.
pub trait Intersect {
    /// Parametric values `t` where `line.at(t)` lies on the surface.
    ///
    /// Roots are unordered and may be negative.
    fn intersect(&self, line: &Line) -> Roots;

    /// Surface normal at `p`, which must lie on the surface.
    ///
    /// Not normalized.
    fn normal_at(&self, p: Vec3) -> Vec3;
}
