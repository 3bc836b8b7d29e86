use crate::{approx_eq, Intersect, Line, Roots, Vec3};

/// A plane `{ v : (v - p) . n = 0 }`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub p: Vec3,
    pub n: Vec3,
}

impl Plane {
    /// Create a new plane through `p` with normal `n`.
    pub fn new(p: Vec3, n: Vec3) -> Self {
        Self { p, n }
    }

    /// Signed distance of `v` from the plane, scaled by `|n|`.
    #[inline]
    pub fn offset(&self, v: Vec3) -> f32 {
        (v - self.p).dot(self.n)
    }

    /// Returns true if `v` lies in the plane.
    pub fn contains(&self, v: Vec3) -> bool {
        approx_eq(self.offset(v), 0.0)
    }
}

impl Intersect for Plane {
    /// A line whose origin lies in the plane reports no root: it is leaving
    /// the surface, not arriving at it.
    fn intersect(&self, line: &Line) -> Roots {
        let u = (self.p - line.p).dot(self.n);
        if approx_eq(u, 0.0) {
            return Roots::None;
        }

        let v = line.b.dot(self.n);
        if approx_eq(v, 0.0) {
            // Parallel
            return Roots::None;
        }

        Roots::One(u / v)
    }

    fn normal_at(&self, _p: Vec3) -> Vec3 {
        self.n
    }
}
