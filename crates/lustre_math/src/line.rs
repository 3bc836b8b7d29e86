use crate::Vec3;

/// An infinite line `{ p + t * b : t in R }`.
///
/// Used as a ray when only `t >= 0` is considered. The direction `b` is not
/// required to be unit length; intersection math accounts for its magnitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub p: Vec3,
    pub b: Vec3,
}

impl Line {
    /// Create a new line from an origin and a direction.
    pub fn new(p: Vec3, b: Vec3) -> Self {
        Self { p, b }
    }

    /// Line from `from` passing through `to` at `t = 1`.
    pub fn through(from: Vec3, to: Vec3) -> Self {
        Self { p: from, b: to - from }
    }

    /// Get the point along the line at parameter t.
    ///
    /// Returns: p + t * b
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.p + t * self.b
    }

    /// Same line with its direction reversed.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self { p: self.p, b: -self.b }
    }
}
