//! Closed-form root finding for first and second order polynomials.

use crate::approx_eq;

/// Real roots of a polynomial of degree at most two.
///
/// The order of the two roots carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None,
    One(f32),
    Two(f32, f32),
}

impl Roots {
    /// Number of roots.
    pub fn len(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::One(_) => 1,
            Roots::Two(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Roots::None)
    }

    /// Iterate over the roots.
    pub fn iter(&self) -> impl Iterator<Item = f32> {
        let (values, n) = match *self {
            Roots::None => ([0.0; 2], 0),
            Roots::One(t) => ([t, 0.0], 1),
            Roots::Two(t0, t1) => ([t0, t1], 2),
        };
        values.into_iter().take(n)
    }

    /// Smallest root that is `>= 0`, if any.
    ///
    /// Negative roots lie behind a ray's origin and are discarded.
    pub fn min_non_negative(&self) -> Option<f32> {
        self.iter()
            .filter(|t| *t >= 0.0)
            .fold(None, |best, t| match best {
                Some(b) if b <= t => Some(b),
                _ => Some(t),
            })
    }
}

/// Solve `a*t^2 + b*t + c = 0`.
///
/// With `a` close to zero the equation is treated as linear. A degenerate
/// equation with both `a` and `b` close to zero has no roots.
pub fn solve(a: f32, b: f32, c: f32) -> Roots {
    if approx_eq(a, 0.0) {
        if approx_eq(b, 0.0) {
            return Roots::None;
        }
        return Roots::One(-c / b);
    }

    let d = b * b - 4.0 * a * c;
    if d < 0.0 {
        return Roots::None;
    }

    let p = -b / (2.0 * a);
    let q = d.sqrt() / (2.0 * a);
    Roots::Two(p + q, p - q)
}
