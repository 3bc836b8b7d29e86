//! Specular reflection and dispersion.

use std::f32::consts::PI;

use lustre_core::Shape;
use lustre_math::{Intersect, Line, Vec3};

use crate::entropy::{mix64, EntropyPool};

/// Mirror `line.b` about the surface normal at `line.p`.
///
/// `line.p` must lie on the surface. The direction is treated as pointing
/// away from the surface: pass the incoming direction negated and the
/// result is the outgoing direction.
pub fn reflect(line: &Line, shape: &Shape) -> Line {
    let n = shape.normal_at(line.p);
    let b = 2.0 * (line.b.dot(n) / n.length_squared()) * n - line.b;
    Line::new(line.p, b)
}

/// Randomly perturb `direction` by an amount controlled by `dispersion`.
///
/// Each component is rotated against the magnitude of the other two by an
/// angle of `PI * dispersion * N(0, 1)`. This is a cheap approximation of a
/// rotation, not an exact one. The normal samples come from `entropy`,
/// selected by `seed` mixed with the bits of `direction`.
///
/// A dispersion of zero returns `direction` unchanged.
pub fn disperse(direction: Vec3, dispersion: f32, seed: u64, entropy: &EntropyPool) -> Vec3 {
    if dispersion == 0.0 {
        return direction;
    }

    let key = seed
        ^ mix64(direction.x.to_bits() as u64 | (direction.y.to_bits() as u64) << 32)
        ^ mix64(direction.z.to_bits() as u64);
    let n = entropy.normals3(key);
    let scale = PI * dispersion;
    let len_sq = direction.length_squared();

    let rotate = |v: f32, n: f32| {
        let angle = n * scale;
        let orthogonal = (len_sq - v * v).max(0.0).sqrt();
        v * angle.cos() + orthogonal * angle.sin()
    };

    let perturbed = Vec3::new(
        rotate(direction.x, n[0]),
        rotate(direction.y, n[1]),
        rotate(direction.z, n[2]),
    );

    if perturbed.length_squared() <= f32::EPSILON * len_sq {
        log::trace!("Dispersion collapsed {:?}, keeping it", direction);
        return direction;
    }
    perturbed
}
