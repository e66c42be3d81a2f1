//! Geometric primitives for curvature evaluation.
//!
//! Small vector helpers shared by the pivot, sorting and spherical-area
//! code. All angle math is in radians. Helpers are total: degenerate inputs
//! (zero-length vectors) yield zero angles and zero vectors rather than NaN,
//! which is what lets the engine absorb degenerate geometry as a 0.0
//! contribution instead of poisoning a whole map.

mod pivot;
mod sort;
mod sphere;

pub use pivot::{edge_side_pivot, vertex_pivot, PivotFan};
pub use sort::{sort_around, sort_around_mean};
pub use sphere::{quad_area, triangle_area, SpherePolygon};

use nalgebra::Vector3;

/// Magnitudes below this normalize to the zero vector.
const NORMALIZE_EPS: f64 = 1e-5;

/// Denominators below this make an angle undefined; such angles are 0.
const ANGLE_EPS: f64 = 1e-15;

/// Normalize a vector, mapping near-zero input to the zero vector.
#[inline]
pub fn normalized_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(NORMALIZE_EPS).unwrap_or_else(Vector3::zeros)
}

/// The unsigned angle between two vectors in `[0, π]`.
///
/// Returns 0 when either vector is near zero.
#[inline]
pub fn angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let denom = (a.norm_squared() * b.norm_squared()).sqrt();
    if denom < ANGLE_EPS {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// The signed angle from `from` to `to` around `axis`, in `(-π, π]`.
///
/// Right-handed: positive when the rotation from `from` to `to` is
/// counter-clockwise looking down `axis`.
#[inline]
pub fn signed_angle(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let unsigned = angle(from, to);
    if axis.dot(&from.cross(to)) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Project `v` onto the plane through the origin with unit normal `normal`.
#[inline]
pub fn project_on_plane(v: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    v - normal * v.dot(normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_angle_basics() {
        let x = Vector3::x();
        let y = Vector3::y();
        assert_relative_eq!(angle(&x, &y), FRAC_PI_2);
        assert_relative_eq!(angle(&x, &-x), PI);
        assert_relative_eq!(angle(&x, &(x * 3.0)), 0.0);
    }

    #[test]
    fn test_angle_zero_vector() {
        assert_eq!(angle(&Vector3::zeros(), &Vector3::x()), 0.0);
    }

    #[test]
    fn test_signed_angle_handedness() {
        let x = Vector3::x();
        let y = Vector3::y();
        let z = Vector3::z();
        assert_relative_eq!(signed_angle(&x, &y, &z), FRAC_PI_2);
        assert_relative_eq!(signed_angle(&y, &x, &z), -FRAC_PI_2);
        // Opposite vectors land on the positive boundary.
        assert_relative_eq!(signed_angle(&x, &-x, &z), PI);
    }

    #[test]
    fn test_project_on_plane() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let projected = project_on_plane(&v, &Vector3::z());
        assert_relative_eq!(projected, Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_normalized_or_zero() {
        let v = Vector3::new(0.0, 3.0, 4.0);
        assert_relative_eq!(normalized_or_zero(&v).norm(), 1.0);
        assert_eq!(normalized_or_zero(&Vector3::new(1e-9, 0.0, 0.0)), Vector3::zeros());
    }
}
