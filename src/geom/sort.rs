//! Circular ordering of normal vectors around a pivot.
//!
//! The sorter projects every normal onto the pivot's tangent plane and keys
//! it by the signed angle of the projection around the pivot, measured from
//! the first input's projection. Sorting ascending yields a counter-clockwise
//! traversal around the pivot.
//!
//! This ordering is only correct when all inputs lie in one hemisphere
//! around the pivot; callers are responsible for that. Inputs violating the
//! precondition produce an unspecified but non-crashing order.

use nalgebra::Vector3;

use super::{normalized_or_zero, project_on_plane, signed_angle};

/// Circularly sort `normals` around `pivot`.
///
/// Returns the same vectors re-ordered; magnitudes are never changed. Exact
/// angle collisions keep every entry, ordered by original input position.
pub fn sort_around(pivot: &Vector3<f64>, normals: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
    if normals.len() < 2 {
        return normals.to_vec();
    }

    let projected: Vec<Vector3<f64>> = normals
        .iter()
        .map(|n| project_on_plane(n, pivot))
        .collect();
    let origin = projected[0];

    let mut keyed: Vec<(f64, usize)> = projected
        .iter()
        .enumerate()
        .map(|(i, p)| (signed_angle(&origin, p, pivot), i))
        .collect();
    keyed.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    keyed.into_iter().map(|(_, i)| normals[i]).collect()
}

/// Circularly sort `normals` around their normalized unweighted mean.
pub fn sort_around_mean(normals: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
    let mean = normalized_or_zero(&normals.iter().sum::<Vector3<f64>>());
    sort_around(&mean, normals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyclic_eq(a: &[Vector3<f64>], b: &[Vector3<f64>]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let n = a.len();
        (0..n).any(|shift| (0..n).all(|i| a[(i + shift) % n] == b[i]))
    }

    #[test]
    fn test_sort_restores_cyclic_order() {
        let sorted = sort_around_mean(&[Vector3::x(), Vector3::z(), Vector3::y()]);
        assert!(
            cyclic_eq(&sorted, &[Vector3::x(), Vector3::y(), Vector3::z()]),
            "expected x -> y -> z cyclic order, got {:?}",
            sorted
        );
    }

    #[test]
    fn test_sort_preserves_vectors() {
        let input = vec![
            Vector3::new(0.0, 0.8, 0.6),
            Vector3::new(0.6, 0.8, 0.0),
            Vector3::new(0.0, 0.8, -0.6),
            Vector3::new(-0.6, 0.8, 0.0),
        ];
        let mut sorted = sort_around(&Vector3::y(), &input);
        assert_eq!(sorted.len(), input.len());

        // Same multiset of vectors, untouched magnitudes.
        let mut expected = input.clone();
        let key = |v: &Vector3<f64>| (v.x.to_bits(), v.y.to_bits(), v.z.to_bits());
        sorted.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_sort_is_counter_clockwise() {
        let input = vec![
            Vector3::new(0.6, 0.8, 0.0),
            Vector3::new(-0.6, 0.8, 0.0),
            Vector3::new(0.0, 0.8, -0.6),
        ];
        let sorted = sort_around(&Vector3::y(), &input);
        // Around +y the x -> -z -> -x order is counter-clockwise.
        assert!(cyclic_eq(
            &sorted,
            &[
                Vector3::new(0.6, 0.8, 0.0),
                Vector3::new(0.0, 0.8, -0.6),
                Vector3::new(-0.6, 0.8, 0.0),
            ]
        ));
    }

    #[test]
    fn test_angle_ties_keep_all_entries() {
        // Two identical normals collide on the exact same angle; both stay,
        // in input order.
        let dup = Vector3::new(0.6, 0.8, 0.0);
        let sorted = sort_around(&Vector3::y(), &[dup, dup, Vector3::new(0.0, 0.8, 0.6)]);
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted.iter().filter(|&&v| v == dup).count(), 2);
    }

    #[test]
    fn test_single_normal_passthrough() {
        let v = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(sort_around(&Vector3::y(), &[v]), vec![v]);
        assert!(sort_around(&Vector3::y(), &[]).is_empty());
    }

    #[test]
    fn test_zero_pivot_does_not_panic() {
        let sorted = sort_around_mean(&[Vector3::x(), -Vector3::x()]);
        assert_eq!(sorted.len(), 2);
    }
}
