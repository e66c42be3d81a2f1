//! Pivot normal construction.
//!
//! A pivot normal is the angle-weighted mean of the face normals around a
//! vertex, normalized. It anchors the circular sort of the vertex's normal
//! fan and, summed across an edge, defines the half-planes that split an
//! edge's neighborhood into its two sides.

use nalgebra::{Point3, Vector3};

use crate::mesh::{FaceKey, PositionalIndex};

use super::{angle, normalized_or_zero};

/// A vertex pivot together with the unit normals of its incident faces.
///
/// `normals` are in incident-face order, one per face that actually contains
/// the vertex. A zero `pivot` marks a degenerate vertex (no incident faces or
/// a vanishing weighted sum); callers score such vertices as 0 curvature.
#[derive(Debug, Clone)]
pub struct PivotFan {
    /// The normalized angle-weighted mean normal, or zero if degenerate.
    pub pivot: Vector3<f64>,
    /// Unit normals of the incident faces.
    pub normals: Vec<Vector3<f64>>,
}

/// Compute the pivot normal and normal fan of a vertex.
///
/// For each incident face the corner matching `vertex` contributes the face
/// normal weighted by the interior angle at that corner. The weights make
/// the pivot independent of how the neighborhood happens to be triangulated.
pub fn vertex_pivot(
    vertex: PositionalIndex,
    faces: &[FaceKey],
    positions: &[Point3<f64>],
) -> PivotFan {
    let mut weighted = Vec::with_capacity(faces.len());
    let mut normals = Vec::with_capacity(faces.len());

    for face in faces {
        let Some(corner) = face.corner_of(vertex) else {
            continue;
        };
        let (e1, e2) = corner_edges(face, corner, positions);
        let normal = normalized_or_zero(&e1.cross(&e2));
        weighted.push(normal * angle(&e1, &e2));
        normals.push(normal);
    }

    let pivot = normalized_or_zero(&weighted.iter().sum::<Vector3<f64>>());
    PivotFan { pivot, normals }
}

/// Compute the pivot normal of a vertex restricted to one side of an edge.
///
/// `side_normal` is the unit normal of the half-space boundary through the
/// vertex. Faces entirely on the wrong side contribute nothing. A face with
/// exactly one corner edge on the wrong side has that edge replaced by the
/// intersection direction of its own plane with the boundary plane, which
/// clips the face's angular wedge to the boundary before the normal and
/// angle are taken.
pub fn edge_side_pivot<'a>(
    endpoint: PositionalIndex,
    faces: impl IntoIterator<Item = &'a FaceKey>,
    side_normal: &Vector3<f64>,
    positions: &[Point3<f64>],
) -> Vector3<f64> {
    let mut pivot = Vector3::zeros();

    for face in faces {
        let Some(corner) = face.corner_of(endpoint) else {
            continue;
        };
        let (mut e1, mut e2) = corner_edges(face, corner, positions);

        let s1 = e1.dot(side_normal);
        let s2 = e2.dot(side_normal);
        if s1 < 0.0 && s2 < 0.0 {
            continue;
        }
        if s1 < 0.0 {
            if let Some(dir) = boundary_clip(side_normal, &e1.cross(&e2)) {
                e1 = dir;
            }
        } else if s2 < 0.0 {
            if let Some(dir) = boundary_clip(side_normal, &e2.cross(&e1)) {
                e2 = dir;
            }
        }

        let normal = normalized_or_zero(&e1.cross(&e2));
        pivot += normal * angle(&e1, &e2);
    }

    normalized_or_zero(&pivot)
}

/// The two edge vectors leaving `face[corner]`, following the face winding.
fn corner_edges(
    face: &FaceKey,
    corner: usize,
    positions: &[Point3<f64>],
) -> (Vector3<f64>, Vector3<f64>) {
    let a = positions[face[corner].index()];
    let b = positions[face[(corner + 1) % 3].index()];
    let c = positions[face[(corner + 2) % 3].index()];
    (b - a, c - a)
}

/// Direction of the intersection line between the side boundary plane and a
/// face plane, both through the corner. `None` when the planes are parallel,
/// in which case the caller keeps the unclipped edge.
fn boundary_clip(side_normal: &Vector3<f64>, face_normal: &Vector3<f64>) -> Option<Vector3<f64>> {
    let face_normal = normalized_or_zero(face_normal);
    let dir = normalized_or_zero(&side_normal.cross(&face_normal));
    if dir == Vector3::zeros() {
        None
    } else {
        Some(dir)
    }
}
