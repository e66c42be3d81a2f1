//! Immutable mesh input binding.
//!
//! A [`MeshSnapshot`] is the raw input to the curvature engine: a position
//! buffer plus one or more triangle index lists. Construction validates the
//! buffers eagerly, so every snapshot that exists is structurally sound and
//! the numeric phases never have to re-check indices.

use nalgebra::Point3;

use crate::error::{CurvatureError, Result};

/// A static, immutable triangle mesh snapshot.
///
/// Holds vertex positions and an ordered sequence of submesh index lists.
/// Every index list has a length that is a multiple of 3 and references only
/// valid positions; both properties are enforced at construction.
///
/// # Example
/// ```
/// use gaussmap::mesh::MeshSnapshot;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let snapshot = MeshSnapshot::from_triangles(positions, vec![0, 1, 2]).unwrap();
/// assert_eq!(snapshot.num_indices(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MeshSnapshot {
    positions: Vec<Point3<f64>>,
    submeshes: Vec<Vec<u32>>,
}

impl MeshSnapshot {
    /// Create a snapshot from a position buffer and per-submesh index lists.
    ///
    /// # Errors
    /// Returns [`CurvatureError::UnalignedIndexCount`] if a submesh length is
    /// not a multiple of 3, or [`CurvatureError::IndexOutOfBounds`] if an
    /// index references a missing position.
    pub fn new(positions: Vec<Point3<f64>>, submeshes: Vec<Vec<u32>>) -> Result<Self> {
        for (si, submesh) in submeshes.iter().enumerate() {
            if submesh.len() % 3 != 0 {
                return Err(CurvatureError::UnalignedIndexCount {
                    submesh: si,
                    len: submesh.len(),
                });
            }
            for &index in submesh {
                if index as usize >= positions.len() {
                    return Err(CurvatureError::IndexOutOfBounds {
                        submesh: si,
                        index,
                        num_vertices: positions.len(),
                    });
                }
            }
        }

        Ok(Self {
            positions,
            submeshes,
        })
    }

    /// Create a single-submesh snapshot from one triangle index list.
    pub fn from_triangles(positions: Vec<Point3<f64>>, indices: Vec<u32>) -> Result<Self> {
        Self::new(positions, vec![indices])
    }

    /// The vertex position buffer.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// The submesh index lists, in input order.
    #[inline]
    pub fn submeshes(&self) -> &[Vec<u32>] {
        &self.submeshes
    }

    /// Total number of indices across all submeshes.
    pub fn num_indices(&self) -> usize {
        self.submeshes.iter().map(Vec::len).sum()
    }
}
