//! Discrete angular-defect curvature over a mesh snapshot.
//!
//! The Gauss area of a mesh element is the signed area its local set of face
//! normals spans on the unit sphere. It approximates Gaussian curvature
//! concentrated at that element and is computed here at three granularities:
//! per logical vertex, per unique edge, and per face.
//!
//! The computation runs in strictly ordered phases over one immutable
//! snapshot: topology extraction, then vertex pivots and vertex areas, then
//! edge areas, then face areas. The vertex phase's pivot-normal map is
//! complete before the edge and face phases read it, which is what makes the
//! per-element parallelism safe.
//!
//! # Example
//!
//! ```
//! use gaussmap::prelude::*;
//! use nalgebra::Point3;
//! use std::f64::consts::PI;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let indices = vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3];
//! let snapshot = MeshSnapshot::from_triangles(positions, indices).unwrap();
//!
//! let result = compute_gauss_area(&snapshot);
//! assert_eq!(result.vertex_areas().len(), 4);
//! assert_eq!(result.edge_areas().len(), 6);
//!
//! // A closed genus-0 mesh carries a total face curvature of 4π.
//! let total: f64 = result.face_areas().values().sum();
//! assert!((total - 4.0 * PI).abs() < 1e-6);
//! ```

use std::collections::{BTreeSet, HashMap};

use nalgebra::Vector3;
use rayon::prelude::*;
use tracing::debug;

use crate::geom::{
    edge_side_pivot, normalized_or_zero, sort_around, sort_around_mean, vertex_pivot,
    SpherePolygon,
};
use crate::mesh::{EdgeKey, FaceKey, MeshSnapshot, PositionalIndex, Topology};

/// Elements whose curvature degraded to 0.0 because of degenerate geometry.
///
/// Degenerate elements are not errors; their map entries exist and hold 0.0.
/// The lists here let callers audit how much of a mesh fell through: a zero
/// pivot, an element whose normal polygon collapsed below three unique
/// vertices, or an edge whose frame could not be oriented.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Degeneracies {
    /// Vertices with a zero pivot or a collapsed normal polygon.
    pub vertices: Vec<PositionalIndex>,
    /// Edges with an unorientable frame or a collapsed side-pivot polygon.
    pub edges: Vec<EdgeKey>,
    /// Faces whose corner pivots collapsed below a triangle.
    pub faces: Vec<FaceKey>,
}

impl Degeneracies {
    /// Total number of degenerate elements.
    pub fn total(&self) -> usize {
        self.vertices.len() + self.edges.len() + self.faces.len()
    }

    /// Whether every element produced a proper polygon.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Result of a Gauss-area computation.
///
/// Holds the three curvature maps plus the per-vertex pivot normals for
/// diagnostic consumers. Keys are positional: vertex entries are keyed by
/// the canonical first-seen raw index of each merged position.
#[derive(Debug, Clone)]
pub struct GaussAreaResult {
    vertex: HashMap<PositionalIndex, f64>,
    edge: HashMap<EdgeKey, f64>,
    face: HashMap<FaceKey, f64>,
    pivot_normals: HashMap<PositionalIndex, Vector3<f64>>,
    degeneracies: Degeneracies,
}

impl GaussAreaResult {
    /// Gauss area of a logical vertex.
    #[inline]
    pub fn vertex_area(&self, vertex: PositionalIndex) -> Option<f64> {
        self.vertex.get(&vertex).copied()
    }

    /// Gauss area of an edge.
    #[inline]
    pub fn edge_area(&self, edge: EdgeKey) -> Option<f64> {
        self.edge.get(&edge).copied()
    }

    /// Gauss area of a face.
    #[inline]
    pub fn face_area(&self, face: FaceKey) -> Option<f64> {
        self.face.get(&face).copied()
    }

    /// Pivot normal of a logical vertex. Zero for degenerate vertices.
    #[inline]
    pub fn pivot_normal(&self, vertex: PositionalIndex) -> Option<Vector3<f64>> {
        self.pivot_normals.get(&vertex).copied()
    }

    /// The full vertex curvature map.
    #[inline]
    pub fn vertex_areas(&self) -> &HashMap<PositionalIndex, f64> {
        &self.vertex
    }

    /// The full edge curvature map.
    #[inline]
    pub fn edge_areas(&self) -> &HashMap<EdgeKey, f64> {
        &self.edge
    }

    /// The full face curvature map.
    #[inline]
    pub fn face_areas(&self) -> &HashMap<FaceKey, f64> {
        &self.face
    }

    /// The full pivot-normal map.
    #[inline]
    pub fn pivot_normals(&self) -> &HashMap<PositionalIndex, Vector3<f64>> {
        &self.pivot_normals
    }

    /// Elements that degraded to 0.0.
    #[inline]
    pub fn degeneracies(&self) -> &Degeneracies {
        &self.degeneracies
    }
}

/// Compute Gauss-area curvature maps for a snapshot.
///
/// Elements are scored in parallel within each phase. Use
/// [`compute_gauss_area_sequential`] for single-threaded execution; both
/// produce identical maps.
pub fn compute_gauss_area(snapshot: &MeshSnapshot) -> GaussAreaResult {
    compute_impl(snapshot, true)
}

/// Compute Gauss-area curvature maps single-threaded.
pub fn compute_gauss_area_sequential(snapshot: &MeshSnapshot) -> GaussAreaResult {
    compute_impl(snapshot, false)
}

fn compute_impl(snapshot: &MeshSnapshot, parallel: bool) -> GaussAreaResult {
    let topology = Topology::build(snapshot);
    let positions = snapshot.positions();
    let mut degeneracies = Degeneracies::default();

    // Vertex phase: pivots and vertex areas.
    let vertices: Vec<PositionalIndex> = topology.vertices().collect();
    let score_vertex = |&vertex: &PositionalIndex| -> (PositionalIndex, Vector3<f64>, f64, bool) {
        let fan = vertex_pivot(vertex, topology.vertex_faces(vertex), positions);
        if fan.pivot == Vector3::zeros() {
            return (vertex, fan.pivot, 0.0, true);
        }
        let polygon = SpherePolygon::new(sort_around(&fan.pivot, &fan.normals));
        (vertex, fan.pivot, polygon.area(), polygon.is_degenerate())
    };
    let vertex_scores: Vec<_> = if parallel {
        vertices.par_iter().map(score_vertex).collect()
    } else {
        vertices.iter().map(score_vertex).collect()
    };

    let mut vertex_map = HashMap::with_capacity(vertex_scores.len());
    let mut pivot_normals = HashMap::with_capacity(vertex_scores.len());
    for (vertex, pivot, area, degenerate) in vertex_scores {
        vertex_map.insert(vertex, area);
        pivot_normals.insert(vertex, pivot);
        if degenerate {
            degeneracies.vertices.push(vertex);
        }
    }
    debug!(vertices = vertex_map.len(), "vertex gauss areas computed");

    // Edge phase. The pivot map is complete and read-only from here on.
    let edges: Vec<(EdgeKey, &BTreeSet<FaceKey>)> = topology.edge_faces().collect();
    let score_edge = |&(edge, fan): &(EdgeKey, &BTreeSet<FaceKey>)| -> (EdgeKey, f64, bool) {
        let (i1, i2) = edge.endpoints();
        let v1 = positions[i1.index()];
        let v2 = positions[i2.index()];
        let dv = normalized_or_zero(&(v2 - v1));
        let ne = normalized_or_zero(&(pivot_normals[&i1] + pivot_normals[&i2]));

        // The frame cannot be oriented when the edge collapses or the
        // endpoint pivots cancel; the edge scores 0.
        let side = normalized_or_zero(&ne.cross(&dv));
        if side == Vector3::zeros() {
            return (edge, 0.0, true);
        }

        let corners = [
            edge_side_pivot(i1, fan, &side, positions),
            edge_side_pivot(i2, fan, &side, positions),
            edge_side_pivot(i1, fan, &-side, positions),
            edge_side_pivot(i2, fan, &-side, positions),
        ];
        let polygon = SpherePolygon::new(sort_around_mean(&corners));
        (edge, polygon.area(), polygon.is_degenerate())
    };
    let edge_scores: Vec<_> = if parallel {
        edges.par_iter().map(score_edge).collect()
    } else {
        edges.iter().map(score_edge).collect()
    };

    let mut edge_map = HashMap::with_capacity(edge_scores.len());
    for (edge, area, degenerate) in edge_scores {
        edge_map.insert(edge, area);
        if degenerate {
            degeneracies.edges.push(edge);
        }
    }
    debug!(edges = edge_map.len(), "edge gauss areas computed");

    // Face phase: the polygon of the three corner pivots.
    let faces = topology.faces();
    let score_face = |&face: &FaceKey| -> (FaceKey, f64, bool) {
        let corners = [
            pivot_normals[&face[0]],
            pivot_normals[&face[1]],
            pivot_normals[&face[2]],
        ];
        let polygon = SpherePolygon::new(sort_around_mean(&corners));
        (face, polygon.area(), polygon.is_degenerate())
    };
    let face_scores: Vec<_> = if parallel {
        faces.par_iter().map(score_face).collect()
    } else {
        faces.iter().map(score_face).collect()
    };

    let mut face_map = HashMap::with_capacity(face_scores.len());
    for (face, area, degenerate) in face_scores {
        // Repeated identical triangles share one map entry.
        if face_map.insert(face, area).is_none() && degenerate {
            degeneracies.faces.push(face);
        }
    }
    debug!(
        faces = face_map.len(),
        degenerate = degeneracies.total(),
        "face gauss areas computed"
    );

    GaussAreaResult {
        vertex: vertex_map,
        edge: edge_map,
        face: face_map,
        pivot_normals,
        degeneracies,
    }
}
