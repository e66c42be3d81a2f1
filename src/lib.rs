//! # Gaussmap
//!
//! Discrete angular-defect ("Gauss area") curvature maps for triangulated
//! surface meshes.
//!
//! Gaussmap consumes a static mesh snapshot (vertex positions plus triangle
//! index lists) and produces, per logical vertex, per unique edge and per
//! face, the signed area that the element's local set of face normals spans
//! on the unit sphere. That spherical area approximates the Gaussian
//! curvature concentrated at the element.
//!
//! ## Features
//!
//! - **Positional topology**: raw indices sharing a position merge into one
//!   logical vertex; edges compare symmetrically, faces keep input winding
//! - **Pivot normals**: angle-weighted mean normals anchor every per-element
//!   normal fan and are exposed for diagnostic consumers
//! - **Spherical excess areas**: signed, so convex and concave curvature are
//!   distinguished
//! - **Degeneracy absorption**: zero-area pivots and collapsed polygons score
//!   0.0 and are reported instead of failing the batch
//! - **Parallel by default**: per-element scoring fans out with rayon and
//!   stays deterministic
//!
//! ## Quick Start
//!
//! ```
//! use gaussmap::prelude::*;
//! use nalgebra::Point3;
//!
//! // A tetrahedron: positions plus one triangle index list.
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
//! assert_eq!(result.face_areas().len(), 4);
//! ```
//!
//! ## Limits
//!
//! The circular ordering underlying every polygon assumes an element's
//! normals lie within one hemisphere of its pivot; meshes violating that
//! (extreme folds) produce unspecified but finite areas. Curvature maps are
//! derived once per snapshot; editing a mesh means recomputing.

pub mod algo;
pub mod error;
pub mod geom;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// ```
/// use gaussmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::gauss_area::{
        compute_gauss_area, compute_gauss_area_sequential, Degeneracies, GaussAreaResult,
    };
    pub use crate::error::{CurvatureError, Result};
    pub use crate::mesh::{EdgeKey, FaceKey, MeshSnapshot, PositionalIndex, Topology};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
