//! Error types for gaussmap.
//!
//! Structural problems in the input buffers are rejected eagerly, before any
//! curvature math runs. Numeric degeneracies (zero-length pivots, collapsed
//! polygons) are never errors; they degrade to zero contributions and are
//! reported through [`crate::algo::gauss_area::Degeneracies`].

use thiserror::Error;

/// Result type alias using [`CurvatureError`].
pub type Result<T> = std::result::Result<T, CurvatureError>;

/// Errors that can occur while binding a mesh snapshot.
#[derive(Error, Debug)]
pub enum CurvatureError {
    /// An index references a vertex past the end of the position buffer.
    #[error("submesh {submesh} references vertex {index} but only {num_vertices} positions exist")]
    IndexOutOfBounds {
        /// The submesh the bad index was found in.
        submesh: usize,
        /// The out-of-range index value.
        index: u32,
        /// Number of positions in the snapshot.
        num_vertices: usize,
    },

    /// A submesh index list cannot be grouped into triangles.
    #[error("submesh {submesh} has {len} indices, which is not a multiple of 3")]
    UnalignedIndexCount {
        /// The submesh with the unaligned index list.
        submesh: usize,
        /// Length of that index list.
        len: usize,
    },
}
