//! Mesh input binding and topology.
//!
//! This module holds the input side of the engine: the immutable
//! [`MeshSnapshot`] consumed from the caller, the positional identity types,
//! and the [`Topology`] derived from one snapshot.
//!
//! # Identity
//!
//! Mesh elements are identified positionally:
//! - [`PositionalIndex`] - a logical vertex after coincident positions merge
//! - [`FaceKey`] - an ordered corner triple, winding preserved
//! - [`EdgeKey`] - an unordered endpoint pair with symmetric equality
//!
//! # Construction
//!
//! ```
//! use gaussmap::mesh::{MeshSnapshot, Topology};
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let snapshot = MeshSnapshot::from_triangles(positions, vec![0, 1, 2]).unwrap();
//! let topology = Topology::build(&snapshot);
//! assert_eq!(topology.faces().len(), 1);
//! ```

mod index;
mod snapshot;
mod topology;

pub use index::{EdgeKey, FaceKey, PositionalIndex};
pub use snapshot::MeshSnapshot;
pub use topology::Topology;
