//! Topology extraction from raw vertex and index buffers.
//!
//! The builder merges coincident-position vertices into logical vertices,
//! groups the unified index list into faces, and derives the adjacency maps
//! the curvature phases consume. Adjacency uses ordered collections so that
//! downstream floating-point accumulation visits elements in a fixed order
//! and repeated runs produce identical results.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use super::index::{EdgeKey, FaceKey, PositionalIndex};
use super::snapshot::MeshSnapshot;

/// Derived topology of one mesh snapshot.
///
/// Vertex identity is by position: raw indices whose positions are
/// bit-identical collapse onto the first-seen raw index. Faces keep the input
/// winding. The edge adjacency deliberately contains the union of both
/// endpoints' face fans rather than only the faces sharing the edge segment;
/// the edge curvature phase needs that wider neighborhood.
#[derive(Debug, Clone)]
pub struct Topology {
    positional_indices: Vec<PositionalIndex>,
    faces: Vec<FaceKey>,
    vertex_to_faces: BTreeMap<PositionalIndex, Vec<FaceKey>>,
    edge_to_faces: BTreeMap<EdgeKey, BTreeSet<FaceKey>>,
}

impl Topology {
    /// Build the topology of a snapshot.
    ///
    /// Scans every index across all submeshes in order, substituting the
    /// first-seen raw index for each position, then groups the unified list
    /// into consecutive triples.
    pub fn build(snapshot: &MeshSnapshot) -> Self {
        let positions = snapshot.positions();
        let total = snapshot.num_indices();

        let mut index_map: HashMap<[u64; 3], u32> = HashMap::with_capacity(positions.len());
        let mut flat = Vec::with_capacity(total);

        for submesh in snapshot.submeshes() {
            for &raw in submesh {
                let key = position_key(&positions[raw as usize]);
                let canonical = *index_map.entry(key).or_insert(raw);
                flat.push(PositionalIndex::new(canonical));
            }
        }

        debug!(
            indices = flat.len(),
            unique_vertices = index_map.len(),
            merged = flat.len().saturating_sub(index_map.len()),
            "unified positional indices"
        );

        let faces: Vec<FaceKey> = flat
            .chunks_exact(3)
            .map(|t| FaceKey::new(t[0], t[1], t[2]))
            .collect();

        let mut vertex_to_faces: BTreeMap<PositionalIndex, Vec<FaceKey>> = BTreeMap::new();
        for face in &faces {
            for (slot, vertex) in face.vertices().into_iter().enumerate() {
                // A degenerate face repeating a corner still registers once.
                if face.corner_of(vertex) == Some(slot) {
                    vertex_to_faces.entry(vertex).or_default().push(*face);
                }
            }
        }

        let mut edge_to_faces: BTreeMap<EdgeKey, BTreeSet<FaceKey>> = BTreeMap::new();
        for face in &faces {
            for edge in face.edges() {
                let (a, b) = edge.endpoints();
                let fan = edge_to_faces.entry(edge).or_default();
                fan.extend(vertex_to_faces[&a].iter().copied());
                fan.extend(vertex_to_faces[&b].iter().copied());
            }
        }

        debug!(
            faces = faces.len(),
            edges = edge_to_faces.len(),
            "derived adjacency maps"
        );

        Self {
            positional_indices: flat,
            faces,
            vertex_to_faces,
            edge_to_faces,
        }
    }

    /// The unified index list, same length as the input index lists combined.
    #[inline]
    pub fn positional_indices(&self) -> &[PositionalIndex] {
        &self.positional_indices
    }

    /// All faces in input order. Repeated identical triangles repeat here.
    #[inline]
    pub fn faces(&self) -> &[FaceKey] {
        &self.faces
    }

    /// Number of logical vertices after positional merging.
    pub fn num_vertices(&self) -> usize {
        self.vertex_to_faces.len()
    }

    /// Logical vertices in ascending raw-index order.
    pub fn vertices(&self) -> impl Iterator<Item = PositionalIndex> + '_ {
        self.vertex_to_faces.keys().copied()
    }

    /// Faces incident to a vertex, in face order.
    pub fn vertex_faces(&self, vertex: PositionalIndex) -> &[FaceKey] {
        self.vertex_to_faces
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Unique edges with their face fans.
    ///
    /// Each fan is the union of the two endpoints' incident faces.
    pub fn edge_faces(&self) -> impl Iterator<Item = (EdgeKey, &BTreeSet<FaceKey>)> + '_ {
        self.edge_to_faces.iter().map(|(&edge, fan)| (edge, fan))
    }

    /// Number of unique edges.
    pub fn num_edges(&self) -> usize {
        self.edge_to_faces.len()
    }
}

/// Bit-exact hash key for a position.
fn position_key(p: &nalgebra::Point3<f64>) -> [u64; 3] {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}
