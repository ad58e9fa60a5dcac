//! # trimesh
//!
//! Half-edge connectivity for indexed triangle meshes.
//!
//! trimesh takes a triangle list (triples of vertex indices) and builds a
//! half-edge structure answering topological queries in constant time per
//! step: one-ring neighbors, incident faces and edges, and boundary
//! detection. It stores no positions or other attributes; those stay with
//! the caller, addressed by the same vertex indices.
//!
//! ## Features
//!
//! - **Edge derivation**: canonical, deduplicated edge lists from triangles
//! - **Half-edge structure**: arena storage with type-safe indices
//! - **Boundary stitching**: boundary half-edges linked into closed loops
//! - **Flexible indexing**: 16-bit, 32-bit and 64-bit index types
//! - **Checked input**: malformed meshes are rejected with a [`MeshError`]
//!
//! ## Quick Start
//!
//! ```
//! use trimesh::prelude::*;
//!
//! //       1
//! //      /|\
//! //     0 | 3
//! //      \|/
//! //       2
//! let triangles = [[0, 1, 2], [2, 1, 3]];
//! let edges = derive_edges(&triangles);
//! assert_eq!(edges.len(), 5);
//!
//! let mut mesh: TriMesh = TriMesh::new();
//! mesh.build(4, &triangles, &edges).unwrap();
//!
//! for v in mesh.vertex_ids() {
//!     let ring = mesh.vv_neighbors(v).unwrap();
//!     println!("{:?}: {:?}", v, ring);
//! }
//! ```
//!
//! ## Mesh Traversal
//!
//! ```
//! use trimesh::prelude::*;
//!
//! let mesh: TriMesh = build_from_triangles(4, &[[0, 1, 2], [2, 1, 3]]).unwrap();
//! let v = VertexId::new(1);
//!
//! // Faces around a vertex
//! for face in mesh.vertex_faces(v) {
//!     println!("Adjacent face: {:?}", face);
//! }
//!
//! // Walk a boundary loop
//! for boundary in mesh.boundary_loops() {
//!     let ring: Vec<_> = boundary.iter().map(|&he| mesh.head(he)).collect();
//!     println!("Boundary: {:?}", ring);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mesh;
pub mod shapes;

pub use error::MeshError;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use trimesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        build_from_triangles, derive_edges, BuildOptions, Edge, EdgeId, FaceId, HalfEdge,
        HalfEdgeId, MeshIndex, TriMesh, VertexId,
    };
}
