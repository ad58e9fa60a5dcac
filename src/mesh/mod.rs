//! Core mesh data structures.
//!
//! This module provides the half-edge connectivity structure and the
//! functions that build it from an indexed triangle list.
//!
//! # Overview
//!
//! The primary type is [`TriMesh`], which stores the connectivity of a
//! triangle mesh as half-edges in a flat array. Positions and other vertex
//! attributes stay with the caller; the mesh only knows indices.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe handles:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`FaceId`] - Identifies a triangle
//! - [`EdgeId`] - Identifies an undirected edge
//!
//! Handles are generic over the underlying integer type ([`MeshIndex`] trait),
//! so small meshes can use `u16` and very large ones `u64`.
//!
//! # Construction
//!
//! ```
//! use trimesh::mesh::{derive_edges, TriMesh};
//!
//! let triangles = [[0, 1, 2], [2, 1, 3]];
//! let edges = derive_edges(&triangles);
//!
//! let mut mesh: TriMesh = TriMesh::new();
//! mesh.build(4, &triangles, &edges).unwrap();
//! assert_eq!(mesh.num_edges(), 5);
//! ```

mod builder;
mod edges;
mod halfedge;
mod index;

pub use builder::{build_from_triangles, build_from_triangles_with_options, BuildOptions};
pub use edges::{derive_edges, Edge};
pub use halfedge::{HalfEdge, TriMesh, VertexHalfEdgeIter};
pub use index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
