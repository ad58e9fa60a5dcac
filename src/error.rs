//! Error types for trimesh.
//!
//! Malformed input is reported through [`MeshError`] instead of being
//! turned into corrupted connectivity. A failed build leaves the mesh empty.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building or querying a mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Triangles were given without edges, or edges without triangles.
    #[error("empty input: {triangles} triangles but {edges} edges")]
    EmptyInput {
        /// Number of triangles supplied.
        triangles: usize,
        /// Number of edges supplied.
        edges: usize,
    },

    /// A triangle references a vertex outside `[0, num_vertices)`.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// An edge references a vertex outside `[0, num_vertices)`.
    #[error("edge {edge} references invalid vertex index {vertex}")]
    EdgeVertexOutOfRange {
        /// The edge index.
        edge: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A triangle repeats a vertex.
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An edge is not stored as `(min, max)` or joins a vertex to itself.
    #[error("edge {edge} is not in canonical (start < end) form")]
    NonCanonicalEdge {
        /// The edge index.
        edge: usize,
    },

    /// The same undirected edge appears twice in the edge list.
    #[error("edge ({v0}, {v1}) appears more than once in the edge list")]
    DuplicateEdge {
        /// Smaller vertex of the edge.
        v0: usize,
        /// Larger vertex of the edge.
        v1: usize,
    },

    /// A triangle side is absent from the edge list.
    #[error("face {face} side ({v0}, {v1}) is missing from the edge list")]
    MissingEdge {
        /// The face index.
        face: usize,
        /// Tail of the directed side.
        v0: usize,
        /// Head of the directed side.
        v1: usize,
    },

    /// An edge in the edge list is not a side of any triangle.
    #[error("edge {edge} ({v0}, {v1}) is not a side of any face")]
    UnusedEdge {
        /// The edge index.
        edge: usize,
        /// Smaller vertex of the edge.
        v0: usize,
        /// Larger vertex of the edge.
        v1: usize,
    },

    /// Two faces claim the same directed side: inconsistent winding, or an
    /// edge shared by more than two faces.
    #[error("directed edge ({v0}, {v1}) is used by more than one face")]
    NonManifoldEdge {
        /// Tail of the directed edge.
        v0: usize,
        /// Head of the directed edge.
        v1: usize,
    },

    /// A vertex has more than one outgoing boundary half-edge.
    #[error("vertex {vertex} lies on more than one boundary fan")]
    NonManifoldVertex {
        /// The vertex index.
        vertex: usize,
    },

    /// A boundary half-edge found no successor on its boundary loop.
    #[error("boundary half-edge {halfedge} has no successor")]
    UnlinkedBoundary {
        /// The half-edge index.
        halfedge: usize,
    },

    /// The element count does not fit the chosen index type.
    #[error("{count} elements exceed the capacity of the index type")]
    IndexOverflow {
        /// The offending element count.
        count: usize,
    },

    /// A query named a vertex outside the mesh.
    #[error("vertex {vertex} out of range (mesh has {num_vertices} vertices)")]
    VertexOutOfRange {
        /// The requested vertex.
        vertex: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },

    /// A query named a vertex that no triangle references.
    #[error("vertex {vertex} is isolated (no incident half-edge)")]
    IsolatedVertex {
        /// The vertex index.
        vertex: usize,
    },

    /// Connectivity does not satisfy a half-edge invariant.
    #[error("invalid mesh state: {0}")]
    InvalidState(String),
}
