//! Half-edge connectivity for triangle meshes.
//!
//! Every undirected edge is split into two **half-edges** pointing in
//! opposite directions. A half-edge stores the vertex it points to, the face
//! on its left (none on the mesh boundary), its edge, its opposite and the
//! next half-edge around the same face or the same boundary loop.
//!
//! All references are indices into arrays owned by [`TriMesh`]; there are no
//! pointers between elements.
//!
//! # Boundary Handling
//!
//! Boundary half-edges have no face. Their `next` pointers chain them into
//! closed loops around each hole, and every boundary vertex stores one of
//! its outgoing boundary half-edges. This is what lets the rotation
//! `next(opposite(h))` around a boundary vertex visit every neighbor once and
//! stop, instead of falling off the edge of the mesh.

use std::collections::HashMap;

use rayon::prelude::*;

use super::index::{EdgeId, FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// A half-edge in the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge<I: MeshIndex = u32> {
    /// The vertex this half-edge points to (its head).
    pub vertex: VertexId<I>,

    /// The face on the left of this half-edge.
    /// `None` for boundary half-edges.
    pub face: Option<FaceId<I>>,

    /// The undirected edge this half-edge is one side of.
    pub edge: EdgeId<I>,

    /// The half-edge running the same edge in the reverse direction.
    pub opposite: HalfEdgeId<I>,

    /// The next half-edge around the face, or along the boundary loop.
    pub next: HalfEdgeId<I>,
}

impl<I: MeshIndex> HalfEdge<I> {
    /// Check if this half-edge is on the boundary.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.face.is_none()
    }
}

/// Half-edge connectivity of an indexed triangle mesh.
///
/// Built once from a triangle list and its edge list (see
/// [`TriMesh::build`]) and immutable afterwards. All queries take `&self`,
/// so a built mesh can be shared between threads.
#[derive(Debug, Clone)]
pub struct TriMesh<I: MeshIndex = u32> {
    /// All half-edges; edge `e` owns `2e` and `2e + 1`.
    pub(crate) halfedges: Vec<HalfEdge<I>>,

    /// One outgoing half-edge per vertex, boundary-outgoing when the vertex
    /// is on the boundary. `None` for isolated vertices.
    pub(crate) vertex_halfedges: Vec<Option<HalfEdgeId<I>>>,

    /// One half-edge per face.
    pub(crate) face_halfedges: Vec<HalfEdgeId<I>>,

    /// One half-edge per edge.
    pub(crate) edge_halfedges: Vec<HalfEdgeId<I>>,

    /// Directed vertex pair (tail, head) to half-edge.
    pub(crate) directed: HashMap<(usize, usize), HalfEdgeId<I>>,
}

impl<I: MeshIndex> Default for TriMesh<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> TriMesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            halfedges: Vec::new(),
            vertex_halfedges: Vec::new(),
            face_halfedges: Vec::new(),
            edge_halfedges: Vec::new(),
            directed: HashMap::new(),
        }
    }

    /// Drop all connectivity, returning to the empty state.
    pub fn clear(&mut self) {
        self.halfedges.clear();
        self.vertex_halfedges.clear();
        self.face_halfedges.clear();
        self.edge_halfedges.clear();
        self.directed.clear();
    }

    // ==================== Accessors ====================

    /// Check whether nothing has been built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_halfedges.is_empty() && self.halfedges.is_empty()
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertex_halfedges.len()
    }

    /// Get the number of half-edges.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.face_halfedges.len()
    }

    /// Get the number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_halfedges.len()
    }

    /// Get a half-edge by ID.
    ///
    /// # Panics
    /// If `id` is not a half-edge of this mesh. The same holds for every
    /// accessor taking a [`HalfEdgeId`], [`FaceId`] or [`EdgeId`].
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId<I>) -> &HalfEdge<I> {
        &self.halfedges[id.index()]
    }

    /// Representative outgoing half-edge of a vertex; `None` for isolated
    /// vertices and vertices not in the mesh.
    #[inline]
    pub fn vertex_halfedge(&self, v: VertexId<I>) -> Option<HalfEdgeId<I>> {
        self.vertex_halfedges.get(v.index()).copied().flatten()
    }

    /// Representative half-edge of a face.
    #[inline]
    pub fn face_halfedge(&self, f: FaceId<I>) -> HalfEdgeId<I> {
        self.face_halfedges[f.index()]
    }

    /// Representative half-edge of an edge, pointing from its smaller
    /// vertex to its larger one.
    #[inline]
    pub fn edge_halfedge(&self, e: EdgeId<I>) -> HalfEdgeId<I> {
        self.edge_halfedges[e.index()]
    }

    // ==================== Topology Queries ====================

    /// Get the opposite half-edge.
    #[inline]
    pub fn opposite(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).opposite
    }

    /// Get the next half-edge around the face or boundary loop.
    #[inline]
    pub fn next(&self, he: HalfEdgeId<I>) -> HalfEdgeId<I> {
        self.halfedge(he).next
    }

    /// Get the vertex a half-edge points to.
    #[inline]
    pub fn head(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.halfedge(he).vertex
    }

    /// Get the vertex a half-edge starts from.
    #[inline]
    pub fn tail(&self, he: HalfEdgeId<I>) -> VertexId<I> {
        self.head(self.opposite(he))
    }

    /// Get the face of a half-edge.
    #[inline]
    pub fn face_of(&self, he: HalfEdgeId<I>) -> Option<FaceId<I>> {
        self.halfedge(he).face
    }

    /// Get the edge of a half-edge.
    #[inline]
    pub fn edge_of(&self, he: HalfEdgeId<I>) -> EdgeId<I> {
        self.halfedge(he).edge
    }

    /// The `(tail, head)` vertex pair of a half-edge.
    #[inline]
    pub fn directed_edge(&self, he: HalfEdgeId<I>) -> (VertexId<I>, VertexId<I>) {
        (self.tail(he), self.head(he))
    }

    /// The half-edge running from `from` to `to`, if the two are joined by
    /// an edge.
    pub fn halfedge_between(&self, from: VertexId<I>, to: VertexId<I>) -> Option<HalfEdgeId<I>> {
        self.directed.get(&(from.index(), to.index())).copied()
    }

    /// Endpoints of an edge in the order they were given to the builder;
    /// smaller vertex first for a canonical edge list.
    pub fn edge_vertices(&self, e: EdgeId<I>) -> (VertexId<I>, VertexId<I>) {
        self.directed_edge(self.edge_halfedge(e))
    }

    /// Check if a half-edge is on the boundary.
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeId<I>) -> bool {
        self.halfedge(he).is_boundary()
    }

    /// Check if an edge has a boundary half-edge on either side.
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeId<I>) -> bool {
        let he = self.edge_halfedge(e);
        self.is_boundary_halfedge(he) || self.is_boundary_halfedge(self.opposite(he))
    }

    /// Check if a vertex is on the boundary.
    ///
    /// Boundary vertices always store a boundary-outgoing half-edge, so this
    /// is a single lookup. Isolated vertices are not boundary vertices.
    #[inline]
    pub fn is_boundary_vertex(&self, v: VertexId<I>) -> bool {
        self.vertex_halfedge(v)
            .is_some_and(|he| self.is_boundary_halfedge(he))
    }

    /// Check that the mesh has faces and no boundary.
    pub fn is_closed(&self) -> bool {
        self.num_faces() > 0 && self.halfedges.iter().all(|he| !he.is_boundary())
    }

    /// `V - E + F` over all vertices, including isolated ones.
    pub fn euler_characteristic(&self) -> i64 {
        self.num_vertices() as i64 - self.num_edges() as i64 + self.num_faces() as i64
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.num_vertices()).map(VertexId::new)
    }

    /// Iterate over all half-edge IDs.
    pub fn halfedge_ids(&self) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        (0..self.num_halfedges()).map(HalfEdgeId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.num_faces()).map(FaceId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        (0..self.num_edges()).map(EdgeId::new)
    }

    /// Iterate over all half-edges with their IDs.
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfEdgeId<I>, &HalfEdge<I>)> + '_ {
        self.halfedges
            .iter()
            .enumerate()
            .map(|(i, he)| (HalfEdgeId::new(i), he))
    }

    /// Iterate over outgoing half-edges of a vertex in rotational order,
    /// starting from its representative.
    pub fn vertex_halfedges(&self, v: VertexId<I>) -> VertexHalfEdgeIter<'_, I> {
        VertexHalfEdgeIter::new(self, v)
    }

    /// Iterate over incoming half-edges of a vertex, in the same rotational
    /// order as [`TriMesh::vertex_halfedges`].
    pub fn vertex_incoming_halfedges(&self, v: VertexId<I>) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        self.vertex_halfedges(v).map(|he| self.opposite(he))
    }

    /// Iterate over vertices adjacent to a vertex.
    pub fn vertex_neighbors(&self, v: VertexId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.vertex_halfedges(v).map(|he| self.head(he))
    }

    /// Iterate over faces incident to a vertex.
    pub fn vertex_faces(&self, v: VertexId<I>) -> impl Iterator<Item = FaceId<I>> + '_ {
        self.vertex_halfedges(v).filter_map(|he| self.face_of(he))
    }

    /// Iterate over edges incident to a vertex.
    pub fn vertex_edges(&self, v: VertexId<I>) -> impl Iterator<Item = EdgeId<I>> + '_ {
        self.vertex_halfedges(v).map(|he| self.edge_of(he))
    }

    /// Number of edges incident to a vertex.
    pub fn valence(&self, v: VertexId<I>) -> usize {
        self.vertex_halfedges(v).count()
    }

    /// Iterate over the three half-edges of a face; empty for a face not in
    /// the mesh.
    pub fn face_halfedges(&self, f: FaceId<I>) -> impl Iterator<Item = HalfEdgeId<I>> + '_ {
        let he0 = self.face_halfedges.get(f.index()).copied();
        std::iter::successors(he0, move |&he| Some(self.next(he))).take(3)
    }

    /// Iterate over the vertices of a face, in winding order.
    pub fn face_vertices(&self, f: FaceId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.face_halfedges(f).map(|he| self.tail(he))
    }

    /// Get the three vertices of a face in winding order, starting from the
    /// tail of its representative half-edge.
    pub fn face_triangle(&self, f: FaceId<I>) -> [VertexId<I>; 3] {
        let he0 = self.face_halfedge(f);
        let he1 = self.next(he0);
        let he2 = self.next(he1);
        [self.tail(he0), self.tail(he1), self.tail(he2)]
    }

    // ==================== One-ring Queries ====================

    /// One-ring neighbors of a vertex in rotational order.
    ///
    /// # Errors
    /// [`MeshError::VertexOutOfRange`] if the vertex is not in the mesh and
    /// [`MeshError::IsolatedVertex`] if no triangle references it.
    ///
    /// # Example
    /// ```
    /// use trimesh::prelude::*;
    ///
    /// let mesh: TriMesh = build_from_triangles(4, &[[0, 1, 2], [2, 1, 3]]).unwrap();
    /// let mut ring: Vec<usize> = mesh
    ///     .vv_neighbors(VertexId::new(1))
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|v| v.index())
    ///     .collect();
    /// ring.sort();
    /// assert_eq!(ring, vec![0, 2, 3]);
    /// ```
    pub fn vv_neighbors(&self, v: VertexId<I>) -> Result<Vec<VertexId<I>>> {
        let mut neighbors = Vec::new();
        self.vv_neighbors_into(v, &mut neighbors)?;
        Ok(neighbors)
    }

    /// Like [`TriMesh::vv_neighbors`], writing into a caller-supplied buffer.
    ///
    /// The buffer is cleared first.
    pub fn vv_neighbors_into(&self, v: VertexId<I>, neighbors: &mut Vec<VertexId<I>>) -> Result<()> {
        neighbors.clear();
        self.checked_vertex(v)?;
        neighbors.extend(self.vertex_neighbors(v));
        Ok(())
    }

    /// Faces around a vertex in rotational order.
    ///
    /// # Errors
    /// Same as [`TriMesh::vv_neighbors`].
    pub fn vf_neighbors(&self, v: VertexId<I>) -> Result<Vec<FaceId<I>>> {
        self.checked_vertex(v)?;
        Ok(self.vertex_faces(v).collect())
    }

    /// One-ring of every vertex; isolated vertices get an empty ring.
    ///
    /// With `parallel` the rings are computed on the rayon thread pool.
    pub fn one_rings(&self, parallel: bool) -> Vec<Vec<VertexId<I>>> {
        if parallel {
            (0..self.num_vertices())
                .into_par_iter()
                .map(|i| self.vertex_neighbors(VertexId::new(i)).collect())
                .collect()
        } else {
            self.vertex_ids()
                .map(|v| self.vertex_neighbors(v).collect())
                .collect()
        }
    }

    fn checked_vertex(&self, v: VertexId<I>) -> Result<HalfEdgeId<I>> {
        let slot = self
            .vertex_halfedges
            .get(v.index())
            .ok_or(MeshError::VertexOutOfRange {
                vertex: v.index(),
                num_vertices: self.num_vertices(),
            })?;
        slot.ok_or(MeshError::IsolatedVertex { vertex: v.index() })
    }

    // ==================== Boundary Queries ====================

    /// All vertices on the boundary, in index order.
    pub fn boundary_vertices(&self) -> Vec<VertexId<I>> {
        self.vertex_ids()
            .filter(|&v| self.is_boundary_vertex(v))
            .collect()
    }

    /// All edges with a boundary side, in index order.
    pub fn boundary_edges(&self) -> Vec<EdgeId<I>> {
        self.edge_ids()
            .filter(|&e| self.is_boundary_edge(e))
            .collect()
    }

    /// Boundary half-edges grouped into closed loops.
    ///
    /// Each loop starts at its smallest half-edge and follows `next`.
    pub fn boundary_loops(&self) -> Vec<Vec<HalfEdgeId<I>>> {
        let mut visited = vec![false; self.num_halfedges()];
        let mut loops = Vec::new();

        for (start, he) in self.halfedges() {
            if !he.is_boundary() || visited[start.index()] {
                continue;
            }
            let mut boundary = Vec::new();
            let mut current = start;
            while !visited[current.index()] {
                visited[current.index()] = true;
                boundary.push(current);
                current = self.next(current);
            }
            loops.push(boundary);
        }

        loops
    }

    // ==================== Validation ====================

    /// Re-check every connectivity invariant, including that boundary
    /// half-edges close into disjoint loops.
    ///
    /// A mesh produced by a successful build always passes. Useful after
    /// building with validation disabled.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(MeshError::InvalidState(msg));
        let n = self.num_halfedges();

        if n != 2 * self.num_edges() {
            return invalid(format!("{} half-edges for {} edges", n, self.num_edges()));
        }

        let out_of_range = |he: HalfEdgeId<I>| he.index() >= n;
        for (id, he) in self.halfedges() {
            if out_of_range(he.opposite) || out_of_range(he.next) {
                return invalid(format!("{:?} links outside the half-edge array", id));
            }
        }
        if self.vertex_halfedges.iter().flatten().any(|&he| out_of_range(he))
            || self.face_halfedges.iter().any(|&he| out_of_range(he))
            || self.edge_halfedges.iter().any(|&he| out_of_range(he))
        {
            return invalid("representative outside the half-edge array".to_string());
        }

        for (id, he) in self.halfedges() {
            if he.opposite == id || self.opposite(he.opposite) != id {
                return invalid(format!("{:?} and {:?} are not mutual opposites", id, he.opposite));
            }
            if self.edge_of(he.opposite) != he.edge {
                return invalid(format!("{:?} and its opposite disagree on the edge", id));
            }
            if self.tail(he.next) != he.vertex {
                return invalid(format!("{:?} is not continued at its head vertex", id));
            }
            match he.face {
                Some(f) => {
                    if self.face_of(he.next) != Some(f) {
                        return invalid(format!("{:?} leaves face {:?}", id, f));
                    }
                    if self.next(self.next(he.next)) != id {
                        return invalid(format!("face {:?} is not a triangle at {:?}", f, id));
                    }
                }
                None => {
                    if !self.is_boundary_halfedge(he.next) {
                        return invalid(format!("boundary {:?} continues into a face", id));
                    }
                }
            }
        }

        // Face cycles are closed above, so only boundary `next` can merge.
        let mut entered = vec![false; n];
        for (id, he) in self.halfedges().filter(|(_, he)| he.is_boundary()) {
            if std::mem::replace(&mut entered[he.next.index()], true) {
                return invalid(format!("{:?} shares its successor with another boundary half-edge", id));
            }
        }

        for v in self.vertex_ids() {
            if let Some(he) = self.vertex_halfedge(v) {
                if self.tail(he) != v {
                    return invalid(format!("{:?} stores an incoming half-edge", v));
                }
                let on_boundary = self.vertex_halfedges(v).any(|h| self.is_boundary_halfedge(h));
                if on_boundary && !self.is_boundary_halfedge(he) {
                    return invalid(format!("boundary {:?} stores an interior half-edge", v));
                }
            }
        }

        for f in self.face_ids() {
            if self.face_of(self.face_halfedge(f)) != Some(f) {
                return invalid(format!("{:?} stores a half-edge of another face", f));
            }
        }

        for e in self.edge_ids() {
            if self.edge_of(self.edge_halfedge(e)) != e {
                return invalid(format!("{:?} stores a half-edge of another edge", e));
            }
        }

        Ok(())
    }
}

/// Iterator over the outgoing half-edges of a vertex.
///
/// Steps with `next(opposite(h))` until it returns to the start. The walk is
/// capped at the number of half-edges so malformed connectivity cannot loop
/// forever.
pub struct VertexHalfEdgeIter<'a, I: MeshIndex = u32> {
    mesh: &'a TriMesh<I>,
    start: Option<HalfEdgeId<I>>,
    current: Option<HalfEdgeId<I>>,
    remaining: usize,
}

impl<'a, I: MeshIndex> VertexHalfEdgeIter<'a, I> {
    fn new(mesh: &'a TriMesh<I>, v: VertexId<I>) -> Self {
        let start = mesh.vertex_halfedge(v);
        Self {
            mesh,
            start,
            current: start,
            remaining: mesh.num_halfedges(),
        }
    }
}

impl<'a, I: MeshIndex> Iterator for VertexHalfEdgeIter<'a, I> {
    type Item = HalfEdgeId<I>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;

        // h goes v -> w, opposite(h) goes w -> v, and the half-edge after it
        // (in its face or along the boundary) leaves v again.
        let following = self.mesh.next(self.mesh.opposite(result));
        self.current = if Some(following) == self.start {
            None
        } else {
            Some(following)
        };

        Some(result)
    }
}
