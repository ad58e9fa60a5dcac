//! Mesh construction.
//!
//! Builds [`TriMesh`] connectivity from a triangle list and the matching
//! list of canonical edges, as produced by [`derive_edges`].
//!
//! Construction runs three passes:
//!
//! 1. map every directed triangle side `(i, j)` to its face;
//! 2. emit two opposite half-edges per edge, look up the face on each side
//!    and choose vertex, face and edge representatives;
//! 3. resolve `next`: interior half-edges follow their triangle's winding,
//!    boundary half-edges are stitched into loops by handing each one an
//!    unused boundary half-edge leaving its head vertex.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, trace};
use rayon::prelude::*;

use super::edges::{derive_edges, Edge};
use super::halfedge::{HalfEdge, TriMesh};
use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// Options for building a mesh.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Whether to run the per-edge and per-half-edge passes on the rayon
    /// thread pool (default: true).
    pub parallel: bool,

    /// Whether to check the input for degenerate faces, non-canonical,
    /// missing or unused edges and non-manifold boundary vertices before
    /// trusting it (default: true). Index-range, duplicate-edge and shared
    /// directed side checks always run.
    pub validate: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            validate: true,
        }
    }
}

impl BuildOptions {
    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set whether to validate the input.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// Build a mesh from a triangle list, deriving its edges.
///
/// # Arguments
/// * `num_vertices` - Number of vertices; triangle indices must be below it
/// * `triangles` - Triangles as `[i, j, k]`, consistently wound
///
/// # Example
/// ```
/// use trimesh::mesh::{build_from_triangles, TriMesh};
///
/// let mesh: TriMesh = build_from_triangles(3, &[[0, 1, 2]]).unwrap();
/// assert_eq!(mesh.num_faces(), 1);
/// assert_eq!(mesh.num_edges(), 3);
/// assert_eq!(mesh.num_halfedges(), 6);
/// ```
pub fn build_from_triangles<I: MeshIndex>(
    num_vertices: usize,
    triangles: &[[usize; 3]],
) -> Result<TriMesh<I>> {
    build_from_triangles_with_options(num_vertices, triangles, &BuildOptions::default())
}

/// Like [`build_from_triangles`], with explicit options.
pub fn build_from_triangles_with_options<I: MeshIndex>(
    num_vertices: usize,
    triangles: &[[usize; 3]],
    options: &BuildOptions,
) -> Result<TriMesh<I>> {
    let edges = derive_edges(triangles);
    let mut mesh = TriMesh::new();
    mesh.build_with_options(num_vertices, triangles, &edges, options)?;
    Ok(mesh)
}

impl<I: MeshIndex> TriMesh<I> {
    /// Build from triangles alone, deriving the edge list.
    pub fn from_triangles(num_vertices: usize, triangles: &[[usize; 3]]) -> Result<Self> {
        build_from_triangles(num_vertices, triangles)
    }

    /// Replace this mesh with the connectivity of `triangles`.
    ///
    /// `edges` must hold every triangle side exactly once in canonical form,
    /// which is what [`derive_edges`] returns. Edge `e` becomes half-edges
    /// `2e` (pointing to `edges[e].end()`) and `2e + 1`.
    ///
    /// The mesh is cleared first; on error it stays empty.
    pub fn build(&mut self, num_vertices: usize, triangles: &[[usize; 3]], edges: &[Edge]) -> Result<()> {
        self.build_with_options(num_vertices, triangles, edges, &BuildOptions::default())
    }

    /// Like [`TriMesh::build`], with explicit options.
    pub fn build_with_options(
        &mut self,
        num_vertices: usize,
        triangles: &[[usize; 3]],
        edges: &[Edge],
        options: &BuildOptions,
    ) -> Result<()> {
        self.clear();
        *self = assemble(num_vertices, triangles, edges, options)?;
        Ok(())
    }
}

/// Half-edge fields known after emission, before `next` is resolved.
#[derive(Clone, Copy)]
struct Emitted<I: MeshIndex> {
    vertex: VertexId<I>,
    face: Option<FaceId<I>>,
}

fn assemble<I: MeshIndex>(
    num_vertices: usize,
    triangles: &[[usize; 3]],
    edges: &[Edge],
    options: &BuildOptions,
) -> Result<TriMesh<I>> {
    check_input::<I>(num_vertices, triangles, edges, options)?;

    let face_of = face_lookup(triangles)?;
    trace!("face lookup: {} directed sides", face_of.len());

    // Pass 2: emit half-edge pairs.
    let lookup = |(a, b): (usize, usize)| face_of.get(&(a, b)).map(|&f| FaceId::<I>::new(f));
    let sides: Vec<(Option<FaceId<I>>, Option<FaceId<I>>)> = if options.parallel {
        edges
            .par_iter()
            .map(|e| (lookup((e.start(), e.end())), lookup((e.end(), e.start()))))
            .collect()
    } else {
        edges
            .iter()
            .map(|e| (lookup((e.start(), e.end())), lookup((e.end(), e.start()))))
            .collect()
    };

    let mut emitted: Vec<Emitted<I>> = Vec::with_capacity(edges.len() * 2);
    let mut directed: HashMap<(usize, usize), HalfEdgeId<I>> = HashMap::with_capacity(edges.len() * 2);
    let mut vertex_halfedges: Vec<Option<HalfEdgeId<I>>> = vec![None; num_vertices];
    let mut face_halfedges: Vec<Option<HalfEdgeId<I>>> = vec![None; triangles.len()];

    for (ei, (edge, &(face0, face1))) in edges.iter().zip(&sides).enumerate() {
        let (a, b) = edge.vertices();
        if options.validate && face0.is_none() && face1.is_none() {
            return Err(MeshError::UnusedEdge { edge: ei, v0: a, v1: b });
        }
        let he0 = HalfEdgeId::<I>::new(emitted.len());
        let he1 = he0.sibling();

        // he0 runs a -> b, he1 runs b -> a.
        emitted.push(Emitted { vertex: VertexId::new(b), face: face0 });
        emitted.push(Emitted { vertex: VertexId::new(a), face: face1 });

        if directed.insert((a, b), he0).is_some() || directed.insert((b, a), he1).is_some() {
            return Err(MeshError::DuplicateEdge { v0: a, v1: b });
        }

        // Outgoing boundary half-edges win so that boundary vertices start
        // their rotation on the boundary.
        if vertex_halfedges[a].is_none() || face0.is_none() {
            vertex_halfedges[a] = Some(he0);
        }
        if vertex_halfedges[b].is_none() || face1.is_none() {
            vertex_halfedges[b] = Some(he1);
        }

        if let (Some(f0), Some(f1)) = (face0, face1) {
            face_halfedges[f0.index()].get_or_insert(he0);
            face_halfedges[f1.index()].get_or_insert(he1);
        }
    }

    // Faces touching the boundary on every shared side still need one.
    for (i, he) in emitted.iter().enumerate() {
        if let Some(f) = he.face {
            face_halfedges[f.index()].get_or_insert(HalfEdgeId::new(i));
        }
    }
    let face_halfedges = face_halfedges
        .into_iter()
        .enumerate()
        .map(|(f, he)| {
            he.ok_or(MeshError::MissingEdge {
                face: f,
                v0: triangles[f][0],
                v1: triangles[f][1],
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if options.validate {
        check_sides_present(triangles, &directed)?;
    }

    // Pass 3: resolve next pointers.
    let interior = |i: usize| resolve_interior(i, &emitted, triangles, &directed);
    let mut next: Vec<Option<HalfEdgeId<I>>> = if options.parallel {
        (0..emitted.len())
            .into_par_iter()
            .map(interior)
            .collect::<Result<Vec<_>>>()?
    } else {
        (0..emitted.len()).map(interior).collect::<Result<Vec<_>>>()?
    };

    let boundary_count = link_boundary(&emitted, &mut next, options.validate)?;

    let halfedges = emitted
        .iter()
        .zip(next)
        .enumerate()
        .map(|(i, (he, next))| {
            let id = HalfEdgeId::<I>::new(i);
            Ok(HalfEdge {
                vertex: he.vertex,
                face: he.face,
                edge: id.pair_edge(),
                opposite: id.sibling(),
                next: next.ok_or(MeshError::UnlinkedBoundary { halfedge: i })?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let edge_halfedges = (0..edges.len())
        .map(|e| HalfEdgeId::new(2 * e))
        .collect();

    debug!(
        "built half-edge mesh: {} vertices, {} faces, {} edges, {} half-edges ({} boundary)",
        num_vertices,
        triangles.len(),
        edges.len(),
        halfedges.len(),
        boundary_count
    );

    Ok(TriMesh {
        halfedges,
        vertex_halfedges,
        face_halfedges,
        edge_halfedges,
        directed,
    })
}

/// Count, range and (optionally) shape checks on the raw input.
fn check_input<I: MeshIndex>(
    num_vertices: usize,
    triangles: &[[usize; 3]],
    edges: &[Edge],
    options: &BuildOptions,
) -> Result<()> {
    if triangles.is_empty() != edges.is_empty() {
        return Err(MeshError::EmptyInput {
            triangles: triangles.len(),
            edges: edges.len(),
        });
    }

    let num_halfedges = edges
        .len()
        .checked_mul(2)
        .ok_or(MeshError::IndexOverflow { count: usize::MAX })?;
    for count in [num_vertices, triangles.len(), num_halfedges] {
        if count > 0 && count - 1 > I::MAX_INDEX {
            return Err(MeshError::IndexOverflow { count });
        }
    }

    for (fi, face) in triangles.iter().enumerate() {
        if let Some(&vi) = face.iter().find(|&&vi| vi >= num_vertices) {
            return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
        }
        if options.validate && (face[0] == face[1] || face[1] == face[2] || face[0] == face[2]) {
            return Err(MeshError::DegenerateFace { face: fi });
        }
    }

    for (ei, edge) in edges.iter().enumerate() {
        let (a, b) = edge.vertices();
        if let Some(vi) = [a, b].into_iter().find(|&vi| vi >= num_vertices) {
            return Err(MeshError::EdgeVertexOutOfRange { edge: ei, vertex: vi });
        }
        if options.validate && !edge.is_canonical() {
            return Err(MeshError::NonCanonicalEdge { edge: ei });
        }
    }

    Ok(())
}

/// Pass 1: directed triangle side -> face index.
fn face_lookup(triangles: &[[usize; 3]]) -> Result<HashMap<(usize, usize), usize>> {
    let mut face_of = HashMap::with_capacity(triangles.len() * 3);
    for (fi, &[i, j, k]) in triangles.iter().enumerate() {
        for side in [(i, j), (j, k), (k, i)] {
            if face_of.insert(side, fi).is_some() {
                return Err(MeshError::NonManifoldEdge { v0: side.0, v1: side.1 });
            }
        }
    }
    Ok(face_of)
}

fn check_sides_present<I: MeshIndex>(
    triangles: &[[usize; 3]],
    directed: &HashMap<(usize, usize), HalfEdgeId<I>>,
) -> Result<()> {
    for (fi, &[i, j, k]) in triangles.iter().enumerate() {
        for (v0, v1) in [(i, j), (j, k), (k, i)] {
            if !directed.contains_key(&(v0, v1)) {
                return Err(MeshError::MissingEdge { face: fi, v0, v1 });
            }
        }
    }
    Ok(())
}

/// `next` of an interior half-edge; `None` for boundary half-edges, which
/// are linked afterwards.
fn resolve_interior<I: MeshIndex>(
    i: usize,
    emitted: &[Emitted<I>],
    triangles: &[[usize; 3]],
    directed: &HashMap<(usize, usize), HalfEdgeId<I>>,
) -> Result<Option<HalfEdgeId<I>>> {
    let he = emitted[i];
    let Some(face) = he.face else {
        return Ok(None);
    };

    let tri = triangles[face.index()];
    let head = he.vertex.index();
    let pos = tri.iter().position(|&v| v == head).ok_or_else(|| {
        MeshError::InvalidState(format!("face {} does not contain vertex {}", face.index(), head))
    })?;
    let third = tri[(pos + 1) % 3];

    directed
        .get(&(head, third))
        .copied()
        .map(Some)
        .ok_or(MeshError::MissingEdge {
            face: face.index(),
            v0: head,
            v1: third,
        })
}

/// Stitch boundary half-edges into closed loops.
///
/// Boundary half-edges are bucketed by tail vertex; each one takes the
/// smallest unused half-edge from the bucket of its head. Returns the number
/// of boundary half-edges.
fn link_boundary<I: MeshIndex>(
    emitted: &[Emitted<I>],
    next: &mut [Option<HalfEdgeId<I>>],
    validate: bool,
) -> Result<usize> {
    let boundary: Vec<HalfEdgeId<I>> = emitted
        .iter()
        .enumerate()
        .filter(|(_, he)| he.face.is_none())
        .map(|(i, _)| HalfEdgeId::new(i))
        .collect();

    let mut outgoing: BTreeMap<usize, BTreeSet<HalfEdgeId<I>>> = BTreeMap::new();
    for &he in &boundary {
        let tail = emitted[he.sibling().index()].vertex.index();
        outgoing.entry(tail).or_default().insert(he);
    }

    if validate {
        if let Some((&vertex, _)) = outgoing.iter().find(|(_, hes)| hes.len() > 1) {
            return Err(MeshError::NonManifoldVertex { vertex });
        }
    }

    for &he in &boundary {
        let head = emitted[he.index()].vertex.index();
        let successor = outgoing
            .get_mut(&head)
            .and_then(|hes| hes.pop_first())
            .ok_or(MeshError::UnlinkedBoundary { halfedge: he.index() })?;
        next[he.index()] = Some(successor);
    }

    trace!(
        "linked {} boundary half-edges around {} vertices",
        boundary.len(),
        outgoing.len()
    );

    Ok(boundary.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EdgeId;

    fn single_triangle() -> Vec<[usize; 3]> {
        vec![[0, 1, 2]]
    }

    fn two_triangles() -> Vec<[usize; 3]> {
        // Two triangles sharing edge (1, 2)
        vec![[0, 1, 2], [2, 1, 3]]
    }

    fn tetrahedron() -> Vec<[usize; 3]> {
        vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]
    }

    #[test]
    fn test_single_triangle() {
        let mesh: TriMesh<u32> = build_from_triangles(3, &single_triangle()).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_edges(), 3);
        // 3 interior half-edges + 3 boundary half-edges
        assert_eq!(mesh.num_halfedges(), 6);
        assert!(mesh.validate().is_ok());

        // Representative still assigned although no edge is shared.
        let f = FaceId::new(0);
        assert_eq!(mesh.face_of(mesh.face_halfedge(f)), Some(f));

        for v in mesh.vertex_ids() {
            assert!(mesh.is_boundary_vertex(v));
            assert_eq!(mesh.valence(v), 2);
        }
        assert_eq!(mesh.boundary_loops().len(), 1);
    }

    #[test]
    fn test_two_triangles() {
        let mesh: TriMesh<u32> = build_from_triangles(4, &two_triangles()).unwrap();

        assert_eq!(mesh.num_faces(), 2);
        // 6 interior half-edges + 4 boundary half-edges
        assert_eq!(mesh.num_halfedges(), 10);
        assert_eq!(mesh.halfedges().filter(|(_, he)| he.is_boundary()).count(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_half_edge_layout() {
        let triangles = two_triangles();
        let edges = derive_edges(&triangles);
        let mut mesh = TriMesh::<u32>::new();
        mesh.build(4, &triangles, &edges).unwrap();

        for (e, edge) in edges.iter().enumerate() {
            let he0 = HalfEdgeId::new(2 * e);
            let he1 = HalfEdgeId::new(2 * e + 1);
            assert_eq!(mesh.edge_halfedge(EdgeId::new(e)), he0);
            assert_eq!(mesh.head(he0).index(), edge.end());
            assert_eq!(mesh.head(he1).index(), edge.start());
            assert_eq!(mesh.opposite(he0), he1);
        }

        // (0, 1) is a side of face 0 in its own winding; (1, 0) is open.
        let he = mesh.halfedge_between(VertexId::new(0), VertexId::new(1)).unwrap();
        assert_eq!(mesh.face_of(he), Some(FaceId::new(0)));
        assert_eq!(mesh.face_of(mesh.opposite(he)), None);
    }

    #[test]
    fn test_boundary_vertex_representative() {
        let mesh: TriMesh<u32> = build_from_triangles(4, &two_triangles()).unwrap();
        for v in mesh.vertex_ids() {
            let he = mesh.vertex_halfedge(v).unwrap();
            assert_eq!(mesh.tail(he), v);
            assert!(mesh.is_boundary_halfedge(he), "{:?} should start on the boundary", v);
        }
    }

    #[test]
    fn test_closed_tetrahedron() {
        let mesh: TriMesh<u32> = build_from_triangles(4, &tetrahedron()).unwrap();
        assert_eq!(mesh.num_halfedges(), 12);
        assert!(mesh.is_closed());
        assert!(mesh.boundary_loops().is_empty());
        assert_eq!(mesh.euler_characteristic(), 2);
        for v in mesh.vertex_ids() {
            assert!(!mesh.is_boundary_vertex(v));
            assert_eq!(mesh.vv_neighbors(v).unwrap().len(), 3);
        }
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let triangles = tetrahedron();
        let par: TriMesh<u32> = build_from_triangles(4, &triangles).unwrap();
        let seq: TriMesh<u32> =
            build_from_triangles_with_options(4, &triangles, &BuildOptions::default().sequential())
                .unwrap();
        assert_eq!(par.halfedges, seq.halfedges);
        assert_eq!(par.vertex_halfedges, seq.vertex_halfedges);
    }

    #[test]
    fn test_small_index_type() {
        let mesh: TriMesh<u16> = build_from_triangles(4, &two_triangles()).unwrap();
        assert!(mesh.validate().is_ok());
        let overflow = build_from_triangles::<u16>(70_000, &two_triangles());
        assert_eq!(overflow.unwrap_err(), MeshError::IndexOverflow { count: 70_000 });
    }

    #[test]
    fn test_rebuild_replaces_previous_mesh() {
        let mut mesh: TriMesh<u32> = build_from_triangles(4, &tetrahedron()).unwrap();
        let triangles = single_triangle();
        mesh.build(3, &triangles, &derive_edges(&triangles)).unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_failed_build_leaves_mesh_empty() {
        let mut mesh: TriMesh<u32> = build_from_triangles(4, &tetrahedron()).unwrap();
        let err = mesh.build(4, &two_triangles(), &[]).unwrap_err();
        assert_eq!(err, MeshError::EmptyInput { triangles: 2, edges: 0 });
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_empty_input_builds_isolated_vertices() {
        let mut mesh = TriMesh::<u32>::new();
        mesh.build(3, &[], &[]).unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_halfedges(), 0);
        assert!(mesh.vertex_ids().all(|v| mesh.vertex_halfedge(v).is_none()));
    }

    #[test]
    fn test_invalid_vertex_index() {
        let result: Result<TriMesh<u32>> = build_from_triangles(1, &single_triangle());
        assert_eq!(result.unwrap_err(), MeshError::InvalidVertexIndex { face: 0, vertex: 1 });
    }

    #[test]
    fn test_edge_vertex_out_of_range() {
        let mut mesh = TriMesh::<u32>::new();
        let mut edges = derive_edges(&single_triangle());
        edges.push(Edge::new(1, 9));
        let err = mesh.build(3, &single_triangle(), &edges).unwrap_err();
        assert_eq!(err, MeshError::EdgeVertexOutOfRange { edge: 3, vertex: 9 });
    }

    #[test]
    fn test_degenerate_face() {
        let result: Result<TriMesh<u32>> = build_from_triangles(3, &[[0, 0, 2]]);
        assert_eq!(result.unwrap_err(), MeshError::DegenerateFace { face: 0 });
    }

    #[test]
    fn test_duplicate_edge() {
        let mut mesh = TriMesh::<u32>::new();
        let mut edges = derive_edges(&single_triangle());
        edges.push(Edge::new(0, 1));
        let err = mesh.build(3, &single_triangle(), &edges).unwrap_err();
        assert_eq!(err, MeshError::DuplicateEdge { v0: 0, v1: 1 });
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_non_canonical_edge() {
        let mut mesh = TriMesh::<u32>::new();
        let edges = vec![Edge::new(0, 1), Edge::from_raw(2, 1), Edge::new(0, 2)];
        let err = mesh.build(3, &single_triangle(), &edges).unwrap_err();
        assert_eq!(err, MeshError::NonCanonicalEdge { edge: 1 });
    }

    #[test]
    fn test_non_canonical_edge_keeps_input_order() {
        let mut mesh = TriMesh::<u32>::new();
        let edges = vec![Edge::new(0, 1), Edge::from_raw(2, 1), Edge::new(0, 2)];
        let options = BuildOptions::default().with_validation(false);
        mesh.build_with_options(3, &single_triangle(), &edges, &options)
            .unwrap();
        let (a, b) = mesh.edge_vertices(EdgeId::new(1));
        assert_eq!((a.index(), b.index()), (2, 1));
    }

    #[test]
    fn test_missing_edge() {
        let mut mesh = TriMesh::<u32>::new();
        let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
        let err = mesh.build(3, &single_triangle(), &edges).unwrap_err();
        assert_eq!(err, MeshError::MissingEdge { face: 0, v0: 2, v1: 0 });
    }

    #[test]
    fn test_missing_edge_without_validation() {
        let mut mesh = TriMesh::<u32>::new();
        let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
        let options = BuildOptions::default().with_validation(false);
        let err = mesh
            .build_with_options(3, &single_triangle(), &edges, &options)
            .unwrap_err();
        assert!(matches!(err, MeshError::MissingEdge { face: 0, .. }));
    }

    #[test]
    fn test_unused_edge() {
        let mut mesh = TriMesh::<u32>::new();
        let mut edges = derive_edges(&single_triangle());
        edges.push(Edge::new(3, 4));
        let err = mesh.build(5, &single_triangle(), &edges).unwrap_err();
        assert_eq!(err, MeshError::UnusedEdge { edge: 3, v0: 3, v1: 4 });
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_unused_edge_without_validation() {
        // The stray edge becomes a two half-edge boundary loop.
        let mut mesh = TriMesh::<u32>::new();
        let mut edges = derive_edges(&single_triangle());
        edges.push(Edge::new(3, 4));
        let options = BuildOptions::default().with_validation(false);
        mesh.build_with_options(5, &single_triangle(), &edges, &options)
            .unwrap();
        assert_eq!(mesh.num_edges(), 4);
        assert_eq!(mesh.boundary_loops().len(), 2);
    }

    #[test]
    fn test_inconsistent_winding() {
        // Both faces walk 1 -> 2.
        let result: Result<TriMesh<u32>> = build_from_triangles(4, &[[0, 1, 2], [1, 2, 3]]);
        assert_eq!(result.unwrap_err(), MeshError::NonManifoldEdge { v0: 1, v1: 2 });
    }

    #[test]
    fn test_bowtie_vertex_rejected() {
        // Two triangles meeting only at vertex 0.
        let triangles = [[0, 1, 2], [0, 3, 4]];
        let result: Result<TriMesh<u32>> = build_from_triangles(5, &triangles);
        assert_eq!(result.unwrap_err(), MeshError::NonManifoldVertex { vertex: 0 });

        // Without validation the boundary is still stitched into loops.
        let options = BuildOptions::default().with_validation(false);
        let mesh: TriMesh<u32> =
            build_from_triangles_with_options(5, &triangles, &options).unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_options_builder() {
        let options = BuildOptions::default();
        assert!(options.parallel && options.validate);
        let options = options.sequential().with_validation(false);
        assert!(!options.parallel && !options.validate);
        assert!(BuildOptions::default().with_parallel(false).validate);
    }
}
