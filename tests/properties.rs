//! Property tests over relabeled, reordered reference shapes.
//!
//! Every shape here is a consistently wound manifold of genus zero. The
//! strategies shuffle vertex labels, triangle order and the starting vertex
//! of each triangle, none of which may change the topology.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use trimesh::prelude::*;
use trimesh::shapes::{self, Shape};

fn base_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (1usize..6, 1usize..6).prop_map(|(w, h)| shapes::grid(w, h)),
        (2usize..10, any::<bool>()).prop_map(|(n, closed)| shapes::fan(n, closed)),
        (1usize..12).prop_map(shapes::strip),
        (3usize..9).prop_map(shapes::annulus),
        Just(shapes::single_triangle()),
        Just(shapes::tetrahedron()),
        Just(shapes::octahedron()),
    ]
}

fn scrambled_shape() -> impl Strategy<Value = Shape> {
    base_shape()
        .prop_flat_map(|shape| {
            let n = shape.num_vertices;
            let t = shape.triangles.len();
            (
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                Just(shape.triangles).prop_shuffle(),
                proptest::collection::vec(0usize..3, t),
                Just(n),
            )
        })
        .prop_map(|(perm, triangles, rotations, n)| {
            let triangles = triangles
                .iter()
                .zip(&rotations)
                .map(|(tri, &r)| {
                    let t = tri.map(|v| perm[v]);
                    [t[r], t[(r + 1) % 3], t[(r + 2) % 3]]
                })
                .collect();
            Shape::new(n, triangles)
        })
}

fn ring_set(mesh: &TriMesh, v: VertexId) -> BTreeSet<usize> {
    mesh.vv_neighbors(v)
        .unwrap()
        .into_iter()
        .map(|n| n.index())
        .collect()
}

/// Half-edge relations keyed by vertex pairs, independent of raw indices.
fn structure(mesh: &TriMesh) -> BTreeSet<((usize, usize), (usize, usize), Option<usize>)> {
    let pair = |he: HalfEdgeId| {
        let (a, b) = mesh.directed_edge(he);
        (a.index(), b.index())
    };
    mesh.halfedge_ids()
        .map(|he| (pair(he), pair(mesh.next(he)), mesh.face_of(he).map(|f| f.index())))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn derived_edges_are_exactly_the_triangle_sides(shape in scrambled_shape()) {
        let edges = derive_edges(&shape.triangles);

        let expected: HashSet<(usize, usize)> = shape
            .triangles
            .iter()
            .flat_map(|&[i, j, k]| [(i, j), (j, k), (k, i)])
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();

        prop_assert_eq!(edges.len(), expected.len());
        for w in edges.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for e in &edges {
            prop_assert!(e.is_canonical());
            prop_assert!(expected.contains(&e.vertices()));
        }
    }

    #[test]
    fn opposites_are_symmetric(shape in scrambled_shape()) {
        let mesh: TriMesh = shape.build().unwrap();
        prop_assert_eq!(mesh.num_halfedges(), 2 * mesh.num_edges());
        for he in mesh.halfedge_ids() {
            let opp = mesh.opposite(he);
            prop_assert_ne!(opp, he);
            prop_assert_eq!(mesh.opposite(opp), he);
            prop_assert_eq!(mesh.edge_of(opp), mesh.edge_of(he));
        }
    }

    #[test]
    fn interior_half_edges_close_triangles(shape in scrambled_shape()) {
        let mesh: TriMesh = shape.build().unwrap();
        for he in mesh.halfedge_ids().filter(|&he| !mesh.is_boundary_halfedge(he)) {
            let face = mesh.face_of(he);
            let n1 = mesh.next(he);
            let n2 = mesh.next(n1);
            prop_assert_eq!(mesh.face_of(n1), face);
            prop_assert_eq!(mesh.face_of(n2), face);
            prop_assert_eq!(mesh.next(n2), he);
            prop_assert_eq!(mesh.tail(n1), mesh.head(he));
        }
    }

    #[test]
    fn boundary_half_edges_form_closed_loops(shape in scrambled_shape()) {
        let mesh: TriMesh = shape.build().unwrap();
        for start in mesh.halfedge_ids().filter(|&he| mesh.is_boundary_halfedge(he)) {
            let mut he = start;
            let mut steps = 0;
            loop {
                let next = mesh.next(he);
                prop_assert!(mesh.is_boundary_halfedge(next));
                prop_assert_eq!(mesh.tail(next), mesh.head(he));
                he = next;
                steps += 1;
                prop_assert!(steps <= mesh.num_halfedges());
                if he == start {
                    break;
                }
            }
        }

        let covered: usize = mesh.boundary_loops().iter().map(Vec::len).sum();
        let boundary = mesh.halfedge_ids().filter(|&he| mesh.is_boundary_halfedge(he)).count();
        prop_assert_eq!(covered, boundary);
    }

    #[test]
    fn one_rings_are_symmetric_and_complete(shape in scrambled_shape()) {
        let mesh: TriMesh = shape.build().unwrap();

        let mut adjacent = vec![BTreeSet::new(); shape.num_vertices];
        for e in derive_edges(&shape.triangles) {
            adjacent[e.start()].insert(e.end());
            adjacent[e.end()].insert(e.start());
        }

        for v in mesh.vertex_ids() {
            let ring = mesh.vv_neighbors(v).unwrap();
            let set = ring_set(&mesh, v);
            prop_assert_eq!(ring.len(), set.len(), "ring of {:?} repeats a vertex", v);
            prop_assert_eq!(&set, &adjacent[v.index()]);
            prop_assert_eq!(mesh.valence(v), ring.len());
            for &u in &set {
                prop_assert!(ring_set(&mesh, VertexId::new(u)).contains(&v.index()));
            }
        }
    }

    #[test]
    fn boundary_vertices_start_on_the_boundary(shape in scrambled_shape()) {
        let mesh: TriMesh = shape.build().unwrap();
        for v in mesh.vertex_ids() {
            let rep = mesh.vertex_halfedge(v).unwrap();
            prop_assert_eq!(mesh.tail(rep), v);
            let touches_boundary = mesh
                .vertex_halfedges(v)
                .any(|he| mesh.is_boundary_halfedge(he) || mesh.is_boundary_halfedge(mesh.opposite(he)));
            prop_assert_eq!(mesh.is_boundary_vertex(v), touches_boundary);
        }
    }

    #[test]
    fn representatives_are_populated(shape in scrambled_shape()) {
        let mesh: TriMesh = shape.build().unwrap();
        for f in mesh.face_ids() {
            prop_assert_eq!(mesh.face_of(mesh.face_halfedge(f)), Some(f));
            let corners: BTreeSet<usize> = mesh.face_vertices(f).map(|v| v.index()).collect();
            let given: BTreeSet<usize> = shape.triangles[f.index()].iter().copied().collect();
            prop_assert_eq!(corners, given);
        }
        for e in mesh.edge_ids() {
            prop_assert_eq!(mesh.edge_of(mesh.edge_halfedge(e)), e);
        }
        prop_assert!(mesh.validate().is_ok());
    }

    #[test]
    fn genus_zero_shapes_satisfy_euler(shape in scrambled_shape()) {
        let mesh: TriMesh = shape.build().unwrap();
        let loops = mesh.boundary_loops().len() as i64;
        prop_assert_eq!(mesh.euler_characteristic() + loops, 2);
    }

    #[test]
    fn rebuild_is_idempotent(shape in scrambled_shape()) {
        let edges = derive_edges(&shape.triangles);
        let mut mesh: TriMesh = TriMesh::new();
        mesh.build(shape.num_vertices, &shape.triangles, &edges).unwrap();
        let first = structure(&mesh);
        mesh.build(shape.num_vertices, &shape.triangles, &edges).unwrap();
        prop_assert_eq!(first, structure(&mesh));
    }

    #[test]
    fn sequential_and_parallel_builds_agree(shape in scrambled_shape()) {
        let par: TriMesh = shape.build().unwrap();
        let seq: TriMesh = shape
            .build_with_options(&BuildOptions::default().sequential())
            .unwrap();
        prop_assert_eq!(structure(&par), structure(&seq));
        prop_assert_eq!(par.one_rings(true), seq.one_rings(false));
    }
}

#[test]
fn isolated_vertices_are_reported() {
    let mesh: TriMesh = build_from_triangles(6, &shapes::diamond().triangles).unwrap();
    for v in [4, 5] {
        assert_eq!(
            mesh.vv_neighbors(VertexId::new(v)),
            Err(MeshError::IsolatedVertex { vertex: v })
        );
    }
    assert_eq!(
        mesh.vv_neighbors(VertexId::new(6)),
        Err(MeshError::VertexOutOfRange { vertex: 6, num_vertices: 6 })
    );
}

#[test]
fn diamond_boundary_vertices_have_two_neighbors() {
    let mesh: TriMesh = shapes::diamond().build().unwrap();
    let counts: Vec<usize> = mesh
        .vertex_ids()
        .map(|v| mesh.vv_neighbors(v).unwrap().len())
        .collect();
    assert_eq!(counts, vec![2, 3, 3, 2]);
}
