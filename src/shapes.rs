//! Index-only reference meshes.
//!
//! Small, consistently wound triangle lists with known topology. They carry
//! no positions: only the vertex count and the triangles.

use crate::error::Result;
use crate::mesh::{build_from_triangles_with_options, BuildOptions, MeshIndex, TriMesh};

/// A vertex count and the triangles over those vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Number of vertices.
    pub num_vertices: usize,
    /// Triangles as `[i, j, k]`.
    pub triangles: Vec<[usize; 3]>,
}

impl Shape {
    /// Wrap an existing triangle list.
    pub fn new(num_vertices: usize, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            num_vertices,
            triangles,
        }
    }

    /// Build the half-edge mesh of this shape.
    pub fn build<I: MeshIndex>(&self) -> Result<TriMesh<I>> {
        self.build_with_options(&BuildOptions::default())
    }

    /// Build the half-edge mesh of this shape with explicit options.
    pub fn build_with_options<I: MeshIndex>(&self, options: &BuildOptions) -> Result<TriMesh<I>> {
        build_from_triangles_with_options(self.num_vertices, &self.triangles, options)
    }
}

/// One triangle.
pub fn single_triangle() -> Shape {
    Shape::new(3, vec![[0, 1, 2]])
}

/// Two triangles sharing the edge (1, 2).
///
/// ```text
///       1
///      /|\
///     0 | 3
///      \|/
///       2
/// ```
pub fn diamond() -> Shape {
    Shape::new(4, vec![[0, 1, 2], [2, 1, 3]])
}

/// Closed tetrahedron.
pub fn tetrahedron() -> Shape {
    Shape::new(4, vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]])
}

/// Closed octahedron: vertices `+x, -x, +y, -y, +z, -z`.
pub fn octahedron() -> Shape {
    Shape::new(
        6,
        vec![
            [0, 2, 4],
            [2, 1, 4],
            [1, 3, 4],
            [3, 0, 4],
            [2, 0, 5],
            [1, 2, 5],
            [3, 1, 5],
            [0, 3, 5],
        ],
    )
}

/// Triangles around vertex 0 with rim vertices `1..=n`.
///
/// A closed fan wraps around so vertex 0 is interior; an open fan leaves
/// the rim `n -> 1` gap so vertex 0 is on the boundary. `n` is raised to 3
/// (closed) or 2 (open) if smaller.
pub fn fan(n: usize, closed: bool) -> Shape {
    let n = if closed { n.max(3) } else { n.max(2) };
    let mut triangles: Vec<[usize; 3]> = (1..n).map(|i| [0, i, i + 1]).collect();
    if closed {
        triangles.push([0, n, 1]);
    }
    Shape::new(n + 1, triangles)
}

/// A `width x height` grid of quads, each split into two triangles.
pub fn grid(width: usize, height: usize) -> Shape {
    let mut triangles = Vec::with_capacity(width * height * 2);

    for j in 0..height {
        for i in 0..width {
            let v00 = j * (width + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (width + 1);
            let v11 = v01 + 1;

            triangles.push([v00, v10, v11]);
            triangles.push([v00, v11, v01]);
        }
    }

    Shape::new((width + 1) * (height + 1), triangles)
}

/// A strip of `n` triangles over vertices `0..n + 2`; `strip(2)` is the
/// diamond.
pub fn strip(n: usize) -> Shape {
    let triangles = (0..n)
        .map(|i| if i % 2 == 0 { [i, i + 1, i + 2] } else { [i + 1, i, i + 2] })
        .collect();
    Shape::new(n + 2, triangles)
}

/// A ring of `n` quads between an inner loop `0..n` and an outer loop
/// `n..2n`, giving a mesh with two boundary loops. `n` is raised to 3 if
/// smaller.
pub fn annulus(n: usize) -> Shape {
    let n = n.max(3);
    let mut triangles = Vec::with_capacity(2 * n);
    for i in 0..n {
        let j = (i + 1) % n;
        triangles.push([i, n + i, n + j]);
        triangles.push([i, n + j, j]);
    }
    Shape::new(2 * n, triangles)
}
