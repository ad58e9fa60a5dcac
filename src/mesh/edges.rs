//! Undirected edges and their derivation from a triangle list.

use std::collections::BTreeSet;
use std::fmt;

/// An undirected edge between two vertices.
///
/// Edges built through [`Edge::new`] are canonical: `start <= end`. The
/// builder only accepts canonical edges.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    start: usize,
    end: usize,
}

impl Edge {
    /// Create the canonical edge joining `a` and `b`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create an edge with its endpoints exactly as given.
    ///
    /// Used to hand the builder edge lists produced elsewhere; the builder
    /// rejects them if they are not canonical.
    #[inline]
    pub fn from_raw(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The larger endpoint.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.start < self.end
    }

    /// Both endpoints as a tuple.
    #[inline]
    pub fn vertices(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

/// Collect the distinct undirected edges referenced by `triangles`.
///
/// Each side of each triangle is canonicalized and deduplicated; the result
/// is sorted by `(start, end)`. Degenerate triangles are not rejected here,
/// the builder catches them.
///
/// # Example
/// ```
/// use trimesh::mesh::{derive_edges, Edge};
///
/// let edges = derive_edges(&[[0, 1, 2], [2, 1, 3]]);
/// assert_eq!(
///     edges,
///     vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 3)]
/// );
/// ```
pub fn derive_edges(triangles: &[[usize; 3]]) -> Vec<Edge> {
    let mut set = BTreeSet::new();
    for &[i, j, k] in triangles {
        set.insert(Edge::new(i, j));
        set.insert(Edge::new(j, k));
        set.insert(Edge::new(k, i));
    }
    set.into_iter().collect()
}
