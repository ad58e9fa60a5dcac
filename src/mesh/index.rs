//! Typed handles for mesh elements.
//!
//! Vertices, half-edges, faces and edges are all addressed by position in a
//! flat array. Wrapping those positions in distinct types keeps a face index
//! from being passed where a half-edge index is expected. The width of the
//! stored integer is chosen through [`MeshIndex`]; "no element" is always
//! spelled `Option<Id>` rather than a reserved value.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Integer types usable as storage for mesh handles.
///
/// Implemented for `u16`, `u32` and `u64`. Conversions from `usize` are
/// checked so that the builder can report an overflow instead of wrapping.
pub trait MeshIndex:
    Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// Largest position representable by this index type.
    const MAX_INDEX: usize;

    /// Convert from `usize`, returning `None` if the value does not fit.
    fn try_from_usize(v: usize) -> Option<Self>;

    /// Convert to `usize`.
    fn to_usize(self) -> usize;
}

macro_rules! impl_mesh_index {
    ($($ty:ty),*) => {
        $(
            impl MeshIndex for $ty {
                const MAX_INDEX: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline]
                fn try_from_usize(v: usize) -> Option<Self> {
                    <$ty>::try_from(v).ok()
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_mesh_index!(u16, u32, u64);

/// Handle of a vertex.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId<I: MeshIndex = u32>(I);

/// Handle of a half-edge.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct HalfEdgeId<I: MeshIndex = u32>(I);

/// Handle of a triangle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId<I: MeshIndex = u32>(I);

/// Handle of an undirected edge.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId<I: MeshIndex = u32>(I);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Create a handle from a raw position.
            ///
            /// # Panics
            /// Panics if `index` does not fit the index type. The builder
            /// checks element counts up front, so handles derived from a
            /// built mesh never hit this.
            #[inline]
            pub fn new(index: usize) -> Self {
                match Self::try_new(index) {
                    Some(id) => id,
                    None => panic!(
                        "index {} exceeds the capacity of {}",
                        index,
                        std::any::type_name::<I>()
                    ),
                }
            }

            /// Create a handle, or `None` if `index` does not fit.
            #[inline]
            pub fn try_new(index: usize) -> Option<Self> {
                I::try_from_usize(index).map(Self)
            }

            /// Position of the element in its array.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }

            /// The stored integer.
            #[inline]
            pub fn raw(self) -> I {
                self.0
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl<I: MeshIndex> Display for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(HalfEdgeId, "HE");
impl_index_type!(FaceId, "F");
impl_index_type!(EdgeId, "E");

impl<I: MeshIndex> HalfEdgeId<I> {
    /// The other half-edge of the same edge.
    ///
    /// Half-edges are allocated in pairs, `2e` and `2e + 1` for edge `e`.
    #[inline]
    pub(crate) fn sibling(self) -> Self {
        Self::new(self.index() ^ 1)
    }

    /// The edge this half-edge belongs to, by allocation order.
    #[inline]
    pub(crate) fn pair_edge(self) -> EdgeId<I> {
        EdgeId::new(self.index() / 2)
    }
}
