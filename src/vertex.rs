/*!
# Vertex Representation

Vertices are handles into the vertex arena of a [`NamedGraph`](crate::repr::NamedGraph).
A handle is simply the insertion index of the vertex, stored as `u32` since graphs handled by this
crate stay far below `2^32` vertices. Identity of two vertices is equality of their handles; the
name is only used for lookup.
*/

use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

/// Raw index type underlying a [`Vertex`]
pub type RawVertex = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = RawVertex;

/// Colors are positive integers, `0` is reserved for [`UNCOLORED`]
pub type Color = u32;

/// Number of distinct colors used by a coloring
pub type NumColors = Color;

/// Sentinel color of a vertex that was not assigned a color yet
pub const UNCOLORED: Color = 0;

/// BitSet over vertex indices
pub type VertexBitSet = BitSetImpl<RawVertex>;

/// Handle of a vertex in a graph.
///
/// Handles are only meaningful for the graph that created them: a graph validates that a handle
/// is in range, but cannot tell apart two graphs' handles with the same index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vertex(RawVertex);

impl Vertex {
    /// Creates the handle of the vertex with insertion index `index`
    pub const fn new(index: RawVertex) -> Self {
        Self(index)
    }

    /// Returns the raw insertion index
    pub const fn raw(&self) -> RawVertex {
        self.0
    }

    /// Returns the insertion index as `usize` for indexing into per-vertex storage
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl Debug for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<Vertex> for usize {
    fn from(value: Vertex) -> Self {
        value.index()
    }
}
