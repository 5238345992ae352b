use std::fmt::{Debug, Display};

use crate::Vertex;

/// An edge is an ordered pair `(origin, destination)` of vertices.
///
/// Graphs in this crate are undirected, yet edges are stored in the orientation they were
/// inserted with. Whether `Edge(u, v)` and `Edge(v, u)` count as duplicates is decided by the
/// [`EdgePolicy`] of the graph.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Vertex, pub Vertex);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Index of an edge in the insertion-ordered edge list of a graph
pub type EdgeId = NumEdges;

/// Decides which edges are considered duplicates when inserting
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Only identical ordered pairs are duplicates: `(u, v)` and `(v, u)` are both stored
    #[default]
    Ordered,
    /// `(u, v)` and `(v, u)` are the same edge; only the first inserted orientation is stored
    Unordered,
}

impl EdgePolicy {
    /// Returns the key under which `edge` is deduplicated
    pub fn dedup_key(&self, edge: Edge) -> Edge {
        match self {
            EdgePolicy::Ordered => edge,
            EdgePolicy::Unordered => edge.normalized(),
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the origin of the edge
    pub fn origin(&self) -> Vertex {
        self.0
    }

    /// Returns the destination of the edge
    pub fn destination(&self) -> Vertex {
        self.1
    }

    /// Normalizes the edge such that the endpoint with smaller index comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns the endpoint opposite to `u` or `None` if `u` is not an endpoint
    pub fn opposite(&self, u: Vertex) -> Option<Vertex> {
        if self.0 == u {
            Some(self.1)
        } else if self.1 == u {
            Some(self.0)
        } else {
            None
        }
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from(value: (Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Vertex, Vertex)> for Edge {
    fn from(value: &(Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dedup_keys() {
        let (a, b) = (Vertex::new(4), Vertex::new(1));
        let e = Edge(a, b);

        assert_eq!(EdgePolicy::Ordered.dedup_key(e), e);
        assert_ne!(EdgePolicy::Ordered.dedup_key(e), EdgePolicy::Ordered.dedup_key(e.reverse()));
        assert_eq!(
            EdgePolicy::Unordered.dedup_key(e),
            EdgePolicy::Unordered.dedup_key(e.reverse())
        );
        assert!(EdgePolicy::Unordered.dedup_key(e).is_normalized());
    }

    #[test]
    fn opposite_endpoint() {
        let (a, b, c) = (Vertex::new(0), Vertex::new(1), Vertex::new(2));
        let e = Edge(a, b);
        assert_eq!(e.opposite(a), Some(b));
        assert_eq!(e.opposite(b), Some(a));
        assert_eq!(e.opposite(c), None);
        assert!(!e.is_loop());
        assert!(Edge(c, c).is_loop());
    }
}
