use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use super::*;

/// Number of edge ids stored inline per direction before spilling to the heap
const INLINE_EDGES: usize = 4;

/// Ids of the edges a vertex takes part in, split by the role of the vertex.
/// Prefer small inline buffers as most graphs colored with this crate are sparse.
#[derive(Debug, Default, Clone)]
pub struct Incidence {
    /// Edges `(u, _)` where `u` is this vertex
    outgoing: SmallVec<[EdgeId; INLINE_EDGES]>,
    /// Edges `(_, u)` where `u` is this vertex
    incoming: SmallVec<[EdgeId; INLINE_EDGES]>,
}

impl Incidence {
    /// Returns the number of incident edges in both roles
    pub fn degree(&self) -> NumVertices {
        (self.outgoing.len() + self.incoming.len()) as NumVertices
    }

    /// Returns an iterator over ids of edges leaving this vertex
    pub fn outgoing(&self) -> Copied<Iter<'_, EdgeId>> {
        self.outgoing.iter().copied()
    }

    /// Returns an iterator over ids of edges entering this vertex
    pub fn incoming(&self) -> Copied<Iter<'_, EdgeId>> {
        self.incoming.iter().copied()
    }

    /// Reserves room for one more outgoing edge
    pub(crate) fn reserve_outgoing(&mut self) -> error::Result<()> {
        self.outgoing
            .try_reserve(1)
            .map_err(|_| GraphError::allocation("outgoing incidence list"))
    }

    /// Reserves room for one more incoming edge
    pub(crate) fn reserve_incoming(&mut self) -> error::Result<()> {
        self.incoming
            .try_reserve(1)
            .map_err(|_| GraphError::allocation("incoming incidence list"))
    }

    /// Adds an edge this vertex is the origin of. Room must have been reserved beforehand.
    pub(crate) fn push_outgoing(&mut self, id: EdgeId) {
        self.outgoing.push(id);
    }

    /// Adds an edge this vertex is the destination of. Room must have been reserved beforehand.
    pub(crate) fn push_incoming(&mut self, id: EdgeId) {
        self.incoming.push(id);
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn spills_beyond_inline_capacity() {
        let mut inc = Incidence::default();
        for id in 0..(2 * INLINE_EDGES as EdgeId) {
            inc.reserve_outgoing().unwrap();
            inc.push_outgoing(id);
        }
        inc.reserve_incoming().unwrap();
        inc.push_incoming(42);

        assert_eq!(inc.degree(), 2 * INLINE_EDGES as NumVertices + 1);
        assert_eq!(
            inc.outgoing().collect_vec(),
            (0..(2 * INLINE_EDGES as EdgeId)).collect_vec()
        );
        assert_eq!(inc.incoming().collect_vec(), vec![42]);
    }
}
