/*!
Label-priority search producing the vertex order used by greedy coloring.

Starting from a root, the search repeatedly visits the unvisited vertex with the largest label.
Visiting a vertex at position `p` (positions are handed out from `n - 1` down to `0`) raises the
label of all its neighbors to at least `p`, so a vertex's label is the position of its earliest
visited neighbor. Ties between equal labels go to the vertex inserted first, and vertices without
visited neighbors keep label `0`, hence components not containing the root are visited last in
insertion order.

Coloring the resulting order front to back, i.e. in *reverse* visiting order, tends to use few
colors on chordal graphs. On other graphs it is just a heuristic order.
*/

use std::{cmp::Reverse, collections::BTreeSet};

use tracing::{debug, trace};

use super::*;

/// Priority of an unvisited vertex
pub type Label = NumVertices;

/// Iterator over the vertices of a graph in label-priority visiting order, starting at the root.
///
/// The `k`-th yielded vertex (0-indexed) occupies position `n - 1 - k` of the order returned by
/// [`LexOrder::lex_order`].
pub struct LexSearch<'a, G>
where
    G: IncidenceList,
{
    graph: &'a G,
    labels: Vec<Label>,
    visited: VertexBitSet,
    /// Unvisited vertices; the first entry has the largest label and, among those, the smallest index
    queue: BTreeSet<(Reverse<Label>, Vertex)>,
    /// Position assigned to the most recently visited vertex
    next_position: NumVertices,
    /// The root is yielded first but its labels are propagated on construction
    pending_root: Option<Vertex>,
}

impl<'a, G> LexSearch<'a, G>
where
    G: IncidenceList,
{
    /// Prepares a search from `root`. All labels and visited flags start out fresh.
    ///
    /// # Errors
    /// Fails with [`GraphError::RootNotInGraph`] if `root` is not a vertex of `graph` (which
    /// includes every root of an empty graph), or if the label storage cannot be allocated.
    pub fn new(graph: &'a G, root: Vertex) -> Result<Self> {
        if !graph.contains_vertex(root) {
            return Err(GraphError::RootNotInGraph(root));
        }

        let n = graph.number_of_vertices();
        let mut labels = Vec::new();
        labels
            .try_reserve_exact(graph.len())
            .map_err(|_| GraphError::allocation("labels"))?;
        labels.resize(graph.len(), 0);

        let mut search = Self {
            graph,
            labels,
            visited: graph.vertex_bitset_unset(),
            queue: BTreeSet::new(),
            next_position: n - 1,
            pending_root: Some(root),
        };

        search.labels[root.index()] = n;
        search.visited.set_bit(root.raw());

        // Nothing is labelled yet, so the root overwrites instead of raising
        for v in graph.neighbors_of(root) {
            search.labels[v.index()] = search.next_position;
        }

        search.queue = graph
            .vertices()
            .filter(|&u| u != root)
            .map(|u| (Reverse(search.labels[u.index()]), u))
            .collect();

        Ok(search)
    }

    /// Returns the current label of `u`.
    /// Labels of visited vertices are no longer meaningful.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Vertex) -> Label {
        self.labels[u.index()]
    }

    /// Returns *true* if `u` was already yielded (or is the root)
    /// ** Panics if `u >= n` **
    pub fn did_visit(&self, u: Vertex) -> bool {
        self.visited.get_bit(u.raw())
    }

    /// Raises the label of every neighbor of `u` to at least `self.next_position`
    fn propagate(&mut self, u: Vertex) {
        let graph = self.graph;
        let position = self.next_position;
        for v in graph.neighbors_of(u) {
            let label = self.labels[v.index()];
            if position <= label {
                continue;
            }

            if !self.visited.get_bit(v.raw()) {
                self.queue.remove(&(Reverse(label), v));
                self.queue.insert((Reverse(position), v));
            }
            self.labels[v.index()] = position;
        }
    }
}

impl<G> Iterator for LexSearch<'_, G>
where
    G: IncidenceList,
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending_root.take() {
            trace!(vertex = %root, position = self.next_position, "visit root");
            return Some(root);
        }

        let (Reverse(label), u) = self.queue.pop_first()?;
        self.visited.set_bit(u.raw());
        self.next_position -= 1;
        trace!(vertex = %u, position = self.next_position, label, "visit");

        self.propagate(u);
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len() + self.pending_root.is_some() as usize;
        (remaining, Some(remaining))
    }
}

impl<G> ExactSizeIterator for LexSearch<'_, G> where G: IncidenceList {}

/// Trait computing the label-priority order of a graph
pub trait LexOrder: IncidenceList + Sized {
    /// Returns a permutation of all vertices whose *last* entry is `root`.
    ///
    /// Position `n - 1` holds the root, position `n - 2` the first vertex visited after it, and so
    /// on. Pass the result to [`GreedyColoring::color_greedy`] to color the graph.
    ///
    /// # Errors
    /// Fails with [`GraphError::RootNotInGraph`] if `root` does not belong to the graph.
    ///
    /// # Examples
    /// ```
    /// use lexcolor::{prelude::*, algo::*};
    ///
    /// let g = NamedGraph::from_named_edges("p", [("A", "B"), ("B", "C"), ("C", "D")]).unwrap();
    /// let a = g.vertex_by_name("A").unwrap();
    ///
    /// let order = g.lex_order(a).unwrap();
    /// let names: Vec<_> = order.iter().map(|&u| g.name_of(u)).collect();
    /// assert_eq!(names, vec!["D", "C", "B", "A"]);
    /// ```
    fn lex_order(&self, root: Vertex) -> Result<Vec<Vertex>> {
        let search = self.lex_search(root)?;

        let mut order = Vec::new();
        order
            .try_reserve_exact(search.len())
            .map_err(|_| GraphError::allocation("vertex order"))?;
        order.extend(search);
        order.reverse();

        debug!(%root, vertices = order.len(), "computed lex order");
        Ok(order)
    }

    /// Returns an iterator over all vertices in visiting order, starting with `root`.
    ///
    /// # Errors
    /// Fails with [`GraphError::RootNotInGraph`] if `root` does not belong to the graph.
    fn lex_search(&self, root: Vertex) -> Result<LexSearch<'_, Self>> {
        LexSearch::new(self, root)
    }
}

impl<G> LexOrder for G where G: IncidenceList {}
