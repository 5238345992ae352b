/*!
# Substructure Generators

Utility methods to add **paths**, **cycles** and **cliques** to an existing graph, e.g. to build
instances with a known chromatic number.

# Example

```rust
use lexcolor::{prelude::*, gens::*};

let mut g = NamedGraph::new("g");
let vs = g.add_vertices(["a", "b", "c", "d", "e"]).unwrap();
g.connect_path([vs[0], vs[1], vs[2]]).unwrap();
g.connect_cycle([vs[2], vs[3], vs[4]]).unwrap();

assert_eq!(g.number_of_edges(), 5);
assert!(g.has_edge(vs[4], vs[2]));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// All methods return the number of inserted edges; duplicates are skipped according to the
/// graph's [`EdgePolicy`].
pub trait GeneratorSubstructures {
    /// Connects each consecutive pair of the given vertices by an edge.
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<NumEdges>
    where
        P: IntoIterator<Item = Vertex>;

    /// Connects consecutive vertices and additionally the last vertex back to the first.
    /// Cycles of fewer than three vertices degenerate to a path.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<NumEdges>
    where
        C: IntoIterator<Item = Vertex>;

    /// Connects every pair `(vertices[i], vertices[j])` with `i < j`.
    ///
    /// # Example
    /// ```rust
    /// use lexcolor::{prelude::*, gens::*};
    ///
    /// let mut g = NamedGraph::new("k4");
    /// let vs = g.add_vertices(["a", "b", "c", "d"]).unwrap();
    ///
    /// assert_eq!(g.connect_clique(&vs).unwrap(), 6);
    /// assert!(g.has_edge(vs[3], vs[0]));
    /// ```
    fn connect_clique(&mut self, vertices: &[Vertex]) -> Result<NumEdges>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<NumEdges>
    where
        P: IntoIterator<Item = Vertex>,
    {
        self.add_edges(vertices_on_path.into_iter().tuple_windows::<(_, _)>())
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<NumEdges>
    where
        C: IntoIterator<Item = Vertex>,
    {
        let vertices = vertices_in_cycle.into_iter().collect_vec();
        let mut inserted = self.connect_path(vertices.iter().copied())?;

        if vertices.len() > 2 {
            inserted += self.add_edge(vertices[vertices.len() - 1], vertices[0])? as NumEdges;
        }

        Ok(inserted)
    }

    fn connect_clique(&mut self, vertices: &[Vertex]) -> Result<NumEdges> {
        self.add_edges(vertices.iter().copied().tuple_combinations::<(_, _)>())
    }
}
