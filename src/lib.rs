/*!
`lexcolor` colors the vertices of undirected graphs with named vertices. The coloring is greedy,
and the order it visits vertices in comes from a label-priority (lexicographic) search.

# Representation

A graph is a [`NamedGraph`](crate::repr::NamedGraph): an arena of vertices carrying a name and a
color, plus an insertion-ordered list of edges. Vertices are addressed by [`Vertex`] handles, which
are their insertion indices. Edges are ordered pairs `Edge(origin, destination)`, but all
neighborhoods consider both orientations. The graph's [`EdgePolicy`] decides whether `(u, v)` and
`(v, u)` are duplicates.

Colors are positive integers; [`UNCOLORED`] (`0`) marks a vertex that was not colored yet.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling them on a graph (e.g. [`GreedyColorer`]). The commonly
used functionality is also implemented via traits on the graph itself, making it usable without
configuring anything beforehand.

Every fallible operation returns a [`GraphError`]; no operation panics on user input except the
accessors documented with `** Panics if u >= n **`, which index per-vertex storage by handle.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations, and the
  graph representation,
- [`algo`] includes the ordering (`graph.lex_order(root)`), greedy coloring
  (`graph.color_lex(root)`) and coloring checks,
- [`gens`] includes random `G(n,p)` graphs and deterministic substructures such as
  paths/cycles/cliques,
- [`io`] includes the DOT reader and writer,
- [`error`] includes the error type shared by all of the above.

```
use lexcolor::{prelude::*, algo::*, io::*};

let mut g = NamedGraph::try_read_dot("strict graph G { A -- B -- C -- D }".as_bytes()).unwrap();
let a = g.vertex_by_name("A").unwrap();

assert_eq!(g.color_lex(a).unwrap(), 2);
assert!(g.is_properly_colored());

let mut out = Vec::new();
g.try_write_dot(&mut out).unwrap();
assert_eq!(
    String::from_utf8(out).unwrap(),
    "strict graph G {\n\tA -- B\n\tB -- C\n\tC -- D\n}\n"
);
```

In most use-cases, `use lexcolor::{prelude::*, algo::*};` suffices for your needs.

[`GreedyColorer`]: crate::algo::GreedyColorer
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;

pub use edge::*;
pub use error::GraphError;
pub use vertex::*;

/// `lexcolor::prelude` includes definitions for vertices, edges and errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, ops::*, repr::*, vertex::*};
}
