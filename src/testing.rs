//! Shared helpers for unit tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{algo::ColoringCheck, gens::*, prelude::*};

/// Builds a graph from named edges, adding vertices in order of first appearance
pub(crate) fn named_graph<const N: usize>(edges: [(&str, &str); N]) -> NamedGraph {
    NamedGraph::from_named_edges("test", edges).unwrap()
}

/// Returns the (first) vertex called `name`.
/// ** Panics if there is no such vertex **
pub(crate) fn vertex(graph: &NamedGraph, name: &str) -> Vertex {
    graph
        .vertex_by_name(name)
        .unwrap_or_else(|| panic!("no vertex named {name}"))
}

/// Appends one vertex per name and returns their handles
pub(crate) fn add_named<const N: usize>(graph: &mut NamedGraph, names: [&str; N]) -> [Vertex; N] {
    names.map(|name| graph.add_vertex(name).unwrap())
}

/// Returns `count` seeded `G(n,p)` graphs with up to 40 vertices and varying density
pub(crate) fn random_graphs(seed: u64, count: usize) -> impl Iterator<Item = NamedGraph> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    (0..count).map(move |_| {
        let n = rng.random_range(0..40);
        let p = rng.random_range(0.0..0.4);
        NamedGraph::gnp(&mut rng, n, p).unwrap()
    })
}

/// Asserts that every vertex is colored and no edge is monochromatic
pub(crate) fn assert_proper_coloring(graph: &NamedGraph) {
    assert_eq!(graph.uncolored_vertices().collect::<Vec<_>>(), vec![]);
    assert_eq!(graph.conflicting_edges().collect::<Vec<_>>(), vec![]);
    assert!(graph.is_properly_colored());
}
