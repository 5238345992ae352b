/*!
# Graph Generators

Builders for random graphs and helpers that add deterministic substructures (paths, cycles,
cliques) to an existing graph. They are mainly used to produce test and benchmark instances for
the ordering and coloring algorithms.

Random generators follow a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.vertices(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Whole graphs are produced by the [`RandomGraph`] trait, which names the `i`-th vertex `v{i}`.
*/

use rand::Rng;
use tracing::debug;

use crate::{error::Result, prelude::*};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of vertices.
pub trait NumVerticesGen {
    /// Sets the number of vertices in the graph generator.
    fn vertices(self, n: NumVertices) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator over vertices `v0..v{n-1}`.
pub trait GraphGenerator {
    /// Returns the number of vertices the generated edges range over
    fn number_of_vertices(&self) -> NumVertices;

    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a graph named `name` with the vertices and edges produced by `generator`
    fn from_generator<R, GG>(rng: &mut R, name: &str, generator: &GG) -> Result<Self>
    where
        R: Rng,
        GG: GraphGenerator;

    /// Creates a random `G(n,p)` graph using edge probability `p`.
    ///
    /// # Example
    /// ```
    /// use lexcolor::{prelude::*, gens::*};
    /// use rand::SeedableRng;
    ///
    /// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
    /// let g = NamedGraph::gnp(rng, 10, 1.0).unwrap();
    ///
    /// assert_eq!(g.number_of_vertices(), 10);
    /// assert_eq!(g.number_of_edges(), 45);
    /// assert_eq!(g.name_of(Vertex::new(3)), "v3");
    /// ```
    fn gnp<R>(rng: &mut R, n: NumVertices, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Self::from_generator(rng, "gnp", &Gnp::new().vertices(n).prob(p))
    }
}

impl<G> RandomGraph for G
where
    G: GraphNew + GraphVertexEditing + GraphEdgeEditing,
{
    fn from_generator<R, GG>(rng: &mut R, name: &str, generator: &GG) -> Result<Self>
    where
        R: Rng,
        GG: GraphGenerator,
    {
        let n = generator.number_of_vertices();
        let mut graph = Self::new(name);
        graph.add_vertices((0..n).map(|i| format!("v{i}")))?;
        let m = graph.add_edges(generator.stream(rng))?;

        debug!(name, vertices = n, edges = m, "generated random graph");
        Ok(graph)
    }
}
