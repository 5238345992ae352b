/*!
# Greedy Coloring

Colors vertices one after another in a given order, assigning each vertex the smallest color
`>= 1` not used by any of its already colored neighbors. Fed with the order of
[`LexOrder::lex_order`], the first vertex colored is the one visited *last* by the search.

Every run starts by resetting all colors to [`UNCOLORED`], so repeated runs with the same order
yield identical colorings.
*/

use tracing::{debug, trace};

use super::*;

/// Upper bound on the number of colors the colorer may hand out
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ColorCapacity {
    /// As many colors as the graph has vertices, which always suffices
    #[default]
    VertexCount,
    /// At most the given number of colors; needing more is reported as
    /// [`GraphError::ColorCapacityExceeded`]
    Fixed(NumColors),
}

impl ColorCapacity {
    /// Returns the number of candidate colors for a graph with `n` vertices
    pub fn colors_for(&self, n: NumVertices) -> NumColors {
        match *self {
            ColorCapacity::VertexCount => n,
            ColorCapacity::Fixed(k) => k,
        }
    }
}

/// Configurable greedy colorer.
///
/// # Example
/// ```
/// use lexcolor::{prelude::*, algo::*};
///
/// let mut g = NamedGraph::from_named_edges("k3", [("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
/// let order = g.lex_order(g.vertex_by_name("a").unwrap()).unwrap();
///
/// let two_colors = GreedyColorer::new().capacity(ColorCapacity::Fixed(2));
/// assert!(matches!(
///     two_colors.color(&mut g, &order),
///     Err(GraphError::ColorCapacityExceeded { capacity: 2, .. })
/// ));
///
/// assert_eq!(GreedyColorer::new().color(&mut g, &order).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyColorer {
    capacity: ColorCapacity,
}

impl GreedyColorer {
    /// Creates a colorer with [`ColorCapacity::VertexCount`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the color capacity
    pub fn capacity(mut self, capacity: ColorCapacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Colors `graph` greedily in the given order and returns the number of colors used.
    ///
    /// `order` must list every vertex of `graph` exactly once. An empty graph uses `0` colors.
    ///
    /// # Errors
    /// - [`GraphError::InvalidOrder`] if `order` is not a permutation of the vertices; colors are
    ///   left untouched in this case.
    /// - [`GraphError::ColorCapacityExceeded`] if a vertex finds no free color within the
    ///   capacity; vertices colored before stay colored, all others are [`UNCOLORED`].
    pub fn color<G>(&self, graph: &mut G, order: &[Vertex]) -> Result<NumColors>
    where
        G: IncidenceList + VertexColors,
    {
        check_permutation(graph, order)?;
        graph.reset_colors();

        let n = graph.number_of_vertices();
        let capacity = self.capacity.colors_for(n);
        // no vertex ever needs more than `n` colors
        let candidates = capacity.min(n);

        // bit `c` is set while a neighbor of the current vertex has color `c`
        let mut taken = VertexBitSet::new(candidates + 1);
        let mut num_colors = 0;

        for &u in order {
            for v in graph.neighbors_of(u) {
                let c = graph.color_of(v);
                if c != UNCOLORED {
                    taken.set_bit(c);
                }
            }

            let color = (1..=candidates).find(|&c| !taken.get_bit(c));

            for v in graph.neighbors_of(u) {
                let c = graph.color_of(v);
                if c != UNCOLORED {
                    taken.clear_bit(c);
                }
            }

            let Some(color) = color else {
                return Err(GraphError::ColorCapacityExceeded {
                    capacity,
                    vertex: u,
                });
            };

            trace!(vertex = %u, color, "assign color");
            graph.set_color(u, color);
            num_colors = num_colors.max(color);
        }

        debug!(vertices = n, colors = num_colors, "greedy coloring finished");
        Ok(num_colors)
    }
}

/// Checks that `order` lists every vertex of `graph` exactly once
fn check_permutation<G>(graph: &G, order: &[Vertex]) -> Result<()>
where
    G: GraphVertexOrder,
{
    if order.len() != graph.len() {
        return Err(GraphError::InvalidOrder(format!(
            "expected {} vertices, got {}",
            graph.len(),
            order.len()
        )));
    }

    let mut seen = graph.vertex_bitset_unset();
    for &u in order {
        if !graph.contains_vertex(u) {
            return Err(GraphError::InvalidOrder(format!(
                "vertex {u} does not belong to the graph"
            )));
        }
        if seen.set_bit(u.raw()) {
            return Err(GraphError::InvalidOrder(format!("vertex {u} listed twice")));
        }
    }

    Ok(())
}

/// Trait for coloring a graph greedily with default settings
pub trait GreedyColoring {
    /// Colors the graph greedily in the given order and returns the number of colors used.
    /// Shorthand for `GreedyColorer::new().color(self, order)`.
    ///
    /// # Errors
    /// Fails with [`GraphError::InvalidOrder`] if `order` is not a permutation of the vertices.
    fn color_greedy(&mut self, order: &[Vertex]) -> Result<NumColors>;

    /// Computes [`LexOrder::lex_order`] from `root` and colors the graph in this order.
    ///
    /// # Errors
    /// Fails with [`GraphError::RootNotInGraph`] if `root` does not belong to the graph.
    ///
    /// # Examples
    /// ```
    /// use lexcolor::{prelude::*, algo::*};
    ///
    /// let mut g = NamedGraph::from_named_edges("c4", [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]).unwrap();
    /// let a = g.vertex_by_name("a").unwrap();
    ///
    /// assert_eq!(g.color_lex(a).unwrap(), 2);
    /// assert!(g.is_properly_colored());
    /// ```
    fn color_lex(&mut self, root: Vertex) -> Result<NumColors>;
}

impl<G> GreedyColoring for G
where
    G: IncidenceList + VertexColors,
{
    fn color_greedy(&mut self, order: &[Vertex]) -> Result<NumColors> {
        GreedyColorer::new().color(self, order)
    }

    fn color_lex(&mut self, root: Vertex) -> Result<NumColors> {
        let order = self.lex_order(root)?;
        self.color_greedy(&order)
    }
}
