use super::*;

/// Verification of the colors currently stored in a graph
pub trait ColoringCheck: IncidenceList + VertexColors {
    /// Returns an iterator over all stored edges whose endpoints carry the same color.
    /// Edges with an [`UNCOLORED`] endpoint never conflict.
    fn conflicting_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().filter(|&Edge(u, v)| {
            let color = self.color_of(u);
            color != UNCOLORED && color == self.color_of(v)
        })
    }

    /// Returns an iterator over all vertices without a color
    fn uncolored_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices().filter(|&u| self.color_of(u) == UNCOLORED)
    }

    /// Returns *true* if every vertex is colored and no edge joins two vertices of equal color
    fn is_properly_colored(&self) -> bool {
        self.uncolored_vertices().next().is_none() && self.conflicting_edges().next().is_none()
    }

    /// Returns the largest color in use, which equals the number of colors of a greedy coloring
    fn number_of_colors(&self) -> NumColors {
        self.colors().max().unwrap_or(UNCOLORED)
    }
}

impl<G> ColoringCheck for G where G: IncidenceList + VertexColors {}
