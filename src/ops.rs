use crate::{error::Result, *};

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphVertexOrder {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in insertion order.
    fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.number_of_vertices()).map(Vertex::new)
    }

    /// Returns *true* if `u` is a handle of this graph
    fn contains_vertex(&self, u: Vertex) -> bool {
        u.raw() < self.number_of_vertices()
    }

    /// Returns `Some(u)` if `u` is a handle of this graph and `None` otherwise
    fn find_vertex(&self, u: Vertex) -> Option<Vertex> {
        self.contains_vertex(u).then_some(u)
    }

    /// Returns empty bitset with one entry per vertex
    fn vertex_bitset_unset(&self) -> VertexBitSet {
        VertexBitSet::new(self.number_of_vertices())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of stored edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! vertex_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

/// Traits pertaining getters for incident edges & neighborhoods.
///
/// Every stored edge `(u, v)` is listed as *outgoing* at `u` and as *incoming* at `v`.
/// As the graph is undirected, neighborhoods consider both lists.
pub trait IncidenceList: GraphVertexOrder + GraphEdgeOrder {
    /// Returns the edge with the given id.
    /// ** Panics if `id >= m` **
    fn edge(&self, id: EdgeId) -> Edge;

    /// Returns an iterator over all stored edges in insertion order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.number_of_edges()).map(|id| self.edge(id))
    }

    /// Returns an iterator over all edges with origin `u`.
    /// ** Panics if `u >= n` **
    fn outgoing_edges_of(&self, u: Vertex) -> impl Iterator<Item = Edge> + '_;

    /// Returns an iterator over all edges with destination `u`.
    /// ** Panics if `u >= n` **
    fn incoming_edges_of(&self, u: Vertex) -> impl Iterator<Item = Edge> + '_;

    /// Returns an iterator over all edges incident to `u`, outgoing edges first.
    /// ** Panics if `u >= n` **
    fn incident_edges_of(&self, u: Vertex) -> impl Iterator<Item = Edge> + '_ {
        self.outgoing_edges_of(u).chain(self.incoming_edges_of(u))
    }

    /// Returns an iterator over the opposite endpoints of all edges incident to `u`.
    /// A neighbor connected by both orientations of an edge is reported twice.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.outgoing_edges_of(u)
            .map(|Edge(_, v)| v)
            .chain(self.incoming_edges_of(u).map(|Edge(v, _)| v))
    }

    /// Returns the number of edges incident to `u`.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Vertex) -> NumVertices;

    /// Returns *true* if `u` and `v` are connected by an edge of either orientation.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumVertices {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over all vertices without incident edges
    fn isolated_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) == 0)
    }

    vertex_iterator!(degrees, degree_of, NumVertices);
}

/// Name lookup of vertices
pub trait VertexNames: GraphVertexOrder {
    /// Returns the name of the graph
    fn name(&self) -> &str;

    /// Returns the name of `u`.
    /// ** Panics if `u >= n` **
    fn name_of(&self, u: Vertex) -> &str;

    /// Returns the first vertex (in insertion order) named `name` or `None` if there is none
    fn vertex_by_name(&self, name: &str) -> Option<Vertex>;

    vertex_iterator!(names, name_of, &str);
}

/// Access to the per-vertex colors written by a coloring
pub trait VertexColors: GraphVertexOrder {
    /// Returns the color of `u` where [`UNCOLORED`] means no color was assigned yet.
    /// ** Panics if `u >= n` **
    fn color_of(&self, u: Vertex) -> Color;

    /// Overwrites the color of `u`.
    /// ** Panics if `u >= n` **
    fn set_color(&mut self, u: Vertex, color: Color);

    /// Resets every vertex to [`UNCOLORED`]
    fn reset_colors(&mut self);

    vertex_iterator!(colors, color_of, Color);
}

/// Provides functions to insert vertices
pub trait GraphVertexEditing: VertexNames {
    /// Appends a new vertex named `name` and returns its handle.
    ///
    /// Names are not deduplicated: adding a name twice creates two vertices, and lookups by name
    /// keep returning the first one.
    fn add_vertex<S: Into<String>>(&mut self, name: S) -> Result<Vertex>;

    /// Returns the vertex named `name`, appending it first if no such vertex exists
    fn vertex_by_name_or_insert(&mut self, name: &str) -> Result<Vertex> {
        match self.vertex_by_name(name) {
            Some(u) => Ok(u),
            None => self.add_vertex(name),
        }
    }

    /// Adds a vertex for every name in the collection and returns their handles
    fn add_vertices<S: Into<String>>(
        &mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Vec<Vertex>> {
        names.into_iter().map(|name| self.add_vertex(name)).collect()
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing {
    /// Returns the policy deciding which edges are duplicates
    fn edge_policy(&self) -> EdgePolicy;

    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was inserted and *false* if a duplicate was already
    /// present (see [`EdgePolicy`]).
    ///
    /// # Errors
    /// Fails if `u` or `v` do not belong to the graph, if `u == v`, or if memory for the edge
    /// cannot be obtained.
    fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool>;

    /// Adds all edges in the collection and returns the number of inserted (non-duplicate) edges
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<NumEdges> {
        let mut inserted = 0;
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            inserted += self.add_edge(u, v)? as NumEdges;
        }
        Ok(inserted)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph named `name`
    fn new<S: Into<String>>(name: S) -> Self;
}

/// A super trait for creating a graph from scratch from a list of named edges
pub trait GraphFromScratch: Sized {
    /// Creates a graph where vertices are added in order of their first appearance in `edges`
    fn from_named_edges<S, T>(name: S, edges: impl IntoIterator<Item = (T, T)>) -> Result<Self>
    where
        S: Into<String>,
        T: AsRef<str>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphVertexEditing + GraphEdgeEditing,
{
    fn from_named_edges<S, T>(name: S, edges: impl IntoIterator<Item = (T, T)>) -> Result<Self>
    where
        S: Into<String>,
        T: AsRef<str>,
    {
        let mut graph = Self::new(name);
        for (u, v) in edges {
            let u = graph.vertex_by_name_or_insert(u.as_ref())?;
            let v = graph.vertex_by_name_or_insert(v.as_ref())?;
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }
}
