use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use super::*;
use crate::error::{Result, try_reserve_one};

/// Per-vertex storage of a [`NamedGraph`]
#[derive(Debug, Clone)]
struct VertexData {
    name: String,
    color: Color,
    incidence: Incidence,
}

/// An undirected graph with named vertices.
///
/// Vertices keep their insertion order, which is the tie-break order of
/// [`LexOrder`](crate::algo::LexOrder). Edges are stored as ordered pairs and deduplicated
/// according to the graph's [`EdgePolicy`].
///
/// # Example
/// ```
/// use lexcolor::prelude::*;
///
/// let mut g = NamedGraph::new("g");
/// let a = g.add_vertex("a").unwrap();
/// let b = g.add_vertex("b").unwrap();
///
/// assert!(g.add_edge(a, b).unwrap());
/// assert!(!g.add_edge(a, b).unwrap());
/// assert!(g.add_edge(b, a).unwrap());
///
/// assert_eq!(g.number_of_vertices(), 2);
/// assert_eq!(g.number_of_edges(), 2);
/// assert_eq!(g.vertex_by_name("b"), Some(b));
/// assert_eq!(g.vertex_by_name("c"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NamedGraph {
    name: String,
    vertices: Vec<VertexData>,
    edges: Vec<Edge>,
    /// First vertex carrying each name
    name_index: FxHashMap<String, Vertex>,
    /// Dedup keys of all stored edges
    edge_index: FxHashSet<Edge>,
    edge_policy: EdgePolicy,
}

impl NamedGraph {
    /// Creates an empty graph that deduplicates edges according to `policy`
    pub fn with_edge_policy<S: Into<String>>(name: S, policy: EdgePolicy) -> Self {
        Self {
            name: name.into(),
            edge_policy: policy,
            ..Default::default()
        }
    }

    /// Returns the incidence list of `u`.
    /// ** Panics if `u >= n` **
    pub fn incidence_of(&self, u: Vertex) -> &Incidence {
        &self.vertices[u.index()].incidence
    }

    fn check_vertex(&self, u: Vertex) -> Result<()> {
        if self.contains_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::VertexNotInGraph(u))
        }
    }
}

impl GraphNew for NamedGraph {
    fn new<S: Into<String>>(name: S) -> Self {
        Self::with_edge_policy(name, EdgePolicy::default())
    }
}

impl GraphVertexOrder for NamedGraph {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }
}

impl GraphEdgeOrder for NamedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl IncidenceList for NamedGraph {
    fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id as usize]
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    fn outgoing_edges_of(&self, u: Vertex) -> impl Iterator<Item = Edge> + '_ {
        self.incidence_of(u).outgoing().map(|id| self.edge(id))
    }

    fn incoming_edges_of(&self, u: Vertex) -> impl Iterator<Item = Edge> + '_ {
        self.incidence_of(u).incoming().map(|id| self.edge(id))
    }

    fn degree_of(&self, u: Vertex) -> NumVertices {
        self.incidence_of(u).degree()
    }
}

impl VertexNames for NamedGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn name_of(&self, u: Vertex) -> &str {
        &self.vertices[u.index()].name
    }

    fn vertex_by_name(&self, name: &str) -> Option<Vertex> {
        self.name_index.get(name).copied()
    }
}

impl VertexColors for NamedGraph {
    fn color_of(&self, u: Vertex) -> Color {
        self.vertices[u.index()].color
    }

    fn set_color(&mut self, u: Vertex, color: Color) {
        self.vertices[u.index()].color = color;
    }

    fn reset_colors(&mut self) {
        self.vertices.iter_mut().for_each(|data| data.color = UNCOLORED);
    }
}

impl GraphVertexEditing for NamedGraph {
    fn add_vertex<S: Into<String>>(&mut self, name: S) -> Result<Vertex> {
        let name = name.into();
        if self.vertices.len() >= NumVertices::MAX as usize {
            return Err(GraphError::allocation("vertex handles"));
        }
        let u = Vertex::new(self.vertices.len() as RawVertex);

        try_reserve_one(&mut self.vertices, "vertices")?;
        match self.name_index.get(&name) {
            Some(first) => debug!(%name, %first, shadowed_by = %u, "duplicate vertex name"),
            None => {
                self.name_index
                    .try_reserve(1)
                    .map_err(|_| GraphError::allocation("name index"))?;
                self.name_index.insert(name.clone(), u);
            }
        }

        self.vertices.push(VertexData {
            name,
            color: UNCOLORED,
            incidence: Incidence::default(),
        });
        Ok(u)
    }
}

impl GraphEdgeEditing for NamedGraph {
    fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        let edge = Edge(u, v);
        let key = self.edge_policy.dedup_key(edge);
        if self.edge_index.contains(&key) {
            trace!(%edge, "skipping duplicate edge");
            return Ok(false);
        }

        // Reserve everything up front so a failure leaves the graph untouched
        if self.edges.len() >= NumEdges::MAX as usize {
            return Err(GraphError::allocation("edge ids"));
        }
        try_reserve_one(&mut self.edges, "edges")?;
        self.edge_index
            .try_reserve(1)
            .map_err(|_| GraphError::allocation("edge index"))?;
        self.vertices[u.index()].incidence.reserve_outgoing()?;
        self.vertices[v.index()].incidence.reserve_incoming()?;

        let id = self.edges.len() as EdgeId;
        self.edges.push(edge);
        self.edge_index.insert(key);
        self.vertices[u.index()].incidence.push_outgoing(id);
        self.vertices[v.index()].incidence.push_incoming(id);
        Ok(true)
    }
}
