//! # Dot Writer
//!
//! Writes a graph as an undirected DOT graph:
//! ```text
//! strict graph NAME {
//!     A -- B
//! }
//! ```
//! Every unordered vertex pair is emitted once, even if both orientations are stored. A vertex gets
//! a line of its own if it is isolated or if its first edge would introduce it out of insertion
//! order, so reading the output back yields the same vertices in the same order. Names that are
//! not plain DOT identifiers or numerals are quoted, escaping `"` and `\`.
//!
//! With [`DotWriter::with_colors`], every vertex is listed with a fill color taken from a
//! [`DotColor`] palette indexed by its assigned color, which makes a coloring visible in GraphViz.
use std::{borrow::Cow, fmt::Display};

use fxhash::FxHashSet;

use super::{lexer::is_plain_id, *};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Emit `strict graph` instead of `graph`
    strict: bool,
    /// Emit a fill color per vertex
    with_colors: bool,
    /// Prefix of every statement line
    indent: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            strict: true,
            with_colors: false,
            indent: "\t".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, the header omits the `strict` keyword
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// If *true*, every vertex is written with a fill color derived from its assigned color
    pub fn with_colors(mut self, with_colors: bool) -> Self {
        self.with_colors = with_colors;
        self
    }

    /// Sets the prefix of every statement line (a tab by default)
    pub fn indent<S>(mut self, indent: S) -> Self
    where
        S: Into<String>,
    {
        self.indent = indent.into();
        self
    }

    /// Writes the opening line of the graph
    pub fn start_graph<W>(&self, writer: &mut W, name: &str) -> Result<()>
    where
        W: Write,
    {
        if self.strict {
            write!(writer, "strict ")?;
        }
        if name.is_empty() {
            writeln!(writer, "graph {{")?;
        } else {
            writeln!(writer, "graph {} {{", format_id(name))?;
        }
        Ok(())
    }

    /// Writes one statement per vertex, adding a fill color if configured
    pub fn write_vertices<W, G, I>(&self, writer: &mut W, graph: &G, vertices: I) -> Result<()>
    where
        W: Write,
        G: VertexNames + VertexColors,
        I: IntoIterator<Item = Vertex>,
    {
        for u in vertices {
            let name = format_id(graph.name_of(u));
            match DotColor::of(graph.color_of(u)).filter(|_| self.with_colors) {
                Some(color) => writeln!(
                    writer,
                    "{}{name} [style=filled, fillcolor={color}]",
                    self.indent
                )?,
                None => writeln!(writer, "{}{name}", self.indent)?,
            }
        }
        Ok(())
    }

    /// Writes one `u -- v` statement per unordered vertex pair in `edges`
    pub fn write_edges<W, G, I>(&self, writer: &mut W, graph: &G, edges: I) -> Result<()>
    where
        W: Write,
        G: VertexNames,
        I: IntoIterator<Item = Edge>,
    {
        let mut emitted = FxHashSet::default();
        for edge in edges {
            if emitted.insert(edge.normalized()) {
                self.write_edge(writer, graph, edge)?;
            }
        }
        Ok(())
    }

    fn write_edge<W, G>(&self, writer: &mut W, graph: &G, Edge(u, v): Edge) -> Result<()>
    where
        W: Write,
        G: VertexNames,
    {
        writeln!(
            writer,
            "{}{} -- {}",
            self.indent,
            format_id(graph.name_of(u)),
            format_id(graph.name_of(v))
        )?;
        Ok(())
    }

    /// Interleaves vertex and edge statements such that vertices are introduced in insertion order
    fn write_in_insertion_order<W, G>(&self, writer: &mut W, graph: &G) -> Result<()>
    where
        W: Write,
        G: IncidenceList + VertexNames + VertexColors,
    {
        let mut introduced = graph.vertex_bitset_unset();
        // all vertices below `pending` are introduced
        let mut pending: RawVertex = 0;

        let mut emitted = FxHashSet::default();
        for edge @ Edge(u, v) in graph.edges() {
            if !emitted.insert(edge.normalized()) {
                continue;
            }

            let fresh = |w: Vertex| !introduced.get_bit(w.raw());
            let bound = match (fresh(u), fresh(v)) {
                (false, false) => None,
                (true, false) => Some(u),
                (false, true) => Some(v),
                // the edge introduces `u` before `v`, unless a vertex in between is still missing
                (true, true) if u < v => {
                    let gap = (u.raw() + 1..v.raw()).any(|w| fresh(Vertex::new(w)));
                    Some(if gap { v } else { u })
                }
                (true, true) => Some(u),
            };

            if let Some(bound) = bound {
                self.introduce_below(writer, graph, &mut introduced, &mut pending, bound.raw())?;
            }
            introduced.set_bit(u.raw());
            introduced.set_bit(v.raw());
            self.write_edge(writer, graph, edge)?;
        }

        self.introduce_below(
            writer,
            graph,
            &mut introduced,
            &mut pending,
            graph.number_of_vertices(),
        )
    }

    /// Writes a line for every vertex below `bound` that was not introduced yet
    fn introduce_below<W, G>(
        &self,
        writer: &mut W,
        graph: &G,
        introduced: &mut VertexBitSet,
        pending: &mut RawVertex,
        bound: RawVertex,
    ) -> Result<()>
    where
        W: Write,
        G: VertexNames + VertexColors,
    {
        while *pending < bound {
            if !introduced.set_bit(*pending) {
                self.write_vertices(writer, graph, [Vertex::new(*pending)])?;
            }
            *pending += 1;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")?;
        Ok(())
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: IncidenceList + VertexNames + VertexColors,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer, graph.name())?;
        if self.with_colors {
            self.write_vertices(&mut writer, graph, graph.vertices())?;
            self.write_edges(&mut writer, graph, graph.edges())?;
        } else {
            self.write_in_insertion_order(&mut writer, graph)?;
        }
        self.finish_graph(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: IncidenceList + VertexNames + VertexColors,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

/// Quotes `name` unless it is a plain identifier or numeral
fn format_id(name: &str) -> Cow<'_, str> {
    if is_plain_id(name) {
        return Cow::Borrowed(name);
    }

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Fill colors used to visualize a coloring. Color `c >= 1` maps to the `(c - 1) % 12`-th entry,
/// so colorings with more than twelve colors repeat fill colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Red,
    Blue,
    Green,
    Gold,
    Orchid,
    Cyan,
    Orange,
    Pink,
    Khaki,
    SlateBlue,
    LimeGreen,
    Tan,
}

impl DotColor {
    const PALETTE: [DotColor; 12] = [
        DotColor::Red,
        DotColor::Blue,
        DotColor::Green,
        DotColor::Gold,
        DotColor::Orchid,
        DotColor::Cyan,
        DotColor::Orange,
        DotColor::Pink,
        DotColor::Khaki,
        DotColor::SlateBlue,
        DotColor::LimeGreen,
        DotColor::Tan,
    ];

    /// Returns the fill color of a vertex with color `color`, or `None` if it is [`UNCOLORED`]
    pub fn of(color: Color) -> Option<DotColor> {
        let index = color.checked_sub(1)? as usize % Self::PALETTE.len();
        Some(Self::PALETTE[index])
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::{algo::*, gens::GeneratorSubstructures};

    fn to_dot<G: DotWrite>(graph: &G) -> String {
        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn sorted_pairs(graph: &NamedGraph) -> Vec<(String, String)> {
        graph
            .edges()
            .map(|e| {
                let Edge(u, v) = e;
                let (a, b) = (graph.name_of(u), graph.name_of(v));
                if a <= b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                }
            })
            .sorted()
            .dedup()
            .collect()
    }

    #[test]
    fn writes_edges_in_insertion_order() {
        let graph = NamedGraph::from_named_edges("G", [("A", "B"), ("B", "C")]).unwrap();
        assert_eq!(to_dot(&graph), "strict graph G {\n\tA -- B\n\tB -- C\n}\n");
    }

    #[test]
    fn isolated_vertices_and_reciprocal_edges() {
        let mut graph =
            NamedGraph::from_named_edges("G", [("a", "b"), ("b", "a"), ("b", "c")]).unwrap();
        graph.add_vertex("iso").unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(
            to_dot(&graph),
            "strict graph G {\n\ta -- b\n\tb -- c\n\tiso\n}\n"
        );
    }

    #[test]
    fn keeps_insertion_order() {
        let mut graph = NamedGraph::new("G");
        for name in ["a", "b", "c", "d", "e"] {
            graph.add_vertex(name).unwrap();
        }
        let [a, b, c, d, e] = ["a", "b", "c", "d", "e"].map(|name| vertex_named(&graph, name));
        graph.add_edges([(c, a), (b, e), (d, a)]).unwrap();

        let text = to_dot(&graph);
        assert_eq!(
            text,
            "strict graph G {\n\ta\n\tb\n\tc -- a\n\td\n\tb -- e\n\td -- a\n}\n"
        );

        let read = DotReader::new().read_str(&text).unwrap();
        assert_eq!(read.names().collect_vec(), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(
            read.edges().collect_vec(),
            graph.edges().collect_vec()
        );
    }

    #[test]
    fn quotes_names() {
        let graph = NamedGraph::from_named_edges(
            "my graph",
            [("New York", "42"), ("say \"hi\"", "node")],
        )
        .unwrap();
        assert_eq!(
            to_dot(&graph),
            "strict graph \"my graph\" {\n\t\"New York\" -- 42\n\t\"say \\\"hi\\\"\" -- \"node\"\n}\n"
        );

        let graph = NamedGraph::from_named_edges("", [("a\\", "b\\\"c")]).unwrap();
        assert_eq!(
            to_dot(&graph),
            "strict graph {\n\t\"a\\\\\" -- \"b\\\\\\\"c\"\n}\n"
        );
    }

    #[test]
    fn round_trip_keeps_special_names() {
        let names = [
            "a\\",
            "back\\slash",
            "say \"hi\"",
            "two\nlines",
            "\\\"",
            "node",
            "ends with \\\\",
            "crlf\\\r\n",
        ];
        let mut graph = NamedGraph::new("odd \\ names");
        let vertices = names.map(|name| graph.add_vertex(name).unwrap());
        graph
            .connect_path(vertices[..names.len() - 1].iter().copied())
            .unwrap();

        let text = to_dot(&graph);
        let read = DotReader::new().read_str(&text).unwrap();

        assert_eq!(read.name(), "odd \\ names");
        assert_eq!(read.names().collect_vec(), names.to_vec());
        assert_eq!(read.edges().collect_vec(), graph.edges().collect_vec());
        assert_eq!(read.isolated_vertices().collect_vec(), vec![vertices[7]]);
    }

    #[test]
    fn writer_settings() {
        let mut graph = NamedGraph::from_named_edges("", [("a", "b"), ("b", "c")]).unwrap();
        let iso = graph.add_vertex("d").unwrap();
        graph.color_lex(vertex_named(&graph, "a")).unwrap();
        assert_eq!(graph.color_of(iso), 1);

        let mut buffer = Vec::new();
        DotWriter::new()
            .strict(false)
            .with_colors(true)
            .indent("  ")
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph {\n\
             \x20 a [style=filled, fillcolor=red]\n\
             \x20 b [style=filled, fillcolor=blue]\n\
             \x20 c [style=filled, fillcolor=red]\n\
             \x20 d [style=filled, fillcolor=red]\n\
             \x20 a -- b\n\
             \x20 b -- c\n\
             }\n"
        );
    }

    fn vertex_named(graph: &NamedGraph, name: &str) -> Vertex {
        graph.vertex_by_name(name).unwrap()
    }

    #[test]
    fn palette() {
        assert_eq!(DotColor::of(UNCOLORED), None);
        assert_eq!(DotColor::of(1), Some(DotColor::Red));
        assert_eq!(DotColor::of(13), Some(DotColor::Red));
        assert_eq!(DotColor::SlateBlue.to_string(), "slateblue");
    }

    #[test]
    fn round_trip() {
        for graph in crate::testing::random_graphs(0xd07, 30) {
            let text = to_dot(&graph);
            let read = DotReader::new().read_str(&text).unwrap();

            assert_eq!(read.names().collect_vec(), graph.names().collect_vec());
            assert_eq!(sorted_pairs(&read), sorted_pairs(&graph));
        }
    }

    #[test]
    fn round_trip_through_file() {
        let graph =
            NamedGraph::from_named_edges("file", [("x", "y"), ("y", "z"), ("z", "x")]).unwrap();
        let path = std::env::temp_dir().join(format!("lexcolor-{}.dot", std::process::id()));

        graph.try_write_dot_file(&path).unwrap();
        let read = NamedGraph::try_read_dot_file(&path);
        std::fs::remove_file(&path).unwrap();

        let read = read.unwrap();
        assert_eq!(read.name(), "file");
        assert_eq!(read.names().collect_vec(), vec!["x", "y", "z"]);
        assert_eq!(sorted_pairs(&read), sorted_pairs(&graph));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("lexcolor-does-not-exist/graph.dot");
        assert!(matches!(
            NamedGraph::try_read_dot_file(path),
            Err(GraphError::Io(_))
        ));
    }
}
