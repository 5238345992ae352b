//! # Dot Reader
//!
//! Parses a single graph in the DOT language:
//! ```text
//! graph   : [ strict ] ( graph | digraph ) [ ID ] '{' stmt_list '}'
//! stmt    : ID [ attr_list ]                       node statement
//!         | ID ( edgeop ID )+ [ attr_list ]        edge chain
//!         | ( graph | node | edge ) attr_list      ignored
//!         | ID '=' ID                              ignored
//! ```
//! Attributes are parsed and discarded. Vertices are created on their first appearance, edges
//! are inserted in declaration order through [`GraphEdgeEditing::add_edge`], so the reader's
//! [`EdgePolicy`] decides which of them are duplicates.
//!
//! A `strict graph` has no parallel edges: an edge whose endpoints are already connected in
//! either orientation is skipped, regardless of the edge policy.
//!
//! `digraph`s are accepted as well (with `->` as edge operator) and read as undirected graphs
//! whose stored edges keep their orientation.
use tracing::{debug, trace};

use super::{lexer::*, *};

/// A reader for the DOT language
#[derive(Debug, Clone, Default)]
pub struct DotReader {
    edge_policy: EdgePolicy,
}

impl DotReader {
    /// Creates a reader producing graphs with [`EdgePolicy::Ordered`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge policy of the produced graphs
    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Parses a graph from a string
    ///
    /// # Example
    /// ```
    /// use lexcolor::{prelude::*, io::*};
    ///
    /// let g = DotReader::new()
    ///     .read_str("strict graph G { a -- b -- c; d [shape=box] }")
    ///     .unwrap();
    ///
    /// assert_eq!(g.name(), "G");
    /// assert_eq!(g.names().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    /// assert_eq!(g.number_of_edges(), 2);
    /// ```
    pub fn read_str(&self, input: &str) -> Result<NamedGraph> {
        let tokens = tokenize(input)?;
        let mut parser = Parser {
            tokens: &tokens,
            pos: 0,
            strict: false,
            directed: false,
        };
        let graph = parser.graph(self.edge_policy)?;

        debug!(
            name = graph.name(),
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "read DOT graph"
        );
        Ok(graph)
    }
}

impl GraphReader<NamedGraph> for DotReader {
    fn try_read_graph<R>(&self, mut reader: R) -> Result<NamedGraph>
    where
        R: BufRead,
    {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.read_str(&input)
    }
}

/// Trait for reading a graph in the DOT language.
/// Shorthand for default settings.
pub trait DotRead: Sized {
    /// Tries to read the graph from a reader
    fn try_read_dot<R>(reader: R) -> Result<Self>
    where
        R: BufRead;

    /// Tries to read the graph from a file
    fn try_read_dot_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_dot(BufReader::new(File::open(path)?))
    }
}

impl DotRead for NamedGraph {
    fn try_read_dot<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        DotReader::new().try_read_graph(reader)
    }
}

/// Recursive descent over the token list of one graph
struct Parser<'a> {
    tokens: &'a [(usize, Token)],
    pos: usize,
    strict: bool,
    directed: bool,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|(_, token)| token)
    }

    fn bump(&mut self) -> Option<&'a (usize, Token)> {
        let next = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(next)
    }

    /// Line of the current token, or of the last one at the end of input
    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or(self.tokens.last())
            .map_or(1, |&(line, _)| line)
    }

    fn at(&self, expected: &Token) -> bool {
        self.peek() == Some(expected)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|token| token.is_keyword(keyword))
    }

    fn at_subgraph(&self) -> bool {
        self.at_keyword("subgraph") || self.at(&Token::LBrace)
    }

    fn eat(&mut self, expected: &Token) -> bool {
        let matches = self.at(expected);
        self.pos += matches as usize;
        matches
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let matches = self.at_keyword(keyword);
        self.pos += matches as usize;
        matches
    }

    fn unexpected(&self, expected: &str) -> GraphError {
        match self.peek() {
            Some(token) => parse_error!(self.line(), "unexpected {token}, expected {expected}"),
            None => parse_error!(self.line(), "unexpected end of input, expected {expected}"),
        }
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        if self.eat(&expected) {
            Ok(())
        } else {
            Err(self.unexpected(&expected.to_string()))
        }
    }

    fn graph(&mut self, policy: EdgePolicy) -> Result<NamedGraph> {
        self.strict = self.eat_keyword("strict");
        self.directed = if self.eat_keyword("graph") {
            false
        } else if self.eat_keyword("digraph") {
            true
        } else {
            return Err(self.unexpected("`graph` or `digraph`"));
        };

        let name = if self.at(&Token::LBrace) {
            String::new()
        } else {
            self.id()?
        };
        self.expect(Token::LBrace)?;

        let mut graph = NamedGraph::with_edge_policy(name, policy);
        self.statements(&mut graph)?;
        self.expect(Token::RBrace)?;

        if let Some(token) = self.peek() {
            return Err(parse_error!(
                self.line(),
                "unexpected {token} after the end of the graph"
            ));
        }
        Ok(graph)
    }

    fn statements(&mut self, graph: &mut NamedGraph) -> Result<()> {
        loop {
            match self.peek() {
                None | Some(Token::RBrace) => return Ok(()),
                Some(Token::Semicolon) => self.pos += 1,
                Some(_) => self.statement(graph)?,
            }
        }
    }

    fn statement(&mut self, graph: &mut NamedGraph) -> Result<()> {
        raise_parse_error_unless!(!self.at_subgraph(), self.line(), "subgraphs are not supported");

        if self.eat_keyword("graph") || self.eat_keyword("node") || self.eat_keyword("edge") {
            raise_parse_error_unless!(
                self.at(&Token::LBracket),
                self.line(),
                "expected `[` after attribute statement"
            );
            return self.attributes();
        }

        let first = self.id()?;
        if self.eat(&Token::Equals) {
            self.id()?;
            return Ok(());
        }

        let mut u = self.vertex(graph, &first)?;
        while let Some(line) = self.edge_op()? {
            raise_parse_error_unless!(!self.at_subgraph(), self.line(), "subgraphs are not supported");
            let name = self.id()?;
            let v = self.vertex(graph, &name)?;

            if self.strict && !self.directed && graph.has_edge(u, v) {
                trace!(%u, %v, line, "merging parallel edge of strict graph");
                u = v;
                continue;
            }

            graph.add_edge(u, v).map_err(|err| match err {
                GraphError::SelfLoop(_) => {
                    parse_error!(line, "self-loop at `{name}` is not supported")
                }
                err => err,
            })?;
            u = v;
        }

        self.attributes()
    }

    /// Resolves a vertex by name, creating it on first appearance
    fn vertex(&mut self, graph: &mut NamedGraph, name: &str) -> Result<Vertex> {
        raise_parse_error_unless!(!self.at(&Token::Colon), self.line(), "ports are not supported");
        graph.vertex_by_name_or_insert(name)
    }

    /// Consumes an edge operator and returns its line, if there is one
    fn edge_op(&mut self) -> Result<Option<usize>> {
        let line = self.line();
        let directed = match self.peek() {
            Some(Token::UndirectedEdge) => false,
            Some(Token::DirectedEdge) => true,
            _ => return Ok(None),
        };

        raise_parse_error_unless!(
            directed == self.directed,
            line,
            "`{}` is not allowed in a {}",
            if directed { "->" } else { "--" },
            if self.directed { "digraph" } else { "graph" }
        );
        self.pos += 1;
        Ok(Some(line))
    }

    /// Parses an ID, concatenating quoted strings joined by `+`
    fn id(&mut self) -> Result<String> {
        let line = self.line();
        let Some((_, token)) = self.bump() else {
            return Err(self.unexpected("an ID"));
        };
        let Token::Id { text, quoted } = token else {
            return Err(parse_error!(line, "unexpected {token}, expected an ID"));
        };
        raise_parse_error_unless!(
            !token.is_any_keyword(),
            line,
            "unexpected keyword {token}, expected an ID"
        );

        let mut text = text.clone();
        if *quoted {
            while self.eat(&Token::Plus) {
                match self.bump() {
                    Some((_, Token::Id { text: tail, quoted: true })) => text.push_str(tail),
                    _ => {
                        return Err(parse_error!(line, "expected a quoted string after `+`"));
                    }
                }
            }
        }
        Ok(text)
    }

    /// Skips any number of attribute lists `[a=b, c; d]`
    fn attributes(&mut self) -> Result<()> {
        while self.eat(&Token::LBracket) {
            loop {
                match self.peek() {
                    Some(Token::RBracket) => {
                        self.pos += 1;
                        break;
                    }
                    Some(Token::Comma | Token::Semicolon) => self.pos += 1,
                    Some(Token::Id { .. }) => {
                        self.id()?;
                        if self.eat(&Token::Equals) {
                            self.id()?;
                        }
                    }
                    _ => return Err(self.unexpected("an attribute or `]`")),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn read(input: &str) -> NamedGraph {
        DotReader::new().read_str(input).unwrap()
    }

    fn named_edges(graph: &NamedGraph) -> Vec<(String, String)> {
        graph
            .edges()
            .map(|Edge(u, v)| (graph.name_of(u).to_string(), graph.name_of(v).to_string()))
            .collect()
    }

    fn pairs(edges: &[(&str, &str)]) -> Vec<(String, String)> {
        edges
            .iter()
            .map(|&(u, v)| (u.to_string(), v.to_string()))
            .collect()
    }

    fn parse_error_line(input: &str) -> usize {
        match DotReader::new().read_str(input) {
            Err(GraphError::Parse { line, .. }) => line,
            other => panic!("{input:?} yielded {other:?}"),
        }
    }

    #[test]
    fn edge_chains_and_nodes() {
        let graph = read(
            "strict graph G {\n\
             \ta -- b -- c;\n\
             \td\n\
             \tc -- a [color=red, style=bold]\n\
             }\n",
        );

        assert_eq!(graph.name(), "G");
        assert_eq!(graph.names().collect_vec(), vec!["a", "b", "c", "d"]);
        assert_eq!(
            named_edges(&graph),
            pairs(&[("a", "b"), ("b", "c"), ("c", "a")])
        );
        assert_eq!(graph.isolated_vertices().collect_vec(), vec![vertex(&graph, "d")]);
    }

    fn vertex(graph: &NamedGraph, name: &str) -> Vertex {
        graph.vertex_by_name(name).unwrap()
    }

    #[test]
    fn anonymous_graph_and_attribute_statements() {
        let graph = read(
            "graph {\n\
             graph [rankdir=LR]; node [shape=circle]\n\
             edge [color=blue];\n\
             label = \"colors\"\n\
             x; y [label=\"why\"]; x -- y\n\
             }",
        );
        assert_eq!(graph.name(), "");
        assert_eq!(graph.names().collect_vec(), vec!["x", "y"]);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn quoted_and_numeral_ids() {
        let graph = read(r#"graph "my graph" { "New York" -- 42 -- "a" + "b"; -1.5 }"#);
        assert_eq!(graph.name(), "my graph");
        assert_eq!(
            graph.names().collect_vec(),
            vec!["New York", "42", "ab", "-1.5"]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let graph = read("STRICT Graph g { Node [shape=box] a -- b }");
        assert_eq!(graph.number_of_vertices(), 2);
    }

    #[test]
    fn comments() {
        let graph = read(
            "# generated\n\
             graph g { // vertices\n\
             a /* first */ -- b\n\
             }",
        );
        assert_eq!(named_edges(&graph), pairs(&[("a", "b")]));
    }

    #[test]
    fn duplicates_follow_edge_policy() {
        let input = "graph g { a -- b; a -- b; b -- a }";

        let ordered = DotReader::new().read_str(input).unwrap();
        assert_eq!(named_edges(&ordered), pairs(&[("a", "b"), ("b", "a")]));

        let unordered = DotReader::new()
            .edge_policy(EdgePolicy::Unordered)
            .read_str(input)
            .unwrap();
        assert_eq!(unordered.edge_policy(), EdgePolicy::Unordered);
        assert_eq!(named_edges(&unordered), pairs(&[("a", "b")]));
    }

    #[test]
    fn strict_graphs_merge_parallel_edges() {
        let strict = read("strict graph g { a -- b; b -- a; b -- c -- b; a -- b }");
        assert_eq!(named_edges(&strict), pairs(&[("a", "b"), ("b", "c")]));

        let plain = read("graph g { a -- b; b -- a }");
        assert_eq!(named_edges(&plain), pairs(&[("a", "b"), ("b", "a")]));

        // directed pairs of opposite orientation are not parallel
        let digraph = read("strict digraph d { a -> b; b -> a; a -> b }");
        assert_eq!(named_edges(&digraph), pairs(&[("a", "b"), ("b", "a")]));

        // self-loops are still rejected
        assert_eq!(parse_error_line("strict graph g {\n a -- b\n a -- a }"), 3);
    }

    #[test]
    fn digraphs() {
        let graph = read("digraph d { a -> b -> c }");
        assert_eq!(named_edges(&graph), pairs(&[("a", "b"), ("b", "c")]));

        assert_eq!(parse_error_line("digraph d {\n a -- b }"), 2);
        assert_eq!(parse_error_line("graph g {\n\n a -> b }"), 3);
    }

    #[test]
    fn rejects_malformed_input() {
        for (input, line) in [
            ("", 1),
            ("graph", 1),
            ("grph g { }", 1),
            ("graph g {\n a -- b", 2),
            ("graph g { a -- }", 1),
            ("graph g {\n a -- ; }", 2),
            ("graph g { a [color=red }", 1),
            ("graph g { a } b", 1),
            ("graph g { node }", 1),
            ("graph g { a = }", 1),
            ("graph g { node -- a }", 1),
            ("graph g {\n\n a -- \"b\" + c }", 3),
        ] {
            assert_eq!(parse_error_line(input), line, "{input:?}");
        }
    }

    #[test]
    fn rejects_subgraphs_and_ports() {
        for input in [
            "graph g { subgraph s { a } }",
            "graph g { { a b } }",
            "graph g { a -- { b c } }",
            "graph g { a -- subgraph s { b } }",
            "graph g { a:n -- b }",
            "graph g { a -- b:s }",
        ] {
            let err = DotReader::new().read_str(input).unwrap_err();
            assert!(matches!(err, GraphError::Parse { .. }), "{input:?}");
            assert!(err.is_input_error());
        }
    }

    #[test]
    fn rejects_self_loops() {
        let err = DotReader::new()
            .read_str("graph g {\n a -- b\n b -- b\n}")
            .unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
        assert_eq!(
            err.to_string(),
            "parse error in line 3: self-loop at `b` is not supported"
        );
    }

    #[test]
    fn reads_from_buffered_reader() {
        let input = b"graph g { a -- b }".as_slice();
        let graph = NamedGraph::try_read_dot(input).unwrap();
        assert_eq!(graph.number_of_edges(), 1);

        let err = NamedGraph::try_read_dot(b"graph g { \xff }".as_slice()).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
