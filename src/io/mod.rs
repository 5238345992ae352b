/*!
# IO

Reading and writing graphs in the [DOT language](https://graphviz.org/doc/info/lang.html) of
[GraphViz](https://graphviz.org/).

- [`DotReader`] parses the subset of DOT needed to describe plain graphs: vertex names, edge
  chains and (ignored) attributes. Subgraphs and ports are rejected.
- [`DotWriter`] emits a graph as `strict graph NAME { ... }`, optionally filling every vertex with
  a color derived from its assigned color.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`DotRead`] and [`DotWrite`] are shorthands with default settings implemented on graphs.

Errors are reported as [`GraphError`]: malformed input as [`GraphError::Parse`] with the line of
the offending token, failures of the underlying reader or writer as [`GraphError::Io`].
*/

pub mod dot;
pub mod dot_reader;
mod lexer;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{error::Result, prelude::*};

pub use dot::*;
pub use dot_reader::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format. No partial graph is returned.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a [`GraphError::Parse`] with a formatted message
macro_rules! parse_error {
    ($line : expr, $($fmt : tt)+) => {
        $crate::error::GraphError::parse($line, format!($($fmt)+))
    };
}

/// Shorthand for returning `Err(GraphError::Parse)` early when a condition fails
macro_rules! raise_parse_error_unless {
    ($cond : expr, $line : expr, $($fmt : tt)+) => {
        if !($cond) {
            return Err(parse_error!($line, $($fmt)+));
        }
    };
}

use parse_error;
use raise_parse_error_unless;
