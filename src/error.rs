//! Error type shared by all fallible operations of this crate.

use thiserror::Error;

use crate::{NumColors, Vertex};

/// Errors raised while building, ordering, coloring, reading or writing a graph.
///
/// Lookups that routinely probe for existence (e.g. [`vertex_by_name`]) return `Option` instead.
///
/// [`vertex_by_name`]: crate::ops::VertexNames::vertex_by_name
#[derive(Error, Debug)]
pub enum GraphError {
    /// Growing one of the graph's collections could not obtain memory
    #[error("allocation failed while growing {what}")]
    AllocationFailure { what: &'static str },

    /// A vertex handle does not belong to the graph
    #[error("vertex {0} does not belong to the graph")]
    VertexNotInGraph(Vertex),

    /// Self-loops cannot be represented
    #[error("self-loop at vertex {0} is not supported")]
    SelfLoop(Vertex),

    /// The ordering was requested from a root outside of the graph
    #[error("root {0} does not belong to the graph")]
    RootNotInGraph(Vertex),

    /// The coloring order is not a permutation of the graph's vertices
    #[error("invalid coloring order: {0}")]
    InvalidOrder(String),

    /// A vertex needs a color beyond the configured candidate set
    #[error("vertex {vertex} needs more than {capacity} colors")]
    ColorCapacityExceeded { capacity: NumColors, vertex: Vertex },

    /// Malformed graph description
    #[error("parse error in line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias with [`GraphError`]
pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Creates an allocation failure error for the collection `what`
    pub fn allocation(what: &'static str) -> Self {
        GraphError::AllocationFailure { what }
    }

    /// Creates a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns *true* if the error stems from malformed input rather than from the environment
    pub fn is_input_error(&self) -> bool {
        matches!(self, GraphError::Parse { .. } | GraphError::SelfLoop(_))
    }
}

/// Reserves room for one more element or reports which collection could not grow
pub(crate) fn try_reserve_one<T>(vec: &mut Vec<T>, what: &'static str) -> Result<()> {
    vec.try_reserve(1).map_err(|_| GraphError::allocation(what))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::RootNotInGraph(Vertex::new(3)).to_string(),
            "root v3 does not belong to the graph"
        );
        assert_eq!(
            GraphError::parse(4, "unexpected `}`").to_string(),
            "parse error in line 4: unexpected `}`"
        );
        assert!(GraphError::parse(1, "x").is_input_error());
        assert!(!GraphError::VertexNotInGraph(Vertex::new(0)).is_input_error());
    }

    #[test]
    fn reserve_reports_collection() {
        let mut v: Vec<u64> = Vec::new();
        assert!(try_reserve_one(&mut v, "test").is_ok());
        assert!(v.capacity() >= 1);

        let err = GraphError::allocation("edges");
        assert!(matches!(err, GraphError::AllocationFailure { what: "edges" }));
        assert_eq!(err.to_string(), "allocation failed while growing edges");
    }
}
