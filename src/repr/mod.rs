/*!
# Graph Representation

[`NamedGraph`] is the single storage backend of this crate: an arena of named vertices, an
insertion-ordered list of edges and, per vertex, an [`Incidence`] list of the edges it takes part
in. All other references to vertices (edges, orderings, colorings) are [`Vertex`] handles into the
arena, so the graph exclusively owns all storage and dropping it releases everything.
*/

use crate::{ops::*, *};

mod incidence;
mod named;

pub use incidence::*;
pub use named::*;
