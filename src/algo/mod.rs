/*!
# Graph Algorithms

This module provides the ordering and coloring algorithms built on top of the graph traits in
[`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use lexcolor::algo::*;
```
Algorithms are implemented as traits on the graph itself (e.g. `graph.lex_order(root)`), with
configurable structs ([`GreedyColorer`]) for non-default settings. Where feasible, they are also
available as iterators ([`LexSearch`]).
*/

mod coloring_check;
mod greedy_coloring;
mod lex_order;

use crate::{error::Result, prelude::*};

pub use coloring_check::*;
pub use greedy_coloring::*;
pub use lex_order::*;
