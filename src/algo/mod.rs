/*!
# Graph Algorithms

This module provides the structural queries built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use adjgraphs::algo::*;
```
Every query is implemented as a trait with a blanket implementation, hence available on both
[`AdjList`](crate::repr::AdjList) and [`AdjMatrix`](crate::repr::AdjMatrix).
Connectivity, bipartiteness and cycle detection ignore edge direction.
*/

mod articulation;
mod bipartite;
mod bridges;
mod coloring;
mod completeness;
mod connectivity;
mod cycles;
mod distances;
mod properties;
mod traversal;

use crate::prelude::*;
use itertools::Itertools;

pub use articulation::*;
pub use bipartite::*;
pub use bridges::*;
pub use coloring::*;
pub use completeness::*;
pub use connectivity::*;
pub use cycles::*;
pub use distances::*;
pub use properties::*;
pub use traversal::*;
