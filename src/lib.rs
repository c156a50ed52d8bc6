/*!
`adjgraphs` is a small library for weighted graphs that are stored either as an
**adjacency list** or as an **adjacency matrix**, together with a collection of
structural queries that work identically on both.

# Representation

We represent **nodes** as `u32` in the range `1..=n` where `n` is the order of the graph;
vertex ids in graph files use the same numbering.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; [`WeightedEdge`] attaches a weight.
Both vertices and edges carry an `f64` weight which defaults to `1` if the graph is unweighted.

### Directed vs Undirected

Whether a graph is directed, and whether its vertices/edges are weighted, is fixed at runtime by
[`GraphFlags`](ops::GraphFlags) when the graph is created or read from a file:

- In an **undirected** graph, adding `Edge(u, v)` makes `(v, u)` available as well and the edge
  is counted once.
- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are distinct.

Self-loops and parallel edges are rejected.

### Available Representations

- [`AdjList`](crate::repr::AdjList)
- [`AdjMatrix`](crate::repr::AdjMatrix)

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and both representations,
- [`algo`] includes the structural queries, implemented as traits on the graph itself
  (`graph.is_bipartite()`, `graph.compute_bridges()`, `graph.largest_shortest_path()`, ...),
- [`gens`] includes deterministic substructures (paths, cycles, cliques, trees) and a generator
  building random graphs from a [`GraphDescription`](io::GraphDescription),
- [`io`] includes the reader and writer for the textual graph format and for description files.

In most use-cases, `use adjgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `adjgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
