/*!
# Graph Representations

Two storage backends implement the full [`GraphEngine`] interface:

- [`AdjList`]: one record per vertex owning a list of outgoing edges. Edges are enumerated most
  recently inserted first, vertices are stored with the highest id first.
- [`AdjMatrix`]: a dense `n x n` table of optional edge weights. A weight of `0` is a valid edge;
  only an empty cell means "no edge".

Both behave identically for every query in [`algo`](crate::algo); they only differ in the order in
which neighbors and vertices are enumerated.
*/

use std::fmt;

use crate::{ops::*, *};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

/// Checks whether the edge `(u, v)` may be added to `graph`.
/// Self-loops are rejected before the endpoints are looked at.
pub(crate) fn validate_new_edge<G>(graph: &G, u: Node, v: Node) -> GraphResult<()>
where
    G: AdjacencyTest,
{
    if u == v {
        return Err(GraphError::SelfLoop(u));
    }

    graph.check_node(u)?;
    graph.check_node(v)?;

    if graph.has_edge(u, v) {
        return Err(GraphError::DuplicateEdge(u, v));
    }

    Ok(())
}

/// Reserves room for `len` entries of a graph of order `n` without aborting on failure
pub(crate) fn try_with_capacity<T>(n: NumNodes, len: usize) -> GraphResult<Vec<T>> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(len)
        .map_err(|_| GraphError::TooLarge(n))?;
    Ok(storage)
}

/// Writes one line per vertex (in storage order) listing its weight and outgoing neighbors
pub(crate) fn fmt_adjacency<G>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: AdjacencyList,
{
    for u in graph.vertices_in_storage_order() {
        write!(f, "Vertex {u}")?;
        if graph.vertices_weighted() {
            write!(f, " (weight {})", graph.vertex_weight(u))?;
        }
        write!(f, " ->")?;

        let mut is_isolated = true;
        for (v, w) in graph.weighted_neighbors_of(u) {
            is_isolated = false;
            if graph.edges_weighted() {
                write!(f, " {v}[{w}]")?;
            } else {
                write!(f, " {v}")?;
            }
        }

        if is_isolated {
            write!(f, " (none)")?;
        }
        writeln!(f)?;
    }

    Ok(())
}
