use super::*;

/// Tests whether every pair of distinct vertices is connected
pub trait Completeness: AdjacencyTest {
    /// Returns *true* if for every ordered pair `u != v` the edge `(u, v)` exists.
    /// For a directed graph this requires arcs in both directions.
    /// Graphs with at most one vertex are complete.
    fn is_complete(&self) -> bool;
}

impl<G> Completeness for G
where
    G: AdjacencyTest,
{
    fn is_complete(&self) -> bool {
        self.vertices()
            .cartesian_product(self.vertices())
            .all(|(u, v)| u == v || self.has_edge(u, v))
    }
}
