use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connected components of the underlying undirected graph, i.e. edge direction is ignored.
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components; each component is returned as the
    /// list of its vertices.
    fn connected_components(&self) -> ConnectedComponents<'_, Self>;

    /// Returns the number of connected components. The empty graph has none.
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if the graph has exactly one connected component
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() == 1
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

/// Iterator over the connected components of a graph, found by repeated DFS that starts at the
/// smallest vertex not yet covered.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    dfs: DFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            dfs: DFS::unstarted(graph).ignore_direction(),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.dfs.try_restart_at_unvisited() {
            return None;
        }
        Some(self.dfs.by_ref().collect_vec())
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

/// Sorts each component and the list of components, which makes them comparable
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    for comp in &mut components {
        comp.sort_unstable();
    }
    components.sort_unstable();
    components
}
