use super::*;

/// Cycle detection on the underlying undirected graph and the derived tree test.
pub trait CycleDetection: AdjacencyList + Sized {
    /// Returns *true* if the graph contains a cycle when edge direction is ignored.
    ///
    /// In a directed graph the arcs `(u, v)` and `(v, u)` form a cycle of length two.
    fn has_cycle(&self) -> bool;

    /// Returns *true* if the graph is connected and acyclic (ignoring edge direction).
    /// A single vertex is a tree; the empty graph is not.
    fn is_tree(&self) -> bool {
        self.is_connected() && !self.has_cycle()
    }

    /// Returns *true* if every connected component is a tree
    fn is_forest(&self) -> bool {
        !self.has_cycle()
    }
}

impl<G> CycleDetection for G
where
    G: AdjacencyList,
{
    fn has_cycle(&self) -> bool {
        let mut visited = self.vertex_bitset_unset();

        for root in self.vertices() {
            if visited.set_bit(root) {
                continue;
            }

            let mut stack = vec![DfsFrame::new(
                root,
                None,
                self.neighbors_ignoring_direction(root),
            )];

            while let Some(frame) = stack.last_mut() {
                let Some(v) = frame.next_neighbor() else {
                    stack.pop();
                    continue;
                };

                // any second way into a reached vertex closes a cycle
                if visited.set_bit(v) {
                    return true;
                }

                let u = frame.node;
                stack.push(DfsFrame::new(
                    v,
                    Some(u),
                    self.neighbors_ignoring_direction(v),
                ));
            }
        }

        false
    }
}
