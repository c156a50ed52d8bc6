use std::ops::ControlFlow;

use super::{bridges::*, *};

/// Articulation points (cut vertices) are vertices whose removal increases the number of
/// connected components. Only defined for undirected graphs.
pub trait ArticulationPoints: AdjacencyList {
    /// Returns all articulation points in ascending order.
    /// Fails with [`GraphError::RequiresUndirected`] for directed graphs.
    fn compute_articulation_points(&self) -> GraphResult<Vec<Node>>;

    /// Returns *true* if the graph has at least one articulation point.
    /// Stops at the first one found. Directed graphs never have articulation points.
    fn has_articulation_point(&self) -> bool;
}

/// Decides whether the event proves its vertex to be an articulation point:
/// - a non-root `parent` whose `child` cannot reach above `parent`
/// - a DFS root with at least two tree children
fn articulation_point_of(event: LowLinkEvent) -> Option<Node> {
    match event {
        LowLinkEvent::ChildFinished {
            parent,
            parent_discovery,
            child_low,
            parent_is_root: false,
            ..
        } if child_low >= parent_discovery => Some(parent),
        LowLinkEvent::RootFinished { root, children } if children > 1 => Some(root),
        _ => None,
    }
}

impl<G> ArticulationPoints for G
where
    G: AdjacencyList,
{
    fn compute_articulation_points(&self) -> GraphResult<Vec<Node>> {
        if self.is_directed() {
            return Err(GraphError::RequiresUndirected("Articulation point search"));
        }

        let mut points = self.vertex_bitset_unset();
        search_low_links(self, |event| {
            if let Some(u) = articulation_point_of(event) {
                points.set_bit(u);
            }
            ControlFlow::Continue(())
        });

        Ok(points.iter_set_bits().collect_vec())
    }

    fn has_articulation_point(&self) -> bool {
        if self.is_directed() {
            return false;
        }

        let mut found = false;
        search_low_links(self, |event| {
            if articulation_point_of(event).is_some() {
                found = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        found
    }
}
