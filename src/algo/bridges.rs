use std::ops::ControlFlow;

use super::*;

/// Bridges are edges whose removal increases the number of connected components.
/// Only defined for undirected graphs.
pub trait Bridges: AdjacencyList {
    /// Returns all bridges as normalized edges in lexicographical order.
    /// Fails with [`GraphError::RequiresUndirected`] for directed graphs.
    fn compute_bridges(&self) -> GraphResult<Vec<Edge>>;

    /// Returns *true* if the graph has at least one bridge.
    /// Stops at the first bridge found. Directed graphs never have bridges.
    fn has_bridge(&self) -> bool;
}

impl<G> Bridges for G
where
    G: AdjacencyList,
{
    fn compute_bridges(&self) -> GraphResult<Vec<Edge>> {
        if self.is_directed() {
            return Err(GraphError::RequiresUndirected("Bridge search"));
        }

        let mut bridges = Vec::new();
        search_low_links(self, |event| {
            if let LowLinkEvent::ChildFinished {
                parent,
                child,
                parent_discovery,
                child_low,
                ..
            } = event
            {
                if child_low > parent_discovery {
                    bridges.push(Edge(parent, child).normalized());
                }
            }
            ControlFlow::Continue(())
        });

        bridges.sort_unstable();
        Ok(bridges)
    }

    fn has_bridge(&self) -> bool {
        if self.is_directed() {
            return false;
        }

        let mut found = false;
        search_low_links(self, |event| match event {
            LowLinkEvent::ChildFinished {
                parent_discovery,
                child_low,
                ..
            } if child_low > parent_discovery => {
                found = true;
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        });
        found
    }
}

/// Reported by [`search_low_links`] whenever the DFS backtracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LowLinkEvent {
    /// `child` is finished and `low` of `child` is final
    ChildFinished {
        parent: Node,
        child: Node,
        parent_discovery: Node,
        child_low: Node,
        parent_is_root: bool,
    },
    /// The DFS tree at `root` is complete; `root` has `children` tree children
    RootFinished { root: Node, children: NumNodes },
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
}

impl NodeInfo {
    fn new(time: Node) -> Self {
        Self {
            low: time,
            discovery: time,
        }
    }

    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

/// Runs an iterative DFS computing discovery times and low-links (Tarjan) on an undirected graph
/// and reports every backtracking step to `visit`. Returning `Break` aborts the search.
/// Discovery times start at 1; a time of 0 marks an unvisited vertex.
pub(crate) fn search_low_links<G, F>(graph: &G, mut visit: F)
where
    G: AdjacencyList,
    F: FnMut(LowLinkEvent) -> ControlFlow<()>,
{
    let mut info = vec![NodeInfo::default(); graph.len() + 1];
    let mut time: Node = 0;

    for root in graph.vertices() {
        if info[root as usize].discovery != 0 {
            continue;
        }

        time += 1;
        info[root as usize] = NodeInfo::new(time);

        let mut children = 0;
        let mut stack = vec![DfsFrame::new(root, None, graph.neighbors_of(root))];

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;

            if let Some(v) = frame.next_neighbor() {
                if info[v as usize].discovery == 0 {
                    time += 1;
                    info[v as usize] = NodeInfo::new(time);
                    if u == root {
                        children += 1;
                    }
                    stack.push(DfsFrame::new(v, Some(u), graph.neighbors_of(v)));
                } else {
                    let v_disc = info[v as usize].discovery;
                    info[u as usize].update_low(v_disc);
                }
                continue;
            }

            let parent = frame.parent;
            stack.pop();

            if let Some(p) = parent {
                let child_low = info[u as usize].low;
                info[p as usize].update_low(child_low);

                let event = LowLinkEvent::ChildFinished {
                    parent: p,
                    child: u,
                    parent_discovery: info[p as usize].discovery,
                    child_low,
                    parent_is_root: p == root,
                };
                if visit(event).is_break() {
                    return;
                }
            }
        }

        if visit(LowLinkEvent::RootFinished { root, children }).is_break() {
            return;
        }
    }
}
