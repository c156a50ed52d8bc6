/*!
Graph traversal iterators (BFS and DFS, with and without predecessor tracking).

The iterators follow outgoing edges by default. Structural queries that treat a directed graph
as its underlying undirected graph use [`TraversalSearch::ignore_direction`].

For algorithms that need to know when a vertex is *finished* (low-links, cycle detection) this
module also provides [`DfsFrame`], one entry of an explicit call stack.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node;
/// graphs without self-loops never produce such a pair otherwise.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates an empty sequencer
    fn empty() -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn empty() -> Self {
        VecDeque::new()
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and
/// the set of visited nodes. A node is marked visited as soon as it is pushed.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    ignore_direction: bool,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph. Neighbors of a node are pushed onto
/// a stack at once, so the visiting order is a preorder of *some* DFS tree.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start` is not a vertex **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.contains_node(start));
        let mut search = Self::unstarted(graph);
        search.visit(I::new_without_predecessor(start));
        search
    }

    /// Creates a traversal iterator with an empty frontier.
    /// Use [`TraversalSearch::try_restart_at_unvisited`] to start it.
    pub fn unstarted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer: S::empty(),
            ignore_direction: false,
            _item: PhantomData,
        }
    }

    /// Follows edges in both directions, i.e. traverses the underlying undirected graph
    pub fn ignore_direction(mut self) -> Self {
        self.ignore_direction = true;
        self
    }

    /// Returns *true* if `u` was already reached
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(u) => {
                self.visit(I::new_without_predecessor(u));
                true
            }
        }
    }

    fn visit(&mut self, item: I) {
        if !self.visited.set_bit(item.item()) {
            self.sequencer.push(item);
        }
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();
        let graph = self.graph;

        if self.ignore_direction {
            for v in graph.neighbors_ignoring_direction(u) {
                self.visit(I::new_with_predecessor(u, v));
            }
        } else {
            for v in graph.neighbors_of(u) {
                self.visit(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }
}

/// One entry of an explicit DFS call stack: the node, the node it was reached from, and the
/// iterator over the neighbors that remain to be explored.
pub(crate) struct DfsFrame<N> {
    pub node: Node,
    pub parent: Option<Node>,
    pub neighbors: N,
    skipped_parent: bool,
}

impl<N> DfsFrame<N>
where
    N: Iterator<Item = Node>,
{
    pub fn new(node: Node, parent: Option<Node>, neighbors: N) -> Self {
        Self {
            node,
            parent,
            neighbors,
            skipped_parent: false,
        }
    }

    /// Returns the next neighbor to explore. The edge back to the parent is skipped exactly
    /// once, so a second edge to the parent (e.g. the reverse arc in a digraph) is reported.
    pub fn next_neighbor(&mut self) -> Option<Node> {
        loop {
            let v = self.neighbors.next()?;
            if !self.skipped_parent && self.parent == Some(v) {
                self.skipped_parent = true;
                continue;
            }
            return Some(v);
        }
    }
}

/// Exposes traversal algorithms directly as methods on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing nodes in depth-first-search order
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns an iterator traversing nodes in breadth-first-search order, including predecessor information
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns an iterator traversing nodes in depth-first-search order, including predecessor information
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Checks whether there is a directed path from `u` to `v`
    fn is_node_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).any(|w| w == v)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn tree() -> AdjList {
        // 1 -> {2, 3}, 2 -> {4, 5}, 3 -> {6}
        let mut graph = AdjList::new(7, GraphFlags::directed());
        graph.add_edges([(1, 2), (1, 3), (2, 4), (2, 5), (3, 6)]);
        graph
    }

    #[test]
    fn bfs_order() {
        let graph = tree();
        let order = graph.bfs(1).collect_vec();

        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert_eq!(order[1..3].iter().copied().sorted().collect_vec(), vec![2, 3]);
        assert_eq!(order[3..].iter().copied().sorted().collect_vec(), vec![4, 5, 6]);
    }

    #[test]
    fn dfs_visits_reachable() {
        let graph = tree();
        assert_eq!(graph.dfs(2).sorted().collect_vec(), vec![2, 4, 5]);
        assert_eq!(graph.dfs(7).collect_vec(), vec![7]);
    }

    #[test]
    fn ignoring_direction() {
        let graph = tree();
        assert_eq!(
            graph.dfs(6).ignore_direction().sorted().collect_vec(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert!(graph.is_node_reachable(1, 5));
        assert!(!graph.is_node_reachable(5, 1));
    }

    #[test]
    fn predecessors() {
        let graph = tree();
        for (pred, node) in graph.bfs_with_predecessor(1) {
            if node == 1 {
                assert_eq!((pred, node).predecessor(), None);
            } else {
                assert!(graph.has_edge(pred, node));
            }
        }
    }

    #[test]
    fn restart() {
        let graph = tree();
        let mut search = graph.bfs(2);
        assert_eq!(search.by_ref().count(), 3);
        assert!(search.did_visit_node(4));
        assert!(!search.did_visit_node(1));

        assert!(search.try_restart_at_unvisited());
        assert_eq!(search.next(), Some(1));
        assert_eq!(search.by_ref().count(), 2);

        assert!(search.try_restart_at_unvisited());
        assert_eq!(search.next(), Some(7));
        assert!(search.next().is_none());
        assert!(!search.try_restart_at_unvisited());
    }

    #[test]
    fn frame_skips_parent_once() {
        let mut frame = DfsFrame::new(2, Some(1), [1, 3, 1].into_iter());
        assert_eq!(frame.next_neighbor(), Some(3));
        assert_eq!(frame.next_neighbor(), Some(1));
        assert_eq!(frame.next_neighbor(), None);
    }
}
