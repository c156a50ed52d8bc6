/*!
# Node Representation

Vertices are identified by `Node = u32` in the dense range `1..=n`, matching the ids used in graph
description files. Every vertex carries a weight which defaults to [`DEFAULT_WEIGHT`] whenever the
graph is not vertex-weighted.
*/

use stream_bitset::bitset::BitSetImpl;

use crate::edge::EdgeRecord;

/// Nodes are the integers `1..=n`; `0` is never a valid node
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Weights of vertices and edges
pub type Weight = f64;

/// Weight used for vertices/edges of graphs that are not weighted
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// BitSet for Nodes. As nodes are 1-based, bitsets over a graph have `n + 1` entries.
pub type NodeBitSet = BitSetImpl<Node>;

/// Position of a node in a 0-based array.
/// ** Panics (in debug builds) if `u == 0` **
#[inline]
pub(crate) fn node_index(u: Node) -> usize {
    debug_assert!(u > 0, "Node ids start at 1");
    (u - 1) as usize
}

/// A vertex together with its outgoing adjacency as stored by [`AdjList`](crate::repr::AdjList).
///
/// Edge records are kept in insertion order internally but are always handed out
/// most-recently-inserted first.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexRecord {
    id: Node,
    weight: Weight,
    edges: Vec<EdgeRecord>,
}

impl VertexRecord {
    /// Creates a vertex without any edges
    pub fn new(id: Node, weight: Weight) -> Self {
        Self {
            id,
            weight,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> Node {
        self.id
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    /// Returns the outgoing edges, most recently inserted first
    pub fn edges(&self) -> impl Iterator<Item = &EdgeRecord> + '_ {
        self.edges.iter().rev()
    }

    /// Returns the number of outgoing edges
    pub fn degree(&self) -> NumNodes {
        self.edges.len() as NumNodes
    }

    /// Returns the edge towards `target` if it exists
    pub fn find_edge(&self, target: Node) -> Option<&EdgeRecord> {
        self.edges.iter().find(|e| e.target == target)
    }

    /// Makes `edge` the first edge in enumeration order
    pub(crate) fn prepend_edge(&mut self, edge: EdgeRecord) {
        self.edges.push(edge);
    }

    /// Removes the edge towards `target` and returns it
    pub(crate) fn remove_edge(&mut self, target: Node) -> Option<EdgeRecord> {
        let pos = self.edges.iter().position(|e| e.target == target)?;
        Some(self.edges.remove(pos))
    }

    /// Drops all edges towards `removed` and shifts every id above `removed` down by one.
    /// Returns the number of dropped edges.
    pub(crate) fn shift_after_removal(&mut self, removed: Node) -> NumNodes {
        if self.id > removed {
            self.id -= 1;
        }

        let before = self.edges.len();
        self.edges.retain(|e| e.target != removed);
        for edge in &mut self.edges {
            if edge.target > removed {
                edge.target -= 1;
            }
        }
        (before - self.edges.len()) as NumNodes
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn edges_are_enumerated_latest_first() {
        let mut v = VertexRecord::new(1, DEFAULT_WEIGHT);
        v.prepend_edge(EdgeRecord::new(2, 1.0));
        v.prepend_edge(EdgeRecord::new(3, 2.0));
        v.prepend_edge(EdgeRecord::new(4, 3.0));

        assert_eq!(v.edges().map(|e| e.target).collect_vec(), vec![4, 3, 2]);
        assert_eq!(v.degree(), 3);

        assert_eq!(v.remove_edge(3).map(|e| e.weight), Some(2.0));
        assert!(v.remove_edge(3).is_none());
        assert_eq!(v.edges().map(|e| e.target).collect_vec(), vec![4, 2]);
    }

    #[test]
    fn shift_after_removal() {
        let mut v = VertexRecord::new(5, 2.5);
        v.prepend_edge(EdgeRecord::new(2, 1.0));
        v.prepend_edge(EdgeRecord::new(3, 1.0));
        v.prepend_edge(EdgeRecord::new(6, 1.0));

        assert_eq!(v.shift_after_removal(3), 1);
        assert_eq!(v.id(), 4);
        assert_eq!(v.edges().map(|e| e.target).collect_vec(), vec![5, 2]);
        assert_eq!(v.weight(), 2.5);
    }
}
