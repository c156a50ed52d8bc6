use std::fmt::{Debug, Display};

use crate::{DEFAULT_WEIGHT, Node, Weight};

/// An edge is defined by two nodes/endpoints.
/// Is is up to the graph whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// One entry of an adjacency list: the head of an edge and its weight
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeRecord {
    pub target: Node,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(target: Node, weight: Weight) -> Self {
        Self { target, weight }
    }
}

/// An edge together with its weight
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    pub source: Node,
    pub target: Node,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: Node, target: Node, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.source, self.target)
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.source, self.target, self.weight)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(Edge(u, v): Edge) -> Self {
        WeightedEdge::new(u, v, DEFAULT_WEIGHT)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from((u, v): (Node, Node)) -> Self {
        WeightedEdge::new(u, v, DEFAULT_WEIGHT)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from((u, v, w): (Node, Node, Weight)) -> Self {
        WeightedEdge::new(u, v, w)
    }
}
