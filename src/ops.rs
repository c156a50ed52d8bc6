use std::ops::RangeInclusive;

use itertools::Itertools;
use log::{debug, warn};

use crate::*;

/// Runtime properties fixed when a graph is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphFlags {
    pub directed: bool,
    pub vertices_weighted: bool,
    pub edges_weighted: bool,
}

impl GraphFlags {
    /// Flags of an unweighted graph
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    /// Unweighted undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Unweighted directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Sets whether vertices carry weights
    pub fn with_vertex_weights(mut self, weighted: bool) -> Self {
        self.vertices_weighted = weighted;
        self
    }

    /// Sets whether edges carry weights
    pub fn with_edge_weights(mut self, weighted: bool) -> Self {
        self.edges_weighted = weighted;
        self
    }
}

/// Gives access to the flags a graph was created with
pub trait GraphType {
    fn flags(&self) -> GraphFlags;

    fn is_directed(&self) -> bool {
        self.flags().directed
    }

    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    fn vertices_weighted(&self) -> bool {
        self.flags().vertices_weighted
    }

    fn edges_weighted(&self) -> bool {
        self.flags().edges_weighted
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes of the graph
    fn order(&self) -> NumNodes {
        self.number_of_nodes()
    }

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns all vertex ids in ascending order.
    /// In contrast to an iterator borrowing the graph, the range may be used where
    /// additional mutable references of self are needed.
    fn vertices(&self) -> RangeInclusive<Node> {
        1..=self.number_of_nodes()
    }

    /// Returns all vertex ids in the order the representation stores them.
    /// Writers use this order so that a file reproduces the in-memory layout.
    fn vertices_in_storage_order(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices()
    }

    /// Returns the weight of vertex `u`
    /// ** Panics if `u` is not a vertex **
    fn vertex_weight(&self, u: Node) -> Weight;

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_node(&self, u: Node) -> bool {
        self.vertices().contains(&u)
    }

    /// Returns an error if `u` is not a vertex of the graph
    fn check_node(&self, u: Node) -> GraphResult<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                order: self.number_of_nodes(),
            })
        }
    }

    /// Returns empty bitset with one entry per node (plus the unused entry `0`)
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes() + 1)
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Undirected edges are counted once.
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over the (outgoing) neighbors of a given vertex
    /// in the order of the underlying representation.
    /// ** Panics if `u` is not a vertex **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the (outgoing) neighbors of a given vertex
    /// together with the weight of the connecting edge.
    /// ** Panics if `u` is not a vertex **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u` is not a vertex **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns all `v` with an edge `(v, u)`.
    /// The default implementation scans the adjacency of every vertex.
    /// ** Panics if `u` is not a vertex **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices()
            .filter(move |&v| self.neighbors_of(v).any(|w| w == u))
    }

    /// Returns the neighbors of `u` when edge orientation is dropped.
    /// For directed graphs, a vertex may appear twice if edges in both directions exist.
    /// ** Panics if `u` is not a vertex **
    fn neighbors_ignoring_direction(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let incoming = self.is_directed().then(|| self.in_neighbors_of(u));
        self.neighbors_of(u).chain(incoming.into_iter().flatten())
    }

    /// Returns the degree of every vertex in ascending vertex order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum (out-)degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u` is not a vertex **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
            .filter(move |e| !only_normalized || e.edge().is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered,
    /// which lists every edge of an undirected graph exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in lexicographical order
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_by_key(|e| e.edge());
        edges.into_iter()
    }
}

/// Traits pertaining to edge existence queries
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the edge `(u, v)` if it exists.
    /// Returns `None` if either endpoint is not a vertex.
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* exactly if the graph contains the edge `(u, v)`.
    /// Returns *false* if either endpoint is not a vertex.
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with vertices `1..=n` with default weights.
    /// Fails with [`GraphError::TooLarge`] if the storage cannot be allocated.
    fn try_new(n: NumNodes, flags: GraphFlags) -> GraphResult<Self>;

    /// Creates an empty graph with vertices `1..=n` with default weights
    /// ** Panics if the storage cannot be allocated **
    fn new(n: NumNodes, flags: GraphFlags) -> Self {
        match Self::try_new(n, flags) {
            Ok(graph) => graph,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Provides basic operations to add and remove edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `(u, v)` with the given weight.
    /// In an undirected graph, `(v, u)` is mirrored.
    ///
    /// Fails without modifying the graph if `u == v`, if either endpoint is not a vertex,
    /// or if the edge already exists.
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> GraphResult<()>;

    /// Adds the edge `(u, v)` with the given weight.
    /// ** Panics if the edge cannot be added **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        if let Err(e) = self.try_add_edge(u, v, weight) {
            panic!("Cannot add edge ({u},{v}): {e}");
        }
    }

    /// Adds all edges in the collection. Rejected edges are reported and skipped.
    /// Returns the number of edges that were added.
    fn add_edges<I, E>(&mut self, edges: I) -> NumEdges
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut added = 0;
        for e in edges {
            let e: WeightedEdge = e.into();
            match self.try_add_edge(e.source, e.target, e.weight) {
                Ok(()) => added += 1,
                Err(err) => warn!("Skipping edge {e}: {err}"),
            }
        }
        added
    }

    /// Removes the edge `(u, v)` and returns its weight.
    /// In an undirected graph, `(v, u)` is removed as well.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<Weight>;
}

/// Provides operations to add and remove vertices
pub trait GraphVertexEditing: GraphEdgeEditing + GraphNodeOrder {
    /// Sets the weight of vertex `u`
    fn set_vertex_weight(&mut self, u: Node, weight: Weight) -> GraphResult<()>;

    /// Appends a new isolated vertex with id `order + 1` and returns its id
    fn add_vertex(&mut self, weight: Weight) -> Node;

    /// Inserts vertex `id`.
    /// Returns `Ok(false)` without changes if the vertex exists already and `Ok(true)` if it
    /// was appended. Ids must stay dense, so only `id == order + 1` can be appended.
    fn insert_vertex(&mut self, id: Node, weight: Weight) -> GraphResult<bool> {
        if self.contains_node(id) {
            debug!("Vertex {id} exists already");
            return Ok(false);
        }

        if id != self.number_of_nodes() + 1 {
            return Err(GraphError::NodeOutOfRange {
                node: id,
                order: self.number_of_nodes(),
            });
        }

        self.add_vertex(weight);
        Ok(true)
    }

    /// Removes vertex `u` with all incident edges.
    /// Every vertex `v > u` is renamed to `v - 1` so that ids stay dense.
    fn try_remove_vertex(&mut self, u: Node) -> GraphResult<()>;
}

/// Provides functions to create graphs from scratch
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over edges.
    /// Invalid edges are reported and skipped.
    fn from_edges<I, E>(n: NumNodes, flags: GraphFlags, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn from_edges<I, E>(n: NumNodes, flags: GraphFlags, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::new(n, flags);
        graph.add_edges(edges);
        graph
    }
}

/// The common interface of all storage backends.
/// Every query of [`algo`](crate::algo) is available for a `GraphEngine`.
pub trait GraphEngine:
    AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphVertexEditing + Clone
{
}

impl<G> GraphEngine for G where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphVertexEditing + Clone
{
}
