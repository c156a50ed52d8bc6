use std::fmt;

use super::*;
use crate::testing::test_graph_ops;

/// A graph stored as a list of vertex records, each owning its outgoing edges.
///
/// Vertices are enumerated in storage order (highest id first) by
/// [`GraphNodeOrder::vertices_in_storage_order`] while [`GraphNodeOrder::vertices`] stays in
/// ascending id order. Neighbors are enumerated most recently inserted first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjList {
    vertices: Vec<VertexRecord>,
    num_edges: NumEdges,
    flags: GraphFlags,
}

impl AdjList {
    /// Returns the vertex records in storage order
    pub fn vertex_records(&self) -> impl Iterator<Item = &VertexRecord> + '_ {
        self.vertices.iter().rev()
    }

    /// ** Panics if `u` is not a vertex **
    fn record(&self, u: Node) -> &VertexRecord {
        &self.vertices[node_index(u)]
    }

    fn record_mut(&mut self, u: Node) -> GraphResult<&mut VertexRecord> {
        self.check_node(u)?;
        Ok(&mut self.vertices[node_index(u)])
    }
}

impl GraphType for AdjList {
    fn flags(&self) -> GraphFlags {
        self.flags
    }
}

impl GraphNodeOrder for AdjList {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    fn vertices_in_storage_order(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertex_records().map(|r| r.id())
    }

    fn vertex_weight(&self, u: Node) -> Weight {
        self.record(u).weight()
    }
}

impl GraphEdgeOrder for AdjList {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjList {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.record(u).edges().map(|e| e.target)
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.record(u).edges().map(|e| (e.target, e.weight))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.record(u).degree()
    }
}

impl AdjacencyTest for AdjList {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        if !self.contains_node(u) {
            return None;
        }
        self.record(u).find_edge(v).map(|e| e.weight)
    }
}

impl GraphNew for AdjList {
    fn try_new(n: NumNodes, flags: GraphFlags) -> GraphResult<Self> {
        let mut vertices = try_with_capacity(n, n as usize)?;
        vertices.extend((1..=n).map(|id| VertexRecord::new(id, DEFAULT_WEIGHT)));

        Ok(Self {
            vertices,
            num_edges: 0,
            flags,
        })
    }
}

impl GraphEdgeEditing for AdjList {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> GraphResult<()> {
        // both endpoints are validated before either list is touched
        validate_new_edge(self, u, v)?;

        self.vertices[node_index(u)].prepend_edge(EdgeRecord::new(v, weight));
        if self.is_undirected() {
            self.vertices[node_index(v)].prepend_edge(EdgeRecord::new(u, weight));
        }

        self.num_edges += 1;
        Ok(())
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<Weight> {
        let undirected = self.is_undirected();
        let removed = self
            .record_mut(u)?
            .remove_edge(v)
            .ok_or(GraphError::MissingEdge(u, v))?;

        if undirected {
            self.vertices[node_index(v)].remove_edge(u);
        }

        self.num_edges -= 1;
        Ok(removed.weight)
    }
}

impl GraphVertexEditing for AdjList {
    fn set_vertex_weight(&mut self, u: Node, weight: Weight) -> GraphResult<()> {
        self.record_mut(u)?.set_weight(weight);
        Ok(())
    }

    fn add_vertex(&mut self, weight: Weight) -> Node {
        let id = self.number_of_nodes() + 1;
        self.vertices.push(VertexRecord::new(id, weight));
        id
    }

    fn try_remove_vertex(&mut self, u: Node) -> GraphResult<()> {
        self.check_node(u)?;

        let removed = self.vertices.remove(node_index(u));
        let undirected = self.is_undirected();

        let mut dropped = removed.degree();
        for record in &mut self.vertices {
            let incoming = record.shift_after_removal(u);
            if !undirected {
                dropped += incoming;
            }
        }

        self.num_edges -= dropped;
        Ok(())
    }
}

impl fmt::Display for AdjList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}

test_graph_ops!(
    test_adj_list_undir,
    AdjList,
    false,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphVertexEditing
    )
);

test_graph_ops!(
    test_adj_list_dir,
    AdjList,
    true,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphVertexEditing
    )
);
