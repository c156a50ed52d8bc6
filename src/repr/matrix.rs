use std::fmt;

use super::*;
use crate::testing::test_graph_ops;

/// A graph stored as a dense `n x n` table of optional edge weights.
///
/// `cells[(u - 1) * n + (v - 1)]` holds the weight of the edge `(u, v)`; an undirected graph keeps
/// the table symmetric. Since weights may be `0`, absence of an edge is encoded by `None` only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjMatrix {
    n: NumNodes,
    cells: Vec<Option<Weight>>,
    weights: Vec<Weight>,
    num_edges: NumEdges,
    flags: GraphFlags,
}

impl AdjMatrix {
    /// Returns the row of `u`, i.e. the weights of all edges `(u, *)`.
    /// ** Panics if `u` is not a vertex **
    fn row(&self, u: Node) -> &[Option<Weight>] {
        let n = self.n as usize;
        let begin = node_index(u) * n;
        &self.cells[begin..begin + n]
    }

    fn cell_mut(&mut self, u: Node, v: Node) -> &mut Option<Weight> {
        &mut self.cells[node_index(u) * self.n as usize + node_index(v)]
    }

    /// Copies all cells not belonging to `skip` into a table of dimension `new_n`
    fn resized(&self, new_n: NumNodes, skip: Option<Node>) -> Vec<Option<Weight>> {
        let mut cells = vec![None; (new_n as usize) * (new_n as usize)];
        let new_id = |x: Node| match skip {
            Some(s) if x > s => x - 1,
            _ => x,
        };

        for u in self.vertices().filter(|&u| Some(u) != skip) {
            for (v, w) in self.weighted_neighbors_of(u) {
                if Some(v) == skip {
                    continue;
                }
                cells[node_index(new_id(u)) * new_n as usize + node_index(new_id(v))] = Some(w);
            }
        }

        cells
    }
}

impl GraphType for AdjMatrix {
    fn flags(&self) -> GraphFlags {
        self.flags
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn vertex_weight(&self, u: Node) -> Weight {
        self.weights[node_index(u)]
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.row(u)
            .iter()
            .zip(1..)
            .filter_map(|(cell, v)| cell.map(|w| (v, w)))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.row(u).iter().filter(|c| c.is_some()).count() as NumNodes
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        let column = node_index(u);
        assert!(column < self.n as usize);
        self.cells
            .chunks_exact(self.n as usize)
            .zip(1..)
            .filter_map(move |(row, v)| row[column].is_some().then_some(v))
    }
}

impl AdjacencyTest for AdjMatrix {
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        if !self.contains_node(u) || !self.contains_node(v) {
            return None;
        }
        self.row(u)[node_index(v)]
    }
}

impl GraphNew for AdjMatrix {
    fn try_new(n: NumNodes, flags: GraphFlags) -> GraphResult<Self> {
        let num_cells = (n as usize)
            .checked_mul(n as usize)
            .ok_or(GraphError::TooLarge(n))?;
        let mut cells = try_with_capacity(n, num_cells)?;
        cells.resize(num_cells, None);

        let mut weights = try_with_capacity(n, n as usize)?;
        weights.resize(n as usize, DEFAULT_WEIGHT);

        Ok(Self {
            n,
            cells,
            weights,
            num_edges: 0,
            flags,
        })
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> GraphResult<()> {
        validate_new_edge(self, u, v)?;

        *self.cell_mut(u, v) = Some(weight);
        if self.is_undirected() {
            *self.cell_mut(v, u) = Some(weight);
        }

        self.num_edges += 1;
        Ok(())
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;

        let weight = self
            .cell_mut(u, v)
            .take()
            .ok_or(GraphError::MissingEdge(u, v))?;
        if self.is_undirected() {
            *self.cell_mut(v, u) = None;
        }

        self.num_edges -= 1;
        Ok(weight)
    }
}

impl GraphVertexEditing for AdjMatrix {
    fn set_vertex_weight(&mut self, u: Node, weight: Weight) -> GraphResult<()> {
        self.check_node(u)?;
        self.weights[node_index(u)] = weight;
        Ok(())
    }

    fn add_vertex(&mut self, weight: Weight) -> Node {
        self.cells = self.resized(self.n + 1, None);
        self.weights.push(weight);
        self.n += 1;
        self.n
    }

    fn try_remove_vertex(&mut self, u: Node) -> GraphResult<()> {
        self.check_node(u)?;

        let incident = if self.is_undirected() {
            self.degree_of(u)
        } else {
            self.degree_of(u) + self.in_neighbors_of(u).count() as NumNodes
        };

        self.cells = self.resized(self.n - 1, Some(u));
        self.weights.remove(node_index(u));
        self.n -= 1;
        self.num_edges -= incident;
        Ok(())
    }
}

impl fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}

test_graph_ops!(
    test_adj_matrix_undir,
    AdjMatrix,
    false,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphVertexEditing
    )
);

test_graph_ops!(
    test_adj_matrix_dir,
    AdjMatrix,
    true,
    (
        GraphNew,
        AdjacencyList,
        GraphEdgeEditing,
        GraphVertexEditing
    )
);

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn zero_weight_is_an_edge() {
        let mut graph = AdjMatrix::new(3, GraphFlags::directed().with_edge_weights(true));
        graph.add_edge(1, 2, 0.0);

        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert_eq!(graph.edge_weight(1, 2), Some(0.0));
        assert_eq!(graph.degree_of(1), 1);
        assert_eq!(graph.in_neighbors_of(2).collect_vec(), vec![1]);
    }

    #[test]
    fn neighbors_in_id_order() {
        let mut graph = AdjMatrix::new(4, GraphFlags::undirected());
        graph.add_edges([(1, 4), (1, 2), (1, 3)]);

        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![2, 3, 4]);
        assert_eq!(graph.vertices_in_storage_order().collect_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn grows_and_shrinks() {
        let mut graph = AdjMatrix::new(3, GraphFlags::undirected());
        graph.add_edges([(1, 2), (2, 3), (1, 3)]);

        assert_eq!(graph.add_vertex(4.0), 4);
        graph.add_edge(4, 1, 1.0);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.degree_of(1), 3);

        graph.try_remove_vertex(2).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(
            graph.ordered_edges(true).map(|e| e.edge()).collect_vec(),
            vec![Edge(1, 2), Edge(1, 3)]
        );
        assert_eq!(graph.vertex_weight(3), 4.0);
    }
}
