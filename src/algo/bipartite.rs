/*!
# Bipartite Graphs

Tests whether the vertices can be split into two sides such that every edge, ignoring its
direction, connects the two sides. The graph need not be connected and isolated vertices may go
to either side.
*/

use super::*;

/// A bipartition of the node set.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
pub trait Bipartition {
    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: Node) -> bool {
        !self.is_on_left_side(u)
    }
}

impl Bipartition for NodeBitSet {
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.get_bit(u)
    }
}

/// Graphs with more vertices are rejected by [`BipartiteTest::is_bipartite_exhaustive`]
pub const MAX_EXHAUSTIVE_BIPARTITE_ORDER: NumNodes = 24;

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition.
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition;

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    fn compute_bipartition(&self) -> Option<NodeBitSet>;

    /// Tests whether the graph is bipartite by 2-coloring a BFS forest.
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }

    /// Tests whether the graph is bipartite by trying every assignment of vertices to sides.
    /// Exponential in the order; only useful to cross-check [`BipartiteTest::is_bipartite`].
    /// ** Panics if the graph has more than [`MAX_EXHAUSTIVE_BIPARTITE_ORDER`] vertices **
    fn is_bipartite_exhaustive(&self) -> bool;
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition,
    {
        self.edges(false).all(|e| {
            bipartition.is_on_left_side(e.source) != bipartition.is_on_left_side(e.target)
        })
    }

    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }

    fn is_bipartite_exhaustive(&self) -> bool {
        let n = self.number_of_nodes();
        assert!(
            n <= MAX_EXHAUSTIVE_BIPARTITE_ORDER,
            "Exhaustive bipartite test is limited to {MAX_EXHAUSTIVE_BIPARTITE_ORDER} vertices"
        );

        let edges = self.edges(false).map(|e| e.edge()).collect_vec();
        let right = |mask: u32, u: Node| (mask >> (u - 1)) & 1 == 1;

        (0..(1u32 << n))
            .any(|mask| edges.iter().all(|&Edge(u, v)| right(mask, u) != right(mask, v)))
    }
}

/// Computes a candidate bipartition of the graph using BFS traversal, ignoring edge direction.
/// Every BFS root is put on the left side and every other node on the opposite side of its
/// predecessor.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition is invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> NodeBitSet
where
    G: AdjacencyList,
{
    let mut bfs = BFSWithPredecessor::unstarted(graph).ignore_direction();
    let mut bipartition = graph.vertex_bitset_unset();

    while bfs.try_restart_at_unvisited() {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if !bipartition.get_bit(pred) {
                bipartition.set_bit(node);
            }
        }
    }

    bipartition
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path() {
        for n in 2..10 {
            let mut graph = AdjList::new(n, GraphFlags::undirected());
            graph.connect_path(1..=n, || 1.0);

            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.try_remove_edge(n / 2, n / 2 + 1).unwrap();
                assert!(graph.is_bipartite());
            }

            if n > 2 {
                // closes an odd cycle
                let mut graph = graph.clone();
                graph.add_edge(2 - (n % 2), n, 1.0);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn bipartition_sides() {
        let mut graph = AdjMatrix::new(6, GraphFlags::undirected());
        graph.connect_cycle(1..=6, || 1.0);

        let sides = graph.compute_bipartition().unwrap();
        assert!(graph.is_bipartition(&sides));
        assert!(sides.is_on_left_side(1));
        for u in 1..6 {
            assert_ne!(sides.is_on_left_side(u), sides.is_on_left_side(u + 1));
        }
    }

    #[test]
    fn directed_odd_cycle() {
        let mut graph = AdjList::new(3, GraphFlags::directed());
        graph.add_edges([(1, 2), (2, 3), (1, 3)]);
        assert!(!graph.is_bipartite());
        assert!(!graph.is_bipartite_exhaustive());

        let mut graph = AdjList::new(4, GraphFlags::directed());
        graph.add_edges([(1, 2), (3, 2), (3, 4), (1, 4)]);
        assert!(graph.is_bipartite());
        assert!(graph.is_bipartite_exhaustive());
    }

    #[test]
    fn disconnected_and_empty() {
        let graph = AdjList::new(0, GraphFlags::undirected());
        assert!(graph.is_bipartite());
        assert!(graph.is_bipartite_exhaustive());

        let mut graph = AdjMatrix::new(7, GraphFlags::undirected());
        graph.add_edges([(1, 2), (2, 3), (4, 5), (5, 6), (6, 4)]);
        assert!(!graph.is_bipartite());

        graph.try_remove_edge(6, 4).unwrap();
        assert!(graph.is_bipartite());
    }

    #[test]
    fn exhaustive_agrees_with_bfs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xb1b1);
        for directed in [false, true] {
            for n in [1, 4, 8, 12] {
                for p in [0.1, 0.2, 0.3] {
                    for _ in 0..5 {
                        let edges = crate::testing::random_weighted_edges(rng, n, p, directed);
                        let list = AdjList::from_edges(n, GraphFlags::new(directed), edges.clone());
                        let matrix = AdjMatrix::from_edges(n, GraphFlags::new(directed), edges);

                        let expected = list.is_bipartite_exhaustive();
                        assert_eq!(list.is_bipartite(), expected);
                        assert_eq!(matrix.is_bipartite(), expected);
                    }
                }
            }
        }
    }
}
