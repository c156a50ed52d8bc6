#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use crate::{io::*, ops::*, *};

/// Every representation runs the same battery of tests against a naive reference adjacency table
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $directed:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            fn flags() -> GraphFlags {
                GraphFlags::new($directed).with_edge_weights(true)
            }

            /// Creates a list of at most `m_ub` random loop-free edges for nodes `1..=n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(1..=n);
                    let v = rng.random_range(1..=n);

                    if $directed {
                        Edge(u, v)
                    } else {
                        Edge(u, v).normalized()
                    }
                }).filter(|e| !e.is_loop()).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Deterministic weight; includes `0` on purpose
            fn weight_of(Edge(u, v): Edge) -> Weight {
                ((u * 7 + v * 3) % 11) as Weight
            }

            /// `table[u][v]` is the weight of edge `(u, v)`
            fn reference_table(n: NumNodes, edges: &[Edge]) -> Vec<Vec<Option<Weight>>> {
                let mut table = vec![vec![None; n as usize + 1]; n as usize + 1];
                for &e in edges {
                    let Edge(u, v) = e;
                    table[u as usize][v as usize] = Some(weight_of(e));
                    if !$directed {
                        table[v as usize][u as usize] = Some(weight_of(e));
                    }
                }
                table
            }

            fn build(n: NumNodes, edges: &[Edge]) -> $graph {
                <$graph>::from_edges(
                    n,
                    flags(),
                    edges.iter().map(|&e| WeightedEdge::new(e.0, e.1, weight_of(e))),
                )
            }

            $(
                test_graph_ops!($graph<$directed>: $trait);
            )*
        }
    };
    ($graph:ident<$directed:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..30 {
                let graph = <$graph>::new(n, flags());

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_directed(), $directed);
                assert_eq!(graph.vertices().collect_vec(), (1..=n).collect_vec());

                for u in graph.vertices() {
                    assert_eq!(graph.degree_of(u), 0);
                    assert_eq!(graph.vertex_weight(u), DEFAULT_WEIGHT);
                }
            }
        }
    };
    ($graph:ident<$directed:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let table = reference_table(n, &edges);
                        let graph = build(n, &edges);

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(
                            graph.ordered_edges(!$directed).map(|e| e.edge()).collect_vec(),
                            edges
                        );

                        let mut max_degree = 0;
                        for u in 1..=n {
                            let out = (1..=n).filter(|&v| table[u as usize][v as usize].is_some()).collect_vec();
                            let inc = (1..=n).filter(|&v| table[v as usize][u as usize].is_some()).collect_vec();

                            assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), out);
                            assert_eq!(graph.in_neighbors_of(u).sorted().collect_vec(), inc);
                            assert_eq!(graph.degree_of(u), out.len() as NumNodes);
                            max_degree = max_degree.max(out.len() as NumNodes);

                            for v in 1..=n {
                                assert_eq!(graph.edge_weight(u, v), table[u as usize][v as usize]);
                            }
                        }

                        assert_eq!(graph.max_degree(), max_degree);
                        assert!(!graph.has_edge(0, 1));
                        assert!(!graph.has_edge(1, n + 1));
                        assert!(!graph.has_edge(n + 1, 1));
                    }
                }
            }
        }
    };
    ($graph:ident<$directed:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let mut graph = <$graph>::new(n, flags());

                        for &e in &edges {
                            assert!(graph.try_add_edge(e.0, e.1, weight_of(e)).is_ok());
                        }

                        let Edge(u, v) = edges[0];
                        assert!(matches!(graph.try_add_edge(u, v, 1.0), Err(GraphError::DuplicateEdge(_, _))));
                        if !$directed {
                            assert!(matches!(graph.try_add_edge(v, u, 1.0), Err(GraphError::DuplicateEdge(_, _))));
                        }
                        assert!(matches!(graph.try_add_edge(u, u, 1.0), Err(GraphError::SelfLoop(_))));
                        assert!(matches!(graph.try_add_edge(u, n + 1, 1.0), Err(GraphError::NodeOutOfRange { .. })));
                        assert!(matches!(graph.try_add_edge(0, u, 1.0), Err(GraphError::NodeOutOfRange { .. })));
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        let mut m = graph.number_of_edges();
                        for &e in edges.iter().filter(|_| rng.random_bool(0.5)) {
                            let Edge(u, v) = e;
                            assert_eq!(graph.try_remove_edge(u, v).ok(), Some(weight_of(e)));
                            m -= 1;

                            assert!(!graph.has_edge(u, v));
                            if !$directed {
                                assert!(!graph.has_edge(v, u));
                            }
                            assert!(matches!(graph.try_remove_edge(u, v), Err(GraphError::MissingEdge(_, _))));
                            assert_eq!(graph.number_of_edges(), m);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$directed:literal>: GraphVertexEditing) => {
        #[test]
        fn test_graph_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [10 as NumNodes, 20, 50] {
                for _ in 0..5 {
                    let edges = random_edges(rng, n, 3 * n);
                    let mut graph = build(n, &edges);

                    let removed = rng.random_range(1..=n);
                    let rename = |x: Node| if x > removed { x - 1 } else { x };
                    let expected = edges
                        .iter()
                        .filter(|e| e.0 != removed && e.1 != removed)
                        .map(|e| Edge(rename(e.0), rename(e.1)))
                        .sorted()
                        .collect_vec();

                    graph.try_remove_vertex(removed).unwrap();
                    assert_eq!(graph.number_of_nodes(), n - 1);
                    assert_eq!(graph.number_of_edges(), expected.len() as NumEdges);
                    assert_eq!(
                        graph.ordered_edges(!$directed).map(|e| e.edge()).collect_vec(),
                        expected
                    );
                    assert!(graph.try_remove_vertex(n).is_err());

                    assert!(!graph.insert_vertex(n - 1, 3.0).unwrap());
                    assert!(graph.insert_vertex(n + 1, 3.0).is_err());
                    assert!(graph.insert_vertex(0, 3.0).is_err());
                    assert!(graph.insert_vertex(n, 3.0).unwrap());
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.degree_of(n), 0);
                    assert_eq!(graph.vertex_weight(n), 3.0);

                    graph.set_vertex_weight(1, 0.5).unwrap();
                    assert_eq!(graph.vertex_weight(1), 0.5);
                    assert!(graph.set_vertex_weight(n + 1, 0.5).is_err());
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Creates a list of random loop-free edges with weights in `0..10` for nodes `1..=n`.
/// Every unordered pair is considered with probability `p`; for directed graphs each direction
/// is drawn independently.
#[cfg(test)]
pub(crate) fn random_weighted_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    p: f64,
    directed: bool,
) -> Vec<WeightedEdge> {
    let mut edges = Vec::new();
    for u in 1..=n {
        for v in 1..=n {
            if u == v || (!directed && u > v) {
                continue;
            }
            if rng.random_bool(p) {
                edges.push(WeightedEdge::new(u, v, rng.random_range(0..10) as Weight));
            }
        }
    }
    edges
}

/// Reads a graph from its textual file format
/// ** Panics if the text is not a valid graph file **
#[cfg(test)]
pub(crate) fn graph_from_text<G>(text: &str) -> G
where
    G: GraphVertexEditing + GraphEdgeOrder,
{
    G::try_read_from(text.as_bytes()).expect("valid graph file")
}
