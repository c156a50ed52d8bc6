/*!
# All-Pairs Shortest Paths

Floyd-Warshall over the edge weights of the graph. Edges are followed in their direction; for
undirected graphs both directions are available. Weights are assumed to be non-negative.
*/

use std::fmt;

use super::*;

/// Shortest path distances between all ordered pairs of vertices
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: NumNodes,
    dist: Vec<Weight>,
}

impl DistanceMatrix {
    fn index(&self, u: Node, v: Node) -> usize {
        node_index(u) * self.n as usize + node_index(v)
    }

    /// Returns the length of a shortest path from `u` to `v` or `None` if `v` is unreachable
    /// ** Panics if `u` or `v` are not vertices **
    pub fn distance(&self, u: Node, v: Node) -> Option<Weight> {
        let d = self.dist[self.index(u, v)];
        d.is_finite().then_some(d)
    }

    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the pair `u != v` with the largest finite distance.
    /// Ties are broken in favor of the lexicographically smallest pair.
    pub fn largest_finite_distance(&self) -> Option<ShortestPathDiameter> {
        let mut best: Option<ShortestPathDiameter> = None;
        for u in 1..=self.n {
            for v in (1..=self.n).filter(|&v| v != u) {
                let Some(distance) = self.distance(u, v) else {
                    continue;
                };
                if best.is_none_or(|b| distance > b.distance) {
                    best = Some(ShortestPathDiameter {
                        from: u,
                        to: v,
                        distance,
                    });
                }
            }
        }
        best
    }
}

/// The endpoints and length of the longest among all shortest paths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortestPathDiameter {
    pub from: Node,
    pub to: Node,
    pub distance: Weight,
}

impl fmt::Display for ShortestPathDiameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (distance {})", self.from, self.to, self.distance)
    }
}

pub trait AllPairsDistances: AdjacencyList {
    /// Computes shortest path distances between all pairs of vertices in `O(n^3)` time
    fn all_pairs_distances(&self) -> DistanceMatrix;

    /// Returns the pair of distinct vertices whose shortest path is longest among all pairs
    /// connected by some path. Returns `None` if no such pair exists.
    fn largest_shortest_path(&self) -> Option<ShortestPathDiameter> {
        self.all_pairs_distances().largest_finite_distance()
    }
}

impl<G> AllPairsDistances for G
where
    G: AdjacencyList,
{
    fn all_pairs_distances(&self) -> DistanceMatrix {
        let n = self.len();
        let mut dist = vec![Weight::INFINITY; n * n];

        for u in self.vertices() {
            let row = node_index(u) * n;
            dist[row + node_index(u)] = 0.0;
            for (v, w) in self.weighted_neighbors_of(u) {
                let cell = &mut dist[row + node_index(v)];
                *cell = cell.min(w);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let via = d_ik + dist[k * n + j];
                    if via < dist[i * n + j] {
                        dist[i * n + j] = via;
                    }
                }
            }
        }

        DistanceMatrix {
            n: self.number_of_nodes(),
            dist,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;

    #[test]
    fn weighted_triangle() {
        let mut graph = AdjList::new(3, GraphFlags::undirected().with_edge_weights(true));
        graph.add_edges([(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]);

        let dist = graph.all_pairs_distances();
        assert_eq!(dist.distance(1, 3), Some(2.0));
        assert_eq!(dist.distance(3, 1), Some(2.0));
        assert_eq!(dist.distance(2, 2), Some(0.0));

        let longest = graph.largest_shortest_path().unwrap();
        assert_eq!((longest.from, longest.to, longest.distance), (1, 3, 2.0));
    }

    #[test]
    fn directed_reachability() {
        let mut graph = AdjMatrix::new(4, GraphFlags::directed().with_edge_weights(true));
        graph.add_edges([(1, 2, 2.0), (2, 3, 0.0), (3, 4, 3.0)]);

        let dist = graph.all_pairs_distances();
        assert_eq!(dist.distance(1, 4), Some(5.0));
        assert_eq!(dist.distance(4, 1), None);
        assert_eq!(dist.distance(2, 3), Some(0.0));

        assert_eq!(
            graph.largest_shortest_path(),
            Some(ShortestPathDiameter {
                from: 1,
                to: 4,
                distance: 5.0
            })
        );
    }

    #[test]
    fn no_connected_pair() {
        assert!(
            AdjList::new(3, GraphFlags::undirected())
                .largest_shortest_path()
                .is_none()
        );
        assert!(
            AdjList::new(0, GraphFlags::undirected())
                .largest_shortest_path()
                .is_none()
        );
    }

    #[test]
    fn path_diameter() {
        let mut graph = AdjMatrix::new(6, GraphFlags::undirected());
        graph.connect_path(1..=6, || 1.0);

        let longest = graph.largest_shortest_path().unwrap();
        assert_eq!((longest.from, longest.to, longest.distance), (1, 6, 5.0));
    }

    #[test]
    fn backends_agree() {
        use rand::SeedableRng;
        use rand_pcg::Pcg64Mcg;

        let rng = &mut Pcg64Mcg::seed_from_u64(0xd157);
        for directed in [false, true] {
            for n in [4, 10, 25] {
                let edges = crate::testing::random_weighted_edges(rng, n, 0.2, directed);
                let flags = GraphFlags::new(directed).with_edge_weights(true);
                let list = AdjList::from_edges(n, flags, edges.clone());
                let matrix = AdjMatrix::from_edges(n, flags, edges);

                assert_eq!(list.all_pairs_distances(), matrix.all_pairs_distances());
                assert_eq!(list.largest_shortest_path(), matrix.largest_shortest_path());
            }
        }
    }
}
