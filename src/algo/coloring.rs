use fxhash::FxHashMap;
use log::trace;
use smallvec::SmallVec;

use super::*;

/// Colors are numbered `0, 1, 2, ...`
pub type Color = u32;

/// A proper edge coloring: edges sharing an endpoint have different colors.
///
/// For undirected graphs every edge is stored once under its normalized form,
/// so both `color_of(u, v)` and `color_of(v, u)` work.
#[derive(Debug, Clone, Default)]
pub struct EdgeColoring {
    colors: FxHashMap<Edge, Color>,
    order: Vec<Edge>,
    number_of_colors: Color,
    directed: bool,
}

impl EdgeColoring {
    fn key(&self, edge: Edge) -> Edge {
        if self.directed {
            edge
        } else {
            edge.normalized()
        }
    }

    /// Returns the color of edge `(u, v)` or `None` if it was not colored
    pub fn color_of(&self, u: Node, v: Node) -> Option<Color> {
        self.colors.get(&self.key(Edge(u, v))).copied()
    }

    /// Returns the number of distinct colors used
    pub fn number_of_colors(&self) -> Color {
        self.number_of_colors
    }

    /// Returns the number of colored edges
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns all colored edges with their color in the order they were colored
    pub fn iter(&self) -> impl Iterator<Item = (Edge, Color)> + '_ {
        self.order.iter().map(|&e| (e, self.colors[&e]))
    }

    fn assign(&mut self, edge: Edge, color: Color) {
        self.colors.insert(edge, color);
        self.order.push(edge);
        self.number_of_colors = self.number_of_colors.max(color + 1);
    }
}

/// Greedy edge coloring
pub trait GreedyEdgeColoring: AdjacencyList {
    /// Colors the edges in enumeration order, assigning each edge the smallest color not used by
    /// any already colored edge incident to one of its endpoints.
    /// Uses at most `2 * max_degree - 1` colors on undirected graphs.
    fn color_edges(&self) -> EdgeColoring;
}

impl<G> GreedyEdgeColoring for G
where
    G: AdjacencyList,
{
    fn color_edges(&self) -> EdgeColoring {
        let mut coloring = EdgeColoring {
            directed: self.is_directed(),
            ..Default::default()
        };

        for e in self.edges(false) {
            let edge = coloring.key(e.edge());
            if coloring.colors.contains_key(&edge) {
                continue;
            }

            let mut used: SmallVec<[Color; 16]> = SmallVec::new();
            for x in [e.source, e.target] {
                for y in self.neighbors_ignoring_direction(x) {
                    let adjacent = [Edge(x, y), Edge(y, x)];
                    used.extend(adjacent.iter().filter_map(|&a| coloring.color_of(a.0, a.1)));
                }
            }

            let mut color = 0;
            while used.contains(&color) {
                color += 1;
            }

            trace!("Edge {edge} gets color {color}");
            coloring.assign(edge, color);
        }

        coloring
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn assert_proper<G: AdjacencyList + GraphEdgeOrder>(graph: &G, coloring: &EdgeColoring) {
        assert_eq!(coloring.len(), graph.number_of_edges() as usize);

        let colored = coloring.iter().collect_vec();
        for (i, &(e, c)) in colored.iter().enumerate() {
            for &(f, d) in &colored[i + 1..] {
                let shares_endpoint = e.0 == f.0 || e.0 == f.1 || e.1 == f.0 || e.1 == f.1;
                assert!(!shares_endpoint || c != d, "{e} and {f} both have color {c}");
            }
        }
    }

    #[test]
    fn triangle_needs_three_colors() {
        let mut graph = AdjList::new(3, GraphFlags::undirected());
        graph.connect_cycle(1..=3, || 1.0);

        let coloring = graph.color_edges();
        assert_proper(&graph, &coloring);
        assert_eq!(coloring.number_of_colors(), 3);
        assert_eq!(coloring.color_of(1, 2), coloring.color_of(2, 1));
    }

    #[test]
    fn star_needs_degree_colors() {
        let mut graph = AdjMatrix::new(6, GraphFlags::undirected());
        graph.add_edges((2..=6).map(|v| (1, v)));

        let coloring = graph.color_edges();
        assert_proper(&graph, &coloring);
        assert_eq!(coloring.number_of_colors(), 5);
    }

    #[test]
    fn empty_graph() {
        let coloring = AdjList::new(4, GraphFlags::undirected()).color_edges();
        assert!(coloring.is_empty());
        assert_eq!(coloring.number_of_colors(), 0);
    }

    #[test]
    fn random_graphs_are_properly_colored() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xc010);
        for directed in [false, true] {
            for n in [5, 15, 30] {
                for p in [0.1, 0.3] {
                    let edges = crate::testing::random_weighted_edges(rng, n, p, directed);
                    let list = AdjList::from_edges(n, GraphFlags::new(directed), edges.clone());
                    let matrix = AdjMatrix::from_edges(n, GraphFlags::new(directed), edges);

                    for coloring in [list.color_edges(), matrix.color_edges()] {
                        assert_proper(&list, &coloring);
                        if !directed {
                            let max_degree = list.max_degree();
                            assert!(coloring.number_of_colors() <= (2 * max_degree).max(1));
                        }
                    }
                }
            }
        }
    }
}
