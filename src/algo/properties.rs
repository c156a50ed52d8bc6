use std::fmt;

use log::debug;

use super::*;

/// Summary of the structural properties of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphProperties {
    /// Largest out-degree
    pub degree: NumNodes,
    pub order: NumNodes,
    pub directed: bool,
    pub connected_components: NumNodes,
    pub vertices_weighted: bool,
    pub edges_weighted: bool,
    pub complete: bool,
    pub bipartite: bool,
    pub tree: bool,
    pub has_bridge: bool,
    pub has_articulation_point: bool,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

impl fmt::Display for GraphProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Degree: {}", self.degree)?;
        writeln!(f, "Order: {}", self.order)?;
        writeln!(f, "Directed: {}", yes_no(self.directed))?;
        writeln!(f, "Connected components: {}", self.connected_components)?;
        writeln!(f, "Weighted vertices: {}", yes_no(self.vertices_weighted))?;
        writeln!(f, "Weighted edges: {}", yes_no(self.edges_weighted))?;
        writeln!(f, "Complete: {}", yes_no(self.complete))?;
        writeln!(f, "Bipartite: {}", yes_no(self.bipartite))?;
        writeln!(f, "Tree: {}", yes_no(self.tree))?;
        writeln!(f, "Bridge: {}", yes_no(self.has_bridge))?;
        writeln!(f, "Articulation point: {}", yes_no(self.has_articulation_point))
    }
}

/// Computes all properties of [`GraphProperties`] at once
pub trait Properties: GraphEngine {
    fn properties(&self) -> GraphProperties {
        let properties = GraphProperties {
            degree: self.max_degree(),
            order: self.order(),
            directed: self.is_directed(),
            connected_components: self.number_of_connected_components(),
            vertices_weighted: self.vertices_weighted(),
            edges_weighted: self.edges_weighted(),
            complete: self.is_complete(),
            bipartite: self.is_bipartite(),
            tree: self.is_tree(),
            has_bridge: self.has_bridge(),
            has_articulation_point: self.has_articulation_point(),
        };
        debug!("Computed properties: {properties:?}");
        properties
    }
}

impl<G: GraphEngine> Properties for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::graph_from_text;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const TRIANGLE: &str = "3 0 0 0\n1 2\n2 3\n3 1\n";
    const PATH: &str = "4 0 0 0\n1 2\n2 3\n3 4\n";
    const SHORT_PATH: &str = "3 0 0 0\n1 2\n2 3\n";
    const SQUARE: &str = "4 0 0 0\n1 2\n2 3\n3 4\n4 1\n";
    const TWO_EDGES: &str = "4 0 0 0\n1 2\n3 4\n";
    const DIRECTED_PAIR: &str = "2 1 0 0\n1 2\n";
    const TWO_ISOLATED: &str = "2 0 0 0\n";

    fn properties_of_both(text: &str) -> GraphProperties {
        let list: AdjList = graph_from_text(text);
        let matrix: AdjMatrix = graph_from_text(text);
        assert_eq!(list.properties(), matrix.properties());
        list.properties()
    }

    #[test]
    fn triangle() {
        let p = properties_of_both(TRIANGLE);
        assert_eq!(p.degree, 2);
        assert_eq!(p.order, 3);
        assert_eq!(p.connected_components, 1);
        assert!(p.complete);
        assert!(!p.bipartite);
        assert!(!p.tree);
        assert!(!p.has_bridge);
        assert!(!p.has_articulation_point);

        let list: AdjList = graph_from_text(TRIANGLE);
        let longest = list.largest_shortest_path().unwrap();
        assert_eq!(longest.distance, 1.0);
    }

    #[test]
    fn path() {
        let p = properties_of_both(PATH);
        assert_eq!(p.degree, 2);
        assert_eq!(p.connected_components, 1);
        assert!(!p.complete);
        assert!(p.bipartite);
        assert!(p.tree);
        assert!(p.has_bridge);
        assert!(p.has_articulation_point);

        let list: AdjList = graph_from_text(PATH);
        assert_eq!(list.compute_articulation_points().unwrap(), vec![2, 3]);
        let longest = list.largest_shortest_path().unwrap();
        assert_eq!((longest.from, longest.to, longest.distance), (1, 4, 3.0));
    }

    #[test]
    fn short_path() {
        let p = properties_of_both(SHORT_PATH);
        assert_eq!(p.degree, 2);
        assert_eq!(p.order, 3);
        assert!(!p.directed);
        assert_eq!(p.connected_components, 1);
        assert!(!p.complete);
        assert!(p.bipartite);
        assert!(p.tree);
        assert!(p.has_bridge);
        assert!(p.has_articulation_point);

        let list: AdjList = graph_from_text(SHORT_PATH);
        assert_eq!(list.compute_articulation_points().unwrap(), vec![2]);
        let longest = list.largest_shortest_path().unwrap();
        assert_eq!((longest.from, longest.to, longest.distance), (1, 3, 2.0));
    }

    #[test]
    fn square() {
        let p = properties_of_both(SQUARE);
        assert_eq!(p.degree, 2);
        assert_eq!(p.order, 4);
        assert_eq!(p.connected_components, 1);
        assert!(!p.complete);
        assert!(p.bipartite);
        assert!(!p.tree);
        assert!(!p.has_bridge);
        assert!(!p.has_articulation_point);
    }

    #[test]
    fn two_edges() {
        let p = properties_of_both(TWO_EDGES);
        assert_eq!(p.degree, 1);
        assert_eq!(p.order, 4);
        assert_eq!(p.connected_components, 2);
        assert!(!p.complete);
        assert!(p.bipartite);
        assert!(!p.tree);
        assert!(p.has_bridge);
        assert!(!p.has_articulation_point);

        let matrix: AdjMatrix = graph_from_text(TWO_EDGES);
        assert_eq!(matrix.compute_bridges().unwrap().len(), 2);
    }

    #[test]
    fn directed_pair() {
        let p = properties_of_both(DIRECTED_PAIR);
        assert!(p.directed);
        assert_eq!(p.degree, 1);
        assert_eq!(p.connected_components, 1);
        assert!(!p.complete);
        assert!(p.tree);
        assert!(!p.has_bridge);
        assert!(!p.has_articulation_point);
    }

    #[test]
    fn isolated_vertices() {
        let p = properties_of_both(TWO_ISOLATED);
        assert_eq!(p.degree, 0);
        assert_eq!(p.connected_components, 2);
        assert!(!p.complete);
        assert!(p.bipartite);
        assert!(!p.tree);

        let list: AdjList = graph_from_text(TWO_ISOLATED);
        assert!(list.largest_shortest_path().is_none());
    }

    #[test]
    fn report() {
        let text = properties_of_both(PATH).to_string();
        assert!(text.starts_with("Degree: 2\nOrder: 4\nDirected: no\n"));
        assert!(text.ends_with("Bridge: yes\nArticulation point: yes\n"));
    }

    #[test]
    fn backends_agree_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x9a9);
        for directed in [false, true] {
            for n in [1, 6, 15, 30] {
                for p in [0.05, 0.1, 0.2, 0.5] {
                    let edges = crate::testing::random_weighted_edges(rng, n, p, directed);
                    let flags = GraphFlags::new(directed).with_edge_weights(true);
                    let list = AdjList::from_edges(n, flags, edges.clone());
                    let matrix = AdjMatrix::from_edges(n, flags, edges);

                    assert_eq!(list.properties(), matrix.properties());
                }
            }
        }
    }

    /// In a tree every internal vertex is an articulation point and every edge is a bridge
    #[test]
    fn trees() {
        use crate::gens::GeneratorSubstructures;

        let rng = &mut Pcg64Mcg::seed_from_u64(0x7733);
        for n in 2..30 {
            let mut graph = AdjList::new(n, GraphFlags::undirected());
            let nodes = (1..=n).collect_vec();
            graph.connect_random_tree(rng, &nodes, || 1.0);

            assert!(graph.is_tree());
            assert!(graph.is_bipartite());
            assert_eq!(graph.number_of_edges(), n - 1);
            assert_eq!(
                graph.compute_bridges().unwrap().len(),
                graph.number_of_edges() as usize
            );
            assert_eq!(
                graph.compute_articulation_points().unwrap(),
                graph.vertices().filter(|&u| graph.degree_of(u) > 1).collect_vec()
            );
        }
    }
}
