/*!
# Substructure Generators

Adds common motifs (paths, cycles, cliques and random trees) to an already existing graph.

Every method draws one weight per inserted edge from a caller supplied closure and returns the
number of edges actually inserted. Edges the graph rejects (self-loops, duplicates, unknown
vertices) are skipped.

# Example

```rust
use adjgraphs::{prelude::*, gens::*};

let mut g = AdjMatrix::new(5, GraphFlags::undirected());
g.connect_path([1, 2, 3], || 1.0);
g.connect_cycle([3, 4, 5], || 2.0);

assert_eq!(g.number_of_edges(), 5);
assert_eq!(g.edge_weight(5, 3), Some(2.0));
```
*/

use itertools::Itertools;
use log::debug;

use super::*;

/// Trait for creating additional substructures inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects consecutive nodes of `nodes_on_path` by an edge.
    fn connect_path<P, W>(&mut self, nodes_on_path: P, weights: W) -> NumEdges
    where
        P: IntoIterator<Item = Node>,
        W: FnMut() -> Weight;

    /// Like [`GeneratorSubstructures::connect_path`] but also connects the last node back to
    /// the first. Fewer than three nodes do not form a cycle and yield a path instead.
    fn connect_cycle<C, W>(&mut self, nodes_in_cycle: C, weights: W) -> NumEdges
    where
        C: IntoIterator<Item = Node>,
        W: FnMut() -> Weight;

    /// Connects every pair of distinct nodes. Directed graphs receive both directions.
    fn connect_clique<W>(&mut self, nodes: &[Node], weights: W) -> NumEdges
    where
        W: FnMut() -> Weight;

    /// Connects `nodes` by a uniformly shuffled random tree: every node but the first (after
    /// shuffling) is attached to a random node placed before it.
    fn connect_random_tree<R, W>(&mut self, rng: &mut R, nodes: &[Node], weights: W) -> NumEdges
    where
        R: Rng,
        W: FnMut() -> Weight;
}

/// Inserts an edge and reports whether it was accepted
fn insert<G: GraphEdgeEditing>(graph: &mut G, u: Node, v: Node, weight: Weight) -> bool {
    match graph.try_add_edge(u, v, weight) {
        Ok(()) => true,
        Err(e) => {
            debug!("Skipped edge {}: {e}", Edge(u, v));
            false
        }
    }
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P, W>(&mut self, nodes_on_path: P, mut weights: W) -> NumEdges
    where
        P: IntoIterator<Item = Node>,
        W: FnMut() -> Weight,
    {
        nodes_on_path
            .into_iter()
            .tuple_windows()
            .filter(|&(u, v)| insert(self, u, v, weights()))
            .count() as NumEdges
    }

    fn connect_cycle<C, W>(&mut self, nodes_in_cycle: C, mut weights: W) -> NumEdges
    where
        C: IntoIterator<Item = Node>,
        W: FnMut() -> Weight,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        let mut inserted = self.connect_path(nodes.iter().copied(), &mut weights);

        if let [first, _, .., last] = nodes[..] {
            inserted += insert(self, last, first, weights()) as NumEdges;
        }

        inserted
    }

    fn connect_clique<W>(&mut self, nodes: &[Node], mut weights: W) -> NumEdges
    where
        W: FnMut() -> Weight,
    {
        let directed = self.is_directed();
        let mut inserted = 0;

        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                inserted += insert(self, u, v, weights()) as NumEdges;
                if directed {
                    inserted += insert(self, v, u, weights()) as NumEdges;
                }
            }
        }

        inserted
    }

    fn connect_random_tree<R, W>(&mut self, rng: &mut R, nodes: &[Node], mut weights: W) -> NumEdges
    where
        R: Rng,
        W: FnMut() -> Weight,
    {
        let mut order = nodes.to_vec();
        order.shuffle(rng);

        let mut inserted = 0;
        for (i, &child) in order.iter().enumerate().skip(1) {
            let parent = order[rng.random_range(0..i)];
            inserted += insert(self, parent, child, weights()) as NumEdges;
        }

        inserted
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::*;

    #[test]
    fn connect_path() {
        let mut g = AdjList::new(6, GraphFlags::undirected());
        assert_eq!(g.connect_path([], || 1.0), 0);
        assert_eq!(g.connect_path([1], || 1.0), 0);
        assert_eq!(g.number_of_edges(), 0);

        assert_eq!(g.connect_path([1, 4, 2, 6], || 1.0), 3);
        assert_eq!(
            g.ordered_edges(true).map(|e| e.edge()).collect_vec(),
            vec![Edge(1, 4), Edge(2, 4), Edge(2, 6)]
        );

        // (4, 1) already exists and (3, 3) is a loop
        assert_eq!(g.connect_path([4, 1, 3, 3], || 1.0), 1);
        assert_eq!(g.number_of_edges(), 4);
    }

    #[test]
    fn connect_cycle() {
        let mut g = AdjMatrix::new(6, GraphFlags::directed());
        assert_eq!(g.connect_cycle([], || 1.0), 0);
        assert_eq!(g.connect_cycle([2, 5], || 1.0), 1);
        assert!(!g.has_edge(5, 2));

        let mut g = AdjMatrix::new(6, GraphFlags::directed());
        let mut next = 0.0;
        assert_eq!(
            g.connect_cycle([1, 4, 2, 6], || {
                next += 1.0;
                next
            }),
            4
        );
        assert_eq!(
            g.ordered_edges(false).map(|e| (e.source, e.target, e.weight)).collect_vec(),
            vec![(1, 4, 1.0), (2, 6, 3.0), (4, 2, 2.0), (6, 1, 4.0)]
        );
    }

    #[test]
    fn connect_clique() {
        for directed in [false, true] {
            let mut g = AdjList::new(6, GraphFlags::new(directed));
            assert_eq!(g.connect_clique(&[], || 1.0), 0);
            assert_eq!(g.connect_clique(&[3], || 1.0), 0);

            let expected = if directed { 6 } else { 3 };
            assert_eq!(g.connect_clique(&[1, 2, 4], || 1.0), expected);
            assert_eq!(g.number_of_edges(), expected);
            assert!(g.has_edge(4, 1));
            assert!(!g.has_edge(3, 1));
        }
    }

    #[test]
    fn connect_random_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

        for n in 1..40 {
            let mut g = AdjList::new(n + 3, GraphFlags::undirected());
            let nodes = (1..=n).collect_vec();
            assert_eq!(g.connect_random_tree(rng, &nodes, || 1.0), n - 1);

            // the three extra vertices stay isolated
            assert_eq!(g.number_of_connected_components(), 4);
            assert!(!g.has_cycle());
        }
    }
}
