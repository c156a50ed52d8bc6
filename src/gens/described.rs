/*!
# Described Graphs

Random graphs built from a [`GraphDescription`].

The order, the direction and the weight flags are always honored. The remaining values are
applied in this order of precedence:

1. `complete`: a single clique over all vertices.
2. `tree`: a single random spanning tree.
3. Otherwise the shuffled vertices are split into `connected_components` groups of nearly equal
   size. Each group is connected by a cycle (a path if it is too small, or odd while `bipartite`
   is requested) and random edges are added while both endpoints have an out-degree below
   `degree`. If `bipartite` is requested, extra edges only join opposite sides.
   If `has_bridge` or `has_articulation_point` is requested, the last vertex of every group with
   at least three vertices is attached as a pendant after the extra edges.
*/

use itertools::Itertools;
use log::debug;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use super::*;
use crate::algo::{BipartiteTest, Bipartition};

/// Random vertex and edge weights are drawn uniformly from `1..=MAX_RANDOM_WEIGHT`
pub const MAX_RANDOM_WEIGHT: u32 = 10;

fn random_weight<R: Rng>(rng: &mut R) -> Weight {
    rng.random_range(1..=MAX_RANDOM_WEIGHT) as Weight
}

/// Graphs that can be generated from a [`GraphDescription`]
pub trait DescribedGraph: Sized {
    /// Creates a random graph following `description` as closely as its hints allow
    fn from_description<R>(rng: &mut R, description: &GraphDescription) -> GraphResult<Self>
    where
        R: Rng;
}

impl<G> DescribedGraph for G
where
    G: GraphEngine,
{
    fn from_description<R>(rng: &mut R, description: &GraphDescription) -> GraphResult<Self>
    where
        R: Rng,
    {
        let n = description.order;
        let mut graph = G::try_new(n, description.flags())?;
        if n == 0 {
            return Ok(graph);
        }

        if description.vertices_weighted {
            for u in 1..=n {
                graph.set_vertex_weight(u, random_weight(rng))?;
            }
        }

        // edge weights use their own stream as `rng` is also needed while inserting edges
        let mut weight_rng = Pcg64Mcg::seed_from_u64(rng.random());
        let edges_weighted = description.edges_weighted;
        let mut weights = move || {
            if edges_weighted {
                random_weight(&mut weight_rng)
            } else {
                DEFAULT_WEIGHT
            }
        };

        let mut nodes = (1..=n).collect_vec();
        nodes.shuffle(rng);

        if description.complete {
            graph.connect_clique(&nodes, &mut weights);
        } else if description.tree {
            graph.connect_random_tree(rng, &nodes, &mut weights);
        } else {
            let n = nodes.len();
            let k = description.connected_components.clamp(1, n as NumNodes) as usize;
            for i in 0..k {
                let group = &nodes[i * n / k..(i + 1) * n / k];
                connect_group(&mut graph, rng, group, description, &mut weights);
            }
        }

        debug!(
            "Generated graph with {} vertices and {} edges",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );
        Ok(graph)
    }
}

/// Connects all vertices of `group` and adds extra edges within it
fn connect_group<G, R, W>(
    graph: &mut G,
    rng: &mut R,
    group: &[Node],
    description: &GraphDescription,
    weights: &mut W,
) where
    G: GraphEngine,
    R: Rng,
    W: FnMut() -> Weight,
{
    let wants_pendant = description.has_bridge || description.has_articulation_point;
    let (core, pendant) = match group {
        [core @ .., last] if wants_pendant && core.len() >= 2 => (core, Some(*last)),
        _ => (group, None),
    };

    if core.len() >= 3 && (!description.bipartite || core.len() % 2 == 0) {
        graph.connect_cycle(core.iter().copied(), &mut *weights);
    } else {
        graph.connect_path(core.iter().copied(), &mut *weights);
    }

    add_extra_edges(graph, rng, core, description, &mut *weights);

    if let Some(leaf) = pendant {
        let anchor = core[rng.random_range(0..core.len())];
        graph.connect_path([anchor, leaf], &mut *weights);
    }
}

/// Tries `|nodes| * degree` random pairs and inserts those that keep the degree bound
fn add_extra_edges<G, R, W>(
    graph: &mut G,
    rng: &mut R,
    nodes: &[Node],
    description: &GraphDescription,
    weights: &mut W,
) where
    G: GraphEngine,
    R: Rng,
    W: FnMut() -> Weight,
{
    if nodes.len() < 3 {
        return;
    }

    let sides = if description.bipartite {
        match graph.compute_bipartition() {
            Some(sides) => Some(sides),
            None => return,
        }
    } else {
        None
    };

    let has_room = |degree: NumNodes| degree < description.degree;

    for _ in 0..nodes.len() * description.degree as usize {
        let u = nodes[rng.random_range(0..nodes.len())];
        let v = nodes[rng.random_range(0..nodes.len())];

        if u == v || graph.has_edge(u, v) {
            continue;
        }
        if sides
            .as_ref()
            .is_some_and(|s| s.is_on_left_side(u) == s.is_on_left_side(v))
        {
            continue;
        }
        if !has_room(graph.degree_of(u))
            || (graph.is_undirected() && !has_room(graph.degree_of(v)))
        {
            continue;
        }

        graph.connect_path([u, v], &mut *weights);
    }
}

#[cfg(test)]
mod test {
    use rand_pcg::Pcg64;

    use super::*;
    use crate::algo::*;

    fn description(order: NumNodes) -> GraphDescription {
        GraphDescription {
            degree: 3,
            order,
            connected_components: 1,
            ..Default::default()
        }
    }

    fn generate<G: GraphEngine>(seed: u64, description: &GraphDescription) -> G {
        let rng = &mut Pcg64::seed_from_u64(seed);
        G::from_description(rng, description).unwrap()
    }

    #[test]
    fn order_direction_and_weights() {
        for (seed, order) in [(1, 0), (2, 1), (3, 7), (4, 30)] {
            for directed in [false, true] {
                let desc = GraphDescription {
                    directed,
                    vertices_weighted: true,
                    edges_weighted: true,
                    ..description(order)
                };

                let graph: AdjList = generate(seed, &desc);
                assert_eq!(graph.number_of_nodes(), order);
                assert_eq!(graph.flags(), desc.flags());

                for u in graph.vertices() {
                    let w = graph.vertex_weight(u);
                    assert!((1.0..=MAX_RANDOM_WEIGHT as Weight).contains(&w));
                }
                for e in graph.edges(false) {
                    assert!((1.0..=MAX_RANDOM_WEIGHT as Weight).contains(&e.weight));
                }
            }
        }
    }

    #[test]
    fn unweighted_edges_have_default_weight() {
        let graph: AdjMatrix = generate(5, &description(12));
        assert!(graph.number_of_edges() > 0);
        assert!(graph.edges(false).all(|e| e.weight == DEFAULT_WEIGHT));
        assert!(graph.vertices().all(|u| graph.vertex_weight(u) == DEFAULT_WEIGHT));
    }

    #[test]
    fn complete_hint() {
        for directed in [false, true] {
            let desc = GraphDescription {
                directed,
                complete: true,
                ..description(9)
            };
            let graph: AdjMatrix = generate(6, &desc);
            assert!(graph.is_complete());
            assert_eq!(graph.number_of_edges(), if directed { 72 } else { 36 });
        }
    }

    #[test]
    fn tree_hint() {
        for seed in 0..20 {
            let desc = GraphDescription {
                tree: true,
                ..description(seed as NumNodes + 1)
            };
            let graph: AdjList = generate(seed, &desc);
            assert!(graph.is_tree());
        }
    }

    #[test]
    fn component_and_degree_hints() {
        for seed in 0..20 {
            for k in [1, 2, 5] {
                let desc = GraphDescription {
                    degree: 4,
                    connected_components: k,
                    ..description(25)
                };
                let graph: AdjList = generate(seed, &desc);
                assert_eq!(graph.number_of_connected_components(), k);
                assert!(graph.max_degree() <= 4);
            }
        }

        let graph: AdjList = generate(
            1,
            &GraphDescription {
                connected_components: 10,
                ..description(4)
            },
        );
        assert_eq!(graph.number_of_connected_components(), 4);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn order_too_large_for_storage() {
        let rng = &mut Pcg64::seed_from_u64(7);
        let desc = description(NumNodes::MAX);
        assert!(matches!(
            AdjMatrix::from_description(rng, &desc),
            Err(GraphError::TooLarge(NumNodes::MAX))
        ));
    }

    #[test]
    fn bipartite_hint() {
        for seed in 0..20 {
            for order in [5, 8, 13] {
                let desc = GraphDescription {
                    degree: 5,
                    bipartite: true,
                    ..description(order)
                };
                let graph: AdjList = generate(seed, &desc);
                assert!(graph.is_bipartite());
                assert!(graph.is_connected());
            }
        }
    }

    #[test]
    fn bridge_and_articulation_hints() {
        for seed in 0..20 {
            let desc = GraphDescription {
                has_bridge: true,
                has_articulation_point: true,
                ..description(10)
            };
            let graph: AdjMatrix = generate(seed, &desc);
            assert!(graph.has_bridge());
            assert!(graph.has_articulation_point());
        }
    }

    #[test]
    fn reproducible() {
        let desc = GraphDescription {
            degree: 4,
            connected_components: 3,
            edges_weighted: true,
            vertices_weighted: true,
            ..description(40)
        };

        let a: AdjList = generate(0xfeed, &desc);
        let b: AdjList = generate(0xfeed, &desc);
        assert_eq!(a, b);

        let m: AdjMatrix = generate(0xfeed, &desc);
        assert_eq!(
            a.ordered_edges(true).collect_vec(),
            m.ordered_edges(true).collect_vec()
        );
    }
}
