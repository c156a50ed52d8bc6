/*!
# Graph Generators

- [`GeneratorSubstructures`] adds paths, cycles, cliques and random trees to an existing graph.
- [`DescribedGraph`] builds a whole random graph from a [`GraphDescription`].

All randomness is drawn from a caller supplied [`Rng`], so a seeded generator such as
[`rand_pcg::Pcg64`] reproduces the same graph.
*/

use rand::{Rng, seq::SliceRandom};

use crate::{io::GraphDescription, prelude::*};

mod described;
mod substructures;

pub use described::*;
pub use substructures::*;
