//! # Description Files
//!
//! A description file lists eleven whitespace separated values, line breaks are allowed anywhere:
//!     "{degree} {order} {directed} {components} {vertices_weighted} {edges_weighted}
//!      {complete} {bipartite} {tree} {has_bridge} {has_articulation_point}"
//! All values but `degree`, `order` and `components` are `0` or `1`.

use std::{fs::File, str::FromStr};

use super::*;

/// Target properties of a randomly generated graph.
///
/// The order, the direction and the weight flags are always honored by the generator; the other
/// values are hints that are followed as far as they are compatible with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphDescription {
    /// Largest out-degree to aim for
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

/// Number of values in a description file
const NUM_VALUES: usize = 11;

impl GraphDescription {
    /// Returns the flags of a graph built from this description
    pub fn flags(&self) -> GraphFlags {
        GraphFlags::new(self.directed)
            .with_vertex_weights(self.vertices_weighted)
            .with_edge_weights(self.edges_weighted)
    }

    /// Reads a description from the given reader
    pub fn try_read<R: BufRead>(reader: R) -> GraphResult<Self> {
        let mut tokens = Vec::with_capacity(NUM_VALUES);
        let mut last_line = 0;

        for (line_number, line) in (1..).zip(reader.lines()) {
            let line = line?;
            last_line = line_number;
            for token in line.split_whitespace() {
                raise_error_unless!(
                    tokens.len() < NUM_VALUES,
                    line_number,
                    format!("Description has more than {NUM_VALUES} values")
                );
                tokens.push((line_number, token.to_string()));
            }
        }

        raise_error_unless!(
            tokens.len() == NUM_VALUES,
            last_line,
            format!(
                "Description needs {NUM_VALUES} values, found {}",
                tokens.len()
            )
        );

        let number = |i: usize, name: &str| -> GraphResult<NumNodes> {
            let (line, token) = &tokens[i];
            let mut parts = std::iter::once(token.as_str());
            Ok(parse_next_value!(parts, *line, name))
        };
        let flag = |i: usize, name: &str| -> GraphResult<bool> {
            let (line, token) = &tokens[i];
            parse_flag(token, *line, name)
        };

        Ok(Self {
            degree: number(0, "Degree")?,
            order: number(1, "Order")?,
            directed: flag(2, "Directed")?,
            connected_components: number(3, "Connected components")?,
            vertices_weighted: flag(4, "Vertices weighted")?,
            edges_weighted: flag(5, "Edges weighted")?,
            complete: flag(6, "Complete")?,
            bipartite: flag(7, "Bipartite")?,
            tree: flag(8, "Tree")?,
            has_bridge: flag(9, "Has bridge")?,
            has_articulation_point: flag(10, "Has articulation point")?,
        })
    }

    /// Reads a description from the given file
    pub fn try_read_file<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        Self::try_read(BufReader::new(File::open(path)?))
    }

    /// Writes the description in the format accepted by [`GraphDescription::try_read`]
    pub fn try_write<W: Write>(&self, mut writer: W) -> GraphResult<()> {
        writeln!(
            writer,
            "{} {} {} {} {} {} {} {} {} {} {}",
            self.degree,
            self.order,
            flag_str(self.directed),
            self.connected_components,
            flag_str(self.vertices_weighted),
            flag_str(self.edges_weighted),
            flag_str(self.complete),
            flag_str(self.bipartite),
            flag_str(self.tree),
            flag_str(self.has_bridge),
            flag_str(self.has_articulation_point)
        )?;
        Ok(())
    }
}

impl FromStr for GraphDescription {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        Self::try_read(s.as_bytes())
    }
}
