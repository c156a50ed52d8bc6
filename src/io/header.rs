//! # Headers
//!
//! The first content line of a graph file defines the order and the flags of the graph:
//!     "{order} {directed} {vertices_weighted} {edges_weighted}"
//! where every flag is `0` or `1`.

use smallvec::SmallVec;

use super::*;

/// Order and flags of a graph as stated in the header of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphHeader {
    pub order: NumNodes,
    pub flags: GraphFlags,
}

impl GraphHeader {
    /// Returns the header describing `graph`
    pub fn of<G: GraphNodeOrder + GraphType>(graph: &G) -> Self {
        Self {
            order: graph.number_of_nodes(),
            flags: graph.flags(),
        }
    }

    /// Tries to parse the header from the content of line number `line`
    pub fn parse(content: &str, line: usize) -> GraphResult<Self> {
        let tokens: SmallVec<[&str; 4]> = content.split_whitespace().collect();
        raise_error_unless!(
            tokens.len() == 4,
            line,
            format!("Header needs 4 values, found {}", tokens.len())
        );

        let mut parts = tokens.iter();
        let order: NumNodes = parse_next_value!(parts, line, "Header>Order");

        let flags = GraphFlags {
            directed: parse_flag(tokens[1], line, "Header>Directed")?,
            vertices_weighted: parse_flag(tokens[2], line, "Header>Vertices weighted")?,
            edges_weighted: parse_flag(tokens[3], line, "Header>Edges weighted")?,
        };

        Ok(Self { order, flags })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> GraphResult<()> {
        writeln!(
            writer,
            "{} {} {} {}",
            self.order,
            flag_str(self.flags.directed),
            flag_str(self.flags.vertices_weighted),
            flag_str(self.flags.edges_weighted)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_header() {
        let header = GraphHeader::parse("5 1 0 1", 1).unwrap();
        assert_eq!(header.order, 5);
        assert_eq!(
            header.flags,
            GraphFlags::directed().with_edge_weights(true)
        );

        let header = GraphHeader::parse("  0   0 1 0 ", 3).unwrap();
        assert_eq!(header.order, 0);
        assert!(header.flags.vertices_weighted);
    }

    #[test]
    fn malformed_headers() {
        for content in ["", "5 1 0", "5 1 0 1 1", "x 1 0 0", "-2 0 0 0", "5 2 0 0"] {
            assert!(
                matches!(
                    GraphHeader::parse(content, 4),
                    Err(GraphError::Malformed { line: 4, .. })
                ),
                "{content:?}"
            );
        }
    }

    #[test]
    fn write_header() {
        let header = GraphHeader {
            order: 7,
            flags: GraphFlags::undirected().with_vertex_weights(true),
        };

        let mut buffer = Vec::new();
        header.write(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "7 0 1 0\n");
    }
}
