//! # Graph Files
//!
//! A graph file consists of a [`GraphHeader`], a line of vertex weights if the graph is
//! vertex-weighted, and one edge `u v [weight]` per line.
//!
//! Blank lines are skipped everywhere. A malformed header or vertex weight line is an error; all
//! vertex weights have to be given on the first content line after the header.
//! Reading edges stops at the first line that does not parse as an edge; edges that parse but are
//! rejected by the graph (self-loops, duplicates, unknown vertices) are skipped. Both cases are
//! reported via `log::warn!`.

use std::io::Lines;

use itertools::Itertools;
use log::{debug, warn};

use super::*;

/// A GraphReader for the graph file format
#[derive(Debug, Clone, Default)]
pub struct GraphFileReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
}

impl GraphFileReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a comment identifier; by default, no line is treated as a comment
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = Some(c.into());
        self
    }
}

impl<G: GraphVertexEditing + GraphEdgeOrder> GraphReader<G> for GraphFileReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> GraphResult<G> {
        let mut lines = ContentLines::new(reader, self.comment_identifier.as_deref());

        let Some((line, content)) = lines.try_next()? else {
            return Err(malformed!(lines.line_number() + 1, "Header not found"));
        };
        let header = GraphHeader::parse(&content, line)?;
        let mut graph = G::try_new(header.order, header.flags)
            .map_err(|e| malformed!(line, format!("Header>Order: {e}")))?;

        if header.flags.vertices_weighted {
            for (u, weight) in (1..).zip(read_vertex_weights(&mut lines, header.order)?) {
                graph.set_vertex_weight(u, weight)?;
            }
        }

        let mut rejected = 0;
        while let Some((line, content)) = lines.try_next()? {
            let edge = match parse_edge(&content, line, header.flags.edges_weighted) {
                Ok(edge) => edge,
                Err(e) => {
                    warn!("Stop reading edges: {e}");
                    break;
                }
            };

            if let Err(e) = graph.try_add_edge(edge.source, edge.target, edge.weight) {
                warn!("Line {line}: skipping edge {}: {e}", edge.edge());
                rejected += 1;
            }
        }

        debug!(
            "Read graph with {} vertices and {} edges ({rejected} rejected)",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );
        Ok(graph)
    }
}

/// Reads the line following the header which holds exactly `order` vertex weights
fn read_vertex_weights<R: BufRead>(
    lines: &mut ContentLines<'_, R>,
    order: NumNodes,
) -> GraphResult<Vec<Weight>> {
    let Some((line, content)) = lines.try_next()? else {
        return Err(malformed!(
            lines.line_number() + 1,
            "Vertex weights not found"
        ));
    };

    let mut parts = content.split_whitespace();
    let mut weights = Vec::new();
    for _ in 0..order {
        weights.push(parse_next_value!(parts, line, "Vertex weight"));
    }
    raise_error_unless!(
        parts.next().is_none(),
        line,
        format!("Expected {order} vertex weights, found more")
    );

    Ok(weights)
}

/// Parses `u v` or `u v weight`; tokens beyond those are ignored
fn parse_edge(content: &str, line: usize, weighted: bool) -> GraphResult<WeightedEdge> {
    let mut parts = content.split_whitespace();

    let source: Node = parse_next_value!(parts, line, "Source node");
    let target: Node = parse_next_value!(parts, line, "Target node");
    let weight: Weight = if weighted {
        parse_next_value!(parts, line, "Edge weight")
    } else {
        DEFAULT_WEIGHT
    };

    Ok(WeightedEdge::new(source, target, weight))
}

/// Iterates over non-blank, non-comment lines together with their (1-based) line number
struct ContentLines<'a, R> {
    lines: Lines<R>,
    line_number: usize,
    comment_identifier: Option<&'a str>,
}

impl<'a, R: BufRead> ContentLines<'a, R> {
    fn new(reader: R, comment_identifier: Option<&'a str>) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            comment_identifier,
        }
    }

    /// Number of the last line read
    fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the next content line if it exists or propagates an error
    fn try_next(&mut self) -> GraphResult<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line?;

            let trimmed = line.trim();
            if trimmed.is_empty()
                || self
                    .comment_identifier
                    .is_some_and(|c| trimmed.starts_with(c))
            {
                continue;
            }

            return Ok(Some((self.line_number, line)));
        }

        Ok(None)
    }
}

/// A writer for the graph file format.
///
/// Vertices are written in the storage order of the representation; edges of undirected graphs
/// are written once as `u v` with `u < v`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphFileWriter;

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for GraphFileWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> GraphResult<()> {
        GraphHeader::of(graph).write(&mut writer)?;

        if graph.vertices_weighted() && !graph.is_empty() {
            writeln!(
                writer,
                "{}",
                graph.vertices().map(|u| graph.vertex_weight(u)).join(" ")
            )?;
        }

        let undirected = graph.is_undirected();
        for u in graph.vertices_in_storage_order() {
            for (v, w) in graph.weighted_neighbors_of(u) {
                if undirected && v < u {
                    continue;
                }

                if graph.edges_weighted() {
                    writeln!(writer, "{u} {v} {w}")?;
                } else {
                    writeln!(writer, "{u} {v}")?;
                }
            }
        }

        writer.flush()?;
        Ok(())
    }
}
