/*!
# IO

Utilities for reading and writing graphs and generator descriptions.

## Graph Files

A graph file starts with the header `order directed vertices_weighted edges_weighted`
(see [`GraphHeader`]), followed by one line of `order` vertex weights if vertices are weighted,
followed by one edge `u v [weight]` per line. See [`graph_file`] for the details of how malformed
input is treated.

## Description Files

[`GraphDescription`] holds the eleven values driving the random graph generator in
[`gens`](crate::gens).

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`GraphRead`] and [`GraphWrite`] are implemented on graphs and use the default settings.
*/

pub mod description;
pub mod graph_file;
pub mod header;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use description::*;
pub use graph_file::*;
pub use header::*;

/// Trait for types that can read graphs.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> GraphResult<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> GraphResult<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> GraphResult<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    /// Internally wraps the file in a buffered writer.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> GraphResult<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Reading graphs with the default [`GraphFileReader`]
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader
    fn try_read_from<R>(reader: R) -> GraphResult<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file
    fn try_read_from_file<P>(path: P) -> GraphResult<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_from(BufReader::new(File::open(path)?))
    }
}

impl<G> GraphRead for G
where
    G: GraphVertexEditing + GraphEdgeOrder,
{
    fn try_read_from<R>(reader: R) -> GraphResult<Self>
    where
        R: BufRead,
    {
        GraphFileReader::default().try_read_graph(reader)
    }
}

/// Writing graphs with the default [`GraphFileWriter`]
pub trait GraphWrite {
    /// Writes the graph to the given writer
    fn try_write_to<W>(&self, writer: W) -> GraphResult<()>
    where
        W: Write;

    /// Writes the graph to the given file
    fn try_write_to_file<P>(&self, path: P) -> GraphResult<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to(BufWriter::new(File::create(path)?))
    }
}

impl<G> GraphWrite for G
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_to<W>(&self, writer: W) -> GraphResult<()>
    where
        W: Write,
    {
        GraphFileWriter.try_write_graph(self, writer)
    }
}

/// Shorthand for creating a new `GraphError::Malformed`
macro_rules! malformed {
    ($line: expr, $reason: expr) => {
        GraphError::Malformed {
            line: $line,
            reason: $reason.to_string(),
        }
    };
}

/// Shorthand for returning `Err(GraphError::Malformed)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $reason : expr) => {
        if !($cond) {
            return Err(malformed!($line, $reason));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(malformed!(
                $line,
                format!("Premature end of line when parsing {}", $name)
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(malformed!(
                    $line,
                    format!("Cannot parse {} from '{}'", $name, token)
                ));
            }
        }
    }};
}

/// Parses a `0`/`1` flag
fn parse_flag(token: &str, line: usize, name: &str) -> GraphResult<bool> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(malformed!(
            line,
            format!("Expected 0 or 1 for {name}, found '{token}'")
        )),
    }
}

fn flag_str(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

use malformed;
use parse_next_value;
use raise_error_unless;
