//! Command line front-end: analyze a graph file or generate a random graph from a description.

use std::{fmt, path::PathBuf, process};

use adjgraphs::{algo::*, gens::DescribedGraph, io::*, prelude::*};
use clap::{ArgGroup, Parser};
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg64;

#[derive(Parser, Debug)]
#[command(
    name = "adjgraphs",
    version,
    about = "Analyze graph files or generate random graphs"
)]
#[command(group(ArgGroup::new("mode").required(true).args(["describe", "create"])))]
#[command(group(ArgGroup::new("storage").required(true).args(["matrix", "list"])))]
struct Cli {
    /// Load FILES[0] and print its properties
    #[arg(short = 'd')]
    describe: bool,

    /// Generate a random graph following the description in FILES[0] and save it to FILES[1]
    #[arg(short = 'c')]
    create: bool,

    /// Store the graph as an adjacency matrix
    #[arg(short = 'm')]
    matrix: bool,

    /// Store the graph as an adjacency list
    #[arg(short = 'l')]
    list: bool,

    #[arg(required = true, num_args = 1..=2)]
    files: Vec<PathBuf>,

    /// Also print the adjacency of every vertex
    #[arg(long)]
    show: bool,

    /// Seed for the random generator; drawn from entropy if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let expected_files = if cli.describe { 1 } else { 2 };
    if cli.files.len() != expected_files {
        eprintln!(
            "Usage: adjgraphs -d {{-m|-l}} <graphfile> | adjgraphs -c {{-m|-l}} <descfile> <outfile>"
        );
        process::exit(1);
    }

    let result = if cli.matrix {
        run::<AdjMatrix>(&cli)
    } else {
        run::<AdjList>(&cli)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run<G>(cli: &Cli) -> GraphResult<()>
where
    G: GraphEngine + fmt::Display,
{
    if cli.describe {
        describe::<G>(cli)
    } else {
        create::<G>(cli)
    }
}

fn describe<G>(cli: &Cli) -> GraphResult<()>
where
    G: GraphEngine + fmt::Display,
{
    let graph = G::try_read_from_file(&cli.files[0])?;
    if cli.show {
        print!("{graph}");
    }

    print!("{}", graph.properties());
    match graph.largest_shortest_path() {
        Some(path) => println!("Largest shortest path: {path}"),
        None => println!("Largest shortest path: none"),
    }
    println!("Edge colors: {}", graph.color_edges().number_of_colors());

    Ok(())
}

fn create<G>(cli: &Cli) -> GraphResult<()>
where
    G: GraphEngine + fmt::Display,
{
    let description = GraphDescription::try_read_file(&cli.files[0])?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Generating {description:?} with seed {seed}");

    let rng = &mut Pcg64::seed_from_u64(seed);
    let graph = G::from_description(rng, &description)?;
    graph.try_write_to_file(&cli.files[1])?;

    if cli.show {
        print!("{graph}");
    }
    println!(
        "Wrote {} vertices and {} edges to {} (seed {seed})",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        cli.files[1].display()
    );

    Ok(())
}
