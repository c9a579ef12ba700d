// src/cli/args.rs
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::graph::{cycle_graph, grid_graph, path_graph, star_graph, Graph};

#[derive(Parser)]
#[command(name = "reachlab", version, about = "Graph reachability: matrix powers vs BFS")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample graph and write it as interchange JSON
    Generate {
        #[arg(value_enum)]
        kind: SampleKind,
        /// Node count (grid uses --rows/--cols instead)
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 3)]
        cols: usize,
        /// Override the generated graph name
        #[arg(long)]
        name: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show node/edge counts and connectedness for a graph
    Info {
        #[command(flatten)]
        source: GraphSource,
    },
    /// Run the connectivity discovery experiment
    Discover {
        #[command(flatten)]
        source: GraphSource,
        /// Print the adjacency matrix, the power series, and the
        /// reachability matrix
        #[arg(long, short)]
        verbose: bool,
        /// Emit the service JSON envelope instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Check that the matrix and BFS methods agree
    Compare {
        #[command(flatten)]
        source: GraphSource,
        #[arg(long)]
        json: bool,
    },
    /// Time the matrix method against BFS
    Bench {
        #[command(flatten)]
        source: GraphSource,
        /// Run the full sample-graph suite instead of a single graph
        #[arg(long)]
        suite: bool,
        /// With --suite, also write results as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// List connected components
    Components {
        #[command(flatten)]
        source: GraphSource,
    },
    /// Round-trip the adjacency matrix back to canonical graph JSON
    Export {
        #[command(flatten)]
        source: GraphSource,
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,
    },
}

/// Where the graph under analysis comes from: a JSON file or a built-in
/// sample family.
#[derive(Args)]
pub struct GraphSource {
    /// Load a graph JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "sample")]
    pub graph: Option<PathBuf>,
    /// Generate a sample graph instead of loading one
    #[arg(long, value_enum)]
    pub sample: Option<SampleKind>,
    /// Sample node count (grid uses --rows/--cols)
    #[arg(long, default_value_t = 8)]
    pub size: usize,
    #[arg(long, default_value_t = 3)]
    pub rows: usize,
    #[arg(long, default_value_t = 3)]
    pub cols: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    Path,
    Cycle,
    Star,
    Grid,
}

impl SampleKind {
    /// Builds the sample deterministically from the size arguments.
    #[must_use]
    pub fn build(self, size: usize, rows: usize, cols: usize, name: Option<String>) -> Graph {
        match self {
            Self::Path => path_graph(size, name),
            Self::Cycle => cycle_graph(size, name),
            Self::Star => star_graph(size, name),
            Self::Grid => grid_graph(rows, cols, name),
        }
    }
}
