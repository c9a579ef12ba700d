// src/cli/mod.rs
//! Command-line front end.
//!
//! The engine is stateless; the "current graph" lives in a [`Session`]
//! built once per invocation from the `--graph`/`--sample` arguments and
//! passed into every handler.

mod args;
mod handlers;

pub use args::{Cli, Commands, GraphSource, SampleKind};

use crate::graph::{graph_to_adjacency, Graph, NodeMapping};
use crate::matrix::Matrix;
use anyhow::{bail, Context, Result};
use std::fs;

/// The graph under analysis plus its derived matrix and mapping.
pub struct Session {
    pub graph: Graph,
    pub matrix: Matrix,
    pub mapping: NodeMapping,
}

impl Session {
    /// Loads or generates the graph named by the source arguments.
    ///
    /// # Errors
    /// Fails when neither source is given, the file cannot be read, or
    /// the JSON does not match the interchange schema.
    pub fn open(source: &GraphSource) -> Result<Self> {
        let graph = match (&source.graph, source.sample) {
            (Some(path), _) => {
                let body = fs::read_to_string(path)
                    .with_context(|| format!("cannot read graph file {}", path.display()))?;
                serde_json::from_str(&body)
                    .with_context(|| format!("{} is not a valid graph file", path.display()))?
            }
            (None, Some(kind)) => kind.build(source.size, source.rows, source.cols, None),
            (None, None) => bail!("no graph given: use --graph FILE or --sample KIND"),
        };
        Ok(Self::from_graph(graph))
    }

    #[must_use]
    pub fn from_graph(graph: Graph) -> Self {
        let (matrix, mapping) = graph_to_adjacency(&graph);
        Self {
            graph,
            matrix,
            mapping,
        }
    }
}

/// Routes a parsed command line to its handler.
///
/// # Errors
/// Propagates handler failures for the binary to render.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate {
            kind,
            size,
            rows,
            cols,
            name,
            output,
        } => handlers::generate(*kind, *size, *rows, *cols, name.clone(), output.as_deref()),
        Commands::Info { source } => handlers::info(&Session::open(source)?),
        Commands::Discover {
            source,
            verbose,
            json,
        } => handlers::discover(&Session::open(source)?, *verbose, *json),
        Commands::Compare { source, json } => handlers::compare(&Session::open(source)?, *json),
        Commands::Bench {
            source,
            suite,
            csv,
            json,
        } => {
            if *suite {
                handlers::bench_suite(csv.as_deref())
            } else {
                handlers::bench(&Session::open(source)?, *json)
            }
        }
        Commands::Components { source } => handlers::components(&Session::open(source)?),
        Commands::Export { source, output } => handlers::export(&Session::open(source)?, output),
    }
}
