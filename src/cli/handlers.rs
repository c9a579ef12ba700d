// src/cli/handlers.rs
//! One function per subcommand. Handlers own all printing; engine calls
//! stay pure.

use super::{SampleKind, Session};
use crate::graph::adjacency_to_graph;
use crate::reach::{self, BenchmarkRun};
use crate::reporting::console;
use crate::service;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub fn generate(
    kind: SampleKind,
    size: usize,
    rows: usize,
    cols: usize,
    name: Option<String>,
    output: Option<&Path>,
) -> Result<()> {
    let graph = kind.build(size, rows, cols, name);
    let body = serde_json::to_string_pretty(&graph).context("cannot serialize graph")?;

    match output {
        Some(path) => {
            fs::write(path, body)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!(
                "Wrote {} ({} nodes, {} edges) to {}",
                graph.name.as_deref().unwrap_or("graph"),
                graph.node_count(),
                graph.edge_count(),
                path.display()
            );
        }
        None => println!("{body}"),
    }
    Ok(())
}

pub fn info(session: &Session) -> Result<()> {
    let n = session.mapping.len();
    println!("{}", "Graph Information:".bold());
    println!(
        "  Name: {}",
        session.graph.name.as_deref().unwrap_or("(unnamed)")
    );
    println!("  Nodes: {n}");
    println!("  Edges: {}", session.graph.edge_count());
    println!("  Connected: {}", reach::is_connected(&session.matrix));

    if n > 0 && n <= 10 {
        console::print_matrix("Adjacency Matrix", &session.matrix);
    }
    Ok(())
}

pub fn discover(session: &Session, verbose: bool, json: bool) -> Result<()> {
    if json {
        let envelope = service::run_discovery(&session.graph);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    let report = reach::analyze_connectivity(&session.matrix)?;
    let comparison = reach::compare_methods(&session.matrix)?;
    console::print_discovery(&report, verbose);
    console::print_comparison(&comparison);
    Ok(())
}

pub fn compare(session: &Session, json: bool) -> Result<()> {
    let comparison = reach::compare_methods(&session.matrix)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        console::print_comparison(&comparison);
    }
    Ok(())
}

pub fn bench(session: &Session, json: bool) -> Result<()> {
    if json {
        let envelope = service::run_benchmark(&session.graph);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    let run = reach::benchmark(&session.matrix);
    console::print_benchmark(&run);
    Ok(())
}

/// The standard suite: path/cycle/star families at increasing sizes plus
/// a few square grids. Small enough to finish quickly, large enough to
/// show the complexity gap.
fn suite_graphs() -> Vec<crate::graph::Graph> {
    let sizes = [5, 8, 10, 12, 15, 20, 25, 30];
    let mut graphs = Vec::new();
    for &n in &sizes {
        graphs.push(crate::graph::path_graph(n, None));
        graphs.push(crate::graph::cycle_graph(n, None));
        graphs.push(crate::graph::star_graph(n, None));
    }
    for d in 3..=6 {
        graphs.push(crate::graph::grid_graph(d, d, None));
    }
    graphs
}

pub fn bench_suite(csv: Option<&Path>) -> Result<()> {
    let graphs = suite_graphs();
    println!("Benchmarking {} sample graphs...", graphs.len());

    let mut rows: Vec<(String, usize, usize, BenchmarkRun)> = Vec::new();
    for graph in graphs {
        let name = graph.name.clone().unwrap_or_else(|| "graph".to_owned());
        let session = Session::from_graph(graph);
        let run = reach::benchmark(&session.matrix);
        rows.push((
            name,
            session.mapping.len(),
            session.graph.edge_count(),
            run,
        ));
    }
    rows.sort_by_key(|(_, nodes, _, _)| *nodes);

    console::print_suite_table(&rows);
    if let Some(path) = csv {
        write_suite_csv(path, &rows)?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn write_suite_csv(path: &Path, rows: &[(String, usize, usize, BenchmarkRun)]) -> Result<()> {
    let mut body = String::from(
        "graph_name,num_nodes,num_edges,matrix_time,bfs_time,speedup_ratio,matrix_success,bfs_success,results_match\n",
    );
    for (name, nodes, edges, run) in rows {
        let speedup = if run.speedup_ratio.is_finite() {
            format!("{:.6}", run.speedup_ratio)
        } else {
            "inf".to_owned()
        };
        body.push_str(&format!(
            "{name},{nodes},{edges},{:.6},{:.6},{speedup},{},{},{}\n",
            run.matrix_time, run.bfs_time, run.matrix_success, run.bfs_success, run.results_match
        ));
    }
    fs::write(path, body).with_context(|| format!("cannot write {}", path.display()))
}

pub fn components(session: &Session) -> Result<()> {
    let components = reach::connected_components(&session.matrix);
    println!(
        "{} component{}",
        components.len(),
        if components.len() == 1 { "" } else { "s" }
    );
    for (i, component) in components.iter().enumerate() {
        let ids: Vec<String> = component
            .iter()
            .filter_map(|&idx| session.mapping.id_at(idx))
            .map(ToString::to_string)
            .collect();
        println!("  [{i}] {{{}}}", ids.join(", "));
    }
    Ok(())
}

pub fn export(session: &Session, output: &Path) -> Result<()> {
    let canonical = adjacency_to_graph(&session.matrix, Some(&session.mapping));
    let body = serde_json::to_string_pretty(&canonical).context("cannot serialize graph")?;
    fs::write(output, body).with_context(|| format!("cannot write {}", output.display()))?;
    println!(
        "Exported canonical graph ({} nodes, {} edges) to {}",
        canonical.node_count(),
        canonical.edge_count(),
        output.display()
    );
    Ok(())
}
