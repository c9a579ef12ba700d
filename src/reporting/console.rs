// src/reporting/console.rs
//! Formatted console output for discovery, comparison, and benchmark
//! results.

use crate::matrix::Matrix;
use crate::reach::{BenchmarkRun, ConnectivityReport, MethodComparison};
use colored::Colorize;

/// Prints a matrix with a title, entries in 3-wide cells.
pub fn print_matrix(title: &str, matrix: &Matrix) {
    println!("\n{}:", title.bold());
    for row in matrix.iter_rows() {
        let cells: Vec<String> = row.iter().map(|x| format!("{x:3}")).collect();
        println!("  {}", cells.join(" "));
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Walks through a connectivity report: the adjacency matrix, the power
/// series, the reachability closure, and the pair-count summary.
/// `verbose` controls whether the matrices themselves are dumped.
pub fn print_discovery(report: &ConnectivityReport, verbose: bool) {
    let n = report.walks.matrix_size;
    println!(
        "\n{}",
        format!("=== Connectivity Discovery for {n}x{n} Graph ===").bold()
    );

    if verbose {
        print_matrix("Adjacency Matrix A", &report.adjacency);
        for (k, matrix) in &report.walks.powers {
            if *k >= 1 {
                print_matrix(&format!("A^{k} (walks of length {k})"), matrix);
            }
        }
        print_matrix(
            "Reachability Matrix (Boolean OR of A^1 to A^(n-1))",
            &report.reachability,
        );
    }

    println!("\nConnectivity Analysis:");
    println!(
        "  Connected pairs: {}/{}",
        report.connected_pairs, report.total_pairs
    );
    println!(
        "  Connectivity ratio: {}",
        percent(report.connectivity_ratio)
    );
    let flag = if report.fully_connected {
        "true".green()
    } else {
        "false".yellow()
    };
    println!("  Fully connected: {flag}");
}

/// Summarizes whether the two derivations agreed.
pub fn print_comparison(comparison: &MethodComparison) {
    println!("\n{}", "Method Comparison:".bold());
    if comparison.agree {
        println!(
            "  {} matrix and BFS methods produce identical results",
            "ok:".green().bold()
        );
    } else {
        println!(
            "  {} methods disagree on {} entries",
            "MISMATCH:".red().bold(),
            comparison.differences
        );
    }
}

/// One benchmark run: timings, speedup, and the equality re-check.
pub fn print_benchmark(run: &BenchmarkRun) {
    println!("\n{}", "Performance Benchmark: Matrix vs BFS".bold());
    println!("  Graph size: {} nodes", run.num_nodes);
    println!("  Matrix method: {:.6}s", run.matrix_time);
    println!("  BFS method:    {:.6}s", run.bfs_time);
    if run.speedup_ratio.is_finite() {
        println!("  BFS speedup:   {:.1}x", run.speedup_ratio);
    } else {
        println!("  BFS speedup:   (BFS took no measurable time)");
    }
    let matched = if run.results_match {
        "yes".green()
    } else {
        "NO".red().bold()
    };
    println!("  Results match: {matched}");
    println!("\n  Matrix method folds A^1..A^(n-1); BFS scans each row once.");
}

/// Summary table for a benchmark suite, sorted by graph size.
pub fn print_suite_table(rows: &[(String, usize, usize, BenchmarkRun)]) {
    println!("\n{}", "=== Benchmark Summary ===".bold());
    println!(
        "{:<15} {:>6} {:>7} {:>12} {:>12} {:>10}",
        "Graph", "Nodes", "Edges", "Matrix(s)", "BFS(s)", "Speedup"
    );
    for (name, nodes, edges, run) in rows {
        let speedup = if run.speedup_ratio.is_finite() {
            format!("{:.1}x", run.speedup_ratio)
        } else {
            "inf".to_owned()
        };
        println!(
            "{name:<15} {nodes:>6} {edges:>7} {:>12.6} {:>12.6} {speedup:>10}",
            run.matrix_time, run.bfs_time
        );
    }

    let mismatched = rows.iter().filter(|(_, _, _, r)| !r.results_match).count();
    if mismatched == 0 {
        println!(
            "\n{} all {} runs produced matching results",
            "ok:".green().bold(),
            rows.len()
        );
    } else {
        println!(
            "\n{} {mismatched} runs had mismatched results",
            "WARNING:".red().bold()
        );
    }
}
