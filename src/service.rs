// src/service.rs
//! The request/response boundary consumed by front ends.
//!
//! Accepts a graph in the interchange schema and returns a JSON-shaped
//! envelope: `{success: true, results: ...}` or `{success: false,
//! error: ...}`. Transport (HTTP, pipes, whatever) is the caller's
//! business; nothing here knows about requests beyond the graph body.

use crate::graph::{graph_to_adjacency, Graph};
use crate::matrix::Matrix;
use crate::reach;
use serde::Serialize;
use std::collections::BTreeMap;

/// Success-or-error wrapper around a result payload.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    fn ok(results: T) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(message.into()),
        }
    }
}

/// Payload for the discovery operation.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResults {
    pub connectivity_ratio: f64,
    pub is_strongly_connected: bool,
    pub connected_pairs: usize,
    pub total_pairs: usize,
    pub methods_agree: bool,
    /// Power matrices keyed by stringified exponent, as editors expect.
    pub matrix_powers: BTreeMap<String, Matrix>,
    pub reachability_matrix: Matrix,
}

/// Payload for the benchmark operation.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResults {
    pub matrix_time: f64,
    pub bfs_time: f64,
    pub speedup_ratio: f64,
    pub results_match: bool,
    pub num_nodes: usize,
}

/// Runs the connectivity discovery pipeline on a graph body.
///
/// Any engine error becomes a failed envelope; this function never
/// returns `Err` and never panics on valid interchange input.
#[must_use]
pub fn run_discovery(graph: &Graph) -> Envelope<DiscoveryResults> {
    let (adjacency, _) = graph_to_adjacency(graph);

    let report = match reach::analyze_connectivity(&adjacency) {
        Ok(report) => report,
        Err(e) => return Envelope::err(e.to_string()),
    };
    let comparison = match reach::compare_methods(&adjacency) {
        Ok(comparison) => comparison,
        Err(e) => return Envelope::err(e.to_string()),
    };

    let matrix_powers = report
        .walks
        .powers
        .into_iter()
        .map(|(k, m)| (k.to_string(), m))
        .collect();

    Envelope::ok(DiscoveryResults {
        connectivity_ratio: report.connectivity_ratio,
        is_strongly_connected: report.fully_connected,
        connected_pairs: report.connected_pairs,
        total_pairs: report.total_pairs,
        methods_agree: comparison.agree,
        matrix_powers,
        reachability_matrix: report.reachability,
    })
}

/// Times both reachability methods on a graph body.
#[must_use]
pub fn run_benchmark(graph: &Graph) -> Envelope<BenchmarkResults> {
    let (adjacency, _) = graph_to_adjacency(graph);
    let run = reach::benchmark(&adjacency);

    if !run.matrix_success || !run.bfs_success {
        return Envelope::err("benchmark failed: one of the methods did not complete");
    }

    Envelope::ok(BenchmarkResults {
        matrix_time: run.matrix_time,
        bfs_time: run.bfs_time,
        speedup_ratio: run.speedup_ratio,
        results_match: run.results_match,
        num_nodes: run.num_nodes,
    })
}
