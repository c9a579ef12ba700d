// src/reach/powers.rs
//! Reachability from the power series of the adjacency matrix.
//!
//! Entry (i, j) of A^k counts walks of length exactly k from i to j.
//! Any simple path has length at most n-1, and longer walks revisit a
//! node, so OR-ing Boolean(A^1) through Boolean(A^(n-1)) is exactly the
//! reachability relation. That is the algebraic insight this module
//! demonstrates; BFS in the sibling module gets the same answer cheaper.

use crate::error::Result;
use crate::matrix::{boolean_or, power, to_boolean, Matrix};
use serde::Serialize;
use std::collections::BTreeMap;

/// How far the reported power series goes in a connectivity report.
/// Full reachability still folds all n-1 powers; only the narration and
/// payload are capped, matching the small matrices users actually read.
const REPORTED_POWER_CAP: usize = 5;

/// Walk-count analytics for one adjacency matrix.
#[derive(Debug, Clone, Serialize)]
pub struct WalkAnalysis {
    pub matrix_size: usize,
    /// Power matrices keyed by exponent; always includes 0 (identity).
    pub powers: BTreeMap<usize, Matrix>,
    /// Per exponent k, the number of ordered node pairs (i, j), i != j,
    /// joined by at least one walk of length exactly k.
    pub pairs_by_length: BTreeMap<usize, usize>,
}

/// Full connectivity report for one adjacency matrix.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityReport {
    pub adjacency: Matrix,
    pub walks: WalkAnalysis,
    pub reachability: Matrix,
    pub connected_pairs: usize,
    pub total_pairs: usize,
    pub connectivity_ratio: f64,
    pub fully_connected: bool,
}

/// Computes A^0 .. A^max_power, keyed by exponent.
///
/// `max_power` defaults to n-1, past which no new reachability appears.
/// A^0 is always present; A^1 is a copy of the input.
///
/// # Errors
/// `NotSquare` for rectangular input.
pub fn matrix_powers(a: &Matrix, max_power: Option<usize>) -> Result<BTreeMap<usize, Matrix>> {
    if !a.is_square() {
        return Err(crate::error::EngineError::NotSquare {
            rows: a.row_count(),
            cols: a.col_count(),
        });
    }
    let n = a.row_count();
    let max_power = max_power.unwrap_or_else(|| n.saturating_sub(1));

    let mut powers = BTreeMap::new();
    powers.insert(0, Matrix::identity(n));
    if max_power >= 1 {
        powers.insert(1, a.clone());
    }
    for k in 2..=max_power {
        powers.insert(k, power(a, k as i64)?);
    }
    Ok(powers)
}

/// Boolean-OR closure of A^1 .. A^(n-1).
///
/// Empty input yields an empty matrix. The diagonal stays 0 unless some
/// cycle returns a node to itself; self-reachability is vacuous and not
/// materialized here.
///
/// # Errors
/// `NotSquare` for rectangular input.
pub fn reachability_via_powers(a: &Matrix) -> Result<Matrix> {
    if !a.is_square() {
        return Err(crate::error::EngineError::NotSquare {
            rows: a.row_count(),
            cols: a.col_count(),
        });
    }
    let n = a.row_count();
    if n == 0 {
        return Ok(Matrix::zeros(0, 0));
    }

    let powers = matrix_powers(a, Some(n - 1))?;
    let mut reachability = powers
        .get(&1)
        .map_or_else(|| Matrix::zeros(n, n), to_boolean);

    for k in 2..n {
        if let Some(pk) = powers.get(&k) {
            reachability = boolean_or(&reachability, &to_boolean(pk))?;
        }
    }
    Ok(reachability)
}

fn count_connected_pairs(m: &Matrix) -> usize {
    let n = m.row_count();
    (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| i != j && m.get(i, j) > 0)
        .count()
}

/// Walk counts per exponent up to `max_length`.
///
/// # Errors
/// Propagates `NotSquare` for rectangular input.
pub fn analyze_walks(a: &Matrix, max_length: usize) -> Result<WalkAnalysis> {
    let powers = matrix_powers(a, Some(max_length))?;

    let pairs_by_length = (1..=max_length)
        .filter_map(|k| powers.get(&k).map(|pk| (k, count_connected_pairs(pk))))
        .collect();

    Ok(WalkAnalysis {
        matrix_size: a.row_count(),
        powers,
        pairs_by_length,
    })
}

/// Composes the power series, reachability closure, and pair counts into
/// one report.
///
/// The ratio counts ordered off-diagonal pairs: connected / n(n-1). A
/// graph with at most one node has no pairs to count and is trivially
/// connected, so the flag is true there while the ratio stays 0.
///
/// # Errors
/// Propagates `NotSquare` for rectangular input.
pub fn analyze_connectivity(a: &Matrix) -> Result<ConnectivityReport> {
    let n = a.row_count();
    let walks = analyze_walks(a, n.saturating_sub(1).min(REPORTED_POWER_CAP))?;
    let reachability = reachability_via_powers(a)?;

    let total_pairs = n * n.saturating_sub(1);
    let connected_pairs = count_connected_pairs(&reachability);
    let connectivity_ratio = if total_pairs > 0 {
        connected_pairs as f64 / total_pairs as f64
    } else {
        0.0
    };
    let fully_connected = n <= 1 || (connectivity_ratio - 1.0).abs() < f64::EPSILON;

    Ok(ConnectivityReport {
        adjacency: a.clone(),
        walks,
        reachability,
        connected_pairs,
        total_pairs,
        connectivity_ratio,
        fully_connected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{graph_to_adjacency, path_graph};

    fn path_adjacency(n: usize) -> Matrix {
        graph_to_adjacency(&path_graph(n, None)).0
    }

    #[test]
    fn powers_always_include_identity_and_copy() {
        let a = path_adjacency(4);
        let powers = matrix_powers(&a, None).expect("square input");
        assert_eq!(powers.len(), 4, "exponents 0..=3");
        assert_eq!(powers[&0], Matrix::identity(4));
        assert_eq!(powers[&1], a);
    }

    #[test]
    fn reachability_of_path_is_all_ones_off_diagonal() {
        let a = path_adjacency(4);
        let reach = reachability_via_powers(&a).expect("square input");
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert_eq!(reach.get(i, j), 1, "pair ({i},{j}) must connect");
                }
            }
        }
    }

    #[test]
    fn reachability_is_idempotent() {
        let a = path_adjacency(5);
        let first = reachability_via_powers(&a).expect("square input");
        let second = reachability_via_powers(&a).expect("square input");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_matrix_reaches_nothing() {
        let reach = reachability_via_powers(&Matrix::zeros(0, 0)).expect("degenerate case");
        assert!(reach.is_empty());
    }

    #[test]
    fn single_node_has_zero_reachability_matrix() {
        // No walk of length >= 1 exists without edges; the diagonal is
        // vacuous self-reachability and stays 0.
        let reach = reachability_via_powers(&Matrix::zeros(1, 1)).expect("square input");
        assert_eq!(reach.get(0, 0), 0);
    }

    #[test]
    fn walk_counts_track_exact_lengths() {
        let a = path_adjacency(4);
        let walks = analyze_walks(&a, 2).expect("square input");
        // Length 1: the 3 edges, ordered both ways.
        assert_eq!(walks.pairs_by_length[&1], 6);
        // Length 2: (0,2), (1,3) and mirrors.
        assert_eq!(walks.pairs_by_length[&2], 4);
        assert_eq!(walks.powers[&2].get(0, 2), 1, "one walk 0-1-2");
    }

    #[test]
    fn connectivity_report_on_connected_path() {
        let a = path_adjacency(4);
        let report = analyze_connectivity(&a).expect("square input");
        assert_eq!(report.connected_pairs, 12);
        assert_eq!(report.total_pairs, 12);
        assert!(report.fully_connected);
        assert!((report.connectivity_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn connectivity_report_caps_reported_powers() {
        let a = path_adjacency(10);
        let report = analyze_connectivity(&a).expect("square input");
        let max_exponent = report.walks.powers.keys().max().copied();
        assert_eq!(max_exponent, Some(5), "series payload capped");
        // The reachability fold still ran to n-1: the path ends connect.
        assert_eq!(report.reachability.get(0, 9), 1);
    }

    #[test]
    fn trivial_graphs_are_connected_with_zero_ratio() {
        for n in 0..=1 {
            let report = analyze_connectivity(&Matrix::zeros(n, n)).expect("degenerate case");
            assert!(report.fully_connected, "n={n} is trivially connected");
            assert_eq!(report.total_pairs, 0);
            assert!(report.connectivity_ratio.abs() < f64::EPSILON);
        }
    }
}
