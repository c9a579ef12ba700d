// src/reach/compare.rs
//! Cross-validation and benchmarking of the two reachability methods.

use super::{bfs, powers};
use crate::error::Result;
use crate::matrix::Matrix;
use serde::Serialize;
use std::time::Instant;

/// Entrywise comparison of the two derivations.
#[derive(Debug, Clone, Serialize)]
pub struct MethodComparison {
    pub matrix_method: Matrix,
    pub bfs_method: Matrix,
    pub agree: bool,
    pub differences: usize,
}

/// Wall-clock timings for one matrix. Times are in seconds; a failed
/// method reports infinite time and a false success flag instead of
/// propagating its error.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRun {
    pub num_nodes: usize,
    pub matrix_time: f64,
    pub bfs_time: f64,
    pub matrix_success: bool,
    pub bfs_success: bool,
    /// matrix_time / bfs_time; infinite when BFS took no measurable time.
    pub speedup_ratio: f64,
    pub results_match: bool,
}

/// Runs both reachability derivations and counts entrywise mismatches.
///
/// This is the correctness oracle: a real bug in either implementation
/// shows up as `agree == false`.
///
/// # Errors
/// Propagates `NotSquare` for rectangular input.
pub fn compare_methods(a: &Matrix) -> Result<MethodComparison> {
    let matrix_method = powers::reachability_via_powers(a)?;
    let bfs_method = bfs::reachability_via_bfs(a);

    let differences = matrix_method.count_differences(&bfs_method);
    Ok(MethodComparison {
        matrix_method,
        bfs_method,
        agree: differences == 0,
        differences,
    })
}

fn time_run<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64())
}

/// Times both full reachability computations on the same input.
///
/// Benchmarking never alters results: both methods run exactly as in
/// [`compare_methods`], and a method that errors is recorded as a failed
/// run rather than aborting the comparison.
#[must_use]
pub fn benchmark(a: &Matrix) -> BenchmarkRun {
    let (matrix_result, matrix_time) = time_run(|| powers::reachability_via_powers(a));
    let (bfs_result, bfs_time) = time_run(|| bfs::reachability_via_bfs(a));

    let matrix_success = matrix_result.is_ok();
    let results_match = matrix_result
        .as_ref()
        .map_or(false, |m| m == &bfs_result);

    BenchmarkRun {
        num_nodes: a.row_count(),
        matrix_time: if matrix_success {
            matrix_time
        } else {
            f64::INFINITY
        },
        bfs_time,
        matrix_success,
        bfs_success: true,
        speedup_ratio: if bfs_time > 0.0 {
            matrix_time / bfs_time
        } else {
            f64::INFINITY
        },
        results_match,
    }
}
