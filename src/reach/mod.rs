// src/reach/mod.rs
//! Reachability, two ways.
//!
//! `powers` derives reachability from the Boolean-OR of adjacency-matrix
//! powers; `bfs` derives it by traversal. `compare` runs both on the same
//! input and checks that they agree, which is the correctness law the
//! whole crate rests on.

pub mod bfs;
pub mod compare;
pub mod powers;

pub use bfs::{connected_components, is_connected, reachability_via_bfs, reachable_from};
pub use compare::{benchmark, compare_methods, BenchmarkRun, MethodComparison};
pub use powers::{
    analyze_connectivity, analyze_walks, matrix_powers, reachability_via_powers,
    ConnectivityReport, WalkAnalysis,
};
