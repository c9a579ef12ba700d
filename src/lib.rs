//! Two roads to graph reachability.
//!
//! Boolean-OR of adjacency-matrix powers and breadth-first search compute
//! the same reachability relation on an undirected graph. This crate
//! implements both, cross-validates them against each other, and measures
//! what the algebraic elegance of the matrix method costs in wall-clock
//! time.

pub mod cli;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod reach;
pub mod reporting;
pub mod service;
