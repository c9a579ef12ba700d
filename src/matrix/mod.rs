// src/matrix/mod.rs
//! Dense integer matrices sized for walk counting.
//!
//! Entries are `u64`: walk counts grow like (max degree)^(exponent), so a
//! 0/1 adjacency matrix raised to realistic powers needs 64-bit headroom.

mod ops;

pub use ops::{add, boolean_or, multiply, power, to_boolean};

use serde::{Deserialize, Serialize};

/// A dense row-major matrix of non-negative integers.
///
/// Serializes as a plain nested array so it can travel inside the JSON
/// interchange payloads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<u64>>,
}

impl Matrix {
    /// Wraps pre-built rows. Callers must supply rectangular data.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Self {
        debug_assert!(
            rows.windows(2).all(|w| w[0].len() == w[1].len()),
            "rows must be rectangular"
        );
        Self { rows }
    }

    /// All-zero matrix of the given shape.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![0; cols]; rows],
        }
    }

    /// The n-by-n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.rows[i][i] = 1;
        }
        m
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// True when there is no data in either dimension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.col_count() == 0
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.row_count() == self.col_count()
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.rows[i][j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: u64) {
        self.rows[i][j] = value;
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[u64] {
        &self.rows[i]
    }

    /// Borrowing iterator over rows, for renderers and entrywise scans.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Counts entries where `self` and `other` disagree. Shapes must match.
    #[must_use]
    pub fn count_differences(&self, other: &Self) -> usize {
        self.rows
            .iter()
            .zip(&other.rows)
            .flat_map(|(a, b)| a.iter().zip(b))
            .filter(|(x, y)| x != y)
            .count()
    }
}
