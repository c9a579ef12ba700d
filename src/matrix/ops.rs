// src/matrix/ops.rs
//! Elementwise and multiplicative matrix operations.
//!
//! Everything here validates shapes up front, returns freshly allocated
//! results, and never mutates its operands.

use super::Matrix;
use crate::error::{EngineError, Result};

fn check_same_shape(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.row_count() != b.row_count() || a.col_count() != b.col_count() {
        return Err(EngineError::DimensionMismatch {
            left_rows: a.row_count(),
            left_cols: a.col_count(),
            right_rows: b.row_count(),
            right_cols: b.col_count(),
        });
    }
    Ok(())
}

/// Standard triple-loop matrix product.
///
/// Entries saturate at `u64::MAX` instead of wrapping: walk counts on
/// dense graphs outgrow 64 bits well before n does, and every consumer
/// downstream only needs positivity, which saturation preserves.
///
/// # Errors
/// `EmptyMatrix` if either operand has zero rows or columns,
/// `DimensionMismatch` if the inner dimensions disagree.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.is_empty() || b.is_empty() {
        return Err(EngineError::EmptyMatrix);
    }
    if a.col_count() != b.row_count() {
        return Err(EngineError::DimensionMismatch {
            left_rows: a.row_count(),
            left_cols: a.col_count(),
            right_rows: b.row_count(),
            right_cols: b.col_count(),
        });
    }

    let mut product = Matrix::zeros(a.row_count(), b.col_count());
    for i in 0..a.row_count() {
        for j in 0..b.col_count() {
            let mut sum: u64 = 0;
            for k in 0..a.col_count() {
                sum = sum.saturating_add(a.get(i, k).saturating_mul(b.get(k, j)));
            }
            product.set(i, j, sum);
        }
    }
    Ok(product)
}

/// Raises a square matrix to a non-negative integer power.
///
/// Iterative multiplication rather than repeated squaring: the point of
/// this crate is to measure the naive power series, so the complexity
/// class must stay honest.
///
/// # Errors
/// `EmptyMatrix` for a degenerate operand, `NotSquare` for rectangular
/// input, `NegativeExponent` for k < 0.
pub fn power(a: &Matrix, k: i64) -> Result<Matrix> {
    if a.is_empty() {
        return Err(EngineError::EmptyMatrix);
    }
    if !a.is_square() {
        return Err(EngineError::NotSquare {
            rows: a.row_count(),
            cols: a.col_count(),
        });
    }
    if k < 0 {
        return Err(EngineError::NegativeExponent(k));
    }

    if k == 0 {
        return Ok(Matrix::identity(a.row_count()));
    }

    let mut result = a.clone();
    for _ in 1..k {
        result = multiply(&result, a)?;
    }
    Ok(result)
}

/// Elementwise sum, saturating at `u64::MAX`.
///
/// # Errors
/// `DimensionMismatch` if the shapes differ.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_shape(a, b)?;
    let mut sum = Matrix::zeros(a.row_count(), a.col_count());
    for i in 0..a.row_count() {
        for j in 0..a.col_count() {
            sum.set(i, j, a.get(i, j).saturating_add(b.get(i, j)));
        }
    }
    Ok(sum)
}

/// Elementwise logical OR: 1 where either entry is positive.
///
/// # Errors
/// `DimensionMismatch` if the shapes differ.
pub fn boolean_or(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_shape(a, b)?;
    let mut or = Matrix::zeros(a.row_count(), a.col_count());
    for i in 0..a.row_count() {
        for j in 0..a.col_count() {
            or.set(i, j, u64::from(a.get(i, j) > 0 || b.get(i, j) > 0));
        }
    }
    Ok(or)
}

/// Thresholds every entry to 0/1.
#[must_use]
pub fn to_boolean(a: &Matrix) -> Matrix {
    let mut out = Matrix::zeros(a.row_count(), a.col_count());
    for i in 0..a.row_count() {
        for j in 0..a.col_count() {
            out.set(i, j, u64::from(a.get(i, j) > 0));
        }
    }
    out
}
