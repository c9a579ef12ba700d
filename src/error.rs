// src/error.rs
use thiserror::Error;

/// Validation failures surfaced by the engine.
///
/// Every variant is detected before any computation proceeds and is
/// deterministic for a given input, so none of them are worth retrying.
/// The engine never prints or logs; rendering happens at the CLI and
/// service boundaries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("matrix has no rows or columns")]
    EmptyMatrix,

    #[error("dimension mismatch: cannot combine {left_rows}x{left_cols} with {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    #[error("start index {index} is out of range for {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
