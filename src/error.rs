//! Error types for recoverable matrix operations
//!
//! Contract violations (zero dimensions, out-of-bounds cells, inserting the
//! default value) are programmer errors and panic instead.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while building or populating a matrix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseMatrixError {
    /// Storage for a new cell could not be reserved
    #[error("failed to allocate storage for cell ({row}, {col}): {source}")]
    Allocation {
        row: usize,
        col: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, SparseMatrixError>;
