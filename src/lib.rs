//! # sparsemat: default-valued sparse matrices
//!
//! A generic two-dimensional container that stores only the cells it is
//! explicitly given. Every other cell reads as a configurable default value.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] keeps stored cells in a single sequence ordered by
//!   row, then column. Insertion splices into that order; lookup scans it.
//! - Stored cells are exposed as [`Element`]s whose position is read-only.
//! - Iteration is forward-only, either through std iterators
//!   ([`SparseMatrix::iter`], [`SparseMatrix::iter_mut`]) or begin/end
//!   [`Cursor`]s.
//! - [`evaluate`] counts the cells, default ones included, that satisfy a
//!   predicate.
//!
//! Indices are 1-based. Out-of-bounds access, zero dimensions and storing the
//! default value are contract violations and panic. Allocation failure is
//! reported through [`SparseMatrixError`] by the `try_` variants.
//!
//! ## Usage
//!
//! ```
//! use sparsemat::{evaluate, SparseMatrix};
//!
//! let mut m = SparseMatrix::new(3, 2, 999);
//! m.add(2, 2, 4);
//! m.add(2, 2, 14);
//! m.add(1, 2, 2);
//!
//! assert_eq!(m[(2, 2)], 14);
//! assert_eq!(m[(3, 1)], 999);
//! assert_eq!(m.size(), 2);
//!
//! let positions: Vec<_> = m.positions().collect();
//! assert_eq!(positions, vec![(1, 2), (2, 2)]);
//!
//! assert_eq!(evaluate(&m, |v| *v == 999), 4);
//! ```

pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use error::{Result, SparseMatrixError};
pub use matrix::{evaluate, Cursor, CursorMut, Element, Iter, IterMut, PrintConfig, SparseMatrix};
pub use utils::{from_sprs, to_dense, to_sprs_triplets};

/// Version information for the sparsemat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
