//! Utilities for converting between our sparse matrix and external libraries
//!
//! External formats are 0-based; [`SparseMatrix`] is 1-based. The default
//! value has no counterpart in sprs, whose implicit entries are always zero.

use ndarray::Array2;
use sprs::{CsMat, TriMat};

use crate::matrix::SparseMatrix;

/// Materialises every cell into a dense ndarray, unassigned cells holding the default
pub fn to_dense<T: Clone>(matrix: &SparseMatrix<T>) -> Array2<T> {
    let mut dense = Array2::from_elem((matrix.rows(), matrix.cols()), matrix.default_value().clone());

    for element in matrix {
        dense[[element.row() - 1, element.col() - 1]] = element.value().clone();
    }

    dense
}

/// Exports the stored elements as sprs triplets
///
/// The default value is dropped: unlisted triplets mean zero to sprs.
pub fn to_sprs_triplets<T: Clone>(matrix: &SparseMatrix<T>) -> TriMat<T> {
    let mut triplets = TriMat::with_capacity((matrix.rows(), matrix.cols()), matrix.size());

    for element in matrix {
        triplets.add_triplet(element.row() - 1, element.col() - 1, element.value().clone());
    }

    triplets
}

/// Imports the explicit entries of an sprs matrix, skipping those equal to `default`
///
/// # Panics
///
/// Panics if the sprs matrix has a zero dimension.
pub fn from_sprs<T>(matrix: &CsMat<T>, default: T) -> SparseMatrix<T>
where
    T: Clone + PartialEq,
{
    let (rows, cols) = matrix.shape();
    let mut result = SparseMatrix::new(rows, cols, default);

    for (value, (row, col)) in matrix.iter() {
        if value != result.default_value() {
            result.add(row + 1, col + 1, value.clone());
        }
    }

    result
}
