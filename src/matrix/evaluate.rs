//! Dense scan-and-count over every cell of a sparse matrix

use crate::matrix::SparseMatrix;

/// Counts the cells of `matrix` whose value satisfies `predicate`
///
/// Every logical cell is visited, not just the stored ones: unassigned cells
/// contribute the default value. Each visit is a positional lookup, so the
/// cost grows with rows × cols × stored elements.
///
/// ```
/// use sparsemat::{evaluate, SparseMatrix};
///
/// let mut m = SparseMatrix::new(2, 3, 1);
/// m.add(1, 1, 3);
/// m.add(2, 3, 6);
///
/// assert_eq!(evaluate(&m, |v| v % 3 == 0), 2);
/// assert_eq!(evaluate(&m, |_| true), 6);
/// ```
pub fn evaluate<T, P>(matrix: &SparseMatrix<T>, mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut count = 0;

    for row in 1..=matrix.rows() {
        for col in 1..=matrix.cols() {
            if predicate(matrix.get(row, col)) {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_defaults_too() {
        let mut m = SparseMatrix::new(3, 2, 999);
        m.add(1, 1, 3);
        m.add(2, 1, 3);
        m.add(3, 2, 6);
        m.add(2, 2, 5);

        // 999 is divisible by 3, so the two unassigned cells match as well
        assert_eq!(evaluate(&m, |v| v % 3 == 0), 5);
    }

    #[test]
    fn test_all_default_cells() {
        let m = SparseMatrix::new(5, 5, 7_777_777u32);
        assert_eq!(evaluate(&m, |v| v % 7 == 0), 5 * 5);
        assert_eq!(evaluate(&m, |_| false), 0);
    }

    #[test]
    fn test_stateful_predicate() {
        let mut m = SparseMatrix::new(2, 2, 0);
        m.add(1, 2, 4);

        let mut seen = Vec::new();
        let count = evaluate(&m, |v| {
            seen.push(*v);
            *v > 0
        });

        assert_eq!(count, 1);
        assert_eq!(seen, vec![0, 4, 0, 0]);
    }
}
