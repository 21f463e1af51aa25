//! Integration tests for conversions to and from external libraries

use sparsemat::utils::{from_sprs, to_dense, to_sprs_triplets};
use sparsemat::SparseMatrix;

/// Creates a 5x5 matrix with a specific pattern:
/// [ 1.0  0.0  2.0  0.0  0.0 ]
/// [ 0.0  3.0  0.0  0.0  4.0 ]
/// [ 0.0  0.0  5.0  0.0  0.0 ]
/// [ 6.0  0.0  0.0  7.0  0.0 ]
/// [ 0.0  0.0  8.0  0.0  9.0 ]
fn create_test_matrix() -> SparseMatrix<f64> {
    let mut m = SparseMatrix::new(5, 5, 0.0);
    let cells = [
        (1, 1, 1.0),
        (1, 3, 2.0),
        (2, 2, 3.0),
        (2, 5, 4.0),
        (3, 3, 5.0),
        (4, 1, 6.0),
        (4, 4, 7.0),
        (5, 3, 8.0),
        (5, 5, 9.0),
    ];
    // Insert in reverse to exercise head insertion
    for &(row, col, value) in cells.iter().rev() {
        m.add(row, col, value);
    }
    m
}

#[test]
fn test_to_dense_matches_lookup() {
    let m = create_test_matrix();
    let dense = to_dense(&m);

    for row in 1..=5 {
        for col in 1..=5 {
            assert_eq!(dense[[row - 1, col - 1]], *m.get(row, col));
        }
    }
}

#[test]
fn test_to_sprs_csr() {
    let m = create_test_matrix();
    let csr: sprs::CsMat<f64> = to_sprs_triplets(&m).to_csr();

    assert_eq!(csr.shape(), (5, 5));
    assert_eq!(csr.nnz(), 9);
    assert_eq!(csr.get(0, 2), Some(&2.0));
    assert_eq!(csr.get(3, 3), Some(&7.0));
    assert_eq!(csr.get(4, 0), None);
}

#[test]
fn test_sprs_roundtrip_preserves_elements() {
    let original = create_test_matrix();
    let csr: sprs::CsMat<f64> = to_sprs_triplets(&original).to_csr();
    let roundtrip = from_sprs(&csr, 0.0);

    assert_eq!(roundtrip.size(), original.size());
    for (a, b) in roundtrip.iter().zip(original.iter()) {
        assert_eq!(a.position(), b.position());
        assert_eq!(a.value(), b.value());
    }
}

#[test]
fn test_from_sprs_csc_input() {
    let mut trip = sprs::TriMat::new((2, 4));
    trip.add_triplet(1, 3, 2.5);
    trip.add_triplet(0, 1, 1.5);
    let csc: sprs::CsMat<f64> = trip.to_csc();

    let m = from_sprs(&csc, -1.0);

    let positions: Vec<_> = m.positions().collect();
    assert_eq!(positions, vec![(1, 2), (2, 4)]);
    assert_eq!(m[(1, 1)], -1.0);
}
