//! Integration tests for predicate counting

use sparsemat::{evaluate, SparseMatrix};

/// Predicate as a named function, the way a caller might reuse it
fn divisible_by_3(value: &i32) -> bool {
    value % 3 == 0
}

#[test]
fn test_trivial_predicates() {
    let mut m = SparseMatrix::new(4, 6, 1.5f32);
    m.add(2, 5, 3.0);

    assert_eq!(evaluate(&m, |_| true), 4 * 6);
    assert_eq!(evaluate(&m, |_| false), 0);
}

#[test]
fn test_named_predicate() {
    let mut m = SparseMatrix::new(3, 2, 999);
    m.add(2, 2, 5);
    m.add(1, 2, 2);
    m.add(1, 1, 3);
    m.add(3, 2, 6);
    m.add(3, 1, 5);
    m.add(2, 1, 3);

    assert_eq!(evaluate(&m, divisible_by_3), 3);
}

#[test]
fn test_default_value_counts_for_every_unassigned_cell() {
    let mut m = SparseMatrix::new(5, 5, 7_777_777u32);
    assert_eq!(evaluate(&m, |v| v % 7 == 0), 25);

    m.add(3, 3, 1);
    assert_eq!(evaluate(&m, |v| v % 7 == 0), 24);
}

#[test]
fn test_string_predicate() {
    let mut s = SparseMatrix::new(12, 12, String::from("abaco"));
    s.add(1, 2, String::from("blah"));
    s.add(7, 7, String::from("albero"));

    assert_eq!(evaluate(&s, |v| v.starts_with('a')), 143);
}

#[test]
fn test_evaluate_follows_default_changes() {
    let mut m = SparseMatrix::new(2, 2, 0);
    m.add(1, 1, 1);

    assert_eq!(evaluate(&m, |v| *v == 0), 3);

    m.set_default(1);
    assert_eq!(evaluate(&m, |v| *v == 1), 4);
}
