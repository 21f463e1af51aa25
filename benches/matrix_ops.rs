//! Benchmarks for insertion, lookup, copying and evaluate

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsemat::{evaluate, SparseMatrix};

/// Create a test matrix with a stored diagonal
fn create_diagonal(n: usize) -> SparseMatrix<f64> {
    let mut m = SparseMatrix::new(n, n, 0.0);
    for i in 1..=n {
        m.add(i, i, i as f64);
    }
    m
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for &n in &[16usize, 64, 256] {
        // Appends hit the tail fast path
        group.bench_with_input(BenchmarkId::new("in_order", n), &n, |bench, &n| {
            bench.iter(|| black_box(create_diagonal(n)))
        });

        // Reverse order splices every node at the head
        group.bench_with_input(BenchmarkId::new("reverse_order", n), &n, |bench, &n| {
            bench.iter(|| {
                let mut m = SparseMatrix::new(n, n, 0.0);
                for i in (1..=n).rev() {
                    m.add(i, i, i as f64);
                }
                black_box(m)
            })
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let m = create_diagonal(256);

    c.bench_function("get_last_stored", |bench| {
        bench.iter(|| black_box(*m.get(black_box(256), black_box(256))))
    });
    c.bench_function("get_unassigned", |bench| {
        bench.iter(|| black_box(*m.get(black_box(128), black_box(1))))
    });
}

fn bench_copy(c: &mut Criterion) {
    let m = create_diagonal(256);

    c.bench_function("clone_256", |bench| bench.iter(|| black_box(m.clone())));
    c.bench_function("cast_to_i32_256", |bench| {
        bench.iter(|| black_box(SparseMatrix::<i32>::cast_from(&m)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let m = create_diagonal(32);

    c.bench_function("evaluate_32x32", |bench| {
        bench.iter(|| black_box(evaluate(&m, |v| *v > 16.0)))
    });
}

criterion_group!(benches, bench_insertion, bench_lookup, bench_copy, bench_evaluate);
criterion_main!(benches);
