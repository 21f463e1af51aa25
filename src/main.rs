use sparsemat::{evaluate, PrintConfig, SparseMatrix};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=sparsemat=trace shows every insertion branch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let print_config = PrintConfig::from_env();

    println!("sparsemat {}: default-valued sparse matrices", sparsemat::VERSION);

    // Insertion, update and lookup
    let mut ints = SparseMatrix::new(3, 2, 999);
    ints.add(2, 2, 4);
    ints.add(2, 2, 14);
    ints.add(1, 2, 2);
    ints.add(2, 2, 5);
    ints.add(1, 1, 3);
    ints.add(3, 2, 6);
    ints.add(3, 1, 5);
    ints.add(2, 1, 3);

    println!("\nMatrix I:");
    println!("{}", ints.dump(&print_config));
    println!("  value at (2, 2): {}", ints[(2, 2)]);
    println!("  value at (3, 2): {}", ints[(3, 2)]);

    // Copies are independent of their source
    let mut copy = ints.clone();
    if let Some(first) = copy.iter_mut().next() {
        first.set_value(2000);
    }
    println!("\nCopy with first element changed:");
    println!("  copy (1, 1) = {}, original (1, 1) = {}", copy[(1, 1)], ints[(1, 1)]);

    // Element type conversions
    let mut doubles = SparseMatrix::new(5, 5, 999.0f64);
    doubles.add(1, 1, 150.0);
    let narrowed = SparseMatrix::<i32>::cast_from(&doubles);
    let widened = SparseMatrix::<f64>::from(&narrowed);
    let unsigned = SparseMatrix::<u32>::cast_from(&widened);
    println!("\nConverted f64 -> i32 -> f64 -> u32:");
    println!("  (1, 1) = {}, default = {}", unsigned[(1, 1)], unsigned.default_value());

    let mut words = SparseMatrix::new(12, 12, String::from("abaco"));
    words.add(1, 2, String::from("blah"));

    // Cursor walk
    println!("\nCursor walk over I:");
    let mut cursor = ints.begin();
    while cursor != ints.end() {
        if let Some(element) = cursor.advance().get() {
            println!("  ({}, {}) = {}", element.row(), element.col(), element.value());
        }
    }

    // Predicate counting over every cell
    println!("\nevaluate:");
    println!("  divisible by 3 in I: {}", evaluate(&ints, |v| v % 3 == 0));

    let mut dense = SparseMatrix::new(10, 10, 999_999u32);
    for row in 1..=dense.rows() {
        for col in 1..=dense.cols() {
            dense.add(row, col, (row + col) as u32);
        }
    }
    for element in &mut dense {
        *element.value_mut() += 1;
    }
    println!("  divisible by 7 in W: {}", evaluate(&dense, |v| v % 7 == 0));

    let untouched = SparseMatrix::new(5, 5, 7_777_777u32);
    println!("  divisible by 7 in an empty 5x5: {}", evaluate(&untouched, |v| v % 7 == 0));
    println!(
        "  cells starting with 'a' in S: {}",
        evaluate(&words, |s| s.starts_with('a'))
    );
}
