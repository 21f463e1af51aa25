// Sparse matrix container, iteration and algorithms

pub mod config;
pub mod conversion;
pub mod element;
pub mod evaluate;
pub mod iter;
pub mod sparse;

pub use config::PrintConfig;
pub use element::Element;
pub use evaluate::evaluate;
pub use iter::{Cursor, CursorMut, Iter, IterMut};
pub use sparse::SparseMatrix;
