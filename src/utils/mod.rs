//! Interop helpers for external matrix libraries

pub mod formats;

pub use formats::{from_sprs, to_dense, to_sprs_triplets};
