//! Compressed graph storage.
//!
//! Both graph types store their adjacency in CSR form so traversals walk
//! contiguous slices instead of chasing per-vertex allocations.

pub mod csr;

pub use csr::Csr;
