//! Graph layouts and the connectivity algorithms that run over them.
//!
//! Graph code is organized into categories:
//! - `basic`: the directed and undirected graph types
//! - `compressed`: CSR storage shared by both
//! - `algorithms`: low-link walker, bridges, articulation points, SCC, traversal

pub mod algorithms;
pub mod basic;
pub mod compressed;
pub(crate) mod access;

pub use basic::{DirectedGraph, EdgeId, GraphSpec, UndirectedGraph};
pub use compressed::Csr;

/// Read-only neighbor access shared by every graph type.
///
/// Traversals and component labelling are written against this trait so they
/// work for directed and undirected graphs alike.
pub trait Adjacency {
    /// Returns the number of vertices; ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Returns the neighbors of `vertex` in traversal order.
    ///
    /// # Panics
    /// Implementations panic if `vertex >= self.vertex_count()`.
    fn neighbors(&self, vertex: usize) -> &[usize];
}
