//! Basic graph representations.
//!
//! Both graphs are immutable once built and store adjacency in CSR form.

pub mod directed;
pub mod spec;
pub mod undirected;

pub use directed::DirectedGraph;
pub use spec::GraphSpec;
pub use undirected::{EdgeId, UndirectedGraph};
