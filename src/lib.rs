//! # `lowlink` - Graph Connectivity Algorithms
//!
//! Depth-first connectivity analysis over immutable adjacency-list graphs:
//! bridges, articulation points and strongly connected components, plus the
//! traversal, topological-sort and component-labelling routines they build on.
//!
//! ## Guarantees
//!
//! ### Stack Safety
//! - **Iterative DFS everywhere**: every walk keeps an explicit frame stack,
//!   so a path graph with millions of vertices cannot overflow the call stack.
//! - **Textbook order preserved**: frames hold an adjacency cursor, so vertices
//!   are discovered and low-links updated in exactly the recursive order.
//!
//! ### Reentrancy
//! - **No shared scratch**: discovery times, low-links, visited sets and the
//!   DFS timer are allocated per call and dropped on return.
//! - **Immutable graphs**: graphs are read-only after construction and `Sync`,
//!   so independent analyses may run on many threads (`parallel` feature).
//!
//! ### Multigraphs
//! - **Edge identity**: undirected edges carry an [`EdgeId`]; the walk skips
//!   the tree edge to the parent by id, so a parallel edge is a back edge and
//!   a self-loop never changes a low-link.
//!
//! ## Architecture
//!
//! 1. **Graphs** ([`DirectedGraph`], [`UndirectedGraph`]): CSR storage,
//!    validated at construction ([`GraphError`] on bad ids).
//! 2. **Low-link walker** ([`graph::algorithms::LowLinkWalker`]): one DFS,
//!    `tin`/`low` per vertex, visitor callbacks on tree-edge completion.
//! 3. **Emit rules**: [`find_bridges`] (`low[to] > tin[v]`) and
//!    [`find_articulation_points`] (`low[to] >= tin[v]`, root with ≥ 2 children).
//! 4. **SCC**: [`kosaraju`] (finish order, transpose, collection) and
//!    [`tarjan_scc`] (single pass), both returning an [`SccResult`].
//!
//! ## Example
//!
//! ```rust
//! use lowlink::{find_articulation_points, find_bridges, UndirectedGraph};
//!
//! // Triangle 0-1-2 with a pendant vertex 3 hanging off 1.
//! let graph = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
//!
//! let bridges: Vec<_> = find_bridges(&graph).iter().map(|b| (b.u, b.v)).collect();
//! assert_eq!(bridges, vec![(1, 3)]);
//! assert_eq!(find_articulation_points(&graph), vec![1]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod analysis;
pub mod collections;
pub mod error;
pub mod graph;

pub use analysis::{analyze, analyze_all, ConnectivityReport};
pub use collections::DisjointSet;
pub use error::GraphError;
pub use graph::algorithms::{
    connected_components, find_articulation_points, find_bridges, is_acyclic, kosaraju,
    strongly_connected_components, tarjan_scc, topological_sort, two_edge_connected_components,
    Bridge, Components, SccResult,
};
pub use graph::{Adjacency, DirectedGraph, EdgeId, GraphSpec, UndirectedGraph};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // `EdgeId` is a transparent index.
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());

    // `Option<EdgeId>` marks DFS roots in every walker frame; it should stay two words at most.
    assert!(mem::size_of::<Option<EdgeId>>() <= mem::size_of::<usize>() * 2);
};
