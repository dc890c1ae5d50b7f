//! Graph algorithms.
//!
//! Dependency order, leaves first:
//! - `lowlink` walker → `bridges`, `articulation`
//! - `bridges` → `components` (2-edge-connected)
//! - finish-order DFS → transpose → component collection → `scc::kosaraju`
//!
//! Every entry point allocates its scratch state per call and keeps no state
//! across calls.

pub mod articulation;
pub mod bridges;
pub mod components;
pub mod lowlink;
pub(crate) mod math_assert;
pub mod scc;
pub mod traversal;

pub use articulation::find_articulation_points;
pub use bridges::{find_bridges, Bridge};
pub use components::{connected_components, two_edge_connected_components, Components};
pub use lowlink::{low_link, LowLink, LowLinkView, LowLinkVisitor, LowLinkWalker, TreeEdge};
pub use scc::{kosaraju, strongly_connected_components, tarjan_scc, SccResult};
pub use traversal::{is_acyclic, topological_sort, Bfs, Dfs};
