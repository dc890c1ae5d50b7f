//! Bridge finding.
//!
//! A bridge is an edge whose removal increases the number of connected
//! components. During a low-link walk, tree edge `(v, to)` is a bridge iff
//! `low[to] > tin[v]`: nothing in `to`'s subtree reaches `v` or above without it.

use serde::{Deserialize, Serialize};

use crate::graph::algorithms::lowlink::{LowLinkView, LowLinkVisitor, LowLinkWalker, TreeEdge};
use crate::graph::{EdgeId, UndirectedGraph};
use crate::macros::trace_debug;

/// A bridge, oriented as the DFS tree edge that discovered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bridge {
    /// DFS parent endpoint.
    pub u: usize,
    /// DFS child endpoint.
    pub v: usize,
    /// Identity of the bridging edge.
    pub edge: EdgeId,
}

impl Bridge {
    /// Endpoints as `(min, max)`.
    #[inline]
    pub fn normalized(&self) -> (usize, usize) {
        (self.u.min(self.v), self.u.max(self.v))
    }
}

#[derive(Default)]
struct BridgeCollector {
    bridges: Vec<Bridge>,
}

impl LowLinkVisitor for BridgeCollector {
    fn tree_edge(&mut self, edge: TreeEdge, view: LowLinkView<'_>) {
        if view.low(edge.child) > view.tin(edge.parent) {
            self.bridges.push(Bridge {
                u: edge.parent,
                v: edge.child,
                edge: edge.edge,
            });
        }
    }
}

/// Finds every bridge of `graph`, in the order their subtrees finish.
///
/// Parallel edges are never bridges; self-loops are never bridges.
pub fn find_bridges(graph: &UndirectedGraph) -> Vec<Bridge> {
    let mut collector = BridgeCollector::default();
    LowLinkWalker::new(graph).run(&mut collector);
    trace_debug!(bridges = collector.bridges.len(), "bridges found");
    collector.bridges
}
