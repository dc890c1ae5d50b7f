//! Articulation points (cut vertices).
//!
//! Same walk as bridge finding with a different emit rule:
//! - a non-root `v` is a cut vertex if some tree child `to` has `low[to] >= tin[v]`
//! - a DFS root is a cut vertex iff it has at least two tree children

use crate::graph::algorithms::lowlink::{LowLinkView, LowLinkVisitor, LowLinkWalker, TreeEdge};
use crate::graph::UndirectedGraph;
use crate::macros::trace_debug;

struct CutVertexCollector {
    is_cut: Vec<bool>,
}

impl LowLinkVisitor for CutVertexCollector {
    fn tree_edge(&mut self, edge: TreeEdge, view: LowLinkView<'_>) {
        if !edge.parent_is_root && view.low(edge.child) >= view.tin(edge.parent) {
            self.is_cut[edge.parent] = true;
        }
    }

    fn root(&mut self, root: usize, children: usize) {
        if children >= 2 {
            self.is_cut[root] = true;
        }
    }
}

/// Finds every articulation point of `graph`, sorted ascending.
///
/// A vertex flagged by several children is reported once.
pub fn find_articulation_points(graph: &UndirectedGraph) -> Vec<usize> {
    let mut collector = CutVertexCollector {
        is_cut: vec![false; graph.vertex_count()],
    };
    LowLinkWalker::new(graph).run(&mut collector);

    let points: Vec<usize> = collector
        .is_cut
        .iter()
        .enumerate()
        .filter_map(|(v, &cut)| cut.then_some(v))
        .collect();
    trace_debug!(articulation_points = points.len(), "articulation points found");
    points
}
