//! Strongly connected components.
//!
//! Two algorithms produce the same [`SccResult`] partition:
//! - [`kosaraju`]: two DFS passes, components in topological order of the condensation
//! - [`tarjan_scc`]: one low-link pass, components in reverse topological order
//!
//! [`strongly_connected_components`] is the plain `Vec<Vec<usize>>` form of
//! Kosaraju's result.

pub mod kosaraju;
pub mod tarjan;

pub use kosaraju::{kosaraju, strongly_connected_components};
pub use tarjan::tarjan_scc;

use serde::Serialize;

use crate::graph::algorithms::math_assert::assert_partition;
use crate::graph::compressed::Csr;
use crate::graph::DirectedGraph;

/// A partition of the vertex set into strongly connected components.
///
/// Members of each component are sorted ascending. The order of the
/// components themselves is fixed by the algorithm that produced them.
///
/// Serializes for reports; it is only ever built by [`kosaraju`] or
/// [`tarjan_scc`], so `component_of` always agrees with `components`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SccResult {
    component_of: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl SccResult {
    pub(crate) fn from_components(components: Vec<Vec<usize>>, vertex_count: usize) -> Self {
        assert_partition(&components, vertex_count);

        let mut component_of = vec![usize::MAX; vertex_count];
        for (cid, comp) in components.iter().enumerate() {
            for &v in comp {
                component_of[v] = cid;
            }
        }

        Self {
            component_of,
            components,
        }
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` for the empty graph.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The components, each a sorted list of vertex ids.
    #[inline]
    pub fn components(&self) -> &[Vec<usize>] {
        &self.components
    }

    /// Consumes the result, returning the component lists.
    pub fn into_components(self) -> Vec<Vec<usize>> {
        self.components
    }

    /// Index of the component containing `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn component_of(&self, vertex: usize) -> usize {
        self.component_of[vertex]
    }

    /// Component index per vertex.
    #[inline]
    pub fn component_ids(&self) -> &[usize] {
        &self.component_of
    }

    /// Whether component `cid` contains a cycle: more than one vertex, or a self-loop.
    ///
    /// `graph` must be the graph this result was computed from.
    ///
    /// # Panics
    /// Panics if `cid >= self.len()`.
    pub fn is_cyclic(&self, graph: &DirectedGraph, cid: usize) -> bool {
        match self.components[cid].as_slice() {
            [only] => graph.has_edge(*only, *only),
            _ => true,
        }
    }

    /// [`is_cyclic`](Self::is_cyclic) for every component.
    pub fn cyclic_components(&self, graph: &DirectedGraph) -> Vec<bool> {
        (0..self.len()).map(|cid| self.is_cyclic(graph, cid)).collect()
    }

    /// Builds the condensation DAG: one vertex per component, one edge per
    /// connected pair of distinct components, no duplicates.
    ///
    /// `graph` must be the graph this result was computed from.
    pub fn condensation(&self, graph: &DirectedGraph) -> DirectedGraph {
        let mut rows = vec![Vec::new(); self.len()];
        for (u, v) in graph.edges() {
            let (cu, cv) = (self.component_of[u], self.component_of[v]);
            if cu != cv {
                rows[cu].push(cv);
            }
        }
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
        }
        DirectedGraph::from_csr(Csr::from_rows(&rows))
    }

    /// Whether `other` groups the vertices identically, ignoring component order.
    pub fn same_partition(&self, other: &SccResult) -> bool {
        if self.component_of.len() != other.component_of.len() || self.len() != other.len() {
            return false;
        }
        let mut a = self.components.clone();
        let mut b = other.components.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cycles() -> DirectedGraph {
        // 0->1->2->0, 1->3, 3->4->5->3
        DirectedGraph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4), (4, 5), (5, 3)])
            .unwrap()
    }

    #[test]
    fn scc_result_lookup() {
        let graph = two_cycles();
        let scc = kosaraju(&graph);
        assert_eq!(scc.len(), 2);
        assert_eq!(scc.component_of(0), scc.component_of(2));
        assert_ne!(scc.component_of(0), scc.component_of(3));
        assert_eq!(scc.component_ids().len(), 6);
    }

    #[test]
    fn scc_condensation_is_deduplicated() {
        // Two edges cross from {0,1} into {2}.
        let graph = DirectedGraph::from_edges(3, &[(0, 1), (1, 0), (0, 2), (1, 2)]).unwrap();
        let scc = kosaraju(&graph);
        let dag = scc.condensation(&graph);
        assert_eq!(dag.vertex_count(), 2);
        assert_eq!(dag.edge_count(), 1);
        assert!(dag.has_edge(scc.component_of(0), scc.component_of(2)));
    }

    #[test]
    fn scc_cyclic_flags() {
        let graph = DirectedGraph::from_edges(4, &[(0, 1), (1, 0), (2, 2), (2, 3)]).unwrap();
        let scc = kosaraju(&graph);
        assert!(scc.is_cyclic(&graph, scc.component_of(0)));
        assert!(scc.is_cyclic(&graph, scc.component_of(2)));
        assert!(!scc.is_cyclic(&graph, scc.component_of(3)));
        assert_eq!(scc.cyclic_components(&graph).iter().filter(|&&c| c).count(), 2);
    }

    #[test]
    fn scc_same_partition_ignores_order() {
        let graph = two_cycles();
        let k = kosaraju(&graph);
        let t = tarjan_scc(&graph);
        assert_ne!(k.components(), t.components());
        assert!(k.same_partition(&t));

        let other = kosaraju(&DirectedGraph::from_edges(6, &[(0, 1), (1, 0)]).unwrap());
        assert!(!k.same_partition(&other));
    }

    #[test]
    fn scc_result_serializes_consistent_lookup() {
        let scc = kosaraju(&two_cycles());
        let value = serde_json::to_value(&scc).unwrap();
        assert_eq!(value["components"], serde_json::json!([[0, 1, 2], [3, 4, 5]]));
        assert_eq!(value["component_of"], serde_json::json!([0, 0, 0, 1, 1, 1]));
    }

    #[test]
    #[should_panic]
    fn scc_is_cyclic_panics_on_unknown_component() {
        let graph = two_cycles();
        let scc = kosaraju(&graph);
        let _ = scc.is_cyclic(&graph, scc.len());
    }
}
