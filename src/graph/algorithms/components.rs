//! Connected and 2-edge-connected components via union-find.

use serde::{Deserialize, Serialize};

use crate::collections::DisjointSet;
use crate::graph::algorithms::bridges::find_bridges;
use crate::graph::{Adjacency, UndirectedGraph};
use crate::macros::trace_debug;

/// A component label per vertex.
///
/// Labels are dense (`0..count`) and numbered in order of each component's
/// smallest vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    /// Component label of each vertex.
    pub label: Vec<usize>,
    /// Number of components.
    pub count: usize,
}

impl Components {
    fn from_disjoint_set(ds: &DisjointSet) -> Self {
        let n = ds.len();
        let mut dense = vec![usize::MAX; n];
        let mut label = Vec::with_capacity(n);
        let mut count = 0usize;
        for v in 0..n {
            let root = ds.find(v);
            if dense[root] == usize::MAX {
                dense[root] = count;
                count += 1;
            }
            label.push(dense[root]);
        }
        Self { label, count }
    }

    /// Vertices grouped by label.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.count];
        for (v, &l) in self.label.iter().enumerate() {
            groups[l].push(v);
        }
        groups
    }
}

/// Labels the connected components of `graph`.
///
/// For a directed graph edges are treated as undirected, giving weakly
/// connected components.
pub fn connected_components<G: Adjacency + ?Sized>(graph: &G) -> Components {
    let n = graph.vertex_count();
    let mut ds = DisjointSet::new(n);
    for u in 0..n {
        for &v in graph.neighbors(u) {
            ds.union(u, v);
        }
    }
    let components = Components::from_disjoint_set(&ds);
    trace_debug!(vertices = n, components = components.count, "connected components");
    components
}

/// Labels the 2-edge-connected components: the pieces left after removing
/// every bridge.
pub fn two_edge_connected_components(graph: &UndirectedGraph) -> Components {
    let mut is_bridge = vec![false; graph.edge_count()];
    for bridge in find_bridges(graph) {
        is_bridge[bridge.edge.index()] = true;
    }

    let mut ds = DisjointSet::new(graph.vertex_count());
    for (edge, u, v) in graph.edges() {
        if !is_bridge[edge.index()] {
            ds.union(u, v);
        }
    }
    Components::from_disjoint_set(&ds)
}
