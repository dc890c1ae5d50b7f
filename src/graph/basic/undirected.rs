//! An immutable undirected multigraph with stable edge identities.
//!
//! Every undirected edge owns one [`EdgeId`]; both adjacency slots of the edge
//! (`u -> v` and `v -> u`) carry it. Low-link traversals use the id, not the
//! neighbor vertex, to recognise the tree edge back to the parent, which keeps
//! parallel edges and self-loops correct.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{check_vertex, GraphError};
use crate::graph::compressed::Csr;
use crate::graph::Adjacency;

/// Identity of an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Creates an id from its raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An undirected multigraph stored in CSR form.
///
/// Self-loops are stored once in the loop vertex's list when built with
/// [`from_edges`](Self::from_edges). Lists built with
/// [`try_from_adjacency`](Self::try_from_adjacency) keep whatever the caller
/// wrote.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edges` | \(O(n + m)\) | Counting sort into CSR |
/// | `try_from_adjacency` | \(O(n + m)\) expected | Pairs mirror entries by hash |
/// | `incident` | \(O(1)\) | Zips neighbor and edge-id slices |
/// | `endpoints` | \(O(1)\) | Indexed by edge id |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    csr: Csr,
    /// Edge id of each CSR slot, parallel to the target array.
    edge_ids: Vec<EdgeId>,
    /// Endpoints of each edge, indexed by edge id.
    endpoints: Vec<(usize, usize)>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            csr: Csr::from_rows(&vec![Vec::new(); vertex_count]),
            edge_ids: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    /// Builds a graph from an edge list; edge `i` gets `EdgeId::new(i)`.
    ///
    /// Parallel edges and self-loops are kept as distinct edges.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if an endpoint is not below `vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut pairs = Vec::with_capacity(edges.len() * 2);
        let mut ids = Vec::with_capacity(edges.len() * 2);
        for (i, &(u, v)) in edges.iter().enumerate() {
            check_vertex(u, vertex_count)?;
            check_vertex(v, vertex_count)?;
            pairs.push((u, v));
            ids.push(EdgeId(i));
            if u != v {
                pairs.push((v, u));
                ids.push(EdgeId(i));
            }
        }

        let (csr, slots) = Csr::from_pairs(vertex_count, &pairs);
        let mut edge_ids = vec![EdgeId(0); pairs.len()];
        for (slot, id) in slots.into_iter().zip(ids) {
            edge_ids[slot] = id;
        }

        Ok(Self {
            csr,
            edge_ids,
            endpoints: edges.to_vec(),
        })
    }

    /// Builds a graph from symmetric adjacency lists.
    ///
    /// Each edge must appear in both endpoints' lists. The k-th occurrence of
    /// `v` in `adjacency[u]` is paired with the k-th occurrence of `u` in
    /// `adjacency[v]`. A self-loop may be written once or twice: occurrences
    /// of `u` in `adjacency[u]` are paired up in order, an odd one out forming
    /// a loop of its own.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] for a neighbor id not below `adjacency.len()`.
    /// - [`GraphError::AsymmetricAdjacency`] for an entry without its mirror.
    pub fn try_from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, GraphError> {
        let n = adjacency.len();
        let mut pending: HashMap<(usize, usize), VecDeque<EdgeId>> = HashMap::new();
        let mut endpoints = Vec::new();
        let mut edge_ids = Vec::with_capacity(adjacency.iter().map(Vec::len).sum());

        for (u, nbrs) in adjacency.iter().enumerate() {
            let mut open_loop: Option<EdgeId> = None;
            for &v in nbrs {
                check_vertex(v, n)?;
                let id = match v.cmp(&u) {
                    core::cmp::Ordering::Greater => {
                        let id = EdgeId(endpoints.len());
                        endpoints.push((u, v));
                        pending.entry((u, v)).or_default().push_back(id);
                        id
                    }
                    core::cmp::Ordering::Less => pending
                        .get_mut(&(v, u))
                        .and_then(VecDeque::pop_front)
                        .ok_or(GraphError::AsymmetricAdjacency { u, v })?,
                    core::cmp::Ordering::Equal => match open_loop.take() {
                        Some(id) => id,
                        None => {
                            let id = EdgeId(endpoints.len());
                            endpoints.push((u, u));
                            open_loop = Some(id);
                            id
                        }
                    },
                };
                edge_ids.push(id);
            }
        }

        if let Some(&(u, v)) = pending
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(key, _)| key)
            .min()
        {
            return Err(GraphError::AsymmetricAdjacency { u, v });
        }

        Ok(Self {
            csr: Csr::from_rows(adjacency),
            edge_ids,
            endpoints,
        })
    }

    /// Builds a graph from symmetric adjacency lists.
    ///
    /// # Panics
    /// Panics where [`try_from_adjacency`](Self::try_from_adjacency) returns an error.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        match Self::try_from_adjacency(adjacency) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.csr.row_count()
    }

    /// Returns the number of distinct undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns the neighbors of `vertex`, one entry per incident adjacency slot.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        self.csr.row(vertex)
    }

    /// Returns the edge ids of `vertex`'s slots, parallel to [`neighbors`](Self::neighbors).
    #[inline]
    pub fn incident_edge_ids(&self, vertex: usize) -> &[EdgeId] {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        &self.edge_ids[self.csr.row_range(vertex)]
    }

    /// Iterates `(neighbor, edge)` pairs of `vertex` in adjacency order.
    #[inline]
    pub fn incident(&self, vertex: usize) -> impl Iterator<Item = (usize, EdgeId)> + '_ {
        self.neighbors(vertex)
            .iter()
            .copied()
            .zip(self.incident_edge_ids(vertex).iter().copied())
    }

    /// Returns the number of adjacency slots of `vertex`.
    #[inline]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns the endpoints of `edge` as given at construction.
    ///
    /// # Panics
    /// Panics if `edge` does not belong to this graph.
    #[inline]
    pub fn endpoints(&self, edge: EdgeId) -> (usize, usize) {
        self.endpoints[edge.0]
    }

    /// Iterates `(edge, u, v)` over all distinct edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, usize, usize)> + '_ {
        self.endpoints
            .iter()
            .enumerate()
            .map(|(i, &(u, v))| (EdgeId(i), u, v))
    }
}

impl Adjacency for UndirectedGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        UndirectedGraph::vertex_count(self)
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> &[usize] {
        UndirectedGraph::neighbors(self, vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_from_edges_shares_ids() {
        let graph = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.incident(1).collect::<Vec<_>>(), vec![(0, EdgeId::new(0)), (2, EdgeId::new(1))]);
        assert_eq!(graph.incident(0).collect::<Vec<_>>(), vec![(1, EdgeId::new(0))]);
        assert_eq!(graph.endpoints(EdgeId::new(1)), (1, 2));
    }

    #[test]
    fn undirected_from_edges_keeps_parallel_edges_and_loops() {
        let graph = UndirectedGraph::from_edges(2, &[(0, 1), (1, 0), (1, 1)]).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(0), 2);
        // Two slots for the parallel edges plus one for the loop.
        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.incident_edge_ids(1), &[EdgeId::new(0), EdgeId::new(1), EdgeId::new(2)]);
    }

    #[test]
    fn undirected_from_adjacency_pairs_mirror_entries() {
        // Triangle 0-1-2 plus pendant 1-3.
        let adjacency = vec![vec![1, 2], vec![0, 2, 3], vec![1, 0], vec![1]];
        let graph = UndirectedGraph::from_adjacency(&adjacency);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(1), &[0, 2, 3]);

        for v in 0..graph.vertex_count() {
            for (w, id) in graph.incident(v) {
                let (a, b) = graph.endpoints(id);
                assert!((a, b) == (v, w) || (a, b) == (w, v));
            }
        }
    }

    #[test]
    fn undirected_from_adjacency_pairs_parallel_edges_in_order() {
        let graph = UndirectedGraph::from_adjacency(&[vec![1, 1], vec![0, 0]]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.incident_edge_ids(0), graph.incident_edge_ids(1));
        assert_ne!(graph.incident_edge_ids(0)[0], graph.incident_edge_ids(0)[1]);
    }

    #[test]
    fn undirected_from_adjacency_self_loops() {
        let written_twice = UndirectedGraph::from_adjacency(&[vec![0, 0]]);
        assert_eq!(written_twice.edge_count(), 1);
        let written_once = UndirectedGraph::from_adjacency(&[vec![0]]);
        assert_eq!(written_once.edge_count(), 1);
        let three = UndirectedGraph::from_adjacency(&[vec![0, 0, 0]]);
        assert_eq!(three.edge_count(), 2);
    }

    #[test]
    fn undirected_from_adjacency_rejects_asymmetry() {
        let err = UndirectedGraph::try_from_adjacency(&[vec![1], vec![]]).unwrap_err();
        assert!(matches!(err, GraphError::AsymmetricAdjacency { u: 0, v: 1 }));

        let err = UndirectedGraph::try_from_adjacency(&[vec![], vec![0]]).unwrap_err();
        assert!(matches!(err, GraphError::AsymmetricAdjacency { u: 1, v: 0 }));

        let err = UndirectedGraph::try_from_adjacency(&[vec![9]]).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 9, vertex_count: 1 }));
    }

    #[test]
    fn undirected_edges_iterates_in_id_order() {
        let graph = UndirectedGraph::from_edges(4, &[(2, 3), (0, 1)]).unwrap();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(EdgeId::new(0), 2, 3), (EdgeId::new(1), 0, 1)]);
        assert!(UndirectedGraph::empty(0).is_empty());
    }
}
