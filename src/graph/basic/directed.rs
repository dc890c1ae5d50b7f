//! An immutable directed graph over vertices `0..n`.

use crate::error::{check_vertex, GraphError};
use crate::graph::compressed::Csr;
use crate::graph::Adjacency;

/// A directed multigraph stored in CSR form.
///
/// Built once; every algorithm in this crate only reads it. Out-neighbors of a
/// vertex keep the order they were given in, so traversal order is fixed by
/// the input.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Validates and copies lists |
/// | `neighbors` | \(O(1)\) | Returns a slice |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan |
/// | `transpose` | \(O(n + m)\) | Reverses every edge |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    csr: Csr,
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            csr: Csr::from_rows(&vec![Vec::new(); vertex_count]),
        }
    }

    /// Builds a graph from adjacency lists, `adjacency[u]` listing the heads of `u`'s out-edges.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if a neighbor id is not below `adjacency.len()`.
    pub fn try_from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, GraphError> {
        let n = adjacency.len();
        for nbrs in adjacency {
            for &v in nbrs {
                check_vertex(v, n)?;
            }
        }
        Ok(Self {
            csr: Csr::from_rows(adjacency),
        })
    }

    /// Builds a graph from adjacency lists.
    ///
    /// # Panics
    /// Panics if any neighbor index is out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        match Self::try_from_adjacency(adjacency) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    /// Builds a graph from an edge list. Edges of one tail keep their list order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if an endpoint is not below `vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        for &(u, v) in edges {
            check_vertex(u, vertex_count)?;
            check_vertex(v, vertex_count)?;
        }
        let (csr, _) = Csr::from_pairs(vertex_count, edges);
        Ok(Self { csr })
    }

    pub(crate) fn from_csr(csr: Csr) -> Self {
        Self { csr }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.csr.row_count()
    }

    /// Returns the number of directed edges, counting parallel edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.csr.entry_count()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns the out-neighbors of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        self.csr.row(vertex)
    }

    /// Returns the out-degree of `vertex`.
    #[inline]
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Checks if an edge `from -> to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Iterates every edge `(tail, head)` in tail order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.csr.entries()
    }

    /// Returns the graph with every edge reversed.
    pub fn transpose(&self) -> Self {
        Self {
            csr: self.csr.transpose(),
        }
    }
}

impl Adjacency for DirectedGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        DirectedGraph::vertex_count(self)
    }

    #[inline]
    fn neighbors(&self, vertex: usize) -> &[usize] {
        DirectedGraph::neighbors(self, vertex)
    }
}
