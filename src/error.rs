//! Construction errors.
//!
//! Algorithms are total over a constructed graph; the only failure points are
//! building a graph from untrusted input and decoding a [`GraphSpec`] from JSON.
//!
//! [`GraphSpec`]: crate::graph::GraphSpec

use core::fmt;

/// The error type for graph construction and decoding.
#[derive(Debug)]
pub enum GraphError {
    /// An edge endpoint is not in `0..vertex_count`.
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The vertex count of the graph under construction.
        vertex_count: usize,
    },
    /// An undirected adjacency entry `u -> v` has no matching `v -> u` entry.
    AsymmetricAdjacency {
        /// The vertex whose list holds the unmatched entry.
        u: usize,
        /// The unmatched neighbor.
        v: usize,
    },
    /// The JSON graph description could not be decoded.
    Json(serde_json::Error),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange { vertex, vertex_count } => {
                write!(f, "vertex {vertex} is out of range for n={vertex_count}")
            }
            Self::AsymmetricAdjacency { u, v } => {
                write!(f, "adjacency entry {u}->{v} has no matching {v}->{u} entry")
            }
            Self::Json(err) => write!(f, "invalid graph description: {err}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Checks that `vertex < vertex_count`.
#[inline]
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), GraphError> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange { vertex, vertex_count })
    }
}
