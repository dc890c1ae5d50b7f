//! Serializable edge-list description of a graph.
//!
//! ```json
//! { "vertex_count": 4, "edges": [[0, 1], [1, 2], [2, 0], [1, 3]] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{DirectedGraph, UndirectedGraph};

/// A vertex count plus an edge list, the interchange format for fixtures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Number of vertices; ids are `0..vertex_count`.
    pub vertex_count: usize,
    /// Edges as `[u, v]` pairs. Direction matters only for directed graphs.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    /// Decodes a spec from JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the spec as compact JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the directed graph this spec describes.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside `0..vertex_count`.
    pub fn to_directed(&self) -> Result<DirectedGraph, GraphError> {
        DirectedGraph::from_edges(self.vertex_count, &self.edges)
    }

    /// Builds the undirected graph this spec describes.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside `0..vertex_count`.
    pub fn to_undirected(&self) -> Result<UndirectedGraph, GraphError> {
        UndirectedGraph::from_edges(self.vertex_count, &self.edges)
    }
}

impl From<&DirectedGraph> for GraphSpec {
    fn from(graph: &DirectedGraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }
}

impl From<&UndirectedGraph> for GraphSpec {
    fn from(graph: &UndirectedGraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().map(|(_, u, v)| (u, v)).collect(),
        }
    }
}

impl TryFrom<&GraphSpec> for DirectedGraph {
    type Error = GraphError;

    fn try_from(spec: &GraphSpec) -> Result<Self, Self::Error> {
        spec.to_directed()
    }
}

impl TryFrom<&GraphSpec> for UndirectedGraph {
    type Error = GraphError;

    fn try_from(spec: &GraphSpec) -> Result<Self, Self::Error> {
        spec.to_undirected()
    }
}
