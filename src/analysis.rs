//! Connectivity reports for undirected graphs.
//!
//! A report bundles the bridges, articulation points and component count of
//! one graph. [`analyze_all`] maps many graphs to reports; with the
//! `parallel` feature the graphs are processed on the rayon pool. Each
//! analysis owns its scratch state, so nothing is shared between workers.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::algorithms::{connected_components, find_articulation_points, find_bridges, Bridge};
use crate::graph::UndirectedGraph;
use crate::macros::trace_debug;

/// Connectivity summary of one undirected graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Bridges in DFS completion order.
    pub bridges: Vec<Bridge>,
    /// Articulation points, sorted ascending.
    pub articulation_points: Vec<usize>,
}

impl ConnectivityReport {
    /// Whether the graph stays connected after removing any single edge or vertex.
    ///
    /// Empty and single-vertex graphs count as biconnected.
    pub fn is_biconnected(&self) -> bool {
        self.component_count <= 1 && self.bridges.is_empty() && self.articulation_points.is_empty()
    }

    /// Encodes the report as JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Computes the connectivity report of `graph`.
pub fn analyze(graph: &UndirectedGraph) -> ConnectivityReport {
    ConnectivityReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        component_count: connected_components(graph).count,
        bridges: find_bridges(graph),
        articulation_points: find_articulation_points(graph),
    }
}

/// Computes a report per graph, in input order.
#[cfg(feature = "parallel")]
pub fn analyze_all(graphs: &[UndirectedGraph]) -> Vec<ConnectivityReport> {
    use rayon::prelude::*;

    trace_debug!(graphs = graphs.len(), "parallel connectivity analysis");
    graphs.par_iter().map(analyze).collect()
}

/// Computes a report per graph, in input order.
#[cfg(not(feature = "parallel"))]
pub fn analyze_all(graphs: &[UndirectedGraph]) -> Vec<ConnectivityReport> {
    trace_debug!(graphs = graphs.len(), "connectivity analysis");
    graphs.iter().map(analyze).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    #[test]
    fn analysis_triangle_with_pendant() {
        let graph = UndirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
        let report = analyze(&graph);
        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.edge_count, 4);
        assert_eq!(report.component_count, 1);
        assert_eq!(report.bridges, vec![Bridge { u: 1, v: 3, edge: EdgeId::new(3) }]);
        assert_eq!(report.articulation_points, vec![1]);
        assert!(!report.is_biconnected());
    }

    #[test]
    fn analysis_cycle_is_biconnected() {
        let graph = UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(analyze(&graph).is_biconnected());
        assert!(analyze(&UndirectedGraph::empty(0)).is_biconnected());
    }

    #[test]
    fn analysis_all_keeps_input_order() {
        let graphs = vec![
            UndirectedGraph::from_edges(2, &[(0, 1)]).unwrap(),
            UndirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap(),
            UndirectedGraph::empty(4),
        ];
        let reports = analyze_all(&graphs);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].bridges.len(), 1);
        assert!(reports[1].bridges.is_empty());
        assert_eq!(reports[2].component_count, 4);
    }

    #[test]
    fn analysis_report_json_shape() {
        let graph = UndirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        let json = analyze(&graph).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bridges"][0]["u"], 0);
        assert_eq!(value["bridges"][0]["edge"], 0);
        assert_eq!(value["articulation_points"], serde_json::json!([]));
    }
}
