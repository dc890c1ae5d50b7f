//! Kosaraju's two-pass SCC algorithm.
//!
//! 1. DFS over the original graph, recording vertices as they finish.
//! 2. DFS over the transpose, starting from vertices in reverse finish order;
//!    each start that is still unvisited collects exactly one component.
//!
//! The vertex with the latest finish time lies in a source component of the
//! condensation. In the transpose, that component is a sink, so the second
//! DFS cannot leave it. Repeating the argument on what remains yields the
//! components in topological order of the condensation.

use crate::graph::access::visited::VisitedSet;
use crate::graph::algorithms::scc::SccResult;
use crate::graph::DirectedGraph;
use crate::macros::trace_debug;

/// Vertices of `graph` in DFS finish order, roots taken in increasing id order.
fn finish_order(graph: &DirectedGraph, visited: &mut VisitedSet) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut order = Vec::with_capacity(n);
    // (vertex, next neighbor slot)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..n {
        if !visited.try_visit(start) {
            continue;
        }
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, cursor) = *frame;
            if let Some(&v) = graph.neighbors(u).get(cursor) {
                frame.1 += 1;
                if visited.try_visit(v) {
                    stack.push((v, 0));
                }
            } else {
                stack.pop();
                order.push(u);
            }
        }
    }

    order
}

/// Computes strongly connected components with Kosaraju's algorithm.
///
/// Components come out in topological order of the condensation: no edge
/// leads from a later component to an earlier one.
///
/// ### Performance Characteristics
/// | Phase | Complexity | Notes |
/// |-------|------------|-------|
/// | finish order | \(O(n + m)\) | Iterative DFS |
/// | transpose | \(O(n + m)\) | CSR counting sort |
/// | collection | \(O(n + m)\) | Iterative DFS on the transpose |
pub fn kosaraju(graph: &DirectedGraph) -> SccResult {
    let n = graph.vertex_count();
    trace_debug!(vertices = n, edges = graph.edge_count(), "kosaraju");

    let mut visited = VisitedSet::new(n);
    let order = finish_order(graph, &mut visited);

    let transpose = graph.transpose();
    visited.clear();

    let mut components = Vec::new();
    let mut stack = Vec::new();
    for &start in order.iter().rev() {
        if !visited.try_visit(start) {
            continue;
        }

        let mut comp = Vec::new();
        stack.push(start);
        while let Some(u) = stack.pop() {
            comp.push(u);
            for &p in transpose.neighbors(u) {
                if visited.try_visit(p) {
                    stack.push(p);
                }
            }
        }

        comp.sort_unstable();
        components.push(comp);
    }

    trace_debug!(components = components.len(), "kosaraju finished");
    SccResult::from_components(components, n)
}

/// Strongly connected components as plain vertex lists, in Kosaraju order.
pub fn strongly_connected_components(graph: &DirectedGraph) -> Vec<Vec<usize>> {
    kosaraju(graph).into_components()
}
