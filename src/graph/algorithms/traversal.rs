//! Traversal iterators and topological ordering.
//!
//! `Bfs` and `Dfs` yield vertex ids lazily and own their visited state, so
//! they borrow the graph only for the life of the iterator.

use std::collections::VecDeque;

use crate::graph::access::visited::VisitedSet;
use crate::graph::{Adjacency, DirectedGraph};
use crate::macros::trace_debug;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertex ids in BFS order, neighbors in adjacency order.
pub struct Bfs<'g, G: Adjacency + ?Sized> {
    graph: &'g G,
    visited: VisitedSet,
    queue: VecDeque<usize>,
}

impl<'g, G: Adjacency + ?Sized> Bfs<'g, G> {
    /// Creates a BFS iterator from `start`. An out-of-range start yields nothing.
    pub fn new(graph: &'g G, start: usize) -> Self {
        let mut visited = VisitedSet::new(graph.vertex_count());
        let mut queue = VecDeque::new();
        if start < graph.vertex_count() {
            visited.try_visit(start);
            queue.push_back(start);
        }
        Self { graph, visited, queue }
    }
}

impl<G: Adjacency + ?Sized> Iterator for Bfs<'_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for &v in self.graph.neighbors(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS) in preorder.
///
/// Neighbors are pushed in reverse so the first neighbor in adjacency order
/// is explored first, as a recursive DFS would.
pub struct Dfs<'g, G: Adjacency + ?Sized> {
    graph: &'g G,
    visited: VisitedSet,
    stack: Vec<usize>,
}

impl<'g, G: Adjacency + ?Sized> Dfs<'g, G> {
    /// Creates a DFS iterator from `start`. An out-of-range start yields nothing.
    pub fn new(graph: &'g G, start: usize) -> Self {
        let visited = VisitedSet::new(graph.vertex_count());
        let mut stack = Vec::new();
        if start < graph.vertex_count() {
            stack.push(start);
        }
        Self { graph, visited, stack }
    }
}

impl<G: Adjacency + ?Sized> Iterator for Dfs<'_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        // Vertices are marked when popped, so a vertex pushed twice is yielded once.
        while let Some(u) = self.stack.pop() {
            if !self.visited.try_visit(u) {
                continue;
            }
            for &v in self.graph.neighbors(u).iter().rev() {
                if !self.visited.is_visited(v) {
                    self.stack.push(v);
                }
            }
            return Some(u);
        }
        None
    }
}

/// Computes a topological ordering using Kahn's algorithm.
///
/// Sources are taken in increasing id order. Returns `None` if the graph has a
/// cycle (a self-loop counts).
pub fn topological_sort(graph: &DirectedGraph) -> Option<Vec<usize>> {
    let n = graph.vertex_count();
    let mut indeg = vec![0usize; n];
    for (_, v) in graph.edges() {
        indeg[v] += 1;
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in graph.neighbors(u) {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    trace_debug!(vertices = n, ordered = order.len(), "topological sort");
    (order.len() == n).then_some(order)
}

/// Checks if the graph is acyclic by attempting a topological sort.
pub fn is_acyclic(graph: &DirectedGraph) -> bool {
    topological_sort(graph).is_some()
}
