//! Brute-force oracles shared by the integration tests.
//!
//! Deliberately naive: plain adjacency vectors and repeated BFS, no crate code.

#![allow(dead_code)]

use std::collections::VecDeque;

/// Counts connected components of an undirected edge list, optionally
/// ignoring one edge (by index) or one vertex with its incident edges.
pub fn count_components(
    n: usize,
    edges: &[(usize, usize)],
    skip_edge: Option<usize>,
    skip_vertex: Option<usize>,
) -> usize {
    let mut adj = vec![Vec::new(); n];
    for (i, &(u, v)) in edges.iter().enumerate() {
        if Some(i) == skip_edge || Some(u) == skip_vertex || Some(v) == skip_vertex {
            continue;
        }
        adj[u].push(v);
        adj[v].push(u);
    }

    let mut seen = vec![false; n];
    let mut count = 0;
    for s in 0..n {
        if seen[s] || Some(s) == skip_vertex {
            continue;
        }
        count += 1;
        seen[s] = true;
        let mut queue = VecDeque::from([s]);
        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }
    count
}

/// Indices of the edges whose removal increases the component count.
pub fn brute_force_bridges(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let base = count_components(n, edges, None, None);
    (0..edges.len())
        .filter(|&i| count_components(n, edges, Some(i), None) > base)
        .collect()
}

/// Vertices whose removal increases the component count.
pub fn brute_force_articulation_points(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let base = count_components(n, edges, None, None);
    (0..n)
        .filter(|&v| count_components(n, edges, None, Some(v)) > base)
        .collect()
}

/// `reach[u][v]` is true iff `v` is reachable from `u` in the directed edge list.
pub fn reachability(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut adj = vec![Vec::new(); n];
    for &(u, v) in edges {
        adj[u].push(v);
    }

    let mut reach = vec![vec![false; n]; n];
    for (s, row) in reach.iter_mut().enumerate() {
        row[s] = true;
        let mut stack = vec![s];
        while let Some(u) = stack.pop() {
            for &v in &adj[u] {
                if !row[v] {
                    row[v] = true;
                    stack.push(v);
                }
            }
        }
    }
    reach
}

/// Edge list of the cycle `0-1-...-(n-1)-0`.
pub fn cycle_edges(n: usize) -> Vec<(usize, usize)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Edge list of the path `0-1-...-(n-1)`.
pub fn path_edges(n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|i| (i - 1, i)).collect()
}
