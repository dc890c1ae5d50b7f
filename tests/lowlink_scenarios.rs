//! End-to-end scenarios for bridges, articulation points and SCC.

mod common;

use common::{cycle_edges, path_edges};
use lowlink::graph::algorithms::low_link;
use lowlink::*;

fn sorted_bridges(graph: &UndirectedGraph) -> Vec<(usize, usize)> {
    let mut bridges: Vec<_> = find_bridges(graph).iter().map(Bridge::normalized).collect();
    bridges.sort_unstable();
    bridges
}

#[test]
fn triangle_with_pendant_from_adjacency() {
    // Edges {0-1, 1-2, 2-0, 1-3}, each listed at both endpoints.
    let adjacency = vec![vec![1, 2], vec![0, 2, 3], vec![1, 0], vec![1]];
    let graph = UndirectedGraph::from_adjacency(&adjacency);

    let bridges: Vec<_> = find_bridges(&graph).iter().map(|b| (b.u, b.v)).collect();
    assert_eq!(bridges, vec![(1, 3)]);
    assert_eq!(find_articulation_points(&graph), vec![1]);
}

#[test]
fn two_directed_cycles_joined_by_an_edge() {
    let adjacency = vec![vec![1], vec![2, 3], vec![0], vec![4], vec![5], vec![3]];
    let graph = DirectedGraph::from_adjacency(&adjacency);

    let mut components = strongly_connected_components(&graph);
    assert_eq!(components.len(), 2);
    components.sort();
    assert_eq!(components, vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn every_tree_edge_is_a_bridge() {
    // Binary heap shaped tree plus a caterpillar, both with n - 1 edges.
    let heap: Vec<(usize, usize)> = (1..15).map(|i| ((i - 1) / 2, i)).collect();
    let caterpillar: Vec<(usize, usize)> = (1..12usize)
        .map(|i| if i % 2 == 1 { (i.saturating_sub(2), i) } else { (i - 1, i) })
        .collect();

    for (n, edges) in [(15, heap), (12, caterpillar)] {
        let graph = UndirectedGraph::from_edges(n, &edges).unwrap();
        assert_eq!(common::count_components(n, &edges, None, None), 1);

        let mut expected: Vec<_> = edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        expected.sort_unstable();
        assert_eq!(sorted_bridges(&graph), expected);

        let internal: Vec<usize> = (0..n).filter(|&v| graph.degree(v) >= 2).collect();
        assert_eq!(find_articulation_points(&graph), internal);
    }
}

#[test]
fn a_single_cycle_has_no_bridges_or_cut_vertices() {
    // n = 1 is a self-loop and n = 2 a pair of parallel edges.
    for n in 1..=10 {
        let graph = UndirectedGraph::from_edges(n, &cycle_edges(n)).unwrap();
        assert!(find_bridges(&graph).is_empty(), "cycle of {n}");
        assert!(find_articulation_points(&graph).is_empty(), "cycle of {n}");
    }
}

#[test]
fn empty_graphs_give_empty_results() {
    let undirected = UndirectedGraph::from_adjacency(&[]);
    assert!(find_bridges(&undirected).is_empty());
    assert!(find_articulation_points(&undirected).is_empty());

    let directed = DirectedGraph::from_adjacency(&[]);
    assert!(strongly_connected_components(&directed).is_empty());
    assert!(tarjan_scc(&directed).is_empty());
}

#[test]
fn long_path_does_not_overflow_the_stack() {
    let n = 200_000;
    let graph = UndirectedGraph::from_edges(n, &path_edges(n)).unwrap();
    assert_eq!(find_bridges(&graph).len(), n - 1);
    assert_eq!(find_articulation_points(&graph).len(), n - 2);

    let directed = DirectedGraph::from_edges(n, &path_edges(n)).unwrap();
    assert_eq!(kosaraju(&directed).len(), n);
    assert_eq!(tarjan_scc(&directed).len(), n);

    let mut ring = path_edges(n);
    ring.push((n - 1, 0));
    let directed_ring = DirectedGraph::from_edges(n, &ring).unwrap();
    assert_eq!(kosaraju(&directed_ring).len(), 1);
    assert_eq!(tarjan_scc(&directed_ring).len(), 1);
}

#[test]
fn repeated_runs_agree() {
    let graph = UndirectedGraph::from_edges(
        7,
        &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (5, 6)],
    )
    .unwrap();
    assert_eq!(find_bridges(&graph), find_bridges(&graph));
    assert_eq!(find_articulation_points(&graph), find_articulation_points(&graph));
    assert_eq!(low_link(&graph), low_link(&graph));

    let directed = DirectedGraph::from_edges(5, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 2), (4, 4)]).unwrap();
    assert_eq!(kosaraju(&directed), kosaraju(&directed));
    assert_eq!(tarjan_scc(&directed), tarjan_scc(&directed));
}

#[test]
fn low_never_exceeds_tin() {
    let graph = UndirectedGraph::from_edges(
        8,
        &[(0, 1), (1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4), (6, 7), (2, 2)],
    )
    .unwrap();
    let ll = low_link(&graph);
    let mut seen = ll.tin.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..8).collect::<Vec<_>>());
    for v in 0..8 {
        assert!(ll.low[v] <= ll.tin[v], "vertex {v}");
    }
}

#[test]
fn malformed_input_fails_fast() {
    assert!(matches!(
        UndirectedGraph::try_from_adjacency(&[vec![1], vec![0, 2]]),
        Err(GraphError::VertexOutOfRange { vertex: 2, vertex_count: 2 })
    ));
    assert!(matches!(
        UndirectedGraph::try_from_adjacency(&[vec![1, 1], vec![0]]),
        Err(GraphError::AsymmetricAdjacency { u: 0, v: 1 })
    ));
    assert!(matches!(
        DirectedGraph::try_from_adjacency(&[vec![4]]),
        Err(GraphError::VertexOutOfRange { vertex: 4, vertex_count: 1 })
    ));
}

#[test]
fn graph_spec_fixture_from_json() {
    let spec = GraphSpec::from_json(
        r#"{ "vertex_count": 6, "edges": [[0,1],[1,2],[2,0],[1,3],[3,4],[4,5],[5,3]] }"#,
    )
    .unwrap();

    let directed = spec.to_directed().unwrap();
    assert_eq!(kosaraju(&directed).components(), &[vec![0, 1, 2], vec![3, 4, 5]]);

    let undirected = spec.to_undirected().unwrap();
    assert_eq!(sorted_bridges(&undirected), vec![(1, 3)]);
    assert_eq!(find_articulation_points(&undirected), vec![1, 3]);
    assert_eq!(two_edge_connected_components(&undirected).count, 2);
}
