//! Tarjan's single-pass SCC algorithm.
//!
//! A low-link walk on a directed graph: a vertex whose low-link equals its own
//! index when it finishes is the root of a component, and the component is
//! everything above it on the vertex stack. Only edges to vertices still on
//! that stack lower a low-link.

use crate::graph::algorithms::math_assert::math_assert_msg;
use crate::graph::algorithms::scc::SccResult;
use crate::graph::DirectedGraph;
use crate::macros::trace_debug;

const UNVISITED: usize = usize::MAX;

struct TarjanState<'g> {
    graph: &'g DirectedGraph,
    index: Vec<usize>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    /// Explicit call stack of `(vertex, next neighbor slot)`.
    call: Vec<(usize, usize)>,
    counter: usize,
    components: Vec<Vec<usize>>,
}

impl<'g> TarjanState<'g> {
    fn new(graph: &'g DirectedGraph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            index: vec![UNVISITED; n],
            low: vec![UNVISITED; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            call: Vec::new(),
            counter: 0,
            components: Vec::new(),
        }
    }

    fn visit(&mut self, v: usize) {
        self.index[v] = self.counter;
        self.low[v] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
        self.call.push((v, 0));
    }

    fn walk_from(&mut self, root: usize) {
        let graph = self.graph;
        self.visit(root);

        while let Some(frame) = self.call.last_mut() {
            let (v, cursor) = *frame;
            if let Some(&w) = graph.neighbors(v).get(cursor) {
                frame.1 += 1;
                if self.index[w] == UNVISITED {
                    self.visit(w);
                } else if self.on_stack[w] {
                    self.low[v] = self.low[v].min(self.index[w]);
                }
                continue;
            }

            self.call.pop();
            if let Some(&(parent, _)) = self.call.last() {
                self.low[parent] = self.low[parent].min(self.low[v]);
            }
            math_assert_msg(self.low[v] <= self.index[v], "low[v] <= index[v]");

            if self.low[v] == self.index[v] {
                let mut comp = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w] = false;
                    comp.push(w);
                    if w == v {
                        break;
                    }
                }
                comp.sort_unstable();
                self.components.push(comp);
            }
        }
    }
}

/// Computes strongly connected components with Tarjan's algorithm.
///
/// Components come out in reverse topological order of the condensation:
/// every edge between components points from a later component to an
/// earlier one.
pub fn tarjan_scc(graph: &DirectedGraph) -> SccResult {
    let n = graph.vertex_count();
    trace_debug!(vertices = n, edges = graph.edge_count(), "tarjan scc");

    let mut state = TarjanState::new(graph);
    for root in 0..n {
        if state.index[root] == UNVISITED {
            state.walk_from(root);
        }
    }
    math_assert_msg(state.stack.is_empty(), "vertex stack must drain");

    trace_debug!(components = state.components.len(), "tarjan scc finished");
    SccResult::from_components(state.components, n)
}
