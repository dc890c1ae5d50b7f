//! Depth-first low-link walker for undirected graphs.
//!
//! One walk assigns every vertex a discovery time `tin[v]` and a low-link
//! `low[v]`, the smallest discovery time reachable from `v`'s DFS subtree
//! through at most one back edge. Bridges and articulation points are both
//! read off the same walk; they differ only in what they do when a tree edge
//! finishes, which is what [`LowLinkVisitor`] captures.
//!
//! The walk is iterative. Each frame of the explicit stack holds the vertex,
//! the edge it was entered through and a cursor into its adjacency slice, so
//! visitation order and update order match the textbook recursion exactly
//! while path graphs of any length stay off the call stack.
//!
//! The edge back to the parent is recognised by [`EdgeId`], not by the parent
//! vertex. A second parallel edge to the parent is therefore a back edge, and a
//! self-loop is a back edge to the vertex itself.

use crate::graph::access::visited::VisitedSet;
use crate::graph::algorithms::math_assert::math_assert_msg;
use crate::graph::{EdgeId, UndirectedGraph};
use crate::macros::trace_debug;

/// A DFS tree edge reported once the child's subtree is finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeEdge {
    /// The vertex the edge was explored from.
    pub parent: usize,
    /// The vertex discovered through the edge.
    pub child: usize,
    /// Identity of the edge.
    pub edge: EdgeId,
    /// Whether `parent` is the root of its DFS tree.
    pub parent_is_root: bool,
}

/// Read access to the discovery and low-link arrays during a walk.
#[derive(Clone, Copy, Debug)]
pub struct LowLinkView<'a> {
    tin: &'a [usize],
    low: &'a [usize],
}

impl LowLinkView<'_> {
    /// Discovery time of `vertex`.
    #[inline]
    pub fn tin(&self, vertex: usize) -> usize {
        self.tin[vertex]
    }

    /// Current low-link of `vertex`; final once `vertex` has finished.
    #[inline]
    pub fn low(&self, vertex: usize) -> usize {
        self.low[vertex]
    }
}

/// Callbacks fired by [`LowLinkWalker`].
///
/// Both methods default to doing nothing.
pub trait LowLinkVisitor {
    /// Called when `edge.child` finishes, after `low[edge.parent]` has absorbed `low[edge.child]`.
    fn tree_edge(&mut self, edge: TreeEdge, view: LowLinkView<'_>) {
        let _ = (edge, view);
    }

    /// Called when a DFS root finishes, with its number of tree children.
    fn root(&mut self, root: usize, children: usize) {
        let _ = (root, children);
    }
}

impl LowLinkVisitor for () {}

/// Final discovery times and low-links of a walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LowLink {
    /// Discovery time per vertex, unique and assigned in DFS order from 0.
    pub tin: Vec<usize>,
    /// Low-link per vertex; `low[v] <= tin[v]`.
    pub low: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    parent_edge: Option<EdgeId>,
    cursor: usize,
    children: usize,
}

/// Per-walk state for a DFS low-link traversal.
///
/// The walker is consumed by [`run`](Self::run), so every walk starts from
/// freshly allocated arrays and a timer at zero.
pub struct LowLinkWalker<'g> {
    graph: &'g UndirectedGraph,
    tin: Vec<usize>,
    low: Vec<usize>,
    visited: VisitedSet,
    timer: usize,
    stack: Vec<Frame>,
}

impl<'g> LowLinkWalker<'g> {
    /// Prepares a walk over `graph`.
    pub fn new(graph: &'g UndirectedGraph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            tin: vec![usize::MAX; n],
            low: vec![usize::MAX; n],
            visited: VisitedSet::new(n),
            timer: 0,
            stack: Vec::new(),
        }
    }

    /// Walks every component, roots taken in increasing vertex order.
    pub fn run<V>(mut self, visitor: &mut V) -> LowLink
    where
        V: LowLinkVisitor + ?Sized,
    {
        trace_debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "low-link walk"
        );

        for root in 0..self.graph.vertex_count() {
            if !self.visited.is_visited(root) {
                self.walk_from(root, visitor);
            }
        }

        math_assert_msg(
            self.visited.count() == self.visited.len(),
            "every vertex must receive a discovery time",
        );
        math_assert_msg(self.timer == self.graph.vertex_count(), "timer must advance once per vertex");

        LowLink {
            tin: self.tin,
            low: self.low,
        }
    }

    fn enter(&mut self, vertex: usize, parent_edge: Option<EdgeId>) {
        self.visited.try_visit(vertex);
        self.tin[vertex] = self.timer;
        self.low[vertex] = self.timer;
        self.timer += 1;
        self.stack.push(Frame {
            vertex,
            parent_edge,
            cursor: 0,
            children: 0,
        });
    }

    fn walk_from<V>(&mut self, root: usize, visitor: &mut V)
    where
        V: LowLinkVisitor + ?Sized,
    {
        let graph = self.graph;
        self.enter(root, None);

        while let Some(top) = self.stack.last_mut() {
            let v = top.vertex;
            let slot = top.cursor;

            if let (Some(&to), Some(&edge)) =
                (graph.neighbors(v).get(slot), graph.incident_edge_ids(v).get(slot))
            {
                top.cursor += 1;
                if top.parent_edge == Some(edge) {
                    continue;
                }
                if self.visited.is_visited(to) {
                    // Back edge (or a self-loop, where `to == v`).
                    self.low[v] = self.low[v].min(self.tin[to]);
                } else {
                    top.children += 1;
                    self.enter(to, Some(edge));
                }
                continue;
            }

            let Some(done) = self.stack.pop() else { break };
            math_assert_msg(self.low[v] <= self.tin[v], "low[v] <= tin[v]");

            match (self.stack.last(), done.parent_edge) {
                (Some(parent), Some(edge)) => {
                    let p = parent.vertex;
                    let parent_is_root = parent.parent_edge.is_none();
                    self.low[p] = self.low[p].min(self.low[v]);
                    visitor.tree_edge(
                        TreeEdge {
                            parent: p,
                            child: v,
                            edge,
                            parent_is_root,
                        },
                        LowLinkView {
                            tin: &self.tin,
                            low: &self.low,
                        },
                    );
                }
                _ => visitor.root(v, done.children),
            }
        }
    }
}

/// Runs a low-link walk over `graph` and returns the final arrays.
pub fn low_link(graph: &UndirectedGraph) -> LowLink {
    LowLinkWalker::new(graph).run(&mut ())
}
