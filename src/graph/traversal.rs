//! Depth-first and breadth-first traversal over a [`Graph`].
//!
//! Both traversals visit neighbors in ascending name order, so the
//! discovered tree (and every path query built on it) is fully
//! deterministic for a given graph and starting node. All transient state
//! lives in a per-query [`TraversalState`] keyed by node index; nothing is
//! ever written to the graph itself, so queries cannot corrupt each other.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::store::Graph;
use crate::types::{Mark, NodeId, PathSummary};

// ---------------------------------------------------------------------------
// TraversalState
// ---------------------------------------------------------------------------

/// Scratch state for one traversal: marks, predecessors, and distances,
/// each indexed by [`NodeId`].
///
/// A public query allocates a fresh state; [`Graph::connected_components`]
/// threads one shared state through its chained DFS launches so marks
/// accumulate across them.
#[derive(Debug, Clone)]
pub struct TraversalState {
    marks: Vec<Mark>,
    pred: Vec<Option<NodeId>>,
    dist: Vec<Option<u64>>,
}

impl TraversalState {
    /// Fresh state for a graph of `len` nodes: every node `Unvisited`,
    /// no predecessors, no distances.
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![Mark::Unvisited; len],
            pred: vec![None; len],
            dist: vec![None; len],
        }
    }

    pub fn mark(&self, id: NodeId) -> Mark {
        self.marks[id.index()]
    }

    /// The node from which `id` was first discovered, or `None` if `id` is
    /// the start or was never reached.
    pub fn pred(&self, id: NodeId) -> Option<NodeId> {
        self.pred[id.index()]
    }

    /// Hop count for BFS, accumulated edge weight for Dijkstra. `None`
    /// while unreached.
    pub fn dist(&self, id: NodeId) -> Option<u64> {
        self.dist[id.index()]
    }

    pub(crate) fn set_mark(&mut self, id: NodeId, mark: Mark) {
        self.marks[id.index()] = mark;
    }

    pub(crate) fn set_pred(&mut self, id: NodeId, pred: NodeId) {
        self.pred[id.index()] = Some(pred);
    }

    pub(crate) fn set_dist(&mut self, id: NodeId, dist: u64) {
        self.dist[id.index()] = Some(dist);
    }
}

// ---------------------------------------------------------------------------
// DFS / BFS
// ---------------------------------------------------------------------------

impl Graph {
    /// Depth-first traversal from `start`, recording first-discovery
    /// predecessors into `state`.
    ///
    /// Uses an explicit frame stack (node + neighbor cursor) rather than
    /// recursion, so chain-shaped graphs cannot exhaust the call stack.
    /// The visit order is identical to the recursive formulation: a node's
    /// neighbors are tried in ascending name order, each unvisited one is
    /// entered immediately, and the node itself is marked `Done` only once
    /// all its neighbors have been tried.
    pub fn dfs(&self, start: NodeId, state: &mut TraversalState) {
        state.set_mark(start, Mark::InProgress);
        let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            frame.1 += 1;

            match self.neighbors(node).get(cursor) {
                Some(edge) => {
                    if state.mark(edge.target) == Mark::Unvisited {
                        state.set_pred(edge.target, node);
                        state.set_mark(edge.target, Mark::InProgress);
                        stack.push((edge.target, 0));
                    }
                }
                None => {
                    state.set_mark(node, Mark::Done);
                    stack.pop();
                }
            }
        }
    }

    /// Depth-first traversal from `start` with a fresh [`TraversalState`].
    pub fn dfs_from(&self, start: NodeId) -> TraversalState {
        let mut state = TraversalState::new(self.len());
        self.dfs(start, &mut state);
        state
    }

    /// Breadth-first traversal from `start` with a fresh
    /// [`TraversalState`]. Distances are hop counts, not weights.
    pub fn bfs_from(&self, start: NodeId) -> TraversalState {
        let mut state = TraversalState::new(self.len());
        state.set_mark(start, Mark::InProgress);
        state.set_dist(start, 0);

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            // set when the node was enqueued
            let hops = state.dist(node).unwrap_or(0);

            for edge in self.neighbors(node) {
                if state.mark(edge.target) == Mark::Unvisited {
                    state.set_mark(edge.target, Mark::InProgress);
                    state.set_pred(edge.target, node);
                    state.set_dist(edge.target, hops + 1);
                    queue.push_back(edge.target);
                }
            }
            state.set_mark(node, Mark::Done);
        }
        state
    }

    // -------------------------------------------------------------------
    // Queries built on the traversals
    // -------------------------------------------------------------------

    /// Count maximal sets of mutually reachable nodes.
    ///
    /// Launches a DFS from each node not yet reached by an earlier launch,
    /// in insertion order, sharing one [`TraversalState`] across launches.
    /// Isolated nodes each count as their own component; the empty graph
    /// has zero.
    pub fn connected_components(&self) -> usize {
        let mut state = TraversalState::new(self.len());
        let mut components = 0;

        for id in self.node_ids() {
            if state.mark(id) == Mark::Unvisited {
                self.dfs(id, &mut state);
                components += 1;
            }
        }
        debug!(components, "connected components counted");
        components
    }

    /// Whether a path exists between two named nodes. A node always
    /// reaches itself. Fails with `UnknownNode` on an absent name.
    pub fn is_reachable(&self, a: &str, b: &str) -> Result<bool> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        if from == to {
            return Ok(true);
        }
        let state = self.dfs_from(from);
        Ok(state.pred(to).is_some())
    }

    /// The first path a depth-first search discovers between two named
    /// nodes, with its total edge-weight cost. Not necessarily cheapest.
    pub fn dfs_path_between(&self, a: &str, b: &str) -> Result<PathSummary> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        let state = self.dfs_from(from);
        Ok(reconstruct_path(self, &state, from, to))
    }

    /// The fewest-hops path between two named nodes, with its total
    /// edge-weight cost. BFS minimizes hop count, not cost, so a direct
    /// heavy edge beats a cheap multi-hop detour.
    pub fn bfs_path_between(&self, a: &str, b: &str) -> Result<PathSummary> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        let state = self.bfs_from(from);
        Ok(reconstruct_path(self, &state, from, to))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
