//! Single-source shortest paths by edge weight (Dijkstra).
//!
//! The priority queue is a plain `BinaryHeap` without decrease-key:
//! relaxing a node pushes a new entry and the stale one is skipped when it
//! finally surfaces. Heap keys are `(cost, name, id)`, so among equal
//! tentative costs the alphabetically-smallest node is finalized first and
//! the whole computation is deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::store::Graph;
use crate::graph::traversal::TraversalState;
use crate::types::{Mark, NodeId, PathSummary};

impl Graph {
    /// Dijkstra's algorithm from `start`.
    ///
    /// Returns a [`TraversalState`] whose distances are accumulated edge
    /// weights and whose predecessors trace each node's cheapest known
    /// route back to `start`. Weights are unsigned, which is exactly the
    /// non-negativity the greedy argument needs.
    pub fn dijkstra_from(&self, start: NodeId) -> TraversalState {
        let mut state = TraversalState::new(self.len());
        state.set_dist(start, 0);

        let mut heap: BinaryHeap<Reverse<(u64, &str, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((0, self.name(start), start)));

        while let Some(Reverse((cost, _, node))) = heap.pop() {
            if state.mark(node) == Mark::Done {
                // stale entry left behind by a later, cheaper relaxation
                continue;
            }
            state.set_mark(node, Mark::Done);

            for edge in self.neighbors(node) {
                if state.mark(edge.target) == Mark::Done {
                    continue;
                }
                let candidate = cost + edge.weight;
                if state.dist(edge.target).map_or(true, |d| candidate < d) {
                    state.set_dist(edge.target, candidate);
                    state.set_pred(edge.target, node);
                    state.set_mark(edge.target, Mark::InProgress);
                    heap.push(Reverse((candidate, self.name(edge.target), edge.target)));
                }
            }
        }
        debug!(start = self.name(start), "dijkstra finished");
        state
    }

    /// The minimum-weight path between two named nodes, with its total
    /// cost. Fails with `UnknownNode` on an absent name; an unreachable
    /// end node yields the empty [`PathSummary`].
    pub fn dijkstra_path_between(&self, a: &str, b: &str) -> Result<PathSummary> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        let state = self.dijkstra_from(from);
        Ok(reconstruct_path(self, &state, from, to))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteGraphError;
    use pretty_assertions::assert_eq;

    fn graph_with(names: &[&str]) -> Graph {
        let mut graph = Graph::new();
        for name in names {
            graph.add_node(*name).unwrap();
        }
        graph
    }

    /// A-B(1), B-C(2), C-D(3), A-D(10).
    fn seed_ring() -> Graph {
        let mut graph = graph_with(&["A", "B", "C", "D"]);
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("C", "D", 3).unwrap();
        graph.add_edge("A", "D", 10).unwrap();
        graph
    }

    // -- dijkstra_from -------------------------------------------------------

    #[test]
    fn costs_accumulate_edge_weights() {
        let graph = seed_ring();
        let a = graph.node_id("A").unwrap();
        let state = graph.dijkstra_from(a);

        assert_eq!(state.dist(a), Some(0));
        assert_eq!(state.dist(graph.node_id("B").unwrap()), Some(1));
        assert_eq!(state.dist(graph.node_id("C").unwrap()), Some(3));
        assert_eq!(state.dist(graph.node_id("D").unwrap()), Some(6));
    }

    #[test]
    fn direct_edge_loses_to_cheaper_detour() {
        let graph = seed_ring();
        let a = graph.node_id("A").unwrap();
        let state = graph.dijkstra_from(a);

        // D's cheapest route comes through C, not the weight-10 direct edge.
        let c = graph.node_id("C").unwrap();
        let d = graph.node_id("D").unwrap();
        assert_eq!(state.pred(d), Some(c));
    }

    #[test]
    fn unreachable_nodes_keep_no_cost() {
        let mut graph = graph_with(&["A", "B", "Z"]);
        graph.add_edge("A", "B", 1).unwrap();

        let a = graph.node_id("A").unwrap();
        let state = graph.dijkstra_from(a);
        let z = graph.node_id("Z").unwrap();
        assert_eq!(state.dist(z), None);
        assert_eq!(state.pred(z), None);
    }

    // -- dijkstra_path_between -----------------------------------------------

    #[test]
    fn cheapest_path_beats_direct_edge() {
        let graph = seed_ring();
        let summary = graph.dijkstra_path_between("A", "D").unwrap();
        assert_eq!(summary.cost, 6);
        assert_eq!(summary.path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn path_to_self_is_free() {
        let graph = seed_ring();
        let summary = graph.dijkstra_path_between("C", "C").unwrap();
        assert_eq!(summary.cost, 0);
        assert_eq!(summary.path, vec!["C"]);
    }

    #[test]
    fn unreachable_path_is_empty_and_free() {
        let mut graph = graph_with(&["A", "B", "Z"]);
        graph.add_edge("A", "B", 4).unwrap();

        let summary = graph.dijkstra_path_between("A", "Z").unwrap();
        assert_eq!(summary, PathSummary::not_found());
    }

    #[test]
    fn unknown_node_fails() {
        let graph = seed_ring();
        assert!(matches!(
            graph.dijkstra_path_between("A", "Q"),
            Err(RouteGraphError::UnknownNode(_))
        ));
    }

    #[test]
    fn equal_cost_tie_prefers_alphabetical_route() {
        // Two cost-2 routes from A to D: through B and through C. The
        // (cost, name) heap key finalizes B first, so B relaxes D first and
        // C's equally-priced offer is not an improvement.
        let mut graph = graph_with(&["A", "B", "C", "D"]);
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("A", "C", 1).unwrap();
        graph.add_edge("B", "D", 1).unwrap();
        graph.add_edge("C", "D", 1).unwrap();

        let summary = graph.dijkstra_path_between("A", "D").unwrap();
        assert_eq!(summary.cost, 2);
        assert_eq!(summary.path, vec!["A", "B", "D"]);
    }

    #[test]
    fn zero_weight_edges_are_valid() {
        let mut graph = graph_with(&["A", "B", "C"]);
        graph.add_edge("A", "B", 0).unwrap();
        graph.add_edge("B", "C", 5).unwrap();

        let summary = graph.dijkstra_path_between("A", "C").unwrap();
        assert_eq!(summary.cost, 5);
        assert_eq!(summary.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn parallel_edges_use_the_cheaper_one_for_cost() {
        let mut graph = graph_with(&["A", "B"]);
        graph.add_edge("A", "B", 7).unwrap();
        graph.add_edge("A", "B", 2).unwrap();

        let state = graph.dijkstra_from(graph.node_id("A").unwrap());
        assert_eq!(state.dist(graph.node_id("B").unwrap()), Some(2));
    }
}
