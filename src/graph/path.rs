//! Path reconstruction from a predecessor map.
//!
//! Shared by the DFS, BFS, and Dijkstra path queries; the three differ only
//! in which [`TraversalState`] they hand over.

use crate::graph::store::Graph;
use crate::graph::traversal::TraversalState;
use crate::types::{NodeId, PathSummary};

/// Walk predecessors backward from `end` to `start`, accumulating the
/// weight of each traversed edge.
///
/// If `end` was never reached (no predecessor recorded and `end != start`)
/// this returns the empty [`PathSummary`], the defined "no path" result.
pub fn reconstruct_path(
    graph: &Graph,
    state: &TraversalState,
    start: NodeId,
    end: NodeId,
) -> PathSummary {
    if state.pred(end).is_none() && end != start {
        return PathSummary::not_found();
    }

    let mut names: Vec<String> = Vec::new();
    let mut cost: u64 = 0;
    let mut current = end;

    loop {
        names.push(graph.name(current).to_string());
        match state.pred(current) {
            Some(previous) => {
                // the discovering edge exists in the predecessor's list
                cost += graph.edge_weight(previous, current).unwrap_or(0);
                current = previous;
            }
            None => break,
        }
    }

    names.reverse();
    PathSummary { cost, path: names }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
