//! Core domain types for RouteGraph.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Stable index of a node within its [`Graph`](crate::graph::Graph).
///
/// All per-query traversal state (marks, predecessors, distances) is keyed
/// by this index into plain vectors, never by node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The raw vector index.
    pub fn index(self) -> usize {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Mark
// ---------------------------------------------------------------------------

/// Per-query traversal status of a node.
///
/// Lives in [`TraversalState`](crate::graph::TraversalState), owned by the
/// query call. A node is `InProgress` from first discovery until all of its
/// neighbors have been explored, then `Done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

// ---------------------------------------------------------------------------
// Neighbor / Node
// ---------------------------------------------------------------------------

/// One weighted adjacency entry. Two are created per inserted edge, one in
/// each endpoint's list (undirected symmetry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub target: NodeId,
    pub weight: u64,
}

/// A named vertex and its adjacency list.
///
/// The list is kept sorted by neighbor name ascending at insertion time;
/// that ordering is the sole tie-break for DFS and BFS.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) neighbors: Vec<Neighbor>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }
}

// ---------------------------------------------------------------------------
// Description payload
// ---------------------------------------------------------------------------

/// One undirected edge as written in a description line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: u64,
}

/// Parsed form of a plain-text graph description: the node names from the
/// first line, then one [`EdgeSpec`] per edge line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeSpec>,
}

// ---------------------------------------------------------------------------
// Query results
// ---------------------------------------------------------------------------

/// Aggregate statistics about a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Result of a path query: total edge-weight cost plus the ordered node
/// names from start to end.
///
/// "No path" is the success value `{ cost: 0, path: [] }`, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSummary {
    pub cost: u64,
    pub path: Vec<String>,
}

impl PathSummary {
    /// The defined "no path" result.
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
