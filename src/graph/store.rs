//! In-memory storage for the undirected weighted graph.
//!
//! [`Graph`] owns every node in a single vector and resolves names through
//! a side index, so all traversal state elsewhere in the crate can be keyed
//! by plain [`NodeId`] indices. The structure is built once (nodes, then
//! edges) and is read-only for every query.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, RouteGraphError};
use crate::types::{EdgeSpec, GraphDescription, GraphStats, Neighbor, Node, NodeId};

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected weighted graph with unique node names.
///
/// Node insertion order is preserved, which makes component enumeration
/// deterministic. Adjacency lists are kept sorted by neighbor name, which
/// makes traversal order deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a parsed description: all nodes first, then all
    /// edges. Fails on duplicate node names or edges naming unknown nodes.
    pub fn from_description(desc: &GraphDescription) -> Result<Self> {
        let mut graph = Self::new();
        for name in &desc.nodes {
            graph.add_node(name)?;
        }
        for EdgeSpec { a, b, weight } in &desc.edges {
            graph.add_edge(a, b, *weight)?;
        }
        debug!(
            nodes = graph.len(),
            edges = desc.edges.len(),
            "graph built from description"
        );
        Ok(graph)
    }

    // -------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------

    /// Insert a new node. Names are unique within a graph; inserting a
    /// taken name fails with [`RouteGraphError::DuplicateNode`].
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(RouteGraphError::DuplicateNode(name));
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(name.clone(), id);
        self.nodes.push(Node::new(name));
        Ok(id)
    }

    /// Insert an undirected edge between two existing nodes.
    ///
    /// One [`Neighbor`] entry is added to each endpoint's adjacency list,
    /// preserving the name-sorted order. If either name is unknown the call
    /// fails with [`RouteGraphError::UnknownNode`] and the graph is left
    /// unmodified. Self-loops and parallel edges are accepted.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u64) -> Result<()> {
        let id_a = self.require(a)?;
        let id_b = self.require(b)?;

        self.insert_neighbor(id_a, id_b, weight);
        self.insert_neighbor(id_b, id_a, weight);
        Ok(())
    }

    /// Insert `(target, weight)` into `node`'s adjacency list at the
    /// position that keeps the list sorted by target name.
    fn insert_neighbor(&mut self, node: NodeId, target: NodeId, weight: u64) {
        let target_name = self.nodes[target.index()].name.clone();
        let list = &self.nodes[node.index()].neighbors;
        let pos = list.partition_point(|n| self.nodes[n.target.index()].name < target_name);
        self.nodes[node.index()]
            .neighbors
            .insert(pos, Neighbor { target, weight });
    }

    // -------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------

    /// Resolve a name to its id, if present.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Resolve a name or fail with [`RouteGraphError::UnknownNode`].
    pub(crate) fn require(&self, name: &str) -> Result<NodeId> {
        self.node_id(name)
            .ok_or_else(|| RouteGraphError::UnknownNode(name.to_string()))
    }

    /// The name of a node.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    /// The name-sorted adjacency list of a node.
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        &self.nodes[id.index()].neighbors
    }

    /// The weight of the first edge between two adjacent nodes, if any.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<u64> {
        self.neighbors(from)
            .iter()
            .find(|n| n.target == to)
            .map(|n| n.weight)
    }

    /// All node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node and edge counts. Every undirected edge contributes one entry to
    /// each endpoint's list, so the edge count is half the entry total.
    pub fn stats(&self) -> GraphStats {
        let entries: usize = self.nodes.iter().map(|n| n.neighbors.len()).sum();
        GraphStats {
            nodes: self.nodes.len(),
            edges: entries / 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
