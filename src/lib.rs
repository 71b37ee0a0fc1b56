//! RouteGraph — in-memory undirected weighted graph engine.
//!
//! Builds a graph from a plain-text description and answers four query
//! families over it: connected-component counting, reachability, and
//! path finding via DFS, BFS, or Dijkstra. Traversals visit neighbors in
//! ascending name order, so every answer is deterministic.

pub mod cli;
pub mod desc;
pub mod error;
pub mod graph;
pub mod observability;
pub mod types;

pub use error::{Result, RouteGraphError};
pub use graph::Graph;
pub use types::{GraphDescription, PathSummary};
