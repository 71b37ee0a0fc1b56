//! Graph layer — in-memory store, traversals, and path queries.

pub mod path;
pub mod shortest_path;
pub mod store;
pub mod traversal;

pub use path::reconstruct_path;
pub use store::Graph;
pub use traversal::TraversalState;
