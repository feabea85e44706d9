//! Directed graph with traversals and path searches.

pub mod builder;
pub mod directed;
pub mod search;
pub mod traversal;

pub use builder::{sample_graph, GraphBuilder};
pub use directed::{Graph, VertexId};
pub use traversal::Traversal;
