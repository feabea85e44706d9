//! graphwalk: small graph algorithms.
//!
//! A generic directed graph with breadth-first and depth-first traversals
//! and path searches, an earliest-ancestor finder over a family tree, and a
//! social-network simulator that computes shortest friendship paths.

pub mod ancestor;
pub mod cli;
pub mod graph;
pub mod social;
pub mod types;

// Re-export commonly used types at the crate root
pub use ancestor::{earliest_ancestor, AncestryIndex};
pub use graph::{sample_graph, Graph, GraphBuilder, Traversal, VertexId};
pub use social::{
    FriendshipStatus, NetworkStats, Rejection, SocialGraph, SocialPaths, User, UserId,
};
pub use types::{GraphError, GraphResult, VertexColor, NO_ANCESTOR};
