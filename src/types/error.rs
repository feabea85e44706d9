//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex or user referenced by an operation is not present.
    #[error("Vertex {0} not in graph")]
    MissingVertex(String),

    /// More friendships were requested than there are distinct user pairs.
    #[error("Cannot create {target} friendships: only {possible} distinct pairs exist")]
    FriendshipTargetUnreachable { target: usize, possible: usize },

    /// The ancestry edge list contains a cycle reachable from the start.
    #[error("Ancestry of {0} is cyclic")]
    CyclicAncestry(String),
}

impl GraphError {
    /// Build a `MissingVertex` error from any debuggable identifier.
    pub fn missing<V: std::fmt::Debug>(id: &V) -> Self {
        Self::MissingVertex(format!("{:?}", id))
    }
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
