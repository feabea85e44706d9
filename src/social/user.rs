//! User records and friendship outcomes.

use serde::Serialize;
use thiserror::Error;

/// Sequential user identifier, starting at 1.
pub type UserId = u64;

/// A member of the social network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a new user record.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Why a friendship request left the graph unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A user cannot befriend themselves.
    #[error("User {0} cannot be friends with themselves")]
    SelfFriendship(UserId),

    /// The two users are already friends.
    #[error("Friendship between {0} and {1} already exists")]
    AlreadyFriends(UserId, UserId),
}

/// Outcome of [`SocialGraph::add_friendship`](super::SocialGraph::add_friendship).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipStatus {
    /// A new symmetric edge was added.
    Created,
    /// The request was a no-op; a warning was logged.
    Rejected(Rejection),
}

impl FriendshipStatus {
    /// Whether a new friendship was created.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }
}
