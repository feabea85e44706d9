//! Social-network simulator: users, friendships, and shortest social paths.

pub mod network;
pub mod paths;
pub mod user;

pub use network::SocialGraph;
pub use paths::{stats_from_paths, NetworkStats, SocialPaths};
pub use user::{FriendshipStatus, Rejection, User, UserId};
