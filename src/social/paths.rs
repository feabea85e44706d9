//! Shortest social paths from one user to their extended network.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

use super::network::SocialGraph;
use super::user::UserId;

/// Reachable user -> shortest friendship path to them, starting with the origin.
pub type SocialPaths = BTreeMap<UserId, Vec<UserId>>;

/// Summary of one user's extended network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    /// The user the network was computed for.
    pub origin: UserId,
    /// Users reachable from the origin, including the origin.
    pub network_size: usize,
    /// `network_size` as a percentage of all users.
    pub coverage_percent: f64,
    /// Mean number of friendship hops to every other reachable user.
    /// Zero when the origin has no friends.
    pub average_separation: f64,
}

impl SocialGraph {
    /// Shortest friendship path from `user_id` to every user in their
    /// extended network, the origin included (`[user_id]`).
    ///
    /// Each round scans every visited-but-unexpanded user, recording
    /// path-so-far + friend for each unvisited friend, then marks the scanned
    /// users finished. Users discovered in a round are only expanded in the
    /// next one, so every recorded path is a shortest path.
    pub fn get_all_social_paths(&self, user_id: UserId) -> GraphResult<SocialPaths> {
        if !self.friendships.contains_key(&user_id) {
            return Err(GraphError::missing(&user_id));
        }

        let mut visited: SocialPaths = BTreeMap::new();
        visited.insert(user_id, vec![user_id]);
        let mut finished: BTreeSet<UserId> = BTreeSet::new();

        loop {
            let remaining: Vec<UserId> = visited
                .keys()
                .filter(|id| !finished.contains(id))
                .copied()
                .collect();
            if remaining.is_empty() {
                break;
            }

            for user in remaining {
                let path_so_far = visited.get(&user).cloned().unwrap_or_default();
                for &friend in self.friends_of(user)? {
                    if !visited.contains_key(&friend) {
                        let mut path = path_so_far.clone();
                        path.push(friend);
                        visited.insert(friend, path);
                    }
                }
                finished.insert(user);
            }
        }

        log::debug!("User {} reaches {} users", user_id, visited.len());
        Ok(visited)
    }

    /// Size, coverage, and mean degree of separation of a user's extended network.
    pub fn network_stats(&self, user_id: UserId) -> GraphResult<NetworkStats> {
        let paths = self.get_all_social_paths(user_id)?;
        Ok(stats_from_paths(user_id, &paths, self.user_count()))
    }
}

/// Summarize already-computed social paths.
pub fn stats_from_paths(origin: UserId, paths: &SocialPaths, total_users: usize) -> NetworkStats {
    let network_size = paths.len();
    let coverage_percent = if total_users == 0 {
        0.0
    } else {
        network_size as f64 * 100.0 / total_users as f64
    };

    let others: Vec<usize> = paths
        .iter()
        .filter(|(id, _)| **id != origin)
        .map(|(_, path)| path.len() - 1)
        .collect();
    let average_separation = if others.is_empty() {
        0.0
    } else {
        others.iter().sum::<usize>() as f64 / others.len() as f64
    };

    NetworkStats {
        origin,
        network_size,
        coverage_percent,
        average_separation,
    }
}
