//! Users and symmetric friendships, with random population.

use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{GraphError, GraphResult};

use super::user::{FriendshipStatus, Rejection, User, UserId};

/// A social network of users linked by undirected friendships.
///
/// Friendship sets are kept symmetric: if A lists B then B lists A. No user
/// lists themselves.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// Last assigned user ID (0 when empty).
    last_id: UserId,
    /// All users, indexed by ID.
    users: BTreeMap<UserId, User>,
    /// User -> friends.
    pub(super) friendships: BTreeMap<UserId, BTreeSet<UserId>>,
}

impl SocialGraph {
    /// Create a new empty social graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of (undirected) friendships.
    pub fn friendship_count(&self) -> usize {
        self.friendships.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Get a user by ID.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// All users in ID order.
    pub fn users(&self) -> &BTreeMap<UserId, User> {
        &self.users
    }

    /// The full friendship mapping.
    pub fn friendships(&self) -> &BTreeMap<UserId, BTreeSet<UserId>> {
        &self.friendships
    }

    /// Friends of a user.
    pub fn friends_of(&self, id: UserId) -> GraphResult<&BTreeSet<UserId>> {
        self.friendships
            .get(&id)
            .ok_or_else(|| GraphError::missing(&id))
    }

    /// Whether `a` and `b` are friends.
    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.friendships
            .get(&a)
            .map(|friends| friends.contains(&b))
            .unwrap_or(false)
    }

    /// Create a user with the next sequential ID and return that ID.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        self.users.insert(self.last_id, User::new(name));
        self.friendships.insert(self.last_id, BTreeSet::new());
        self.last_id
    }

    /// Create a bidirectional friendship.
    ///
    /// Self-friendship and duplicate friendship are rejected with a warning
    /// and leave the graph unchanged. Unknown users are an error.
    pub fn add_friendship(
        &mut self,
        user_id: UserId,
        friend_id: UserId,
    ) -> GraphResult<FriendshipStatus> {
        if !self.friendships.contains_key(&user_id) {
            return Err(GraphError::missing(&user_id));
        }
        if !self.friendships.contains_key(&friend_id) {
            return Err(GraphError::missing(&friend_id));
        }

        let rejection = if user_id == friend_id {
            Some(Rejection::SelfFriendship(user_id))
        } else if self.are_friends(user_id, friend_id) || self.are_friends(friend_id, user_id) {
            Some(Rejection::AlreadyFriends(user_id, friend_id))
        } else {
            None
        };
        if let Some(rejection) = rejection {
            log::warn!("{}", rejection);
            return Ok(FriendshipStatus::Rejected(rejection));
        }

        self.friendships
            .entry(user_id)
            .or_default()
            .insert(friend_id);
        self.friendships
            .entry(friend_id)
            .or_default()
            .insert(user_id);
        Ok(FriendshipStatus::Created)
    }

    /// Drop all users and friendships and restart IDs at 1.
    pub fn reset(&mut self) {
        self.last_id = 0;
        self.users.clear();
        self.friendships.clear();
    }

    /// Replace the graph with `num_users` users and
    /// `avg_friendships * num_users / 2` (rounded down) random friendships.
    ///
    /// Every unordered pair is enumerated once and shuffled with `rng`, then
    /// friendships are taken from the front until the target is met.
    pub fn populate_graph<R: Rng + ?Sized>(
        &mut self,
        num_users: usize,
        avg_friendships: usize,
        rng: &mut R,
    ) -> GraphResult<()> {
        let possible = num_users
            .checked_mul(num_users.saturating_sub(1))
            .map_or(usize::MAX, |pairs| pairs / 2);
        let target = avg_friendships
            .checked_mul(num_users)
            .map(|ends| ends / 2)
            .ok_or(GraphError::FriendshipTargetUnreachable {
                target: usize::MAX,
                possible,
            })?;
        if target > possible {
            return Err(GraphError::FriendshipTargetUnreachable { target, possible });
        }

        self.reset();

        let mut candidates: Vec<(UserId, UserId)> = Vec::with_capacity(possible);
        for n in 1..=num_users {
            let id = self.add_user(format!("User {}", n));
            for other in (id + 1)..=(num_users as UserId) {
                candidates.push((id, other));
            }
        }
        candidates.shuffle(rng);

        let mut created = 0;
        for (a, b) in candidates {
            if created == target {
                break;
            }
            if self.add_friendship(a, b)?.is_created() {
                created += 1;
            }
        }

        log::debug!(
            "Populated {} users with {} friendships",
            self.user_count(),
            created
        );
        Ok(())
    }

    /// [`populate_graph`](Self::populate_graph) with a seeded generator, for
    /// reproducible runs.
    pub fn populate_graph_seeded(
        &mut self,
        num_users: usize,
        avg_friendships: usize,
        seed: u64,
    ) -> GraphResult<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.populate_graph(num_users, avg_friendships, &mut rng)
    }
}
