use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::traversal;

/// Sequentially assigned user identifier, 1-based.
pub type UserId = u32;

/// A registered user.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
}

/// A symmetric friendship network over sequentially numbered users.
///
/// Friendships are stored as a pair of directed edges in an internal
/// [`Graph`], so the relation is symmetric by construction: a pair is either
/// linked in both directions or not linked at all. The ID counter is owned
/// by the instance — IDs are monotonic and never reused.
#[derive(Debug, Default)]
pub struct SocialNetwork {
    last_id: UserId,
    users: HashMap<UserId, User>,
    friendships: Graph<UserId>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user under the next sequential ID and return it.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        let id = self.last_id;
        self.users.insert(id, User { name: name.into() });
        self.friendships.add_vertex(id);
        id
    }

    /// Create a bidirectional friendship between two existing users.
    ///
    /// Rejected without mutation when the two IDs are equal, when either
    /// user is unknown, or when the pair is already linked in either
    /// direction. On success both directions are linked — never one.
    pub fn add_friendship(&mut self, user_id: UserId, friend_id: UserId) -> GraphResult<(), UserId> {
        if user_id == friend_id {
            return Err(GraphError::SelfFriendship(user_id));
        }
        if self.friendships.neighbors(&user_id)?.contains(&friend_id)
            || self.friendships.neighbors(&friend_id)?.contains(&user_id)
        {
            return Err(GraphError::DuplicateFriendship(user_id, friend_id));
        }
        self.friendships.add_edge(&user_id, &friend_id)?;
        self.friendships.add_edge(&friend_id, &user_id)?;
        Ok(())
    }

    /// Non-reporting variant of [`add_friendship`](Self::add_friendship) for
    /// the random population loop: returns whether the link was created.
    pub fn try_add_friendship(&mut self, user_id: UserId, friend_id: UserId) -> bool {
        self.add_friendship(user_id, friend_id).is_ok()
    }

    /// Reset the network and fill it with `user_count` users and random
    /// friendships averaging `avg_friendships` per user.
    ///
    /// Random pairs are drawn uniformly and linked until the number of
    /// directed friendship entries reaches `user_count * avg_friendships`;
    /// each successful bidirectional link counts as two. Self and duplicate
    /// picks are retried, not counted. A target beyond what the user count
    /// can hold is rejected up front, since the loop could never finish.
    pub fn populate_random<R: Rng>(
        &mut self,
        user_count: u32,
        avg_friendships: u32,
        rng: &mut R,
    ) -> GraphResult<(), UserId> {
        let target = u64::from(user_count) * u64::from(avg_friendships);
        let max = u64::from(user_count) * u64::from(user_count.saturating_sub(1));
        if target > max {
            return Err(GraphError::UnreachableFriendshipTarget {
                users: u64::from(user_count),
                target,
            });
        }

        self.last_id = 0;
        self.users.clear();
        self.friendships = Graph::with_capacity(user_count as usize);
        for i in 0..user_count {
            self.add_user(format!("User {}", i));
        }

        let mut total: u64 = 0;
        let mut collisions: u64 = 0;
        while total < target {
            let user_id = rng.gen_range(1..=self.last_id);
            let friend_id = rng.gen_range(1..=self.last_id);
            if self.try_add_friendship(user_id, friend_id) {
                total += 2;
            } else {
                collisions += 1;
            }
        }
        tracing::debug!(user_count, collisions, "random population complete");
        Ok(())
    }

    /// Shortest friendship path from `user_id` to every user in their
    /// extended network.
    ///
    /// The result maps each reachable user — `user_id` itself included, as
    /// the single-element path — to a shortest path by friendship hops.
    /// Users outside the extended network are absent from the map.
    pub fn get_all_social_paths(
        &self,
        user_id: UserId,
    ) -> GraphResult<HashMap<UserId, Vec<UserId>>, UserId> {
        traversal::all_shortest_paths(&self.friendships, &user_id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// The friend set of a user.
    pub fn friendships(&self, id: UserId) -> GraphResult<&HashSet<UserId>, UserId> {
        self.friendships.neighbors(&id)
    }

    /// Total directed friendship entries — twice the number of friendships.
    pub fn friendship_count(&self) -> usize {
        self.friendships.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_add_user_assigns_sequential_ids() {
        let mut net = SocialNetwork::new();
        assert_eq!(net.add_user("alice"), 1);
        assert_eq!(net.add_user("bob"), 2);
        assert_eq!(net.add_user("carol"), 3);
        assert_eq!(net.user(2).map(|u| u.name.as_str()), Some("bob"));
        assert_eq!(net.user_count(), 3);
    }

    #[test]
    fn test_add_friendship_links_both_directions() {
        let mut net = SocialNetwork::new();
        net.add_user("alice");
        net.add_user("bob");
        net.add_friendship(1, 2).unwrap();
        assert!(net.friendships(1).unwrap().contains(&2));
        assert!(net.friendships(2).unwrap().contains(&1));
        assert_eq!(net.friendship_count(), 2);
    }

    #[test]
    fn test_self_friendship_rejected() {
        let mut net = SocialNetwork::new();
        net.add_user("alice");
        assert_eq!(net.add_friendship(1, 1), Err(GraphError::SelfFriendship(1)));
        assert_eq!(net.friendship_count(), 0);
    }

    #[test]
    fn test_duplicate_friendship_rejected() {
        let mut net = SocialNetwork::new();
        net.add_user("alice");
        net.add_user("bob");
        net.add_friendship(1, 2).unwrap();
        assert_eq!(
            net.add_friendship(1, 2),
            Err(GraphError::DuplicateFriendship(1, 2))
        );
        // reversed direction is the same friendship
        assert_eq!(
            net.add_friendship(2, 1),
            Err(GraphError::DuplicateFriendship(2, 1))
        );
        assert_eq!(net.friendship_count(), 2);
    }

    #[test]
    fn test_friendship_with_unknown_user_rejected() {
        let mut net = SocialNetwork::new();
        net.add_user("alice");
        assert_eq!(net.add_friendship(1, 9), Err(GraphError::UnknownVertex(9)));
        assert_eq!(net.friendship_count(), 0);
    }

    #[test]
    fn test_social_paths_star() {
        let mut net = SocialNetwork::new();
        for name in ["hub", "a", "b", "c"] {
            net.add_user(name);
        }
        net.add_friendship(1, 2).unwrap();
        net.add_friendship(1, 3).unwrap();
        net.add_friendship(1, 4).unwrap();

        let paths = net.get_all_social_paths(1).unwrap();
        let expected: HashMap<UserId, Vec<UserId>> = HashMap::from([
            (1, vec![1]),
            (2, vec![1, 2]),
            (3, vec![1, 3]),
            (4, vec![1, 4]),
        ]);
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_social_paths_chain() {
        let mut net = SocialNetwork::new();
        for name in ["a", "b", "c"] {
            net.add_user(name);
        }
        net.add_friendship(1, 2).unwrap();
        net.add_friendship(2, 3).unwrap();
        let paths = net.get_all_social_paths(1).unwrap();
        assert_eq!(paths[&3], vec![1, 2, 3]);
    }

    #[test]
    fn test_social_paths_exclude_disconnected_users() {
        let mut net = SocialNetwork::new();
        for name in ["a", "b", "loner"] {
            net.add_user(name);
        }
        net.add_friendship(1, 2).unwrap();
        let paths = net.get_all_social_paths(1).unwrap();
        assert!(!paths.contains_key(&3));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_social_paths_unknown_user() {
        let net = SocialNetwork::new();
        assert_eq!(
            net.get_all_social_paths(7),
            Err(GraphError::UnknownVertex(7))
        );
    }

    #[test]
    fn test_populate_random_hits_friendship_target() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut net = SocialNetwork::new();
        net.populate_random(10, 2, &mut rng).unwrap();
        assert_eq!(net.user_count(), 10);
        assert_eq!(net.friendship_count(), 20);
    }

    #[test]
    fn test_populate_random_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut net = SocialNetwork::new();
        net.populate_random(20, 3, &mut rng).unwrap();
        for user in 1..=20 {
            for friend in net.friendships(user).unwrap() {
                assert!(net.friendships(*friend).unwrap().contains(&user));
                assert_ne!(*friend, user);
            }
        }
    }

    #[test]
    fn test_populate_random_resets_previous_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut net = SocialNetwork::new();
        net.add_user("left over");
        net.populate_random(5, 2, &mut rng).unwrap();
        assert_eq!(net.user_count(), 5);
        assert_eq!(net.friendship_count(), 10);
        // counter restarted, so IDs run 1..=5 again
        assert!(net.user(5).is_some());
        assert!(net.user(6).is_none());
    }

    #[test]
    fn test_populate_random_unreachable_target() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut net = SocialNetwork::new();
        assert_eq!(
            net.populate_random(3, 5, &mut rng),
            Err(GraphError::UnreachableFriendshipTarget {
                users: 3,
                target: 15
            })
        );
    }

    #[test]
    fn test_populate_random_zero_users() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut net = SocialNetwork::new();
        net.populate_random(0, 0, &mut rng).unwrap();
        assert_eq!(net.user_count(), 0);
        assert_eq!(net.friendship_count(), 0);
    }
}
