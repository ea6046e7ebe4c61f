use std::fmt::Debug;

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// Error type for all graph operations.
///
/// Every variant is recoverable at the call site: a failed operation leaves
/// the graph unmutated. A search that finds nothing is not an error — those
/// come back as `None` or an absent map entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V: Debug> {
    /// The operation referenced a vertex ID that is not registered.
    #[error("unknown vertex: {0:?}")]
    UnknownVertex(V),

    /// A user attempted to befriend themselves.
    #[error("user {0:?} cannot befriend themselves")]
    SelfFriendship(V),

    /// The friendship already exists in one or both directions.
    #[error("friendship between {0:?} and {1:?} already exists")]
    DuplicateFriendship(V, V),

    /// The random population target exceeds what the user count allows,
    /// so the retry loop could never terminate.
    #[error("cannot create {target} friendship links among {users} users")]
    UnreachableFriendshipTarget { users: u64, target: u64 },
}
