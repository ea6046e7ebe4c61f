//! graph-walk-core: in-memory directed graph store and traversal engine.
//!
//! Maintains vertex adjacency as unordered neighbor sets and provides
//! depth-first and breadth-first traversal and path search (iterative and
//! recursive), shortest-path maps over a symmetric friendship network, and
//! an earliest-ancestor resolver for parent→child edge lists.
//!
//! Single-threaded and wholly in memory. Failed mutations come back as
//! [`GraphError`] values; a search that finds nothing is a `None`, not an
//! error.

mod ancestor;
mod error;
mod graph;
mod social;
mod traversal;

pub use ancestor::earliest_ancestor;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use social::{SocialNetwork, User, UserId};
pub use traversal::{
    all_shortest_paths, bfs, bft, dfs, dfs_recursive, dft, dft_recursive,
};
