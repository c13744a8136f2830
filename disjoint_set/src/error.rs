//! Error types for constructing, querying and restoring a disjoint set.

use thiserror::Error;

/// Errors reported by [`DisjointSet`](crate::DisjointSet) operations.
///
/// A rejected call leaves the structure untouched: bounds checks run before any mutation,
/// including the operation counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The structure was constructed with zero nodes.
    #[error("a disjoint set must contain at least one node")]
    InvalidSize,
    /// A node index was outside `0..size`.
    #[error("node {node} is out of range for a disjoint set of {size} nodes")]
    NodeOutOfRange {
        /// The offending index.
        node: usize,
        /// The number of nodes in the structure.
        size: usize,
    },
}

/// Validation failures when restoring a [`Snapshot`](crate::Snapshot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot contains no nodes.
    #[error("snapshot contains no nodes")]
    Empty,
    /// The parent and rank tables disagree on the node count.
    #[error("snapshot has {parents} parent entries but {ranks} rank entries")]
    LengthMismatch {
        /// Length of the parent table.
        parents: usize,
        /// Length of the rank table.
        ranks: usize,
    },
    /// A parent pointer referred to a node outside the structure.
    #[error("snapshot parent of node {node} is {parent}, outside 0..{size}")]
    ParentOutOfRange {
        /// The node whose parent pointer is invalid.
        node: usize,
        /// The out-of-range parent value.
        parent: usize,
        /// The number of nodes in the snapshot.
        size: usize,
    },
    /// A chain of parent pointers never reaches a root.
    #[error("snapshot parent pointers starting at node {node} form a cycle")]
    ParentCycle {
        /// A node from which no root is reachable.
        node: usize,
    },
}
