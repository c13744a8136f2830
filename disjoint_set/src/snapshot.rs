//! Snapshot and restore support for [`DisjointSet`].
//!
//! A [`Snapshot`] captures the complete observable state of a structure except its listener
//! registrations, which are transient presentation wiring that callers re-attach after a
//! restore. Snapshots serialize through serde, so the on-disk format is whichever serde
//! backend the caller picks.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{DisjointSet, SnapshotError};

#[cfg(test)]
#[path = "tests/test_snapshot.rs"]
mod test_snapshot;

/// The persistent state of a [`DisjointSet`]: parent and rank tables, operation log and
/// operation counter. The node count is implied by the table lengths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    parent: Vec<usize>,
    rank: Vec<u32>,
    operation_log: Vec<String>,
    operation_count: u64,
}

impl Snapshot {
    /// Returns the number of nodes of the captured structure.
    pub fn size(&self) -> usize {
        self.parent.len()
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        let size = self.parent.len();
        if size == 0 {
            return Err(SnapshotError::Empty);
        }
        if self.rank.len() != size {
            return Err(SnapshotError::LengthMismatch {
                parents: size,
                ranks: self.rank.len(),
            });
        }
        for (node, &parent) in self.parent.iter().enumerate() {
            if parent >= size {
                return Err(SnapshotError::ParentOutOfRange { node, parent, size });
            }
        }
        // Every parent chain must terminate at a self-loop. Nodes are marked 1 while they are
        // on the walk currently being checked and 2 once they are known to reach a root, so
        // each node is walked at most once.
        let mut state = vec![0u8; size];
        for start in 0..size {
            let mut node = start;
            while state[node] == 0 && self.parent[node] != node {
                state[node] = 1;
                node = self.parent[node];
                if state[node] == 1 {
                    return Err(SnapshotError::ParentCycle { node: start });
                }
            }
            let mut walk = start;
            while state[walk] == 1 {
                state[walk] = 2;
                walk = self.parent[walk];
            }
            state[node] = 2;
        }
        Ok(())
    }
}

impl DisjointSet {
    /// Captures the structure's state.
    ///
    /// Listener registrations are not part of the snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            parent: self.parent.clone(),
            rank: self.rank.clone(),
            operation_log: self.operation_log.clone(),
            operation_count: self.operation_count,
        }
    }

    /// Rebuilds a structure from a snapshot, replacing nothing in place: the caller swaps the
    /// returned instance in wholesale and re-attaches any listeners.
    ///
    /// The snapshot is validated first; a malformed one is rejected without producing a
    /// partially initialized structure. A restored instance behaves identically to the
    /// captured one.
    pub fn restore(snapshot: Snapshot) -> Result<DisjointSet, SnapshotError> {
        snapshot.validate()?;
        debug!(
            "restoring a disjoint set of {} nodes with {} logged operations",
            snapshot.parent.len(),
            snapshot.operation_log.len()
        );
        Ok(DisjointSet {
            parent: snapshot.parent,
            rank: snapshot.rank,
            operation_log: snapshot.operation_log,
            operation_count: snapshot.operation_count,
            listeners: Vec::new(),
        })
    }
}
