//! This crate defines a structure [`DisjointSet`] that partitions a fixed set of integer-indexed
//! nodes into components, augmented by an operation log and synchronous union notifications.

#[doc(inline)]
pub use disjoint_set::DisjointSet;
#[doc(inline)]
pub use error::{Error, SnapshotError};
#[doc(inline)]
pub use listener::UnionListener;
#[doc(inline)]
pub use snapshot::Snapshot;

pub mod disjoint_set;
pub mod error;
pub mod listener;
pub mod snapshot;
