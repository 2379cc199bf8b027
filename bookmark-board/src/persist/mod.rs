//! Snapshot persistence

mod persistence;
mod store;

pub use persistence::{Persistence, DEFAULT_KEY};
pub use store::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};
