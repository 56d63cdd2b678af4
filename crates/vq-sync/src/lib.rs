//! Snapshot stores and the sync routine that reconciles them.

pub mod cloud;
pub mod local;
pub mod memory;
pub mod store;
pub mod sync;

pub use cloud::{extract_payload, CloudStore};
pub use local::LocalStore;
pub use memory::MemoryStore;
pub use store::SnapshotStore;
pub use sync::{sync_latest, SyncOutcome};
