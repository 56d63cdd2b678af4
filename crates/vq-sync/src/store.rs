use async_trait::async_trait;
use vq_core::{Result, SyncSnapshot};

/// Somewhere a snapshot can be kept: the cloud key/value service, a local
/// file, or memory.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Latest stored snapshot, `None` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<SyncSnapshot>>;
    async fn save(&self, snapshot: &SyncSnapshot) -> Result<()>;
}
