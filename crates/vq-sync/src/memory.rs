use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use vq_core::{Result, SyncSnapshot};

use crate::store::SnapshotStore;

/// In-memory store, for offline use and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Option<SyncSnapshot>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: SyncSnapshot) -> Self {
        Self {
            inner: RwLock::new(Some(snapshot)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far.
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Option<SyncSnapshot>> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, snapshot: &SyncSnapshot) -> Result<()> {
        *self.inner.write().await = Some(snapshot.clone());
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
