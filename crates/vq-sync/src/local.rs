//! Local file store.
//!
//! The file holds either a bare vocabulary array (older layout, revision 0)
//! or a full snapshot object. Unreadable contents are logged and treated as
//! an empty store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use vq_core::{validate_items, Result, SyncSnapshot, VocabularyItem};

use crate::store::SnapshotStore;

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored items, or an empty list when nothing usable is on disk.
    pub async fn load_items(&self) -> Result<Vec<VocabularyItem>> {
        Ok(self.load().await?.map(|s| s.vocabulary).unwrap_or_default())
    }
}

fn parse(path: &Path, raw: &str) -> Option<SyncSnapshot> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "local vocabulary file is not JSON");
            return None;
        }
    };
    if value.is_array() {
        return Some(SyncSnapshot::new(validate_items(&value), 0));
    }
    match SyncSnapshot::from_value(&value) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "local vocabulary file has unexpected shape");
            None
        }
    }
}

#[async_trait]
impl SnapshotStore for LocalStore {
    async fn load(&self) -> Result<Option<SyncSnapshot>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(parse(&self.path, &raw))
    }

    async fn save(&self, snapshot: &SyncSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
