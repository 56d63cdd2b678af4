use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, VqError};

/// Environment variable that overrides the cloud storage thing name.
pub const STORAGE_THING_ENV: &str = "VOCAB_CLOUD_THING";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncConfig {
    /// Key under which the snapshot is stored on the cloud service.
    pub storage_thing: String,
    /// Field of the stored record that holds the sync code.
    pub query_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Local vocabulary file.
    pub local_path: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            storage_thing: "vocab-de-hanh-database".into(),
            query_key: "payload".into(),
            base_url: "https://dweet.io".into(),
            timeout_secs: 15,
            local_path: default_local_path(),
        }
    }
}

fn default_local_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-quiz")
        .join("vocabulary.json")
}

impl SyncConfig {
    /// Defaults, with the storage thing taken from `VOCAB_CLOUD_THING` when set.
    pub fn from_env() -> Self {
        Self::default().with_storage_thing_override(std::env::var(STORAGE_THING_ENV).ok().as_deref())
    }

    /// Apply an override; blank values are ignored.
    pub fn with_storage_thing_override(mut self, thing: Option<&str>) -> Self {
        if let Some(thing) = thing.map(str::trim).filter(|t| !t.is_empty()) {
            self.storage_thing = thing.to_string();
        }
        self
    }

    pub fn read_endpoint(&self) -> String {
        format!(
            "{}/get/latest/dweet/for/{}",
            self.base_url.trim_end_matches('/'),
            self.storage_thing
        )
    }

    pub fn write_endpoint(&self) -> String {
        format!(
            "{}/dweet/for/{}",
            self.base_url.trim_end_matches('/'),
            self.storage_thing
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_thing.trim().is_empty() {
            return Err(VqError::Config("storage_thing is empty".into()));
        }
        if self.query_key.is_empty() {
            return Err(VqError::Config("query_key is empty".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(VqError::Config(format!("base_url is not http(s): {}", self.base_url)));
        }
        if self.timeout_secs == 0 {
            return Err(VqError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}
