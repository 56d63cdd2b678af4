//! Sync snapshot — the vocabulary list plus a revision stamp, carried as a
//! compressed base64 "sync code".

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, VqError};
use crate::vocabulary::{validate_items, VocabularyItem};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncSnapshot {
    pub vocabulary: Vec<VocabularyItem>,
    /// Revision, Unix time in milliseconds.
    pub updated_at: i64,
}

impl SyncSnapshot {
    pub fn new(vocabulary: Vec<VocabularyItem>, updated_at: i64) -> Self {
        Self {
            vocabulary,
            updated_at,
        }
    }

    /// Snapshot stamped with the current time.
    pub fn now(vocabulary: Vec<VocabularyItem>) -> Self {
        Self::new(vocabulary, Utc::now().timestamp_millis())
    }

    pub fn is_newer_than(&self, other: &SyncSnapshot) -> bool {
        self.updated_at > other.updated_at
    }

    /// Serialize to JSON and compress into a transport-safe code.
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        let code = vq_codec::compress_to_base64(&json);
        tracing::debug!(
            items = self.vocabulary.len(),
            json_len = json.len(),
            code_len = code.len(),
            "encoded sync snapshot"
        );
        Ok(code)
    }

    /// Inverse of [`SyncSnapshot::encode`]. Any failure means the code is unusable.
    pub fn decode(code: &str) -> Result<Self> {
        let json = vq_codec::decompress_from_base64(code)
            .map_err(|e| VqError::InvalidCode(e.to_string()))?;
        let value: Value =
            serde_json::from_str(&json).map_err(|e| VqError::InvalidCode(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Validate the payload shape: an array `vocabulary` and a numeric `updatedAt`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let vocabulary = value
            .get("vocabulary")
            .filter(|v| v.is_array())
            .ok_or_else(|| VqError::InvalidCode("missing vocabulary list".into()))?;
        let updated_at = value
            .get("updatedAt")
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .ok_or_else(|| VqError::InvalidCode("missing numeric updatedAt".into()))?;
        Ok(Self::new(validate_items(vocabulary), updated_at))
    }
}
