//! Cloud key/value store (dweet-style HTTP API).
//!
//! Reads `GET {base}/get/latest/dweet/for/{thing}` and pulls the sync code out
//! of `with[0].content[query_key]`. Writes are form-encoded POSTs to
//! `{base}/dweet/for/{thing}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use vq_core::{Result, SyncConfig, SyncSnapshot, VqError};

use crate::store::SnapshotStore;

/// Pull the stored sync code out of a dweet response body.
pub fn extract_payload<'a>(dweet: &'a Value, key: &str) -> Option<&'a str> {
    dweet
        .get("with")?
        .as_array()?
        .first()?
        .get("content")?
        .get(key)?
        .as_str()
}

pub struct CloudStore {
    config: SyncConfig,
    http: reqwest::Client,
}

impl CloudStore {
    pub fn new(config: SyncConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VqError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Fetch the raw sync code, if one is stored.
    pub async fn fetch_code(&self) -> Result<Option<String>> {
        let url = self.config.read_endpoint();
        let response = self
            .http
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| VqError::Transport(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VqError::Transport(format!("GET {url} returned HTTP {status}")));
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "cloud response is not JSON");
                return Ok(None);
            }
        };
        Ok(extract_payload(&body, &self.config.query_key).map(str::to_string))
    }

    /// Store a raw sync code under the configured key.
    pub async fn push_code(&self, code: &str, stamp: i64) -> Result<()> {
        if code.is_empty() {
            return Err(VqError::InvalidCode("encoded payload is empty".into()));
        }
        let url = self.config.write_endpoint();
        let stamp = stamp.to_string();
        let form = [(self.config.query_key.as_str(), code), ("stamp", stamp.as_str())];
        let response = self
            .http
            .post(&url)
            .header(CACHE_CONTROL, "no-store")
            .form(&form)
            .send()
            .await
            .map_err(|e| VqError::Transport(format!("POST {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VqError::Transport(format!("POST {url} returned HTTP {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for CloudStore {
    async fn load(&self) -> Result<Option<SyncSnapshot>> {
        match self.fetch_code().await? {
            Some(code) => SyncSnapshot::decode(&code).map(Some),
            None => {
                tracing::debug!(thing = %self.config.storage_thing, "no cloud snapshot stored");
                Ok(None)
            }
        }
    }

    async fn save(&self, snapshot: &SyncSnapshot) -> Result<()> {
        let code = snapshot.encode()?;
        self.push_code(&code, snapshot.updated_at).await?;
        tracing::debug!(
            thing = %self.config.storage_thing,
            items = snapshot.vocabulary.len(),
            "saved cloud snapshot"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_payload() {
        let body = json!({
            "this": "succeeded",
            "with": [{"thing": "t", "content": {"payload": "IZA="}}]
        });
        assert_eq!(extract_payload(&body, "payload"), Some("IZA="));
        assert_eq!(extract_payload(&body, "other"), None);
    }

    #[test]
    fn test_extract_payload_missing_parts() {
        assert_eq!(extract_payload(&json!({}), "payload"), None);
        assert_eq!(extract_payload(&json!({"with": []}), "payload"), None);
        assert_eq!(extract_payload(&json!({"with": [{}]}), "payload"), None);
        assert_eq!(extract_payload(&json!({"with": [{"content": {"payload": 7}}]}), "payload"), None);
        assert_eq!(extract_payload(&json!("with"), "payload"), None);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let cfg = SyncConfig {
            storage_thing: " ".into(),
            ..SyncConfig::default()
        };
        assert!(matches!(CloudStore::new(cfg), Err(VqError::Config(_))));
    }

    #[tokio::test]
    async fn test_push_empty_code_rejected() {
        let store = CloudStore::new(SyncConfig::default()).unwrap();
        assert!(matches!(store.push_code("", 1).await, Err(VqError::InvalidCode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let cfg = SyncConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..SyncConfig::default()
        };
        let store = CloudStore::new(cfg).unwrap();
        assert!(matches!(store.load().await, Err(VqError::Transport(_))));
    }
}
