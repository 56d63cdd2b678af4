use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// CEFR-style difficulty tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifficultyLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// One flashcard: a Vietnamese word with its Chinese rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: String,
    pub vietnamese: String,
    pub chinese: String,
    pub pinyin: String,
    pub phonetic: String,
    pub han_viet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<DifficultyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl VocabularyItem {
    /// Create an item with a fresh random id.
    pub fn new(
        vietnamese: impl Into<String>,
        chinese: impl Into<String>,
        pinyin: impl Into<String>,
        phonetic: impl Into<String>,
        han_viet: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            vietnamese: vietnamese.into(),
            chinese: chinese.into(),
            pinyin: pinyin.into(),
            phonetic: phonetic.into(),
            han_viet: han_viet.into(),
            difficulty: None,
            audio_url: None,
            is_favorite: None,
        }
    }

    pub fn with_difficulty(mut self, level: DifficultyLevel) -> Self {
        self.difficulty = Some(level);
        self
    }

    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    pub fn favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = Some(!self.favorite());
    }
}

const REQUIRED_FIELDS: &[&str] = &["id", "vietnamese", "chinese", "pinyin", "phonetic", "hanViet"];

fn looks_like_item(value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    REQUIRED_FIELDS
        .iter()
        .all(|field| map.get(*field).is_some_and(Value::is_string))
        && map.get("isFavorite").map_or(true, Value::is_boolean)
}

/// Keep the well-formed items of a persisted list and drop the rest.
///
/// Anything other than a JSON array yields an empty list.
pub fn validate_items(value: &Value) -> Vec<VocabularyItem> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    let items: Vec<VocabularyItem> = entries
        .iter()
        .filter(|entry| looks_like_item(entry))
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect();
    if items.len() < entries.len() {
        tracing::warn!(
            dropped = entries.len() - items.len(),
            "dropped malformed vocabulary entries"
        );
    }
    items
}
