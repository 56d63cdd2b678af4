pub mod config;
pub mod error;
pub mod snapshot;
pub mod vocabulary;

pub use config::SyncConfig;
pub use error::{Result, VqError};
pub use snapshot::SyncSnapshot;
pub use vocabulary::{validate_items, DifficultyLevel, VocabularyItem};
