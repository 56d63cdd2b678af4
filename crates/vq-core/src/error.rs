use thiserror::Error;

#[derive(Error, Debug)]
pub enum VqError {
    #[error("Invalid sync code: {0}")]
    InvalidCode(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VqError>;
