use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid unit width: {0} bits (expected 1..=16)")]
    InvalidUnitWidth(u32),
    #[error("Invalid leading code: {0}")]
    InvalidLeadingCode(u32),
    #[error("Unresolved dictionary code {code} (dictionary size {dict_size})")]
    UnresolvedCode { code: usize, dict_size: usize },
    #[error("Stream truncated: {units} units read without an end-of-stream marker")]
    Truncated { units: usize },
    #[error("Decoded stream is not valid UTF-16")]
    InvalidUtf16,
}

pub type Result<T> = std::result::Result<T, CodecError>;
