use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Structural errors
    #[error("Malformed input at byte {position}: {reason}")]
    MalformedInput { position: usize, reason: &'static str },

    #[error("Truncated input at byte {position}: token needs {needed} more bytes, {available} available")]
    TruncatedInput { position: usize, needed: usize, available: usize },

    // Token errors
    #[error("Invalid token at byte {position}: {reason}")]
    InvalidToken { position: usize, reason: String },

    #[error("Back-reference offset {offset} at byte {position} exceeds decoded output {available}")]
    InvalidOffset { position: usize, offset: usize, available: usize },

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
