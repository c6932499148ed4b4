//! Error type shared by the pipeline stages and the core builders.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StemfreqError {
    /// Input that violates the shape the core relies on: zero counts,
    /// out-of-order document ids, a corpus larger than the id space.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StemfreqError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        StemfreqError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, StemfreqError>;
