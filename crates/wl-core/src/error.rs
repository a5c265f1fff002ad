use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WashError {
    #[error("Emoji dictionary unavailable at {path}: {source}")]
    DictionaryUnavailable {
        path: PathBuf,
        source: anyhow::Error,
    },
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WashError>;
