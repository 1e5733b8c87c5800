//! Application error type
//!
//! Almost nothing in clubdeck can fail: reducers and the core pipeline are
//! pure, and missing data defaults to empty rather than erroring. What
//! remains is terminal setup, the config file and the export file write.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("could not write export {path}: {source}")]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeckError>;
