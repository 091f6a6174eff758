use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode source '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Required source not found: {0:?}")]
    MissingSource(PathBuf),
}

pub type RatingResult<T> = Result<T, RatingError>;
