// src/api/error.rs
use thiserror::Error;

/// Everything that can go wrong talking to the analysis backend. Each
/// variant's display string is shown verbatim in the view that issued the
/// request, so messages are written for the user, not the log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response whose JSON body carried an `error` field (or the
    /// per-operation fallback when it did not).
    #[error("{0}")]
    Backend(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the expected schema.
    #[error("Unexpected response from backend: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to download {filename}")]
    Download { filename: String },

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}
