//! Error types for fetching and persisting issues.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors scoped to a single repository. These never abort a run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network, DNS, TLS, or timeout failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Remote { status: StatusCode },

    /// The response body was not a list of issues.
    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors writing the output document. These end the run.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
