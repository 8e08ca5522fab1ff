//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading a single log resource
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to read {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} for {url}")]
    BadStatus { url: String, status: u16 },

    #[error("Reading {0} was abandoned before completion")]
    Abandoned(String),
}

/// Errors that can occur while merging a rotated log series
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("A log series needs at least one resource")]
    EmptySeries,

    #[error("None of the {0} resources in the series could be read")]
    NoModelsLoaded(usize),

    #[error(
        "Cannot order the series: {dated:?} carry absolute datestamps while {elapsed:?} only carry elapsed timestamps"
    )]
    MixedTimestampKinds {
        dated: Vec<String>,
        elapsed: Vec<String>,
    },

    #[error("No start marker available for {0}")]
    NoStartMarker(String),

    #[error("Series loading was cancelled")]
    Cancelled,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
