//! Error types for lodgedb
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Per-file failures are reported and degrade to empty output rather than
//! aborting a run; only output-write failures surface to the exit path.

use thiserror::Error;

/// The main error type for lodgedb
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode CSV: {message}")]
    Decode { message: String },

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias for lodgedb
pub type Result<T> = std::result::Result<T, Error>;
