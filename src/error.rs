//! Error types for the Concord library.
//!
//! All failures are represented by the [`ConcordError`] enum. "Not found",
//! empty match results, and a full probing table are ordinary return values
//! in the core, never errors; errors are reserved for I/O and malformed
//! caller input at the adapter layer.
//!
//! # Examples
//!
//! ```
//! use concord::error::{ConcordError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ConcordError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Concord operations.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// I/O errors (reading the document, writing the table dump, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ConcordError.
pub type Result<T> = std::result::Result<T, ConcordError>;

impl ConcordError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        ConcordError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ConcordError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ConcordError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ConcordError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
