//! Common error types for RevFeed

use thiserror::Error;

/// Common result type for RevFeed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across RevFeed crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error (wraps serde_json::Error)
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
