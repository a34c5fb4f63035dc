//! Common error types for tonearm

use thiserror::Error;

/// Common result type for tonearm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the tonearm crates
#[derive(Error, Debug)]
pub enum Error {
    /// Outbound command never reached the engine (wraps reqwest::Error)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Engine received the command and refused it
    #[error("Engine rejected command ({status}): {message}")]
    Rejected {
        /// HTTP status code returned by the engine
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
