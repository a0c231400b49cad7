//! Error types for searchwire
//!
//! This module defines the error types shared by the data model and the wire codec.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for searchwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for building, encoding and decoding result containers
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (stream truncation, failed write, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or inconsistent length/offset header in an encoded message
    #[error("Format error: {0}")]
    Format(String),

    /// Nested object payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid operation or state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl Error {
    /// Returns true if the error was caused by a truncated stream
    pub fn is_truncation(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
