//! Error types and handling for the documentation generator.
//!
//! This module defines a unified error type covering extraction, route
//! registration, and server startup, providing consistent error handling
//! across the entire crate.

use thiserror::Error;

/// A specialized Result type for documentation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the documentation generator.
#[derive(Debug, Error)]
pub enum Error {
    /// The host server did not expose the expected tool registry.
    ///
    /// Raised at setup time. There is no partial extraction, so this is
    /// always fatal for the caller.
    #[error("Integration error: {0}")]
    Integration(String),

    /// The requested tool name is not present in the extracted records.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to bind the server to an address.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new integration error.
    pub fn integration(msg: impl Into<String>) -> Self {
        Self::Integration(msg.into())
    }

    /// Create a new "tool not found" error.
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }
}
