//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout rosterctl.
//! All errors are structured and map to stable error codes.
//!
//! # Error Categories
//! - `ConnectionFailed`: Database connection errors
//! - `QueryFailed`: Query execution errors (constraint violations included)
//! - `PromptFailed`: The interactive prompt mechanism itself failed
//! - `InvalidInput`: Malformed input or missing required parameters
//! - `ConfigError`: Connection profile or settings errors

use thiserror::Error;

/// Main error type for rosterctl operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Database connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// Interactive prompt failed (terminal closed, I/O error)
    #[error("Prompt failed: {0}")]
    PromptFailed(String),

    /// Invalid input or missing required parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (profile not found, invalid JSON, etc.)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RosterError {
    /// Convert error to a stable code string suitable for logs
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
            Self::QueryFailed(_) => "QUERY_FAILED",
            Self::PromptFailed(_) => "PROMPT_FAILED",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Get the human-readable error message (no credentials, no paths)
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed(message.into())
    }

    /// Create a query failed error
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }

    /// Create a prompt failed error
    pub fn prompt_failed(message: impl Into<String>) -> Self {
        Self::PromptFailed(message.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

impl From<dialoguer::Error> for RosterError {
    fn from(err: dialoguer::Error) -> Self {
        Self::prompt_failed(err.to_string())
    }
}

/// Result type alias for rosterctl operations
pub type Result<T> = std::result::Result<T, RosterError>;
