//! Error types for Libris operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all Libris crates. Uses `thiserror` for derive macros. Variants
//! map one-to-one onto the status categories the caller boundary (HTTP,
//! CLI, MCP) needs to translate into.

use thiserror::Error;

/// Errors that can occur in Libris operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Entity not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflicting entity already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not permitted.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// LLM provider failure.
    #[error("LLM error: {0}")]
    Llm(String),

    /// HTTP transport failure when calling an external collaborator.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create an unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create a forbidden error.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create an LLM error.
    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// Create an LLM error with an underlying source.
    pub fn llm_with_source(msg: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Llm(format!("{}: {}", msg.into(), source))
    }

    /// Create an HTTP transport error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Whether retrying the failed operation could succeed.
    ///
    /// Transport and provider failures are transient; domain errors
    /// (validation, not-found, conflict, auth) are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Llm(_) | Self::Io(_))
    }
}

/// Result type alias using Libris's Error type.
pub type Result<T> = std::result::Result<T, Error>;
