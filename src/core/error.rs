//! Error types and error handling for the company search service.
//!
//! This module defines the error types used throughout the
//! application. Conversion to HTTP status codes lives in the HTTP
//! adapter (`http::error`).

use thiserror::Error;

/// Result type alias for company search operations
pub type Result<T> = std::result::Result<T, CompanyError>;

/// Main error type for the company search service
#[derive(Error, Debug)]
pub enum CompanyError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Search engine returned {status}: {reason}")]
    Engine { status: u16, reason: String },

    #[error("Search engine unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CompanyError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CompanyError::DocumentNotFound(_) | CompanyError::IndexNotFound(_)
        )
    }

    /// Check if this is a bad request error (invalid caller input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, CompanyError::InvalidRequest(_))
    }

    /// Check if the failure came from talking to the search engine
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CompanyError::Transport(_) | CompanyError::Engine { .. }
        )
    }
}
