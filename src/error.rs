//! Custom error types for spendwatch
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendwatch operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input; nothing was changed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Durable storage read/write failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export failures (file creation, encoding, worker crash)
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Error returned when committing without an open edit session
    pub fn no_edit_session() -> Self {
        Self::NotFound {
            entity_type: "Edit session",
            identifier: "none active".into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The message shown to the user, without the variant prefix
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::Io(msg)
            | Self::Json(msg)
            | Self::Validation(msg)
            | Self::Storage(msg)
            | Self::Export(msg) => msg.clone(),
            Self::NotFound { .. } => self.to_string(),
        }
    }
}

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendwatch operations
pub type SpendResult<T> = Result<T, SpendError>;
