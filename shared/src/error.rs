//! Application error taxonomy
//!
//! Three failure classes cover the whole application:
//! - [`AppError::InvalidInput`] for domain-rule violations, raised synchronously
//!   at the call site and handled at the console boundary
//! - [`AppError::NotFound`] for missing records on mutating paths (pure lookups
//!   return `Option` or `bool` instead)
//! - [`AppError::Io`] for file failures, wrapped with the operation that failed

use thiserror::Error;

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error
#[derive(Debug, Error)]
pub enum AppError {
    /// An argument violates a domain rule (empty name, bad rate, zero quantity)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced record does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// A file operation failed
    #[error("{context}")]
    Io {
        /// What the application was doing when the failure occurred
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    // ==================== Convenience constructors ====================

    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not-found error for a missing record
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Wrap an I/O failure with the operation that caused it
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    // ==================== Predicates ====================

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
