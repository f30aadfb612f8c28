//! Error handling for community groups
//!
//! This module defines the error types returned by group creation and the
//! storage layer underneath it. Every failure is terminal: nothing here is
//! retried internally, callers decide whether to re-run the whole creation.

use thiserror::Error;

/// Main error type for group operations
#[derive(Error, Debug)]
pub enum GroupError {
    #[error("[[error:group-name-too-short]]")]
    NameTooShort,

    #[error("[[error:invalid-group-name]]")]
    InvalidName,

    #[error("[[error:group-name-too-long]]")]
    NameTooLong,

    #[error("[[error:group-already-exists]] {name}")]
    GroupAlreadyExists { name: String },

    #[error("Group not found after write: {name}")]
    GroupNotFound { name: String },

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("Extension hook failed: {0}")]
    Hook(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Store specific errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Corrupt field {field} in {key}: {reason}")]
    Corrupt {
        key: String,
        field: String,
        reason: String,
    },

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type alias for group operations
pub type Result<T> = std::result::Result<T, GroupError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl GroupError {
    /// Whether the caller can fix the failure by changing its input or retrying
    pub fn is_recoverable(&self) -> bool {
        match self {
            GroupError::NameTooShort => true,
            GroupError::InvalidName => true,
            GroupError::NameTooLong => true,
            GroupError::GroupAlreadyExists { .. } => true,
            // persistence steps are idempotent, a re-run of create converges
            GroupError::Storage(_) => true,
            GroupError::GroupNotFound { .. } => true,
            GroupError::Hook(_) => false,
            GroupError::Config(_) => false,
        }
    }

    /// Whether the failure was raised before any store access
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GroupError::NameTooShort | GroupError::InvalidName | GroupError::NameTooLong
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GroupError::NameTooShort | GroupError::InvalidName | GroupError::NameTooLong => {
                ErrorSeverity::Info
            }
            GroupError::GroupAlreadyExists { .. } => ErrorSeverity::Warning,
            GroupError::Config(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
