//! Centralized error handling.
//!
//! Repository operations only ever produce `NotFound`, `AlreadyExists` or
//! `Storage`. `Validation` and `Internal` belong to the service and CLI
//! layers.

use std::fmt;

use thiserror::Error;

/// The user key a lookup or conflict refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKey {
    Id,
    Username,
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::Id => write!(f, "id"),
            UserKey::Username => write!(f, "username"),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("User with {key} {value:?} not found")]
    NotFound { key: UserKey, value: String },

    #[error("User with {key} {value:?} already exists")]
    AlreadyExists { key: UserKey, value: String },

    // Backing store errors, passed through untouched
    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::AlreadyExists { .. } => "ALREADY_EXISTS",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, AppError::AlreadyExists { .. })
    }

    /// The offending key for `NotFound` and `AlreadyExists`.
    pub fn key(&self) -> Option<UserKey> {
        match self {
            AppError::NotFound { key, .. } | AppError::AlreadyExists { key, .. } => Some(*key),
            _ => None,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(key: UserKey, value: impl Into<String>) -> Self {
        AppError::NotFound {
            key,
            value: value.into(),
        }
    }

    pub fn already_exists(key: UserKey, value: impl Into<String>) -> Self {
        AppError::AlreadyExists {
            key,
            value: value.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
