// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing notices.

use crate::storage::StorageError;

/// Application error type shared by the client services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Backend API error: {0}")]
    Api(String),

    #[error("Place provider error: {0}")]
    Provider(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Search result superseded by a newer search")]
    StaleSearch,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Provider status returned when the quota or rate limit is exhausted.
    pub const PROVIDER_QUOTA: &'static str = "OVER_QUERY_LIMIT";

    /// True for errors that should drop local auth state and require re-login.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Unauthorized | AppError::InvalidToken)
    }

    /// Short message suitable for a transient, dismissible notification.
    ///
    /// Form state is kept by the caller, so every notice invites a retry.
    pub fn notice(&self) -> String {
        match self {
            AppError::Unauthorized | AppError::InvalidToken => {
                "Your session has expired. Please log in again.".to_string()
            }
            AppError::NotFound(what) => format!("{} was not found.", what),
            AppError::BadRequest(msg) | AppError::Validation(msg) => {
                format!("Please check the form: {}", msg)
            }
            AppError::Api(_) => "Request failed. Please try again.".to_string(),
            AppError::Provider(msg) if msg.contains(Self::PROVIDER_QUOTA) => {
                "Place search is busy right now. Please try again later.".to_string()
            }
            AppError::Provider(_) => "Place search failed. Please try again.".to_string(),
            AppError::Storage(_) => "Could not save local state.".to_string(),
            AppError::StaleSearch => "A newer search is in progress.".to_string(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AppError>;
