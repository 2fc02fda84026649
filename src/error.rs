use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by the admin API client.
///
/// Callers branch on these: `Unauthorized` ends the session, `Forbidden` is
/// shown as a permission message, everything else becomes a generic error
/// notice.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session expired or invalid credentials")]
    Unauthorized,

    #[error("Você não tem permissão para realizar esta ação")]
    Forbidden,

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Forbidden)
    }

    /// Reads are retried for transient failures only.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Unauthorized | ApiError::Forbidden => false,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Timeout(_) | ApiError::Transport(_) => true,
            ApiError::InvalidResponse(_) | ApiError::Json(_) => false,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
