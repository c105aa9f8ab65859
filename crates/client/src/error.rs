//! Client error model.

use beepy_auth::StorageError;
use beepy_validation::ValidationResult;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Unexpected error. Please try again.";
pub const SESSION_REJECTED: &str =
    "Invalid credentials or expired session. Please sign in again.";

/// Failure of a call through the API gateway.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been cleared.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success status.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request could not be built or encoded.
    #[error("invalid request: {0}")]
    Client(String),
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::Client(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text suitable for the end user. Technical details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => SESSION_REJECTED.to_string(),
            Self::Status {
                message: Some(message),
                status,
            } if (400..500).contains(status) => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

/// Failure of login or registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The form was rejected locally; nothing was sent.
    #[error("form is invalid")]
    Invalid(ValidationResult),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend answered 2xx without a token or a user.
    #[error("invalid response from server: {0}")]
    MalformedResponse(&'static str),

    #[error("failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(result) => result
                .errors()
                .first()
                .map(|(_, msg)| msg.to_string())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            Self::Api(err) => err.user_message(),
            Self::MalformedResponse(_) | Self::Storage(_) => GENERIC_FAILURE.to_string(),
        }
    }
}
