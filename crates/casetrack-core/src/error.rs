//! Error types for casetrack.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Message used whenever the server gives us nothing to show.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Failure payload returned by the API (or synthesized on its behalf).
///
/// `payload` is the body exactly as the server sent it; the typed fields are
/// extracted from it for display and branching.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub success: bool,
    pub status_code: u16,
    pub payload: Value,
}

impl ApiError {
    /// The synthesized error used for unparseable bodies and transport failures.
    pub fn generic() -> Self {
        Self {
            message: GENERIC_ERROR_MESSAGE.to_string(),
            success: false,
            status_code: 500,
            payload: json!({
                "message": GENERIC_ERROR_MESSAGE,
                "success": false,
                "statusCode": 500,
            }),
        }
    }

    /// Builds an error from a non-2xx response.
    ///
    /// Anything that is not a JSON object carries no usable payload and
    /// collapses into [`ApiError::generic`].
    pub fn from_response(http_status: u16, body: Option<Value>) -> Self {
        let Some(payload) = body.filter(Value::is_object) else {
            return Self::generic();
        };

        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string();
        let success = payload
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let status_code = payload
            .get("statusCode")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(http_status);

        Self {
            message,
            success,
            status_code,
            payload,
        }
    }

    /// A 2xx body that did not match the expected envelope shape.
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        let message = format!("Malformed server response: {}", detail);
        Self {
            payload: json!({ "message": message, "success": false, "statusCode": 500 }),
            message,
            success: false,
            status_code: 500,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }
}

/// A shared error type for the whole client.
#[derive(Error, Debug, Clone)]
pub enum CaseTrackError {
    /// The server (or transport) rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client-side field rules rejected the input; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The action is not available from the current screen.
    #[error("Action not permitted: {0}")]
    NotPermitted(String),

    /// The user declined a confirmation prompt.
    #[error("Cancelled by user")]
    Cancelled,

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Persisted client state could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CaseTrackError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn not_permitted(message: impl Into<String>) -> Self {
        Self::NotPermitted(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The text a user should see in a notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.message.clone(),
            Self::Validation(errors) => errors.first_message().to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationErrors> for CaseTrackError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<std::io::Error> for CaseTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CaseTrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CaseTrackError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CaseTrackError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CaseTrackError>`.
pub type Result<T> = std::result::Result<T, CaseTrackError>;
