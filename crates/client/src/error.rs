//! Errors returned by the SkillStack API client.

use reqwest::StatusCode;
use serde_json::Value;
use skillstack_core::CoreError;

/// Result alias for API calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Session missing or rejected (401/403); the user must log in again
    #[error("authentication required, log in at {redirect_to}")]
    Unauthorized {
        /// Where the user should be sent
        redirect_to: String,
    },

    /// Backend rejected the payload (400)
    #[error("{message}")]
    Validation {
        /// Flattened field messages or the `detail` text
        message: String,
    },

    /// Record does not exist (404)
    #[error("not found: {path}")]
    NotFound {
        /// Request path
        path: String,
    },

    /// Any other non-success status
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status
        status: StatusCode,
        /// Response body, as text
        body: String,
    },

    /// Payload failed client-side validation and was not sent
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected contract
    #[error("unexpected response from {path}: {source}")]
    Decode {
        /// Request path
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Client configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether the caller should send the user to the login page.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Turn a Django REST Framework error body into one line of text.
///
/// A `detail` string wins; otherwise each field's messages are joined with
/// commas and fields are separated by semicolons, in key order. Bodies that
/// are not JSON objects are returned verbatim.
pub fn validation_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            if let Some(Value::String(detail)) = map.get("detail") {
                return detail.clone();
            }
            map.iter()
                .map(|(field, messages)| format!("{field}: {}", flatten_messages(messages)))
                .collect::<Vec<_>>()
                .join("; ")
        }
        Ok(Value::Array(items)) => items.iter().map(flatten_messages).collect::<Vec<_>>().join(", "),
        Ok(Value::String(text)) => text,
        _ => body.trim().to_string(),
    }
}

fn flatten_messages(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(flatten_messages).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Map a non-success response to an error. Does not touch the session.
pub fn classify(status: StatusCode, path: &str, body: &str, login_path: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized {
            redirect_to: login_path.to_string(),
        },
        StatusCode::BAD_REQUEST => ApiError::Validation {
            message: validation_message(body),
        },
        StatusCode::NOT_FOUND => ApiError::NotFound {
            path: path.to_string(),
        },
        status => ApiError::Status {
            status,
            body: body.to_string(),
        },
    }
}
