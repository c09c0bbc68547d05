//! Error types for hypoboard
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for hypoboard operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Main error type for all hypoboard operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Backend answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A stage key that is not one of the six lifecycle stages
    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    /// Hypothesis not present on the board
    #[error("Hypothesis not found: {0}")]
    NotFound(String),

    /// Another stage transition already holds the busy gate
    #[error("A stage transition is already in flight")]
    TransitionInFlight,

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl BoardError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::Api { .. } => "API_ERROR",
            BoardError::Http(_) => "HTTP_ERROR",
            BoardError::InvalidJson(_) => "INVALID_JSON",
            BoardError::FileNotFound(_) => "FILE_NOT_FOUND",
            BoardError::ConfigError(_) => "CONFIG_ERROR",
            BoardError::UnknownStage(_) => "UNKNOWN_STAGE",
            BoardError::NotFound(_) => "NOT_FOUND",
            BoardError::TransitionInFlight => "TRANSITION_IN_FLIGHT",
            BoardError::Io(_) => "IO_ERROR",
            BoardError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Text worth showing to a user, if the error carries any.
    ///
    /// API errors surface the response body, or its `detail` string when the
    /// body is a JSON error object. An empty body yields `None` so the caller
    /// can fall back to its own wording.
    pub fn user_message(&self) -> Option<String> {
        let text = match self {
            BoardError::Api { message, .. } => api_detail(message),
            other => other.to_string().trim().to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        BoardError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

fn api_detail(body: &str) -> String {
    let body = body.trim();
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .map(|text| text.trim().to_string())
        .unwrap_or_else(|| body.to_string())
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &BoardError) -> i32 {
    match error {
        BoardError::TransitionInFlight => 75, // EX_TEMPFAIL
        BoardError::ConfigError(_) => 78,     // EX_CONFIG
        _ => 1,
    }
}
