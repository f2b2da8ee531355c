// ============================================================================
// ERRORS - Error taxonomy shared by services and viewmodels
// ============================================================================

use std::fmt;
use thiserror::Error;

/// Transport-level failure: the request produced no HTTP response at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The request could not be built or dispatched
    #[error("Request could not be sent: {0}")]
    NotSent(String),
    /// The request left the client but no response came back
    #[error("No response from server: {0}")]
    NoResponse(String),
}

/// Client-side form validation, checked before any network call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.username.as_deref(), self.password.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] HttpError),

    /// Server answered with a non-2xx status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Superseded by page teardown; never shown to the user
    #[error("Request cancelled")]
    Cancelled,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Row appended from a draft the server never echoed; it has no id to address
    #[error("This room has not been saved with an id yet, reload the list to edit it")]
    UnsavedRoom,

    /// A browser API (window, history, DOM) was unavailable or refused
    #[error("Browser error: {0}")]
    Browser(String),
}

impl AppError {
    /// Message suitable for a toast or an inline page error
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }

    /// Short label of the failure cause, used in log lines
    pub fn cause(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Network(HttpError::NotSent(_)) => "request not sent",
            AppError::Network(HttpError::NoResponse(_)) => "no response",
            AppError::Server { .. } => "server error payload",
            AppError::Cancelled => "cancelled",
            AppError::Storage(_) => "storage",
            AppError::Parse(_) => "parse",
            AppError::UnsavedRoom => "unsaved room",
            AppError::Browser(_) => "browser",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_the_server_message() {
        let err = AppError::Server { status: 401, message: "Invalid password".into() };
        assert_eq!(err.user_message(), "Invalid password");
        assert_eq!(err.cause(), "server error payload");
    }

    #[test]
    fn network_causes_are_distinguished() {
        let not_sent = AppError::from(HttpError::NotSent("bad url".into()));
        let no_response = AppError::from(HttpError::NoResponse("Failed to fetch".into()));
        assert_eq!(not_sent.cause(), "request not sent");
        assert_eq!(no_response.cause(), "no response");
        assert_eq!(no_response.to_string(), "Network error: No response from server: Failed to fetch");
    }

    #[test]
    fn validation_summary_lists_every_field() {
        let err = ValidationError {
            username: Some("email not empty".into()),
            password: Some("password not empty".into()),
        };
        assert_eq!(err.to_string(), "email not empty, password not empty");
        assert!(!err.is_empty());
        assert!(ValidationError::default().is_empty());
    }
}
