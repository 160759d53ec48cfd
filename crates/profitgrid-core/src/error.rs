use thiserror::Error;

/// Validation errors raised before anything is sent to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a stock symbol.")]
    EmptySymbol,

    #[error("invalid period '{value}', expected one of 1M, 3M, 1Y, 5Y")]
    InvalidPeriod { value: String },
    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("Username is required.")]
    MissingUsername,
    #[error("Password is required.")]
    MissingPassword,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
    #[error("Username must be at least {min} characters long.")]
    UsernameTooShort { min: usize },
}

/// Errors returned by [`crate::ApiClient`] calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status. `detail` is the
    /// backend's own message when it sent one.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    #[error("Not authenticated.")]
    NotAuthenticated,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to the user on a screen.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail, .. } => detail.clone(),
            Self::NotAuthenticated => self.to_string(),
            Self::Transport(_) | Self::Decode(_) => {
                String::from("An unexpected error occurred.")
            }
        }
    }
}

/// Errors raised while reading or writing the persisted login session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_errors_render_user_facing_text() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters long."
        );
        assert_eq!(
            ValidationError::UsernameTooShort { min: 3 }.to_string(),
            "Username must be at least 3 characters long."
        );
    }

    #[test]
    fn status_error_shows_backend_detail() {
        let error = ApiError::Status {
            status: 404,
            detail: String::from("Could not get data for ZZZZ."),
        };
        assert_eq!(error.user_message(), "Could not get data for ZZZZ.");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn transport_error_hides_internals_from_screens() {
        let error = ApiError::Transport(String::from("connection refused"));
        assert_eq!(error.user_message(), "An unexpected error occurred.");
        assert_eq!(error.status(), None);
    }
}
