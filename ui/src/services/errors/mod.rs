use thiserror::Error;

/// Local, pre-submission validation failures.
///
/// The `Display` text of each variant is the exact message a view shows,
/// so views can surface `err.to_string()` directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email and password are required")]
    CredentialsRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password must be at least {min} characters long")]
    NewPasswordTooShort { min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Invalid or missing reset token")]
    MissingResetToken,

    #[error("Invalid reset token")]
    InvalidResetToken,

    #[error("Invalid or missing verification token")]
    MissingVerificationToken,

    #[error("Please type {expected} to confirm")]
    ConfirmationMismatch { expected: String },

    #[error("Please enter your password")]
    PasswordRequired,
}

/// Failures reported by an injected capability (HTTP backend, identity
/// provider, session store).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    Rejected { status: Option<u16>, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("No credential received from {provider}")]
    MissingCredential { provider: String },

    #[error("Secure random source unavailable: {message}")]
    Entropy { message: String },
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status: None,
            message: message.into(),
        }
    }

    /// The message to show the user: the error's own text, or `fallback`
    /// when the backend gave us nothing readable.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::InvalidResponse {
                message: error.to_string(),
            }
        } else {
            ApiError::Network {
                message: error.to_string(),
            }
        }
    }
}

impl From<getrandom::Error> for ApiError {
    fn from(error: getrandom::Error) -> Self {
        ApiError::Entropy {
            message: error.to_string(),
        }
    }
}

impl From<gloo_storage::errors::StorageError> for ApiError {
    fn from(error: gloo_storage::errors::StorageError) -> Self {
        ApiError::Storage {
            message: error.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Where an error originated. Validation and API errors are handled inside
/// the view that produced them; only render failures reach the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Api,
    Render,
}

impl From<&ValidationError> for ErrorCategory {
    fn from(_: &ValidationError) -> Self {
        ErrorCategory::Validation
    }
}

impl From<&ApiError> for ErrorCategory {
    fn from(_: &ApiError) -> Self {
        ErrorCategory::Api
    }
}
