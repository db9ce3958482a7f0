//! Wire payloads for the bundled HTTP auth client.

use serde::{Deserialize, Serialize};

use crate::services::session::UserProfile;

#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct PasswordResetRequest<'a> {
    pub email: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub new_password: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct VerifyEmailRequest<'a> {
    pub token: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct GoogleLoginRequest<'a> {
    pub credential: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct DeleteAccountRequest<'a> {
    pub password: &'a str,
    pub confirm_text: &'a str,
}

/// Successful login, registration or OAuth exchange.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SessionGrant {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub is_new_user: Option<bool>,
}

/// Error body shapes seen from auth backends: `{"detail": ...}`,
/// `{"message": ...}` or `{"error": ...}`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.detail
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}
