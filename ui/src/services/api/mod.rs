//! Authentication API contract consumed by the account-recovery, OAuth and
//! settings views. Implemented by the host (or by the bundled
//! [`HttpAuthClient`](crate::services::client::HttpAuthClient)).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::errors::ApiResult;
use crate::services::injected::Injected;

/// Response to a password-reset request. Backends running in development
/// mode may echo the reset token so it can be used without a mail server.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PasswordResetRequested {
    #[serde(default)]
    pub dev_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GoogleLoginResult {
    #[serde(default)]
    pub is_new_user: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AccountDeleted {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub note: String,
}

/// Server operations adjacent to authentication.
///
/// Futures are not `Send`: everything runs on the UI thread.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn request_password_reset(&self, email: &str) -> ApiResult<PasswordResetRequested>;

    async fn reset_password(&self, token: &str, new_password: &str) -> ApiResult<()>;

    async fn verify_email(&self, token: &str) -> ApiResult<()>;

    async fn google_login(&self, credential: &str) -> ApiResult<GoogleLoginResult>;

    async fn delete_account(&self, password: &str, confirm_text: &str)
        -> ApiResult<AccountDeleted>;
}

pub type AuthApiHandle = Injected<dyn AuthApi>;
