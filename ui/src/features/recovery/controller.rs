//! Password recovery and email verification requests.

use super::types::ResetRequestReceipt;
use crate::services::api::AuthApi;
use crate::services::config::BuildEnvironment;
use crate::services::errors::ValidationError;
use crate::{console_error, console_info, console_warn};

pub const MIN_NEW_PASSWORD_LEN: usize = 8;

pub const RESET_EMAIL_FALLBACK: &str = "Failed to send reset email";
pub const RESET_PASSWORD_FALLBACK: &str = "Failed to reset password";
pub const VERIFY_EMAIL_FALLBACK: &str = "Failed to verify email";

/// Ask the backend to mail a reset link. The receipt is the same whether or
/// not the account exists.
pub async fn request_password_reset(
    api: &dyn AuthApi,
    email: &str,
    environment: BuildEnvironment,
    reset_route: &str,
) -> Result<ResetRequestReceipt, String> {
    console_info!("[Recovery] Requesting password reset link");

    let response = api.request_password_reset(email).await.map_err(|error| {
        console_error!(format!("[Recovery] Reset request failed: {error}"));
        error.user_message(RESET_EMAIL_FALLBACK)
    })?;

    let dev_notice = match response.dev_token {
        Some(token) if environment.is_development() && !token.is_empty() => {
            console_warn!(format!("[Recovery] Development reset token: {token}"));
            Some(dev_token_notice(&token, reset_route))
        }
        _ => None,
    };

    Ok(ResetRequestReceipt {
        email: email.to_string(),
        dev_notice,
    })
}

pub fn dev_token_notice(token: &str, reset_route: &str) -> String {
    format!("[DEV MODE] Reset token: {token}\nUse this at {reset_route}?token={token}")
}

/// Rejection to show as soon as the reset screen opens.
pub fn missing_reset_token(token: Option<&str>) -> Option<ValidationError> {
    match token {
        Some(t) if !t.is_empty() => None,
        _ => Some(ValidationError::MissingResetToken),
    }
}

/// Length, then confirmation, then token presence.
pub fn validate_password_reset<'a>(
    token: Option<&'a str>,
    new_password: &str,
    confirm_password: &str,
) -> Result<&'a str, ValidationError> {
    if new_password.chars().count() < MIN_NEW_PASSWORD_LEN {
        return Err(ValidationError::NewPasswordTooShort {
            min: MIN_NEW_PASSWORD_LEN,
        });
    }
    if new_password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    token
        .filter(|t| !t.is_empty())
        .ok_or(ValidationError::InvalidResetToken)
}

pub async fn reset_password(
    api: &dyn AuthApi,
    token: Option<&str>,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    let token =
        validate_password_reset(token, new_password, confirm_password).map_err(|e| e.to_string())?;

    api.reset_password(token, new_password).await.map_err(|error| {
        console_error!(format!("[Recovery] Password reset failed: {error}"));
        error.user_message(RESET_PASSWORD_FALLBACK)
    })?;

    console_info!("[Recovery] Password reset complete");
    Ok(())
}

/// A missing token fails without contacting the backend.
pub async fn verify_email(api: &dyn AuthApi, token: Option<&str>) -> Result<(), String> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Err(ValidationError::MissingVerificationToken.to_string());
    };

    api.verify_email(token).await.map_err(|error| {
        console_error!(format!("[Recovery] Email verification failed: {error}"));
        error.user_message(VERIFY_EMAIL_FALLBACK)
    })?;

    console_info!("[Recovery] Email verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::{AccountDeleted, GoogleLoginResult, PasswordResetRequested};
    use crate::services::errors::{ApiError, ApiResult};
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingApi {
        dev_token: Option<String>,
        fail_with: Option<ApiError>,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingApi {
        fn outcome<T>(&self, value: T) -> ApiResult<T> {
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(value),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for RecordingApi {
        async fn request_password_reset(&self, email: &str) -> ApiResult<PasswordResetRequested> {
            self.calls.borrow_mut().push(format!("reset-request:{email}"));
            self.outcome(PasswordResetRequested {
                dev_token: self.dev_token.clone(),
            })
        }

        async fn reset_password(&self, token: &str, new_password: &str) -> ApiResult<()> {
            self.calls
                .borrow_mut()
                .push(format!("reset:{token}:{new_password}"));
            self.outcome(())
        }

        async fn verify_email(&self, token: &str) -> ApiResult<()> {
            self.calls.borrow_mut().push(format!("verify:{token}"));
            self.outcome(())
        }

        async fn google_login(&self, _: &str) -> ApiResult<GoogleLoginResult> {
            unreachable!()
        }

        async fn delete_account(&self, _: &str, _: &str) -> ApiResult<AccountDeleted> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_reset_request_receipt_names_email() {
        let api = RecordingApi::default();
        let receipt = request_password_reset(
            &api,
            "ada@example.com",
            BuildEnvironment::Production,
            "/reset-password",
        )
        .await
        .unwrap();

        assert_eq!(receipt.email, "ada@example.com");
        assert_eq!(receipt.dev_notice, None);
        assert_eq!(*api.calls.borrow(), vec!["reset-request:ada@example.com"]);
    }

    #[tokio::test]
    async fn test_dev_token_only_surfaces_in_development() {
        let api = RecordingApi {
            dev_token: Some("tok123".to_string()),
            ..Default::default()
        };

        let prod = request_password_reset(&api, "a@b.co", BuildEnvironment::Production, "/reset")
            .await
            .unwrap();
        assert_eq!(prod.dev_notice, None);

        let dev = request_password_reset(&api, "a@b.co", BuildEnvironment::Development, "/reset")
            .await
            .unwrap();
        assert_eq!(
            dev.dev_notice.as_deref(),
            Some("[DEV MODE] Reset token: tok123\nUse this at /reset?token=tok123")
        );
    }

    #[tokio::test]
    async fn test_reset_request_failure_uses_fallback() {
        let api = RecordingApi {
            fail_with: Some(ApiError::rejected("")),
            ..Default::default()
        };
        let result =
            request_password_reset(&api, "a@b.co", BuildEnvironment::Production, "/reset").await;
        assert_eq!(result, Err(RESET_EMAIL_FALLBACK.to_string()));
    }

    #[test]
    fn test_reset_validation_order() {
        assert_eq!(
            validate_password_reset(None, "short", "other"),
            Err(ValidationError::NewPasswordTooShort { min: 8 })
        );
        assert_eq!(
            validate_password_reset(None, "longenough", "different"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_password_reset(None, "longenough", "longenough"),
            Err(ValidationError::InvalidResetToken)
        );
        assert_eq!(
            validate_password_reset(Some("t"), "longenough", "longenough"),
            Ok("t")
        );
        assert_eq!(
            ValidationError::NewPasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_missing_reset_token_detected_up_front() {
        assert_eq!(
            missing_reset_token(None).map(|e| e.to_string()).as_deref(),
            Some("Invalid or missing reset token")
        );
        assert_eq!(missing_reset_token(Some("")), Some(ValidationError::MissingResetToken));
        assert_eq!(missing_reset_token(Some("abc")), None);
    }

    #[tokio::test]
    async fn test_reset_password_calls_api_once_valid() {
        let api = RecordingApi::default();

        let rejected = reset_password(&api, Some("tok"), "short", "short").await;
        assert!(rejected.is_err());
        assert!(api.calls.borrow().is_empty());

        reset_password(&api, Some("tok"), "newpassword", "newpassword")
            .await
            .unwrap();
        assert_eq!(*api.calls.borrow(), vec!["reset:tok:newpassword"]);
    }

    #[tokio::test]
    async fn test_reset_password_surfaces_server_message() {
        let api = RecordingApi {
            fail_with: Some(ApiError::rejected("Token expired")),
            ..Default::default()
        };
        let result = reset_password(&api, Some("tok"), "newpassword", "newpassword").await;
        assert_eq!(result, Err("Token expired".to_string()));
    }

    #[tokio::test]
    async fn test_verify_without_token_skips_api() {
        let api = RecordingApi::default();

        let result = verify_email(&api, None).await;
        assert_eq!(
            result,
            Err("Invalid or missing verification token".to_string())
        );
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_verify_with_token() {
        let api = RecordingApi::default();
        assert_eq!(verify_email(&api, Some("v1")).await, Ok(()));
        assert_eq!(*api.calls.borrow(), vec!["verify:v1"]);

        let failing = RecordingApi {
            fail_with: Some(ApiError::rejected("")),
            ..Default::default()
        };
        assert_eq!(
            verify_email(&failing, Some("v1")).await,
            Err(VERIFY_EMAIL_FALLBACK.to_string())
        );
    }
}
