use crate::services::api::{AccountDeleted, AuthApi};
use crate::services::errors::ValidationError;
use crate::services::session::SessionState;
use crate::{console_error, console_info};

/// Literal text the user must type before an account can be deleted.
pub const DELETE_CONFIRMATION: &str = "DELETE";

pub const DELETE_ACCOUNT_FALLBACK: &str = "Failed to delete account";

/// Inputs and progress of the delete-account dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeletionDialog {
    pub open: bool,
    pub password: String,
    pub confirm_text: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl DeletionDialog {
    pub fn opened() -> Self {
        Self {
            open: true,
            ..Default::default()
        }
    }

    /// Closing is ignored while a deletion is in flight.
    pub fn close(&mut self) {
        if !self.loading {
            *self = Self::default();
        }
    }
}

/// Confirmation text first, then the password.
pub fn validate_deletion(password: &str, confirm_text: &str) -> Result<(), ValidationError> {
    if confirm_text != DELETE_CONFIRMATION {
        return Err(ValidationError::ConfirmationMismatch {
            expected: DELETE_CONFIRMATION.to_string(),
        });
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// Deletes the account and signs out locally. The caller navigates home.
pub async fn delete_account(
    api: &dyn AuthApi,
    session: &dyn SessionState,
    password: &str,
    confirm_text: &str,
) -> Result<AccountDeleted, String> {
    validate_deletion(password, confirm_text).map_err(|e| e.to_string())?;

    let deleted = api
        .delete_account(password, confirm_text)
        .await
        .map_err(|error| {
            console_error!(format!("[Account] Deletion failed: {error}"));
            error.user_message(DELETE_ACCOUNT_FALLBACK)
        })?;

    console_info!("[Account] Account deleted, signing out");
    session.logout();
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::{GoogleLoginResult, PasswordResetRequested};
    use crate::services::errors::{ApiError, ApiResult};
    use crate::services::session::UserProfile;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    struct DeletingApi {
        answer: ApiResult<AccountDeleted>,
        calls: RefCell<Vec<(String, String)>>,
    }

    #[async_trait(?Send)]
    impl AuthApi for DeletingApi {
        async fn request_password_reset(&self, _: &str) -> ApiResult<PasswordResetRequested> {
            unreachable!()
        }

        async fn reset_password(&self, _: &str, _: &str) -> ApiResult<()> {
            unreachable!()
        }

        async fn verify_email(&self, _: &str) -> ApiResult<()> {
            unreachable!()
        }

        async fn google_login(&self, _: &str) -> ApiResult<GoogleLoginResult> {
            unreachable!()
        }

        async fn delete_account(&self, password: &str, confirm: &str) -> ApiResult<AccountDeleted> {
            self.calls
                .borrow_mut()
                .push((password.to_string(), confirm.to_string()));
            self.answer.clone()
        }
    }

    #[derive(Default)]
    struct CountingSession {
        logouts: Cell<u32>,
    }

    impl SessionState for CountingSession {
        fn user(&self) -> Option<UserProfile> {
            None
        }

        fn is_authenticated(&self) -> bool {
            true
        }

        fn logout(&self) {
            self.logouts.set(self.logouts.get() + 1);
        }
    }

    fn api(answer: ApiResult<AccountDeleted>) -> DeletingApi {
        DeletingApi {
            answer,
            calls: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_confirmation_checked_before_password() {
        assert_eq!(
            validate_deletion("", "delete").map_err(|e| e.to_string()),
            Err("Please type DELETE to confirm".to_string())
        );
        assert_eq!(
            validate_deletion("", "DELETE"),
            Err(ValidationError::PasswordRequired)
        );
        assert_eq!(validate_deletion("pw", "DELETE"), Ok(()));
    }

    #[tokio::test]
    async fn test_invalid_input_never_calls_api() {
        let api = api(Ok(AccountDeleted::default()));
        let session = CountingSession::default();

        let result = delete_account(&api, &session, "pw", "DELETE ").await;

        assert!(result.is_err());
        assert!(api.calls.borrow().is_empty());
        assert_eq!(session.logouts.get(), 0);
    }

    #[tokio::test]
    async fn test_success_signs_out() {
        let api = api(Ok(AccountDeleted {
            message: "Account deleted".to_string(),
            note: String::new(),
        }));
        let session = CountingSession::default();

        let deleted = delete_account(&api, &session, "pw", "DELETE").await.unwrap();

        assert_eq!(deleted.message, "Account deleted");
        assert_eq!(
            *api.calls.borrow(),
            vec![("pw".to_string(), "DELETE".to_string())]
        );
        assert_eq!(session.logouts.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_session() {
        let api = api(Err(ApiError::rejected("Incorrect password")));
        let session = CountingSession::default();

        let result = delete_account(&api, &session, "pw", "DELETE").await;

        assert_eq!(result, Err("Incorrect password".to_string()));
        assert_eq!(session.logouts.get(), 0);
    }

    #[test]
    fn test_dialog_close_blocked_while_loading() {
        let mut dialog = DeletionDialog::opened();
        dialog.password = "pw".to_string();
        dialog.loading = true;

        dialog.close();
        assert!(dialog.open);

        dialog.loading = false;
        dialog.close();
        assert_eq!(dialog, DeletionDialog::default());
    }
}
