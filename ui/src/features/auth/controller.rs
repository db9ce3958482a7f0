//! Async submission paths for the auth view. Kept free of component state
//! so they can be driven directly against fake capabilities.

use super::form_validation::{split_full_name, validate_auth_form};
use super::types::{AuthForm, AuthMode, AuthOutcome, OAuthOutcome, Redirect};
use crate::features::branding::Branding;
use crate::services::api::AuthApi;
use crate::services::config::TimingConfig;
use crate::services::errors::ApiError;
use crate::services::session::AuthSession;
use crate::{console_error, console_info, console_warn};

pub const AUTH_FAILED_FALLBACK: &str = "Authentication failed. Please try again.";
pub const GOOGLE_FAILED_FALLBACK: &str = "Google authentication failed";
pub const GOOGLE_PROVIDER_FAILED: &str = "Google authentication failed. Please try again.";
pub const GOOGLE_PROVIDER_NAME: &str = "Google";

/// Validate, then sign in or register through the session.
pub async fn submit_credentials(
    mode: AuthMode,
    form: &AuthForm,
    session: &dyn AuthSession,
    branding: &Branding,
    timings: &TimingConfig,
) -> AuthOutcome {
    if let Err(error) = validate_auth_form(mode, form) {
        console_warn!(format!("[Auth] Validation failed: {error}"));
        return AuthOutcome::Rejected(error);
    }

    let result = match mode {
        AuthMode::Login => {
            console_info!("[Auth] Signing in");
            session.login(&form.email, &form.password).await
        }
        AuthMode::Register => {
            let (first_name, last_name) = split_full_name(&form.name);
            console_info!("[Auth] Registering new account");
            session
                .register(&form.email, &form.password, &first_name, &last_name)
                .await
        }
    };

    match result {
        Ok(true) => {
            let message = match mode {
                AuthMode::Login => branding.messages.login_success.clone(),
                AuthMode::Register => branding.messages.register_success.clone(),
            };
            AuthOutcome::Succeeded {
                message,
                redirect: Redirect {
                    route: branding.dashboard_route.clone(),
                    delay_ms: timings.success_redirect_ms,
                },
            }
        }
        Ok(false) => {
            console_warn!("[Auth] Session declined the credentials");
            AuthOutcome::NotAccepted
        }
        Err(error) => {
            console_error!(format!("[Auth] Authentication error: {error}"));
            AuthOutcome::Failed(error.user_message(AUTH_FAILED_FALLBACK))
        }
    }
}

/// Exchange a provider credential for a session.
///
/// `credential` is whatever the identity provider produced; `None` or an
/// empty string never reaches the API.
pub async fn complete_google_login(
    api: &dyn AuthApi,
    credential: Option<&str>,
    branding: &Branding,
    timings: &TimingConfig,
) -> OAuthOutcome {
    let Some(credential) = credential.filter(|c| !c.is_empty()) else {
        let error = ApiError::MissingCredential {
            provider: GOOGLE_PROVIDER_NAME.to_string(),
        };
        console_error!(format!("[Auth] {error}"));
        return OAuthOutcome::Failed(error.to_string());
    };

    match api.google_login(credential).await {
        Ok(result) if result.is_new_user.unwrap_or(false) => {
            console_info!("[Auth] Google sign-in created a new account");
            OAuthOutcome::Welcome {
                message: branding.messages.google_new_user.clone(),
                redirect: Redirect {
                    route: branding.dashboard_route.clone(),
                    delay_ms: timings.success_redirect_ms,
                },
            }
        }
        Ok(_) => OAuthOutcome::Continue {
            route: branding.dashboard_route.clone(),
        },
        Err(error) => {
            console_error!(format!("[Auth] Google login failed: {error}"));
            OAuthOutcome::Failed(error.user_message(GOOGLE_FAILED_FALLBACK))
        }
    }
}

/// Outcome when the provider flow itself errors before yielding anything.
pub fn provider_failure(error: &ApiError) -> OAuthOutcome {
    console_error!(format!("[Auth] Identity provider error: {error}"));
    OAuthOutcome::Failed(GOOGLE_PROVIDER_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::branding::BrandingMessages;
    use crate::services::api::{AccountDeleted, GoogleLoginResult, PasswordResetRequested};
    use crate::services::errors::{ApiResult, ValidationError};
    use crate::services::session::{SessionState, UserProfile};
    use async_trait::async_trait;
    use std::cell::RefCell;

    fn branding() -> Branding {
        Branding {
            app_name: "Acme".to_string(),
            tagline: "Build things".to_string(),
            logo_letter: "A".to_string(),
            primary_gradient: "linear-gradient(135deg, #000 0%, #111 100%)".to_string(),
            primary_gradient_hover: "linear-gradient(135deg, #111 0%, #222 100%)".to_string(),
            logo_shadow: "none".to_string(),
            dashboard_route: "/dashboard".to_string(),
            messages: BrandingMessages {
                login_success: "Welcome back!".to_string(),
                register_success: "Account created!".to_string(),
                google_new_user: "Welcome aboard!".to_string(),
            },
            security_badge: "Secure".to_string(),
        }
    }

    #[derive(Default)]
    struct FakeSession {
        answer: Option<ApiResult<bool>>,
        calls: RefCell<Vec<String>>,
    }

    impl SessionState for FakeSession {
        fn user(&self) -> Option<UserProfile> {
            None
        }

        fn is_authenticated(&self) -> bool {
            false
        }

        fn logout(&self) {}
    }

    #[async_trait(?Send)]
    impl AuthSession for FakeSession {
        async fn login(&self, email: &str, _password: &str) -> ApiResult<bool> {
            self.calls.borrow_mut().push(format!("login:{email}"));
            self.answer.clone().unwrap_or(Ok(true))
        }

        async fn register(
            &self,
            email: &str,
            _password: &str,
            first_name: &str,
            last_name: &str,
        ) -> ApiResult<bool> {
            self.calls
                .borrow_mut()
                .push(format!("register:{email}:{first_name}:{last_name}"));
            self.answer.clone().unwrap_or(Ok(true))
        }

        fn is_loading(&self) -> bool {
            false
        }

        fn error(&self) -> Option<String> {
            None
        }
    }

    struct FakeGoogleApi {
        answer: ApiResult<GoogleLoginResult>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeGoogleApi {
        fn answering(answer: ApiResult<GoogleLoginResult>) -> Self {
            Self {
                answer,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeGoogleApi {
        async fn request_password_reset(&self, _: &str) -> ApiResult<PasswordResetRequested> {
            unreachable!()
        }

        async fn reset_password(&self, _: &str, _: &str) -> ApiResult<()> {
            unreachable!()
        }

        async fn verify_email(&self, _: &str) -> ApiResult<()> {
            unreachable!()
        }

        async fn google_login(&self, credential: &str) -> ApiResult<GoogleLoginResult> {
            self.calls.borrow_mut().push(credential.to_string());
            self.answer.clone()
        }

        async fn delete_account(&self, _: &str, _: &str) -> ApiResult<AccountDeleted> {
            unreachable!()
        }
    }

    fn login_form() -> AuthForm {
        AuthForm {
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_session() {
        let session = FakeSession::default();
        let form = AuthForm {
            email: "abc".to_string(),
            password: "x".to_string(),
            ..Default::default()
        };

        let outcome = submit_credentials(
            AuthMode::Login,
            &form,
            &session,
            &branding(),
            &TimingConfig::default(),
        )
        .await;

        assert_eq!(outcome, AuthOutcome::Rejected(ValidationError::InvalidEmail));
        assert!(session.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_login_success_schedules_redirect() {
        let session = FakeSession::default();

        let outcome = submit_credentials(
            AuthMode::Login,
            &login_form(),
            &session,
            &branding(),
            &TimingConfig::default(),
        )
        .await;

        assert_eq!(
            outcome,
            AuthOutcome::Succeeded {
                message: "Welcome back!".to_string(),
                redirect: Redirect {
                    route: "/dashboard".to_string(),
                    delay_ms: 1500,
                },
            }
        );
        assert_eq!(*session.calls.borrow(), vec!["login:ada@example.com"]);
    }

    #[tokio::test]
    async fn test_register_splits_name() {
        let session = FakeSession::default();
        let form = AuthForm {
            name: "Plato".to_string(),
            company: "Academy".to_string(),
            confirm_password: "hunter22".to_string(),
            ..login_form()
        };

        let outcome = submit_credentials(
            AuthMode::Register,
            &form,
            &session,
            &branding(),
            &TimingConfig::default(),
        )
        .await;

        assert!(matches!(outcome, AuthOutcome::Succeeded { ref message, .. } if message == "Account created!"));
        assert_eq!(
            *session.calls.borrow(),
            vec!["register:ada@example.com:Plato:User"]
        );
    }

    #[tokio::test]
    async fn test_declined_and_failed_sessions() {
        let declined = FakeSession {
            answer: Some(Ok(false)),
            ..Default::default()
        };
        let outcome = submit_credentials(
            AuthMode::Login,
            &login_form(),
            &declined,
            &branding(),
            &TimingConfig::default(),
        )
        .await;
        assert_eq!(outcome, AuthOutcome::NotAccepted);

        let blank = FakeSession {
            answer: Some(Err(ApiError::rejected(""))),
            ..Default::default()
        };
        let outcome = submit_credentials(
            AuthMode::Login,
            &login_form(),
            &blank,
            &branding(),
            &TimingConfig::default(),
        )
        .await;
        assert_eq!(outcome, AuthOutcome::Failed(AUTH_FAILED_FALLBACK.to_string()));
    }

    #[tokio::test]
    async fn test_google_missing_credential() {
        let api = FakeGoogleApi::answering(Ok(GoogleLoginResult::default()));

        let outcome = complete_google_login(&api, None, &branding(), &TimingConfig::default()).await;
        assert_eq!(
            outcome,
            OAuthOutcome::Failed("No credential received from Google".to_string())
        );

        let outcome = complete_google_login(&api, Some(""), &branding(), &TimingConfig::default()).await;
        assert!(matches!(outcome, OAuthOutcome::Failed(_)));
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_google_new_and_existing_users() {
        let api = FakeGoogleApi::answering(Ok(GoogleLoginResult {
            is_new_user: Some(true),
        }));
        assert_eq!(
            complete_google_login(&api, Some("jwt"), &branding(), &TimingConfig::default()).await,
            OAuthOutcome::Welcome {
                message: "Welcome aboard!".to_string(),
                redirect: Redirect {
                    route: "/dashboard".to_string(),
                    delay_ms: 1500,
                },
            }
        );
        assert_eq!(*api.calls.borrow(), vec!["jwt"]);

        let api = FakeGoogleApi::answering(Ok(GoogleLoginResult { is_new_user: None }));
        assert_eq!(
            complete_google_login(&api, Some("jwt"), &branding(), &TimingConfig::default()).await,
            OAuthOutcome::Continue {
                route: "/dashboard".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_google_api_errors() {
        let api = FakeGoogleApi::answering(Err(ApiError::rejected("Token audience mismatch")));
        assert_eq!(
            complete_google_login(&api, Some("jwt"), &branding(), &TimingConfig::default()).await,
            OAuthOutcome::Failed("Token audience mismatch".to_string())
        );

        let api = FakeGoogleApi::answering(Err(ApiError::rejected("  ")));
        assert_eq!(
            complete_google_login(&api, Some("jwt"), &branding(), &TimingConfig::default()).await,
            OAuthOutcome::Failed(GOOGLE_FAILED_FALLBACK.to_string())
        );

        assert_eq!(
            provider_failure(&ApiError::rejected("popup closed")),
            OAuthOutcome::Failed(GOOGLE_PROVIDER_FAILED.to_string())
        );
    }
}
