//! End-to-end submission paths the auth view spawns: run the controller,
//! report the outcome to the view, then perform whatever navigation the
//! outcome schedules. Navigation is skipped once the view has moved on to a
//! newer generation.

use dioxus::prelude::*;

use super::controller::{complete_google_login, provider_failure, submit_credentials};
use super::types::{AuthAction, AuthOutcome, AuthViewState, OAuthOutcome, Redirect};
use crate::console_debug;
use crate::features::branding::Branding;
use crate::services::api::AuthApi;
use crate::services::config::TimingConfig;
use crate::services::identity::IdentityProvider;
use crate::services::navigation::Navigator;
use crate::services::session::AuthSession;
use crate::utils::sleep_ms;

/// Where a running submission reports back to.
pub trait AuthViewSink {
    fn apply(&self, action: AuthAction);

    fn is_current(&self, generation: u64) -> bool;
}

impl AuthViewSink for Signal<AuthViewState> {
    fn apply(&self, action: AuthAction) {
        let mut state = *self;
        state.with_mut(|s| s.reduce_in_place(action));
    }

    fn is_current(&self, generation: u64) -> bool {
        self.peek().is_current(generation)
    }
}

pub struct AuthFlow<'a> {
    pub navigator: &'a dyn Navigator,
    pub branding: &'a Branding,
    pub timings: &'a TimingConfig,
}

impl AuthFlow<'_> {
    /// Credential submission for the form as it was when the user submitted.
    pub async fn submit(
        &self,
        session: &dyn AuthSession,
        snapshot: &AuthViewState,
        view: &impl AuthViewSink,
    ) {
        let generation = snapshot.generation;
        let outcome = submit_credentials(
            snapshot.mode,
            &snapshot.form,
            session,
            self.branding,
            self.timings,
        )
        .await;

        let redirect = match &outcome {
            AuthOutcome::Succeeded { redirect, .. } => Some(redirect.clone()),
            _ => None,
        };
        view.apply(AuthAction::SubmitFinished {
            generation,
            outcome,
        });

        if let Some(redirect) = redirect {
            sleep_ms(redirect.delay_ms).await;
            if view.is_current(generation) {
                self.navigator.navigate(&redirect.route);
            } else {
                console_debug!("[Auth] Mode changed, dropping redirect");
            }
        }
    }

    /// Provider prompt, credential exchange, then a full page load so the
    /// session is restored from the stored token.
    pub async fn sign_in_with_provider(
        &self,
        api: &dyn AuthApi,
        identity: &dyn IdentityProvider,
        nonce: &str,
        generation: u64,
        view: &impl AuthViewSink,
    ) {
        let outcome = match identity.request_credential(nonce).await {
            Ok(credential) => {
                complete_google_login(api, credential.as_deref(), self.branding, self.timings)
                    .await
            }
            Err(error) => provider_failure(&error),
        };

        let redirect = match &outcome {
            OAuthOutcome::Welcome { redirect, .. } => Some(redirect.clone()),
            OAuthOutcome::Continue { route } => Some(Redirect {
                route: route.clone(),
                delay_ms: 0,
            }),
            OAuthOutcome::Failed(_) => None,
        };
        view.apply(AuthAction::OAuthFinished {
            generation,
            outcome,
        });

        if let Some(redirect) = redirect {
            if redirect.delay_ms > 0 {
                sleep_ms(redirect.delay_ms).await;
            }
            if view.is_current(generation) {
                self.navigator.hard_navigate(&redirect.route);
            } else {
                console_debug!("[Auth] Mode changed, dropping redirect");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::{AuthField, AuthMode, SubmitStatus};
    use crate::features::branding::BrandingMessages;
    use crate::services::api::{AccountDeleted, GoogleLoginResult, PasswordResetRequested};
    use crate::services::errors::{ApiError, ApiResult};
    use crate::services::session::{SessionState, UserProfile};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    type SharedState = Rc<RefCell<AuthViewState>>;

    impl AuthViewSink for SharedState {
        fn apply(&self, action: AuthAction) {
            self.borrow_mut().reduce_in_place(action);
        }

        fn is_current(&self, generation: u64) -> bool {
            self.borrow().is_current(generation)
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        soft: RefCell<Vec<String>>,
        hard: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &str) {
            self.soft.borrow_mut().push(route.to_string());
        }

        fn current_path(&self) -> String {
            "/auth".to_string()
        }

        fn query_param(&self, _key: &str) -> Option<String> {
            None
        }

        fn hard_navigate(&self, route: &str) {
            self.hard.borrow_mut().push(route.to_string());
        }
    }

    /// Accepts every login. Runs `during_login` while the request is in
    /// flight, which lets a test change the view mid-submission.
    struct AcceptingSession {
        during_login: Box<dyn Fn()>,
    }

    impl SessionState for AcceptingSession {
        fn user(&self) -> Option<UserProfile> {
            None
        }

        fn is_authenticated(&self) -> bool {
            false
        }

        fn logout(&self) {}
    }

    #[async_trait(?Send)]
    impl AuthSession for AcceptingSession {
        async fn login(&self, _email: &str, _password: &str) -> ApiResult<bool> {
            (self.during_login)();
            Ok(true)
        }

        async fn register(&self, _: &str, _: &str, _: &str, _: &str) -> ApiResult<bool> {
            Ok(true)
        }

        fn is_loading(&self) -> bool {
            false
        }

        fn error(&self) -> Option<String> {
            None
        }
    }

    struct NewUserApi;

    #[async_trait(?Send)]
    impl AuthApi for NewUserApi {
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
            Ok(GoogleLoginResult {
                is_new_user: Some(true),
            })
        }

        async fn delete_account(&self, _: &str, _: &str) -> ApiResult<AccountDeleted> {
            unreachable!()
        }
    }

    struct StaticIdentity(ApiResult<Option<String>>);

    #[async_trait(?Send)]
    impl IdentityProvider for StaticIdentity {
        async fn request_credential(&self, nonce: &str) -> ApiResult<Option<String>> {
            assert!(!nonce.is_empty());
            self.0.clone()
        }
    }

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

    fn short_timings() -> TimingConfig {
        TimingConfig {
            success_redirect_ms: 10,
            ..TimingConfig::default()
        }
    }

    fn filled_login() -> SharedState {
        let state = Rc::new(RefCell::new(AuthViewState::default()));
        state.apply(AuthAction::SetField(AuthField::Email, "ada@example.com".into()));
        state.apply(AuthAction::SetField(AuthField::Password, "hunter22".into()));
        state
    }

    #[tokio::test]
    async fn test_successful_login_navigates_to_dashboard_after_delay() {
        let navigator = RecordingNavigator::default();
        let (branding, timings) = (branding(), short_timings());
        let flow = AuthFlow {
            navigator: &navigator,
            branding: &branding,
            timings: &timings,
        };
        let session = AcceptingSession {
            during_login: Box::new(|| {}),
        };
        let state = filled_login();
        state.apply(AuthAction::SubmitStarted);
        let snapshot = state.borrow().clone();

        let started = std::time::Instant::now();
        flow.submit(&session, &snapshot, &state).await;

        assert!(started.elapsed() >= std::time::Duration::from_millis(10));
        assert_eq!(*navigator.soft.borrow(), vec!["/dashboard"]);
        assert!(navigator.hard.borrow().is_empty());
        assert_eq!(state.borrow().success.as_deref(), Some("Welcome back!"));
        assert_eq!(state.borrow().status, SubmitStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_mode_switch_mid_login_drops_message_and_redirect() {
        let navigator = RecordingNavigator::default();
        let (branding, timings) = (branding(), short_timings());
        let flow = AuthFlow {
            navigator: &navigator,
            branding: &branding,
            timings: &timings,
        };
        let state = filled_login();
        state.apply(AuthAction::SubmitStarted);
        let snapshot = state.borrow().clone();

        let toggled = state.clone();
        let session = AcceptingSession {
            during_login: Box::new(move || toggled.apply(AuthAction::ToggleMode)),
        };

        flow.submit(&session, &snapshot, &state).await;

        let view = state.borrow();
        assert_eq!(view.mode, AuthMode::Register);
        assert_eq!(view.success, None);
        assert_eq!(view.status, SubmitStatus::Idle);
        assert!(navigator.soft.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_new_provider_account_is_welcomed_then_sent_to_dashboard() {
        let navigator = RecordingNavigator::default();
        let (branding, timings) = (branding(), short_timings());
        let flow = AuthFlow {
            navigator: &navigator,
            branding: &branding,
            timings: &timings,
        };
        let state = Rc::new(RefCell::new(AuthViewState::default()));
        let identity = StaticIdentity(Ok(Some("jwt".to_string())));

        flow.sign_in_with_provider(&NewUserApi, &identity, "nonce-1", 0, &state)
            .await;

        assert_eq!(state.borrow().success.as_deref(), Some("Welcome aboard!"));
        assert_eq!(*navigator.hard.borrow(), vec!["/dashboard"]);
        assert!(navigator.soft.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_stays_on_page() {
        let navigator = RecordingNavigator::default();
        let (branding, timings) = (branding(), short_timings());
        let flow = AuthFlow {
            navigator: &navigator,
            branding: &branding,
            timings: &timings,
        };
        let state = Rc::new(RefCell::new(AuthViewState::default()));
        let identity = StaticIdentity(Err(ApiError::rejected("popup closed")));

        flow.sign_in_with_provider(&NewUserApi, &identity, "nonce-1", 0, &state)
            .await;

        assert_eq!(
            state.borrow().local_error.as_deref(),
            Some("Google authentication failed. Please try again.")
        );
        assert!(navigator.hard.borrow().is_empty());
    }
}
