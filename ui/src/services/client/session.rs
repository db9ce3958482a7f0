//! Signal-backed session built on [`HttpAuthClient`].
//!
//! Must be constructed inside a component scope (typically the app root via
//! `use_hook`), since it owns Dioxus signals. Components that call
//! [`SessionState::user`] or [`AuthSession::is_loading`] during render are
//! subscribed to changes.

use async_trait::async_trait;
use dioxus::prelude::*;
use std::rc::Rc;

use super::http_auth_client::HttpAuthClient;
use super::token_store::TokenStore;
use crate::services::errors::{ApiError, ApiResult};
use crate::services::session::{AuthSession, SessionState, UserProfile};
use crate::{console_info, console_warn};

#[derive(Clone)]
pub struct ClientSession {
    client: Rc<HttpAuthClient>,
    user: Signal<Option<UserProfile>>,
    authenticated: Signal<bool>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
}

impl ClientSession {
    /// Restores any persisted session from local storage.
    pub fn new(client: Rc<HttpAuthClient>) -> Self {
        let token = TokenStore::access_token();
        Self {
            client,
            user: Signal::new(TokenStore::user()),
            authenticated: Signal::new(token.is_some()),
            loading: Signal::new(false),
            error: Signal::new(None),
        }
    }

    pub fn client(&self) -> &Rc<HttpAuthClient> {
        &self.client
    }

    /// Re-read the profile for a restored token. A rejected token ends the session.
    pub async fn refresh_profile(&self) {
        if !*self.authenticated.peek() {
            return;
        }
        match self.client.me().await {
            Ok(profile) => {
                let mut user = self.user;
                user.set(Some(profile));
            }
            Err(ApiError::Rejected {
                status: Some(401), ..
            }) => {
                console_warn!("[Session] Stored token rejected, signing out");
                self.clear_local();
            }
            Err(e) => console_warn!("[Session] Profile refresh failed: {}", e),
        }
    }

    fn begin(&self) {
        let mut loading = self.loading;
        let mut error = self.error;
        loading.set(true);
        error.set(None);
    }

    fn finish(&self, result: ApiResult<Option<UserProfile>>, fallback: &str) -> bool {
        let mut loading = self.loading;
        let mut error = self.error;
        let mut user = self.user;
        let mut authenticated = self.authenticated;

        loading.set(false);
        match result {
            Ok(profile) => {
                user.set(profile);
                authenticated.set(true);
                true
            }
            Err(e) => {
                error.set(Some(e.user_message(fallback)));
                false
            }
        }
    }

    fn clear_local(&self) {
        let mut user = self.user;
        let mut authenticated = self.authenticated;
        TokenStore::clear();
        user.set(None);
        authenticated.set(false);
    }
}

impl SessionState for ClientSession {
    fn user(&self) -> Option<UserProfile> {
        self.user.read().clone()
    }

    fn is_authenticated(&self) -> bool {
        *self.authenticated.read()
    }

    fn logout(&self) {
        console_info!("[Session] Signing out");
        let token = TokenStore::access_token();
        self.clear_local();
        let client = self.client.clone();
        spawn(async move {
            client.logout(token).await;
        });
    }
}

#[async_trait(?Send)]
impl AuthSession for ClientSession {
    async fn login(&self, email: &str, password: &str) -> ApiResult<bool> {
        self.begin();
        let result = self.client.login(email, password).await.map(|g| g.user);
        Ok(self.finish(result, "Login failed"))
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> ApiResult<bool> {
        self.begin();
        let result = self
            .client
            .register(email, password, first_name, last_name)
            .await
            .map(|g| g.user);
        Ok(self.finish(result, "Registration failed"))
    }

    fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    fn error(&self) -> Option<String> {
        self.error.read().clone()
    }
}
