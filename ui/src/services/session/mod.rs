//! Session accessor contracts.
//!
//! [`SessionState`] is the read/sign-out surface the navbar and settings
//! view need; [`AuthSession`] adds the credential operations the auth view
//! drives. Implementations usually read Dioxus signals inside these
//! methods, which subscribes the calling component to session changes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::errors::ApiResult;
use crate::services::injected::Injected;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    /// Uppercased first character of the first name, if there is one.
    pub fn initial(&self) -> Option<String> {
        self.first_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
    }

    /// "First Last", tolerating either half being absent.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }
}

pub trait SessionState {
    fn user(&self) -> Option<UserProfile>;

    fn is_authenticated(&self) -> bool;

    fn logout(&self);
}

#[async_trait(?Send)]
pub trait AuthSession: SessionState {
    async fn login(&self, email: &str, password: &str) -> ApiResult<bool>;

    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> ApiResult<bool>;

    fn is_loading(&self) -> bool;

    fn error(&self) -> Option<String>;
}

pub type SessionHandle = Injected<dyn SessionState>;
pub type AuthSessionHandle = Injected<dyn AuthSession>;
