//! Library Configuration
//!
//! Routes, timings, support contact and HTTP endpoints shared by the views
//! and the bundled HTTP client. Hosts typically deserialize a [`UiConfig`]
//! from JSON and fall back to [`UiConfig::default`].

use serde::{Deserialize, Serialize};

/// Build flavour. Gates diagnostic detail such as render-failure traces and
/// development reset tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildEnvironment {
    Development,
    Production,
}

impl BuildEnvironment {
    /// Derived from the build profile: debug builds are development builds.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildEnvironment::Development
        } else {
            BuildEnvironment::Production
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, BuildEnvironment::Development)
    }
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub environment: BuildEnvironment,
    pub routes: RouteConfig,
    pub timings: TimingConfig,
    pub support_email: String,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub home: String,
    pub auth: String,
    pub settings: String,
    pub forgot_password: String,
    pub reset_password: String,
    /// Where "Continue" leads after a successful email verification.
    pub verify_success: String,
    /// Where the failed-verification screen sends the user.
    pub verify_error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause between a successful sign-in/registration and the dashboard redirect.
    pub success_redirect_ms: u64,
    /// How long the support form shows its confirmation before clearing.
    pub support_reset_ms: u64,
}

/// Endpoint layout for [`HttpAuthClient`](crate::services::client::HttpAuthClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means same-origin.
    pub base_url: String,
    pub login_path: String,
    pub register_path: String,
    pub logout_path: String,
    pub me_path: String,
    pub request_password_reset_path: String,
    pub reset_password_path: String,
    pub verify_email_path: String,
    pub google_login_path: String,
    pub delete_account_path: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            environment: BuildEnvironment::current(),
            routes: RouteConfig::default(),
            timings: TimingConfig::default(),
            support_email: "support@example.com".to_string(),
            api: ApiConfig::default(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            auth: "/auth".to_string(),
            settings: "/settings".to_string(),
            forgot_password: "/forgot-password".to_string(),
            reset_password: "/reset-password".to_string(),
            verify_success: "/projects".to_string(),
            verify_error: "/settings".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            success_redirect_ms: 1500,
            support_reset_ms: 3000,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: "/api/auth/login".to_string(),
            register_path: "/api/auth/register".to_string(),
            logout_path: "/api/auth/logout".to_string(),
            me_path: "/api/auth/me".to_string(),
            request_password_reset_path: "/api/auth/request-password-reset".to_string(),
            reset_password_path: "/api/auth/reset-password".to_string(),
            verify_email_path: "/api/auth/verify-email".to_string(),
            google_login_path: "/api/auth/google".to_string(),
            delete_account_path: "/api/auth/delete-account".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn paths(&self) -> [(&'static str, &str); 9] {
        [
            ("api.login_path", &self.login_path),
            ("api.register_path", &self.register_path),
            ("api.logout_path", &self.logout_path),
            ("api.me_path", &self.me_path),
            ("api.request_password_reset_path", &self.request_password_reset_path),
            ("api.reset_password_path", &self.reset_password_path),
            ("api.verify_email_path", &self.verify_email_path),
            ("api.google_login_path", &self.google_login_path),
            ("api.delete_account_path", &self.delete_account_path),
        ]
    }
}

impl RouteConfig {
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("routes.home", &self.home),
            ("routes.auth", &self.auth),
            ("routes.settings", &self.settings),
            ("routes.forgot_password", &self.forgot_password),
            ("routes.reset_password", &self.reset_password),
            ("routes.verify_success", &self.verify_success),
            ("routes.verify_error", &self.verify_error),
        ]
    }
}

impl UiConfig {
    /// Parse from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Collects every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (field, route) in self.routes.entries() {
            if !route.starts_with('/') {
                errors.push(format!("{field} must start with '/': {route:?}"));
            }
        }

        for (field, path) in self.api.paths() {
            if !path.starts_with('/') {
                errors.push(format!("{field} must start with '/': {path:?}"));
            }
        }

        let base = self.api.base_url.as_str();
        if !base.is_empty() && !(base.starts_with("http://") || base.starts_with("https://")) {
            errors.push(format!("api.base_url must be http(s) or empty: {base:?}"));
        }

        if self.timings.success_redirect_ms == 0 {
            errors.push("timings.success_redirect_ms must be greater than 0".to_string());
        }
        if self.timings.support_reset_ms == 0 {
            errors.push("timings.support_reset_ms must be greater than 0".to_string());
        }

        if !self.support_email.contains('@') {
            errors.push(format!(
                "support_email is not an email address: {:?}",
                self.support_email
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
