//! REST implementation of [`AuthApi`] plus the credential endpoints used
//! by [`ClientSession`](super::ClientSession).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::token_store::TokenStore;
use super::types::*;
use crate::services::api::{AccountDeleted, AuthApi, GoogleLoginResult, PasswordResetRequested};
use crate::services::config::ApiConfig;
use crate::services::errors::{ApiError, ApiResult};
use crate::services::session::UserProfile;
use crate::utils::platform;

#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http_client: Client,
    config: ApiConfig,
}

impl HttpAuthClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        if self.config.base_url.is_empty() {
            // reqwest needs absolute URLs; same-origin resolves against the page.
            format!("{}{}", platform::location_origin(), path)
        } else {
            self.config.url(path)
        }
    }

    fn with_auth(request: RequestBuilder) -> RequestBuilder {
        Self::with_token(request, TokenStore::access_token().as_deref())
    }

    fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B, authenticated: bool) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http_client.post(self.endpoint(path)).json(body);
        if authenticated {
            request = Self::with_auth(request);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn post_unit<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http_client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = error_message_from_body(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        warn!(status = status.as_u16(), "Auth request rejected: {}", message);

        Err(ApiError::Rejected {
            status: Some(status.as_u16()),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::check(response).await?;
        let text = response.text().await?;
        // Some endpoints answer 204 / empty bodies; treat those as `null`.
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse {
            message: e.to_string(),
        })
    }

    fn persist(grant: &SessionGrant) -> ApiResult<()> {
        TokenStore::store(&grant.access_token, grant.user.as_ref())
    }

    #[instrument(skip(self, password), err)]
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<SessionGrant> {
        let grant: SessionGrant = self
            .post(&self.config.login_path, &LoginRequest { email, password }, false)
            .await?;
        Self::persist(&grant)?;
        info!("Login succeeded");
        Ok(grant)
    }

    #[instrument(skip(self, password), err)]
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> ApiResult<SessionGrant> {
        let request = RegisterRequest {
            email,
            password,
            first_name,
            last_name,
        };
        let grant: SessionGrant = self
            .post(&self.config.register_path, &request, false)
            .await?;
        Self::persist(&grant)?;
        info!("Registration succeeded");
        Ok(grant)
    }

    /// Fetch the profile for the stored token.
    #[instrument(skip(self), err)]
    pub async fn me(&self) -> ApiResult<UserProfile> {
        let request = Self::with_auth(self.http_client.get(self.endpoint(&self.config.me_path)));
        let response = request.send().await?;
        let user: UserProfile = Self::decode(response).await?;
        TokenStore::store_user(&user)?;
        Ok(user)
    }

    fn logout_request(&self, token: Option<&str>) -> RequestBuilder {
        Self::with_token(
            self.http_client.post(self.endpoint(&self.config.logout_path)),
            token,
        )
    }

    /// Best-effort server-side logout for `token`, which the caller reads
    /// before clearing local credentials.
    pub async fn logout(&self, token: Option<String>) {
        if let Err(e) = self.logout_request(token.as_deref()).send().await {
            warn!("Logout request failed: {}", e);
        }
    }
}

/// Pull a human-readable message out of an error response body.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.into_message(),
        Err(_) => {
            let trimmed = body.trim();
            (!trimmed.is_empty() && trimmed.len() <= 200).then(|| trimmed.to_string())
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthClient {
    #[instrument(skip(self), err)]
    async fn request_password_reset(&self, email: &str) -> ApiResult<PasswordResetRequested> {
        let result: Option<PasswordResetRequested> = self
            .post(
                &self.config.request_password_reset_path,
                &PasswordResetRequest { email },
                false,
            )
            .await?;
        Ok(result.unwrap_or_default())
    }

    #[instrument(skip(self, token, new_password), err)]
    async fn reset_password(&self, token: &str, new_password: &str) -> ApiResult<()> {
        self.post_unit(
            &self.config.reset_password_path,
            &ResetPasswordRequest {
                token,
                new_password,
            },
        )
        .await
    }

    #[instrument(skip(self, token), err)]
    async fn verify_email(&self, token: &str) -> ApiResult<()> {
        self.post_unit(&self.config.verify_email_path, &VerifyEmailRequest { token })
            .await
    }

    #[instrument(skip(self, credential), err)]
    async fn google_login(&self, credential: &str) -> ApiResult<GoogleLoginResult> {
        let grant: SessionGrant = self
            .post(
                &self.config.google_login_path,
                &GoogleLoginRequest { credential },
                false,
            )
            .await?;
        Self::persist(&grant)?;
        Ok(GoogleLoginResult {
            is_new_user: grant.is_new_user,
        })
    }

    #[instrument(skip(self, password), err)]
    async fn delete_account(
        &self,
        password: &str,
        confirm_text: &str,
    ) -> ApiResult<AccountDeleted> {
        let result: Option<AccountDeleted> = self
            .post(
                &self.config.delete_account_path,
                &DeleteAccountRequest {
                    password,
                    confirm_text,
                },
                true,
            )
            .await?;
        Ok(result.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message_from_body(r#"{"detail":"Reset token expired"}"#).as_deref(),
            Some("Reset token expired")
        );
    }

    #[test]
    fn test_error_message_from_plain_text() {
        assert_eq!(
            error_message_from_body("Service unavailable").as_deref(),
            Some("Service unavailable")
        );
        assert_eq!(error_message_from_body("   "), None);
    }

    #[test]
    fn test_logout_request_carries_captured_token() {
        let mut config = ApiConfig::default();
        config.base_url = "https://api.example.com".to_string();
        let client = HttpAuthClient::new(config);

        let request = client.logout_request(Some("tok-123")).build().unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer tok-123"
        );

        let anonymous = client.logout_request(None).build().unwrap();
        assert!(anonymous.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_endpoint_uses_configured_base() {
        let mut config = ApiConfig::default();
        config.base_url = "https://api.example.com".to_string();
        let client = HttpAuthClient::new(config);

        assert_eq!(
            client.endpoint("/api/auth/verify-email"),
            "https://api.example.com/api/auth/verify-email"
        );
    }
}
