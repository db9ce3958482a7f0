//! Federated identity (OAuth) capability and CSRF nonce generation.

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use std::rc::Rc;

use crate::services::errors::ApiResult;
use crate::services::injected::Injected;

#[cfg(target_arch = "wasm32")]
pub mod google;
#[cfg(target_arch = "wasm32")]
pub use google::GoogleIdentity;

/// Third-party identity provider able to produce a signed credential bound
/// to a nonce.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// `Ok(None)` means the provider finished without handing back a
    /// credential; `Err` means the provider flow itself failed.
    async fn request_credential(&self, nonce: &str) -> ApiResult<Option<String>>;
}

pub type IdentityHandle = Injected<dyn IdentityProvider>;

const NONCE_BYTES: usize = 32;

/// GIS prompt-moment predicates that end a prompt without a credential.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) const PROMPT_END_CHECKS: [&str; 3] =
    ["isNotDisplayed", "isSkippedMoment", "isDismissedMoment"];

/// Produces a fresh unpredictable token on every call, or an error when no
/// secure random source is available.
pub type NonceGenerator = Injected<dyn Fn() -> ApiResult<String>>;

/// 32 random bytes, URL-safe base64. Browser crypto on wasm32 (through
/// getrandom's `js` backend), the OS source elsewhere.
pub fn generate_oauth_nonce() -> ApiResult<String> {
    let mut bytes = [0u8; NONCE_BYTES];
    getrandom::getrandom(&mut bytes)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

pub fn default_nonce_generator() -> NonceGenerator {
    Injected::new(Rc::new(generate_oauth_nonce) as Rc<dyn Fn() -> ApiResult<String>>)
}

/// First characters of a nonce, safe to write to logs.
pub fn nonce_preview(nonce: &str) -> String {
    let head: String = nonce.chars().take(8).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::errors::ApiError;

    #[test]
    fn test_nonces_are_unique_and_url_safe() {
        let a = generate_oauth_nonce().unwrap();
        let b = generate_oauth_nonce().unwrap();

        assert_ne!(a, b);
        // 32 bytes -> 43 base64 characters without padding
        assert_eq!(a.len(), 43);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_dismissed_prompt_ends_the_request() {
        assert!(PROMPT_END_CHECKS.contains(&"isDismissedMoment"));
        assert!(PROMPT_END_CHECKS.contains(&"isNotDisplayed"));
        assert!(PROMPT_END_CHECKS.contains(&"isSkippedMoment"));
    }

    #[test]
    fn test_nonce_preview_truncates() {
        assert_eq!(nonce_preview("abcdefghijklmnop"), "abcdefgh...");
        assert_eq!(nonce_preview("abc"), "abc...");
    }

    #[test]
    fn test_default_generator_produces_fresh_values() {
        let generator = default_nonce_generator();
        assert_ne!((generator)().unwrap(), (generator)().unwrap());
    }

    #[test]
    fn test_entropy_failure_surfaces_as_error() {
        let failing: NonceGenerator = Injected::new(Rc::new(|| {
            Err(ApiError::Entropy {
                message: "no crypto".to_string(),
            })
        }) as Rc<dyn Fn() -> ApiResult<String>>);

        let error = (failing)().unwrap_err();
        assert_eq!(error.to_string(), "Secure random source unavailable: no crypto");
    }
}
