//! Bundled client for REST auth backends.
//!
//! - **http_auth_client**: reqwest implementation of the `AuthApi` contract
//! - **session**: signal-backed `AuthSession` over that client
//! - **token_store**: local-storage persistence of the access token and profile
//! - **types**: request/response payloads

pub mod http_auth_client;
pub mod session;
pub mod token_store;
pub mod types;

pub use http_auth_client::HttpAuthClient;
pub use session::ClientSession;
pub use token_store::TokenStore;
pub use types::SessionGrant;
