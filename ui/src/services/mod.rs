//! Infrastructure Services
//!
//! Capability contracts the components are written against, plus the
//! default implementations shipped with the library:
//!
//! - **api**: `AuthApi` contract (reset, verify, OAuth exchange, delete)
//! - **session**: session accessor contracts (`SessionState`, `AuthSession`)
//! - **navigation**: routing capability and the browser-backed fallback
//! - **identity**: federated identity provider and OAuth nonce generation
//! - **client**: reqwest/local-storage implementation of the contracts
//! - **config**: routes, timings and endpoint configuration
//! - **errors**: validation and API error types
//!
//! All async contracts use `async_trait(?Send)`: the UI is single-threaded.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod identity;
pub mod injected;
pub mod navigation;
pub mod session;

pub use injected::Injected;
