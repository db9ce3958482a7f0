//! Forgot-password, reset-password and verify-email flows.

pub mod controller;
pub mod types;

pub use controller::*;
pub use types::*;
