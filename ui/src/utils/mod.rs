//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging macros (browser console / tracing)
//! - **platform**: browser window helpers (hard navigation, query string, scroll)
//! - **timing**: executor-agnostic sleep used for delayed UI effects

pub mod console_macros;
pub mod platform;
pub mod timing;

pub use timing::*;
