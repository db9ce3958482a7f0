//! Reusable authentication and application-shell UI for Dioxus apps.
//!
//! The library never talks to a router or a backend directly: views receive
//! their capabilities (session accessor, auth API, navigator, identity
//! provider) as props, and [`services::client`] ships a default HTTP-backed
//! implementation of the contracts.

pub mod components;
pub mod features;
pub mod services;
pub mod theme;
pub mod utils;
pub mod views;

pub use components::shared::{ConfirmationModal, ErrorBoundary, ErrorFallback};
pub use features::branding::{Branding, BrandingMessages};
pub use features::navbar::{create_navbar, NavbarComponent, NavbarConfig};
pub use services::config::UiConfig;
pub use services::Injected;
pub use theme::{create_theme, ThemeConfig, ThemeOverrides, ThemeProvider};
pub use views::*;
