//! User Interface Components
//!
//! Reusable Dioxus components shared by the views:
//!
//! - **display**: Spinners, alert banners and avatars
//! - **input**: Text inputs and labelled fields
//! - **shared**: Confirmation dialog, error boundary and fallback, navbar
//!
//! Everything here reads styling from the [`ThemeProvider`](crate::theme::ThemeProvider)
//! context and falls back to the default theme when none is mounted.

pub mod display;
pub mod input;
pub mod shared;
