//! Page-level views. Each takes its capabilities as props and renders a
//! complete screen.

pub mod auth_view;
pub mod forgot_password_view;
pub mod reset_password_view;
pub mod settings_view;
pub mod support_view;
pub mod verify_email_view;

pub use auth_view::*;
pub use forgot_password_view::*;
pub use reset_password_view::*;
pub use settings_view::*;
pub use support_view::*;
pub use verify_email_view::*;
