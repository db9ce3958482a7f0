//! Host-supplied cosmetic and textual configuration for the auth views.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingMessages {
    pub login_success: String,
    pub register_success: String,
    pub google_new_user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    pub app_name: String,
    pub tagline: String,
    /// Single glyph shown in the logo tile.
    pub logo_letter: String,
    /// CSS gradient for primary buttons and the logo tile.
    pub primary_gradient: String,
    pub primary_gradient_hover: String,
    pub logo_shadow: String,
    /// Route to open after a successful sign-in.
    pub dashboard_route: String,
    pub messages: BrandingMessages,
    pub security_badge: String,
}
