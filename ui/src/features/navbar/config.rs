use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::services::injected::Injected;
use crate::services::navigation::NavigatorHandle;
use crate::services::session::SessionHandle;
use crate::theme::Gradient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Route path; also the identity used for the active check.
    pub id: String,
    pub label: String,
    /// Glyph rendered before the label.
    #[serde(default)]
    pub icon: Option<String>,
}

impl NavigationItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    /// Image URL for the logo.
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    pub public: Vec<NavigationItem>,
    pub authenticated: Vec<NavigationItem>,
}

/// `(item_id, current_path) -> active`
pub type ActivePredicate = Injected<dyn Fn(&str, &str) -> bool>;

#[derive(Clone, PartialEq)]
pub struct NavbarConfig {
    pub brand: BrandConfig,
    pub navigation: NavigationConfig,
    pub session: SessionHandle,
    pub navigator: NavigatorHandle,
    pub gradient: Gradient,
    pub role_label: String,
    pub auth_route: String,
    pub settings_route: String,
    pub is_active: Option<ActivePredicate>,
}

impl NavbarConfig {
    /// Required fields; the rest take their defaults.
    pub fn new(
        brand: BrandConfig,
        navigation: NavigationConfig,
        session: SessionHandle,
        navigator: NavigatorHandle,
        gradient: Gradient,
    ) -> Self {
        Self {
            brand,
            navigation,
            session,
            navigator,
            gradient,
            role_label: "User".to_string(),
            auth_route: "/auth".to_string(),
            settings_route: "/settings".to_string(),
            is_active: None,
        }
    }

    pub fn with_role_label(mut self, label: impl Into<String>) -> Self {
        self.role_label = label.into();
        self
    }

    pub fn with_auth_route(mut self, route: impl Into<String>) -> Self {
        self.auth_route = route.into();
        self
    }

    pub fn with_settings_route(mut self, route: impl Into<String>) -> Self {
        self.settings_route = route.into();
        self
    }

    pub fn with_active_predicate(mut self, predicate: impl Fn(&str, &str) -> bool + 'static) -> Self {
        self.is_active = Some(Injected::new(
            Rc::new(predicate) as Rc<dyn Fn(&str, &str) -> bool>
        ));
        self
    }
}
