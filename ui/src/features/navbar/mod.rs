//! Navbar factory.
//!
//! [`create_navbar`] closes a [`NavbarConfig`] into a [`NavbarComponent`]
//! handle. The handle is not a component itself: hosts call
//! [`NavbarComponent::render`] from their layout, which reads the current
//! path from the injected navigator and renders
//! [`NavbarView`](crate::components::shared::NavbarView).

pub mod config;
pub mod state;

pub use config::*;
pub use state::*;

use dioxus::prelude::*;

use crate::components::shared::NavbarView;

#[derive(Clone, PartialEq)]
pub struct NavbarComponent {
    config: NavbarConfig,
}

pub fn create_navbar(config: NavbarConfig) -> NavbarComponent {
    NavbarComponent { config }
}

impl NavbarComponent {
    pub fn config(&self) -> &NavbarConfig {
        &self.config
    }

    pub fn render(&self) -> Element {
        let location = self.config.navigator.current_path();
        rsx! {
            NavbarView { navbar: self.clone(), location }
        }
    }
}
