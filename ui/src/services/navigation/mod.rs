//! Navigation capability.
//!
//! Soft navigation and the location read come from the host's routing
//! layer. Hard navigation and reload default to the browser window, which
//! is what the error boundary and the OAuth completion path need.

use crate::services::injected::Injected;
use crate::utils::platform;

pub trait Navigator {
    /// Client-side route change.
    fn navigate(&self, route: &str);

    /// Path of the current location, without the query string.
    fn current_path(&self) -> String;

    /// Value of a query-string parameter on the current location.
    fn query_param(&self, key: &str) -> Option<String>;

    /// Full document navigation, discarding in-memory state.
    fn hard_navigate(&self, route: &str) {
        platform::hard_navigate(route);
    }

    fn reload(&self) {
        platform::reload();
    }
}

pub type NavigatorHandle = Injected<dyn Navigator>;

/// Navigator that drives the browser location directly. Every navigation
/// is a full page load; useful for hosts without a client router.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &str) {
        platform::hard_navigate(route);
    }

    fn current_path(&self) -> String {
        platform::location_path()
    }

    fn query_param(&self, key: &str) -> Option<String> {
        platform::query_param(key)
    }
}
