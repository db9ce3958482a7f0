//! Browser Window Utilities
//!
//! Thin wrappers over `web_sys::window()` used by the components for the
//! few operations that must bypass the host router:
//!
//! - full-page navigation and reload (error recovery, OAuth completion)
//! - reading the current path and query string
//! - blocking alerts for development diagnostics
//! - window scroll subscription with automatic removal
//!
//! On non-wasm targets these degrade to no-ops so the pure logic that calls
//! them stays testable natively.

use crate::{console_debug, console_warn};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Current location path, e.g. `/settings`.
#[cfg(target_arch = "wasm32")]
pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_path() -> String {
    "/".to_string()
}

/// Scheme, host and port of the current page, e.g. `https://app.example.com`.
#[cfg(target_arch = "wasm32")]
pub fn location_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_origin() -> String {
    String::new()
}

/// Look up a single query-string parameter from the current location.
#[cfg(target_arch = "wasm32")]
pub fn query_param(key: &str) -> Option<String> {
    let search = window().and_then(|w| w.location().search().ok())?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key).filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn query_param(_key: &str) -> Option<String> {
    None
}

/// Full document navigation. Discards all in-memory component state.
pub fn hard_navigate(route: &str) {
    console_debug!("[Platform] Hard navigation to {}", route);

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(w) = window() {
            if let Err(e) = w.location().set_href(route) {
                console_warn!("[Platform] Failed to navigate to {}: {:?}", route, e);
            }
        }
    }
}

/// Force a reload of the current document.
pub fn reload() {
    console_debug!("[Platform] Reloading document");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(w) = window() {
            if let Err(e) = w.location().reload() {
                console_warn!("[Platform] Reload failed: {:?}", e);
            }
        }
    }
}

/// Blocking browser alert. Only used for development diagnostics.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        console_warn!("[Platform] alert: {}", message);
    }
}

/// Window scroll subscription. The listener is detached when dropped.
pub struct ScrollListener {
    #[cfg(target_arch = "wasm32")]
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ScrollListener {
    pub fn attach(mut on_scroll: impl FnMut() + 'static) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let callback =
                Closure::wrap(Box::new(move |_event: web_sys::Event| on_scroll())
                    as Box<dyn FnMut(web_sys::Event)>);
            let w = window()?;
            w.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { callback })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &mut on_scroll;
            None
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(w) = window() {
                let _ = w.remove_event_listener_with_callback(
                    "scroll",
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_location_defaults_to_root() {
        assert_eq!(location_path(), "/");
        assert_eq!(location_origin(), "");
        assert_eq!(query_param("token"), None);
    }

    #[test]
    fn test_scroll_listener_is_inert_natively() {
        assert!(ScrollListener::attach(|| {}).is_none());
    }
}
