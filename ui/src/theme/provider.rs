use dioxus::prelude::*;

use super::ThemeConfig;

const FRONTBLOK_CSS: Asset = asset!("/assets/styling/frontblok.css");

/// Injects the base stylesheet plus the theme's custom properties and makes
/// the [`ThemeConfig`] available to descendants through context. The theme
/// is read-only once provided.
#[component]
pub fn ThemeProvider(theme: ThemeConfig, children: Element) -> Element {
    let css = theme.to_css();
    use_context_provider(|| theme.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: FRONTBLOK_CSS }
        style { "{css}" }
        {children}
    }
}

/// Theme from the nearest [`ThemeProvider`], or the defaults.
pub fn use_theme() -> ThemeConfig {
    try_use_context::<ThemeConfig>().unwrap_or_default()
}
