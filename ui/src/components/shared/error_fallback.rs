use dioxus::prelude::*;

use crate::features::boundary::ROOT_ROUTE;
use crate::services::config::BuildEnvironment;
use crate::utils::platform;

pub const DEFAULT_SUPPORT_EMAIL: &str = "support@example.com";

#[derive(Props, PartialEq, Clone)]
pub struct ErrorFallbackProps {
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub trace: Option<String>,
    /// Runs before the hard navigation home.
    #[props(default)]
    pub on_reset: Option<EventHandler<()>>,
    #[props(default = DEFAULT_SUPPORT_EMAIL.to_string())]
    pub support_email: String,
    #[props(default = BuildEnvironment::current())]
    pub environment: BuildEnvironment,
}

/// Stateless failure screen. Diagnostic detail is only rendered in
/// development builds.
#[component]
pub fn ErrorFallback(props: ErrorFallbackProps) -> Element {
    let on_reset = props.on_reset;
    let show_details = props.environment.is_development()
        && (props.error.is_some() || props.trace.is_some());

    rsx! {
        div {
            class: "fb-error-fallback",
            div {
                class: "fb-card fb-error-card",
                div { class: "fb-error-icon", "⚠️" }
                h1 { class: "fb-error-title", "Oops! Something went wrong" }
                p {
                    class: "fb-error-body",
                    "We're sorry for the inconvenience. An unexpected error occurred. Our team has been notified and we're working on a fix."
                }

                if show_details {
                    div {
                        class: "fb-error-details",
                        h4 { "Error Details (Development Only):" }
                        if let Some(error) = props.error.as_ref() {
                            pre { class: "fb-error-message", "{error}" }
                        }
                        if let Some(trace) = props.trace.as_ref() {
                            pre { class: "fb-error-trace", "{trace}" }
                        }
                    }
                }

                div {
                    class: "fb-error-actions",
                    button {
                        class: "fb-button fb-button-primary",
                        onclick: move |_| match on_reset {
                            Some(handler) => handler.call(()),
                            None => platform::hard_navigate(ROOT_ROUTE),
                        },
                        "🏠 Return to Home"
                    }
                    button {
                        class: "fb-button fb-button-secondary",
                        onclick: move |_| platform::reload(),
                        "🔄 Reload Page"
                    }
                }

                p {
                    class: "fb-error-contact",
                    "If the problem persists, please contact "
                    a { href: "mailto:{props.support_email}", "{props.support_email}" }
                }
            }
        }
    }
}
