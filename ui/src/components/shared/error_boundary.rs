use dioxus::prelude::ErrorBoundary as SubtreeBoundary;
use dioxus::prelude::*;

use super::error_fallback::{ErrorFallback, DEFAULT_SUPPORT_EMAIL};
use crate::features::boundary::BoundaryController;
use crate::services::config::BuildEnvironment;
use crate::services::navigation::NavigatorHandle;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorBoundaryProps {
    #[props(default = DEFAULT_SUPPORT_EMAIL.to_string())]
    pub support_email: String,
    #[props(default = BuildEnvironment::current())]
    pub environment: BuildEnvironment,
    /// Used for the hard navigation on reset; the browser location otherwise.
    #[props(default)]
    pub navigator: Option<NavigatorHandle>,
    pub children: Element,
}

/// Catches render failures in `children` and shows [`ErrorFallback`]
/// until the user resets.
#[component]
pub fn ErrorBoundary(props: ErrorBoundaryProps) -> Element {
    let controller = use_hook(BoundaryController::default);
    let support_email = props.support_email.clone();
    let environment = props.environment;
    let navigator = props.navigator.clone();

    rsx! {
        SubtreeBoundary {
            handle_error: move |errors: ErrorContext| {
                let captured = errors
                    .errors()
                    .first()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                let report = controller.capture(&captured);

                let controller = controller.clone();
                let navigator = navigator.clone();
                rsx! {
                    ErrorFallback {
                        error: report.message.clone(),
                        trace: report.trace.clone(),
                        support_email: support_email.clone(),
                        environment,
                        on_reset: move |_| {
                            errors.clear_errors();
                            controller.reset(navigator.as_deref());
                        },
                    }
                }
            },
            {props.children}
        }
    }
}
