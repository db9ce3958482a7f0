use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    #[props(default)]
    pub message: Option<String>,
    /// Diameter in pixels.
    #[props(default = 20)]
    pub size: u32,
}

/// Spinner, optionally followed by a caption.
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "fb-loading",
            role: "status",
            span {
                class: "fb-spinner",
                style: "width: {props.size}px; height: {props.size}px;",
            }
            if let Some(message) = props.message {
                span { class: "fb-loading-message", "{message}" }
            }
        }
    }
}
