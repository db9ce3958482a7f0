use dioxus::prelude::*;

use crate::components::display::{AlertBanner, LoadingIndicator, Severity};
use crate::features::recovery::{verify_email, FlowState};
use crate::services::api::AuthApiHandle;
use crate::services::navigation::NavigatorHandle;

#[derive(Props, PartialEq, Clone)]
pub struct VerifyEmailViewProps {
    pub api: AuthApiHandle,
    pub navigator: NavigatorHandle,
    /// Falls back to the `token` query parameter.
    #[props(default)]
    pub token: Option<String>,
    #[props(default = "/projects".to_string())]
    pub success_route: String,
    #[props(default = "/settings".to_string())]
    pub error_route: String,
}

/// Verifies on mount; there is no idle state.
#[component]
pub fn VerifyEmailView(props: VerifyEmailViewProps) -> Element {
    let mut flow = use_signal(|| FlowState::<()>::Loading);

    use_hook({
        let api = props.api.clone();
        let token = props
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| props.navigator.query_param("token"));
        move || {
            spawn(async move {
                let result = verify_email(&*api, token.as_deref()).await;
                flow.set(FlowState::from_result(result));
            })
        }
    });

    let navigator = props.navigator.clone();

    match flow() {
        FlowState::Idle | FlowState::Loading => rsx! {
            div {
                class: "fb-page-center",
                div {
                    class: "fb-card fb-narrow-card",
                    LoadingIndicator { size: 40 }
                    h2 { "Verifying your email..." }
                }
            }
        },
        FlowState::Succeeded(()) => {
            let route = props.success_route.clone();
            rsx! {
                div {
                    class: "fb-page-center",
                    div {
                        class: "fb-card fb-narrow-card",
                        div { class: "fb-status-icon fb-status-success", "✅" }
                        h1 { "Email Verified!" }
                        p { "Your email address has been successfully verified. You can now access all features of your account." }
                        button {
                            class: "fb-button fb-button-primary fb-button-block",
                            onclick: move |_| navigator.navigate(&route),
                            "Continue"
                        }
                    }
                }
            }
        }
        FlowState::Failed(error) => {
            let route = props.error_route.clone();
            rsx! {
                div {
                    class: "fb-page-center",
                    div {
                        class: "fb-card fb-narrow-card",
                        div { class: "fb-status-icon fb-status-error", "❌" }
                        h1 { "Verification Failed" }
                        AlertBanner { severity: Severity::Error, message: error }
                        p {
                            class: "fb-muted",
                            "The verification link may have expired or is invalid. Please request a new verification email from your account settings."
                        }
                        button {
                            class: "fb-button fb-button-secondary fb-button-block",
                            onclick: move |_| navigator.navigate(&route),
                            "Go to Settings"
                        }
                    }
                }
            }
        }
    }
}
