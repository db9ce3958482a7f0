use dioxus::prelude::*;

use crate::components::display::{AlertBanner, Severity};
use crate::components::input::{InputType, TextField};
use crate::features::recovery::{request_password_reset, FlowState, ResetRequestReceipt};
use crate::services::api::AuthApiHandle;
use crate::services::config::BuildEnvironment;
use crate::services::navigation::NavigatorHandle;
use crate::utils::platform;

#[derive(Props, PartialEq, Clone)]
pub struct ForgotPasswordViewProps {
    pub api: AuthApiHandle,
    pub navigator: NavigatorHandle,
    #[props(default = "/auth".to_string())]
    pub auth_route: String,
    /// Included in the development token notice.
    #[props(default = "/reset-password".to_string())]
    pub reset_route: String,
    #[props(default = BuildEnvironment::current())]
    pub environment: BuildEnvironment,
}

#[component]
pub fn ForgotPasswordView(props: ForgotPasswordViewProps) -> Element {
    let mut email = use_signal(String::new);
    let mut flow = use_signal(FlowState::<ResetRequestReceipt>::default);

    let on_submit = {
        let api = props.api.clone();
        let reset_route = props.reset_route.clone();
        let environment = props.environment;
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let reset_route = reset_route.clone();
            let address = email.peek().clone();
            flow.set(FlowState::Loading);

            spawn(async move {
                let result = request_password_reset(&*api, &address, environment, &reset_route).await;
                if let Ok(ResetRequestReceipt {
                    dev_notice: Some(notice),
                    ..
                }) = &result
                {
                    platform::alert(notice);
                }
                flow.set(FlowState::from_result(result));
            });
        }
    };

    let back_navigator = props.navigator.clone();
    let auth_route = props.auth_route.clone();
    let back_to_login = move |_: MouseEvent| back_navigator.navigate(&auth_route);

    if let Some(receipt) = flow().succeeded() {
        return rsx! {
            div {
                class: "fb-page-center",
                div {
                    class: "fb-card fb-narrow-card",
                    div { class: "fb-status-icon fb-status-success", "📧" }
                    h1 { "Check Your Email" }
                    p {
                        "If an account exists with the email "
                        strong { "{receipt.email}" }
                        ", you will receive a password reset link shortly."
                    }
                    p { class: "fb-muted", "The link will expire in 1 hour for security reasons." }
                    button {
                        class: "fb-button fb-button-primary fb-button-block",
                        onclick: back_to_login,
                        "Back to Login"
                    }
                }
            }
        };
    }

    let loading = flow().is_loading();

    rsx! {
        div {
            class: "fb-page-center",
            div {
                class: "fb-card fb-narrow-card",
                h1 { "Reset Password" }
                p { class: "fb-muted", "Enter your email address and we'll send you a link to reset your password." }

                if let Some(error) = flow().error() {
                    AlertBanner { severity: Severity::Error, message: error.to_string() }
                }

                form {
                    onsubmit: on_submit,
                    TextField {
                        label: "Email Address".to_string(),
                        value: email(),
                        input_type: InputType::Email,
                        required: true,
                        autofocus: true,
                        disabled: loading,
                        on_change: move |value| email.set(value),
                    }
                    button {
                        r#type: "submit",
                        class: "fb-button fb-button-primary fb-button-block",
                        disabled: loading,
                        if loading { "Sending..." } else { "Send Reset Link" }
                    }
                }

                button {
                    class: "fb-link-button",
                    onclick: back_to_login,
                    "← Back to Login"
                }
            }
        }
    }
}
