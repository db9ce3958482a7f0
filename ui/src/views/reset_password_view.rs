use dioxus::prelude::*;

use crate::components::display::{AlertBanner, Severity};
use crate::components::input::{InputType, TextField};
use crate::features::recovery::{missing_reset_token, reset_password, FlowState};
use crate::services::api::AuthApiHandle;
use crate::services::navigation::NavigatorHandle;

#[derive(Props, PartialEq, Clone)]
pub struct ResetPasswordViewProps {
    pub api: AuthApiHandle,
    pub navigator: NavigatorHandle,
    /// Falls back to the `token` query parameter.
    #[props(default)]
    pub token: Option<String>,
    #[props(default = "/auth".to_string())]
    pub auth_route: String,
}

#[component]
pub fn ResetPasswordView(props: ResetPasswordViewProps) -> Element {
    let token = use_hook({
        let navigator = props.navigator.clone();
        let token = props.token.clone();
        move || token.filter(|t| !t.is_empty()).or_else(|| navigator.query_param("token"))
    });

    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut flow = use_signal({
        let token = token.clone();
        move || match missing_reset_token(token.as_deref()) {
            Some(error) => FlowState::<()>::Failed(error.to_string()),
            None => FlowState::Idle,
        }
    });

    let on_submit = {
        let api = props.api.clone();
        let token = token.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let token = token.clone();
            let password = new_password.peek().clone();
            let confirm = confirm_password.peek().clone();
            flow.set(FlowState::Loading);

            spawn(async move {
                let result = reset_password(&*api, token.as_deref(), &password, &confirm).await;
                flow.set(FlowState::from_result(result));
            });
        }
    };

    let login_navigator = props.navigator.clone();
    let auth_route = props.auth_route.clone();

    if flow().succeeded().is_some() {
        return rsx! {
            div {
                class: "fb-page-center",
                div {
                    class: "fb-card fb-narrow-card",
                    div { class: "fb-status-icon fb-status-success", "✅" }
                    h1 { "Password Reset Successful" }
                    p { "Your password has been updated. You can now log in with your new password." }
                    button {
                        class: "fb-button fb-button-primary fb-button-block",
                        onclick: move |_| login_navigator.navigate(&auth_route),
                        "Go to Login"
                    }
                }
            }
        };
    }

    let loading = flow().is_loading();
    let can_submit = !loading && token.is_some();

    rsx! {
        div {
            class: "fb-page-center",
            div {
                class: "fb-card fb-narrow-card",
                h1 { "Set New Password" }
                p { class: "fb-muted", "Enter your new password below." }

                if let Some(error) = flow().error() {
                    AlertBanner { severity: Severity::Error, message: error.to_string() }
                }

                form {
                    onsubmit: on_submit,
                    TextField {
                        label: "New Password".to_string(),
                        value: new_password(),
                        input_type: InputType::Password,
                        helper: "Must be at least 8 characters".to_string(),
                        required: true,
                        autofocus: true,
                        disabled: token.is_none(),
                        on_change: move |value| new_password.set(value),
                    }
                    TextField {
                        label: "Confirm New Password".to_string(),
                        value: confirm_password(),
                        input_type: InputType::Password,
                        required: true,
                        disabled: token.is_none(),
                        on_change: move |value| confirm_password.set(value),
                    }
                    button {
                        r#type: "submit",
                        class: "fb-button fb-button-primary fb-button-block",
                        disabled: !can_submit,
                        if loading { "Resetting..." } else { "Reset Password" }
                    }
                }
            }
        }
    }
}
