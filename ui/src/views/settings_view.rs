use dioxus::prelude::*;

use crate::components::display::{AlertBanner, Avatar, Severity};
use crate::components::input::{InputType, ValidatedInput};
use crate::components::shared::ConfirmationModal;
use crate::features::account::{delete_account, DeletionDialog, DELETE_CONFIRMATION};
use crate::services::api::AuthApiHandle;
use crate::services::navigation::NavigatorHandle;
use crate::services::session::SessionHandle;

#[derive(Props, PartialEq, Clone)]
pub struct SettingsViewProps {
    pub session: SessionHandle,
    pub api: AuthApiHandle,
    pub navigator: NavigatorHandle,
    #[props(default = "/".to_string())]
    pub home_route: String,
    /// Extra host sections, rendered between account actions and the danger zone.
    #[props(default)]
    pub children: Option<Element>,
}

#[component]
pub fn SettingsView(props: SettingsViewProps) -> Element {
    let mut dialog = use_signal(DeletionDialog::default);

    let user = props.session.user();
    let initial = user.as_ref().and_then(|u| u.initial());
    let name = user.as_ref().map(|u| u.full_name()).unwrap_or_default();
    let email = user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default();

    let sign_out = {
        let session = props.session.clone();
        let navigator = props.navigator.clone();
        let home_route = props.home_route.clone();
        move |_: MouseEvent| {
            session.logout();
            navigator.navigate(&home_route);
        }
    };

    let confirm_delete = {
        let api = props.api.clone();
        let session = props.session.clone();
        let navigator = props.navigator.clone();
        let home_route = props.home_route.clone();
        move |_: ()| {
            let snapshot = dialog.peek().clone();
            dialog.with_mut(|d| {
                d.loading = true;
                d.error = None;
            });

            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let home_route = home_route.clone();
            spawn(async move {
                match delete_account(&*api, &*session, &snapshot.password, &snapshot.confirm_text).await {
                    Ok(_) => {
                        dialog.set(DeletionDialog::default());
                        navigator.navigate(&home_route);
                    }
                    Err(message) => dialog.with_mut(|d| {
                        d.loading = false;
                        d.error = Some(message);
                    }),
                }
            });
        }
    };

    let state = dialog();

    rsx! {
        div {
            class: "fb-page",
            header {
                class: "fb-page-header",
                h1 { "Settings" }
                p { class: "fb-muted", "Manage your account settings and preferences." }
            }

            section {
                class: "fb-card fb-settings-section",
                h2 { "Profile Information" }
                div {
                    class: "fb-profile-row",
                    Avatar { initial, size: 64 }
                    div {
                        class: "fb-profile-fields",
                        div {
                            span { class: "fb-field-label", "Name" }
                            span { class: "fb-field-value", "{name}" }
                        }
                        div {
                            span { class: "fb-field-label", "Email" }
                            span { class: "fb-field-value", "{email}" }
                        }
                    }
                }
            }

            section {
                class: "fb-card fb-settings-section",
                h2 { "Account Actions" }
                div {
                    class: "fb-settings-row",
                    div {
                        h3 { "Sign Out" }
                        p { class: "fb-muted", "Sign out of your account on this device." }
                    }
                    button {
                        class: "fb-button fb-button-secondary",
                        onclick: sign_out,
                        "Sign Out"
                    }
                }
            }

            if let Some(children) = props.children {
                {children}
            }

            section {
                class: "fb-card fb-settings-section fb-danger-zone",
                h2 { "Danger Zone" }
                div {
                    class: "fb-settings-row",
                    div {
                        h3 { "Delete Account" }
                        p { class: "fb-muted", "Permanently delete your account and all associated data." }
                    }
                    button {
                        class: "fb-button fb-button-error",
                        onclick: move |_| dialog.set(DeletionDialog::opened()),
                        "Delete Account"
                    }
                }
            }

            ConfirmationModal {
                open: state.open,
                title: "Delete Account".to_string(),
                severity: Severity::Error,
                confirm_text: "Delete My Account".to_string(),
                is_loading: state.loading,
                loading_text: "Deleting...".to_string(),
                on_close: move |_| dialog.with_mut(|d| d.close()),
                on_confirm: confirm_delete,
                message_content: rsx! {
                    AlertBanner {
                        severity: Severity::Error,
                        message: "This action cannot be undone. All your data will be permanently deleted.".to_string(),
                    }
                    if let Some(error) = state.error.clone() {
                        AlertBanner { severity: Severity::Error, message: error }
                    }
                    p { "Enter your password and type {DELETE_CONFIRMATION} to confirm:" }
                    ValidatedInput {
                        value: state.password.clone(),
                        placeholder: "Enter your password".to_string(),
                        input_type: InputType::Password,
                        disabled: state.loading,
                        on_change: move |value| dialog.with_mut(|d| d.password = value),
                    }
                    ValidatedInput {
                        value: state.confirm_text.clone(),
                        placeholder: format!("Type {DELETE_CONFIRMATION} to confirm"),
                        disabled: state.loading,
                        on_change: move |value| dialog.with_mut(|d| d.confirm_text = value),
                    }
                },
            }
        }
    }
}
