use dioxus::prelude::*;

use crate::components::display::{AlertBanner, LoadingIndicator, Severity};
use crate::theme::use_theme;

/// One "old → new" row in the changes section.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeDetail {
    pub label: String,
    pub old_value: String,
    pub new_value: String,
}

impl ChangeDetail {
    pub fn new(
        label: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ConfirmationModalProps {
    pub open: bool,
    pub title: String,
    #[props(default)]
    pub message: Option<String>,
    /// Rich body; takes precedence over `message`.
    #[props(default)]
    pub message_content: Option<Element>,
    #[props(default = "Confirm".to_string())]
    pub confirm_text: String,
    #[props(default = "Cancel".to_string())]
    pub cancel_text: String,
    #[props(default)]
    pub severity: Severity,
    #[props(default)]
    pub is_loading: bool,
    /// Shown beside the spinner while loading.
    #[props(default)]
    pub loading_text: Option<String>,
    #[props(default)]
    pub warning: Option<String>,
    #[props(default)]
    pub details: Vec<ChangeDetail>,
    #[props(default)]
    pub bullet_points: Vec<String>,
    pub on_close: EventHandler<()>,
    pub on_confirm: EventHandler<()>,
}

/// Whether backdrop, Escape or cancel may close the dialog.
pub fn can_dismiss(is_loading: bool) -> bool {
    !is_loading
}

#[component]
pub fn ConfirmationModal(props: ConfirmationModalProps) -> Element {
    let theme = use_theme();

    if !props.open {
        return rsx! {};
    }

    let accent = theme
        .color(props.severity.palette_key())
        .unwrap_or("currentColor")
        .to_string();
    let loading = props.is_loading;
    let on_close = props.on_close;
    let on_confirm = props.on_confirm;

    rsx! {
        div {
            class: "fb-modal-backdrop",
            tabindex: "-1",
            onclick: move |_| {
                if can_dismiss(loading) {
                    on_close.call(());
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape && can_dismiss(loading) {
                    on_close.call(());
                }
            },

            div {
                class: "fb-modal fb-card",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "fb-modal-header",
                    span {
                        class: "fb-modal-icon",
                        style: "color: {accent};",
                        "{props.severity.icon()}"
                    }
                    h2 { class: "fb-modal-title", "{props.title}" }
                }

                div {
                    class: "fb-modal-body",

                    if let Some(content) = props.message_content {
                        {content}
                    } else if let Some(message) = props.message {
                        p { class: "fb-modal-message", "{message}" }
                    }

                    if !props.details.is_empty() {
                        div {
                            class: "fb-modal-section",
                            h4 { "Changes:" }
                            for detail in props.details.iter() {
                                div {
                                    key: "{detail.label}",
                                    class: "fb-modal-change",
                                    span { class: "fb-modal-change-label", "{detail.label}: " }
                                    span { class: "fb-modal-change-old", "{detail.old_value}" }
                                    " → "
                                    span { class: "fb-modal-change-new", "{detail.new_value}" }
                                }
                            }
                        }
                    }

                    if !props.bullet_points.is_empty() {
                        div {
                            class: "fb-modal-section",
                            h4 { "This action will:" }
                            ul {
                                for point in props.bullet_points.iter() {
                                    li { "{point}" }
                                }
                            }
                        }
                    }

                    if let Some(warning) = props.warning {
                        AlertBanner { severity: Severity::Warning, message: warning }
                    }
                }

                div {
                    class: "fb-modal-actions",
                    button {
                        class: "fb-button fb-button-secondary",
                        disabled: loading,
                        onclick: move |_| {
                            if can_dismiss(loading) {
                                on_close.call(());
                            }
                        },
                        "{props.cancel_text}"
                    }
                    button {
                        class: "fb-button fb-button-{props.severity.class_name()}",
                        style: "background: {accent};",
                        disabled: loading,
                        onclick: move |_| on_confirm.call(()),
                        if loading {
                            LoadingIndicator { size: 16, message: props.loading_text.clone() }
                        } else {
                            "{props.confirm_text}"
                        }
                    }
                }
            }
        }
    }
}
