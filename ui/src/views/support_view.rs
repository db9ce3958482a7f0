use dioxus::prelude::*;

use crate::components::display::{AlertBanner, Severity};
use crate::components::input::{TextAreaField, TextField};
use crate::utils::sleep_ms;
use crate::console_info;

/// Local-only support form; nothing leaves the browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupportForm {
    pub subject: String,
    pub message: String,
    pub submitted: bool,
}

impl SupportForm {
    pub fn submit(&mut self) {
        self.submitted = true;
    }

    /// Clears the fields once the confirmation has been shown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SupportViewProps {
    /// How long the confirmation stays up before the form clears.
    #[props(default = 3000)]
    pub reset_delay_ms: u64,
}

#[component]
pub fn SupportView(props: SupportViewProps) -> Element {
    let mut form = use_signal(SupportForm::default);
    let delay = props.reset_delay_ms;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        form.with_mut(SupportForm::submit);
        console_info!("[Support] Request captured locally");
        spawn(async move {
            sleep_ms(delay).await;
            form.with_mut(SupportForm::reset);
        });
    };

    let current = form();

    rsx! {
        div {
            class: "fb-page",
            header {
                class: "fb-page-header",
                h1 { "Support" }
                p { class: "fb-muted", "Need help? Send us a message and we'll get back to you within 4 hours" }
            }

            div {
                class: "fb-status-banner",
                span { class: "fb-status-dot" }
                "All systems operational • Average response: 2.3 hours"
            }

            div {
                class: "fb-support-grid",

                section {
                    class: "fb-card",
                    h2 { "Send Support Request" }

                    if current.submitted {
                        AlertBanner {
                            severity: Severity::Success,
                            message: "Request submitted! We'll respond within 4 hours.".to_string(),
                        }
                    }

                    form {
                        onsubmit: on_submit,
                        TextField {
                            label: "Subject".to_string(),
                            value: current.subject.clone(),
                            placeholder: "Brief description of your issue".to_string(),
                            required: true,
                            on_change: move |value| form.with_mut(|f| f.subject = value),
                        }
                        TextAreaField {
                            label: "Message".to_string(),
                            value: current.message.clone(),
                            placeholder: "Please provide details about your issue...".to_string(),
                            rows: 8,
                            required: true,
                            on_change: move |value| form.with_mut(|f| f.message = value),
                        }
                        button {
                            r#type: "submit",
                            class: "fb-button fb-button-primary",
                            disabled: current.submitted,
                            "✉️ Send Request"
                        }
                    }
                }

                aside {
                    class: "fb-support-side",
                    section {
                        class: "fb-card",
                        h3 { "Quick Help" }
                        ul {
                            li { strong { "Documentation" } " - Guides and API reference" }
                            li { strong { "Dashboard" } " - Check your usage and account status" }
                            li { strong { "Projects" } " - Manage your projects and settings" }
                        }
                    }
                    section {
                        class: "fb-card",
                        h3 { "Response Time" }
                        p { class: "fb-response-time", "Within 4 hours" }
                        p { class: "fb-muted", "Monday - Friday" }
                        p { class: "fb-muted", "9:00 AM - 6:00 PM PST" }
                    }
                }
            }
        }
    }
}
