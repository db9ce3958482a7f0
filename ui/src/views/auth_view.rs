use dioxus::prelude::*;

use crate::components::display::{AlertBanner, LoadingIndicator, Severity};
use crate::components::input::{InputType, TextField};
use crate::features::auth::*;
use crate::features::branding::Branding;
use crate::services::api::AuthApiHandle;
use crate::services::config::TimingConfig;
use crate::services::identity::{default_nonce_generator, nonce_preview, IdentityHandle, NonceGenerator};
use crate::services::navigation::NavigatorHandle;
use crate::services::session::AuthSessionHandle;
use crate::{console_debug, console_error};

#[derive(Props, PartialEq, Clone)]
pub struct AuthViewProps {
    pub branding: Branding,
    pub session: AuthSessionHandle,
    pub api: AuthApiHandle,
    pub navigator: NavigatorHandle,
    /// Google sign-in is hidden without a provider.
    #[props(default)]
    pub identity: Option<IdentityHandle>,
    #[props(default = default_nonce_generator())]
    pub nonce_generator: NonceGenerator,
    #[props(default)]
    pub timings: TimingConfig,
    #[props(default = "/forgot-password".to_string())]
    pub forgot_password_route: String,
}

/// Combined sign-in / registration screen.
#[component]
pub fn AuthView(props: AuthViewProps) -> Element {
    let mut state = use_signal(AuthViewState::default);
    let dispatch = EventHandler::new(move |action: AuthAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    // One nonce per mount. Without one the provider control stays disabled.
    let nonce = use_hook({
        let generator = props.nonce_generator.clone();
        move || match (generator)() {
            Ok(nonce) => {
                console_debug!(format!("[Auth] OAuth nonce generated: {}", nonce_preview(&nonce)));
                Some(nonce)
            }
            Err(error) => {
                console_error!(format!("[Auth] Could not generate OAuth nonce: {error}"));
                None
            }
        }
    });

    let view = state();
    let mode = view.mode;
    let busy = props.session.is_loading() || view.status == SubmitStatus::Submitting;
    let error = view.display_error(props.session.error());
    let branding = props.branding.clone();
    let google_ready = nonce.is_some();

    let on_submit = {
        let session = props.session.clone();
        let navigator = props.navigator.clone();
        let branding = props.branding.clone();
        let timings = props.timings.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            dispatch.call(AuthAction::SubmitStarted);
            let snapshot = state.peek().clone();

            let session = session.clone();
            let navigator = navigator.clone();
            let branding = branding.clone();
            let timings = timings.clone();
            spawn(async move {
                let flow = AuthFlow {
                    navigator: &*navigator,
                    branding: &branding,
                    timings: &timings,
                };
                flow.submit(&*session, &snapshot, &state).await;
            });
        }
    };

    let on_google = {
        let api = props.api.clone();
        let identity = props.identity.clone();
        let navigator = props.navigator.clone();
        let branding = props.branding.clone();
        let timings = props.timings.clone();
        move |_: MouseEvent| {
            let (Some(identity), Some(nonce)) = (identity.clone(), nonce.clone()) else {
                return;
            };
            let api = api.clone();
            let navigator = navigator.clone();
            let branding = branding.clone();
            let timings = timings.clone();
            dispatch.call(AuthAction::SubmitStarted);
            let generation = state.peek().generation;

            spawn(async move {
                let flow = AuthFlow {
                    navigator: &*navigator,
                    branding: &branding,
                    timings: &timings,
                };
                flow.sign_in_with_provider(&*api, &*identity, &nonce, generation, &state)
                    .await;
            });
        }
    };

    let forgot_navigator = props.navigator.clone();
    let forgot_route = props.forgot_password_route.clone();
    let set = move |field: AuthField| move |value: String| dispatch.call(AuthAction::SetField(field, value));

    rsx! {
        div {
            class: "fb-auth-page",
            div {
                class: "fb-card fb-auth-card",

                div {
                    class: "fb-auth-brand",
                    div {
                        class: "fb-auth-logo",
                        style: "background: {branding.primary_gradient}; box-shadow: {branding.logo_shadow};",
                        "{branding.logo_letter}"
                    }
                    h1 { class: "fb-auth-app-name", "{branding.app_name}" }
                    p { class: "fb-auth-tagline", "{branding.tagline}" }
                }

                h2 { class: "fb-auth-title", "{mode.submit_label()}" }

                if let Some(message) = error {
                    AlertBanner { severity: Severity::Error, message }
                }
                if let Some(message) = view.success.clone() {
                    AlertBanner { severity: Severity::Success, message }
                }

                form {
                    class: "fb-auth-form",
                    onsubmit: on_submit,

                    if mode == AuthMode::Register {
                        TextField {
                            label: "Full Name".to_string(),
                            value: view.form.name.clone(),
                            required: true,
                            autofocus: true,
                            on_change: set(AuthField::Name),
                        }
                        TextField {
                            label: "Company Name (Optional)".to_string(),
                            value: view.form.company.clone(),
                            on_change: set(AuthField::Company),
                        }
                    }

                    TextField {
                        label: "Email Address".to_string(),
                        value: view.form.email.clone(),
                        input_type: InputType::Email,
                        required: true,
                        autofocus: mode == AuthMode::Login,
                        on_change: set(AuthField::Email),
                    }

                    TextField {
                        label: "Password".to_string(),
                        value: view.form.password.clone(),
                        input_type: InputType::Password.revealed(view.show_password),
                        required: true,
                        on_change: set(AuthField::Password),
                        adornment: rsx! {
                            button {
                                r#type: "button",
                                class: "fb-icon-button",
                                aria_label: "Toggle password visibility",
                                onclick: move |_| dispatch.call(AuthAction::TogglePasswordVisibility),
                                if view.show_password { "🙈" } else { "👁️" }
                            }
                        },
                    }

                    if mode == AuthMode::Register {
                        TextField {
                            label: "Confirm Password".to_string(),
                            value: view.form.confirm_password.clone(),
                            input_type: InputType::Password.revealed(view.show_password),
                            required: true,
                            on_change: set(AuthField::ConfirmPassword),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "fb-button fb-button-primary fb-button-block",
                        style: "background: {branding.primary_gradient};",
                        disabled: busy,
                        if busy {
                            LoadingIndicator { size: 18 }
                        } else {
                            "{mode.submit_label()}"
                        }
                    }
                }

                if mode == AuthMode::Login {
                    button {
                        class: "fb-link-button fb-auth-forgot",
                        onclick: move |_| forgot_navigator.navigate(&forgot_route),
                        "Forgot your password?"
                    }
                }

                if props.identity.is_some() {
                    div { class: "fb-divider", span { "or" } }
                    button {
                        class: "fb-button fb-button-outline fb-button-block fb-google-button",
                        disabled: busy || !google_ready,
                        onclick: on_google,
                        span { class: "fb-google-mark", "G" }
                        "Sign in with Google"
                    }
                }

                p {
                    class: "fb-auth-switch",
                    "{mode.switch_prompt()}"
                    button {
                        class: "fb-link-button",
                        onclick: move |_| dispatch.call(AuthAction::ToggleMode),
                        "{mode.switch_link()}"
                    }
                }

                div {
                    class: "fb-auth-badge",
                    span { class: "fb-chip", "🔒 {branding.security_badge}" }
                }
            }
        }
    }
}
