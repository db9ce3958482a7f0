//! State and actions for the sign-in / registration screen.
//!
//! Submissions are tagged with the [`AuthViewState::generation`] they
//! started in. A mode switch starts a new generation, so results from an
//! earlier one are dropped instead of leaking into the other mode.

use crate::services::errors::ValidationError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? ",
            AuthMode::Register => "Already have an account? ",
        }
    }

    pub fn switch_link(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign up free",
            AuthMode::Register => "Sign in",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthField {
    Name,
    Company,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AuthForm {
    pub name: String,
    /// Collected on registration for the host's records; never submitted.
    pub company: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn set(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Name => self.name = value,
            AuthField::Company => self.company = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::ConfirmPassword => self.confirm_password = value,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A navigation scheduled after a delay.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Redirect {
    pub route: String,
    pub delay_ms: u64,
}

/// Result of a credential submission.
#[derive(Clone, PartialEq, Debug)]
pub enum AuthOutcome {
    /// Local validation failed; the session was never called.
    Rejected(ValidationError),
    Succeeded { message: String, redirect: Redirect },
    /// The session answered `false`; it reports its own error.
    NotAccepted,
    Failed(String),
}

/// Result of the OAuth round trip.
#[derive(Clone, PartialEq, Debug)]
pub enum OAuthOutcome {
    /// First sign-in created the account: greet, then hard navigation once
    /// the welcome has been shown.
    Welcome { message: String, redirect: Redirect },
    /// Existing account: hard navigation right away.
    Continue { route: String },
    Failed(String),
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    SetField(AuthField, String),
    ToggleMode,
    TogglePasswordVisibility,
    SubmitStarted,
    SubmitFinished { generation: u64, outcome: AuthOutcome },
    OAuthFinished { generation: u64, outcome: OAuthOutcome },
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AuthViewState {
    pub mode: AuthMode,
    pub form: AuthForm,
    pub status: SubmitStatus,
    pub local_error: Option<String>,
    pub success: Option<String>,
    pub show_password: bool,
    pub generation: u64,
}

impl AuthViewState {
    /// The error to display: ours first, then whatever the session reports.
    pub fn display_error(&self, session_error: Option<String>) -> Option<String> {
        self.local_error
            .clone()
            .or(session_error)
            .filter(|e| !e.is_empty())
    }

    /// Whether a submission started in `generation` may still touch the view.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn reduce_in_place(&mut self, action: AuthAction) {
        match action {
            AuthAction::SetField(field, value) => {
                self.form.set(field, value);
                self.local_error = None;
            }
            AuthAction::ToggleMode => {
                self.mode = self.mode.toggled();
                self.form = AuthForm::default();
                self.local_error = None;
                self.success = None;
                self.status = SubmitStatus::Idle;
                self.generation = self.generation.wrapping_add(1);
            }
            AuthAction::TogglePasswordVisibility => {
                self.show_password = !self.show_password;
            }
            AuthAction::SubmitStarted => {
                self.local_error = None;
                self.status = SubmitStatus::Submitting;
            }
            AuthAction::SubmitFinished { generation, .. }
            | AuthAction::OAuthFinished { generation, .. }
                if !self.is_current(generation) => {}
            AuthAction::SubmitFinished { outcome, .. } => match outcome {
                AuthOutcome::Rejected(error) => {
                    self.local_error = Some(error.to_string());
                    self.status = SubmitStatus::Failed;
                }
                AuthOutcome::Succeeded { message, .. } => {
                    self.success = Some(message);
                    self.status = SubmitStatus::Succeeded;
                }
                AuthOutcome::NotAccepted => {
                    self.status = SubmitStatus::Failed;
                }
                AuthOutcome::Failed(message) => {
                    self.local_error = Some(message);
                    self.status = SubmitStatus::Failed;
                }
            },
            AuthAction::OAuthFinished { outcome, .. } => match outcome {
                OAuthOutcome::Welcome { message, .. } => {
                    self.local_error = None;
                    self.success = Some(message);
                    self.status = SubmitStatus::Succeeded;
                }
                OAuthOutcome::Continue { .. } => {
                    self.local_error = None;
                    self.status = SubmitStatus::Succeeded;
                }
                OAuthOutcome::Failed(message) => {
                    self.local_error = Some(message);
                    self.status = SubmitStatus::Failed;
                }
            },
        }
    }
}
