use dioxus::prelude::*;

use crate::theme::use_theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "⛔",
            Severity::Success => "✅",
        }
    }

    /// Palette path of the accent colour.
    pub fn palette_key(self) -> &'static str {
        match self {
            Severity::Info => "info.main",
            Severity::Warning => "warning.main",
            Severity::Error => "error.main",
            Severity::Success => "success.main",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AlertBannerProps {
    #[props(default)]
    pub severity: Severity,
    pub message: String,
}

#[component]
pub fn AlertBanner(props: AlertBannerProps) -> Element {
    let theme = use_theme();
    let accent = theme
        .color(props.severity.palette_key())
        .unwrap_or("currentColor")
        .to_string();

    rsx! {
        div {
            class: "fb-alert fb-alert-{props.severity.class_name()}",
            role: "alert",
            style: "border-left-color: {accent};",
            span { class: "fb-alert-icon", "{props.severity.icon()}" }
            span { class: "fb-alert-message", "{props.message}" }
        }
    }
}
