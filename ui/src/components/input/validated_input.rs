use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }

    /// Password fields flip to text when revealed.
    pub fn revealed(self, show: bool) -> Self {
        match self {
            InputType::Password if show => InputType::Text,
            other => other,
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default)]
    pub input_type: InputType,
    #[props(default)]
    pub name: Option<String>,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub autofocus: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "fb-input",
            r#type: "{props.input_type.as_str()}",
            name: props.name.clone(),
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: props.required,
            disabled: props.disabled,
            autofocus: props.autofocus,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default)]
    pub input_type: InputType,
    #[props(default)]
    pub helper: Option<String>,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub disabled: bool,
    #[props(default)]
    pub autofocus: bool,
    /// Trailing control inside the field, e.g. a visibility toggle.
    #[props(default)]
    pub adornment: Option<Element>,
    pub on_change: EventHandler<String>,
}

/// Labelled input with optional helper text.
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    rsx! {
        label {
            class: "fb-text-field",
            span {
                class: "fb-text-field-label",
                "{props.label}"
                if props.required {
                    span { class: "fb-required", " *" }
                }
            }
            div {
                class: "fb-text-field-control",
                ValidatedInput {
                    value: props.value.clone(),
                    placeholder: props.placeholder.clone(),
                    input_type: props.input_type,
                    required: props.required,
                    disabled: props.disabled,
                    autofocus: props.autofocus,
                    on_change: props.on_change,
                }
                if let Some(adornment) = props.adornment {
                    {adornment}
                }
            }
            if let Some(helper) = props.helper {
                span { class: "fb-text-field-helper", "{helper}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaFieldProps {
    pub label: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub required: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    rsx! {
        label {
            class: "fb-text-field",
            span { class: "fb-text-field-label", "{props.label}" }
            textarea {
                class: "fb-input fb-textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                required: props.required,
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
