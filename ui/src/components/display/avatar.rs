use dioxus::prelude::*;

const PERSON_GLYPH: &str = "👤";

#[derive(Props, PartialEq, Clone)]
pub struct AvatarProps {
    /// Letter to show; the person glyph when absent.
    #[props(default)]
    pub initial: Option<String>,
    #[props(default = 40)]
    pub size: u32,
    #[props(default)]
    pub background: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let label = props.initial.clone().unwrap_or_else(|| PERSON_GLYPH.to_string());
    let background = props
        .background
        .clone()
        .unwrap_or_else(|| "var(--fb-palette-primary-main)".to_string());
    let font_size = props.size * 2 / 5;
    let clickable = props.onclick.is_some();

    rsx! {
        div {
            class: if clickable { "fb-avatar fb-avatar-button" } else { "fb-avatar" },
            style: "width: {props.size}px; height: {props.size}px; font-size: {font_size}px; background: {background};",
            onclick: move |evt| {
                if let Some(handler) = props.onclick {
                    handler.call(evt);
                }
            },
            "{label}"
        }
    }
}
