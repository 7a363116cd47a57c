use dioxus::prelude::*;

/// Color family shared by buttons, badges and dropdown triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Ghost,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Default => "default",
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
            Tone::Ghost => "ghost",
        }
    }
}

/// How a tone is applied: solid background, outline, or text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    Contained,
    Outline,
    Text,
}

impl Fill {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fill::Contained => "contained",
            Fill::Outline => "outline",
            Fill::Text => "text",
        }
    }
}

/// Three-step size scale for inline controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ControlSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlSize::Sm => "sm",
            ControlSize::Md => "md",
            ControlSize::Lg => "lg",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub tone: Tone,
    #[props(default)]
    pub fill: Fill,
    #[props(default)]
    pub size: ControlSize,
    #[props(default = false)]
    pub full_width: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner over the label and suppresses clicks.
    #[props(default = false)]
    pub loading: bool,
    #[props(default)]
    pub start_icon: Option<Element>,
    #[props(default)]
    pub end_icon: Option<Element>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "ui-button", None, false),
        Attribute::new("data-tone", props.tone.as_str(), None, false),
        Attribute::new("data-fill", props.fill.as_str(), None, false),
        Attribute::new("data-size", props.size.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let inert = props.disabled || props.loading;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: inert,
            "data-full-width": props.full_width,
            "data-loading": props.loading,
            "aria-busy": props.loading,
            onclick: move |evt| {
                if inert {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if props.loading {
                span { class: "ui-button-spinner", "aria-hidden": "true" }
            }
            span { class: "ui-button-label",
                if let Some(icon) = props.start_icon.clone() {
                    span { class: "ui-button-icon", {icon} }
                }
                {props.children}
                if let Some(icon) = props.end_icon.clone() {
                    span { class: "ui-button-icon", {icon} }
                }
            }
        }
    }
}
