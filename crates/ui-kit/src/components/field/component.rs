use dioxus::prelude::*;

use crate::session::use_element_id;

/// Label, required marker and error line shared by the text-like fields.
#[component]
fn FieldShell(
    id: String,
    #[props(!optional)] label: Option<String>,
    required: bool,
    #[props(!optional)] error: Option<String>,
    disabled: bool,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "ui-field", "data-disabled": disabled, "data-invalid": invalid,
            if let Some(text) = label {
                label { class: "ui-field-label", r#for: "{id}",
                    "{text}"
                    if required {
                        span { class: "ui-field-required", "aria-hidden": "true", "*" }
                    }
                }
            }
            {children}
            if let Some(message) = error {
                p { class: "ui-field-error", id: "{id}-error", role: "alert", "{message}" }
            }
        }
    }
}

fn described_by(id: &str, error: &Option<String>) -> Option<String> {
    error.as_ref().map(|_| format!("{id}-error"))
}

/// Single-line text input with label and validation message.
#[component]
pub fn InputField(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-input");
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-input", None, false)],
        attributes,
    ]);

    rsx! {
        FieldShell { id: id.clone(), label, required, error: error.clone(), disabled,
            input {
                id: "{id}",
                r#type: "{input_type}",
                value,
                placeholder,
                required,
                disabled,
                "aria-invalid": error.is_some(),
                "aria-describedby": described_by(&id, &error),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

/// Multi-line text input.
#[component]
pub fn TextareaField(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-textarea");
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-textarea", None, false)],
        attributes,
    ]);

    rsx! {
        FieldShell { id: id.clone(), label, required, error: error.clone(), disabled,
            textarea {
                id: "{id}",
                rows: "{rows}",
                value,
                placeholder,
                required,
                disabled,
                "aria-invalid": error.is_some(),
                "aria-describedby": described_by(&id, &error),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

/// Parse a number input's text. Empty or malformed text is `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric input reporting parsed values.
#[component]
pub fn NumberField(
    #[props(default)] value: Option<f64>,
    #[props(default)] on_value_change: EventHandler<Option<f64>>,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default)] min: Option<f64>,
    #[props(default)] max: Option<f64>,
    #[props(default = 1.0)] step: f64,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-number");
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-input", None, false)],
        attributes,
    ]);
    let text = value.map(|v| v.to_string()).unwrap_or_default();

    rsx! {
        FieldShell { id: id.clone(), label, required, error: error.clone(), disabled,
            input {
                id: "{id}",
                r#type: "number",
                value: text,
                placeholder,
                min: min.map(|v| v.to_string()),
                max: max.map(|v| v.to_string()),
                step: "{step}",
                required,
                disabled,
                "aria-invalid": error.is_some(),
                "aria-describedby": described_by(&id, &error),
                oninput: move |evt: FormEvent| on_value_change.call(parse_number(&evt.value())),
                ..merged,
            }
        }
    }
}

/// Date picker input. Values are `YYYY-MM-DD` strings as the browser
/// reports them; `min` and `max` use the same format.
#[component]
pub fn DateField(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] label: Option<String>,
    #[props(default)] min: Option<String>,
    #[props(default)] max: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-date");
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-input", None, false)],
        attributes,
    ]);

    rsx! {
        FieldShell { id: id.clone(), label, required, error: error.clone(), disabled,
            div { class: "ui-field-control",
                if let Some(glyph) = icon {
                    span { class: "ui-field-icon", "aria-hidden": "true", {glyph} }
                }
                input {
                    id: "{id}",
                    r#type: "date",
                    value,
                    min,
                    max,
                    required,
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": described_by(&id, &error),
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
            }
        }
    }
}

/// File picker. The change event carries the chosen files.
#[component]
pub fn FileField(
    #[props(default)] on_change: EventHandler<FormEvent>,
    #[props(default)] label: Option<String>,
    #[props(default)] accept: Option<String>,
    #[props(default = false)] multiple: bool,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-file");
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-input ui-file-input", None, false)],
        attributes,
    ]);

    rsx! {
        FieldShell { id: id.clone(), label, required, error: error.clone(), disabled,
            input {
                id: "{id}",
                r#type: "file",
                accept,
                multiple,
                required,
                disabled,
                "aria-invalid": error.is_some(),
                "aria-describedby": described_by(&id, &error),
                onchange: move |evt| on_change.call(evt),
                ..merged,
            }
        }
    }
}
