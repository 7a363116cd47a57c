use dioxus::prelude::*;
use dioxus_primitives::radio_group as prim;

use crate::session::use_element_id;

#[derive(Debug, Clone, PartialEq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            disabled: false,
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// `List` stacks compact rows; `Cards` lays options out as bordered
/// tiles in a responsive grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioLayout {
    #[default]
    List,
    Cards,
}

impl RadioLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadioLayout::List => "list",
            RadioLayout::Cards => "cards",
        }
    }
}

/// Single choice from a list of options. Arrow-key roving and selection
/// come from the radio group primitive; `value` makes it controlled.
#[component]
pub fn RadioGroup(
    options: Vec<RadioOption>,
    #[props(default)] value: Option<String>,
    #[props(default)] default_value: String,
    #[props(default)] on_value_change: EventHandler<String>,
    #[props(default)] label: Option<String>,
    #[props(default)] layout: RadioLayout,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-radio-group");
    let invalid = error.is_some();
    let labelled_by = label.as_ref().map(|_| format!("{id}-label"));
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-radio-group", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-layout": layout.as_str(),
            "data-invalid": invalid,
            "data-disabled": disabled,
            ..merged,
            if let Some(text) = label {
                span { class: "ui-radio-group-label", id: "{id}-label",
                    "{text}"
                    if required {
                        span { class: "ui-field-required", "aria-hidden": "true", "*" }
                    }
                }
            }
            prim::RadioGroup {
                class: "ui-radio-group-options",
                "aria-labelledby": labelled_by,
                value: value.clone(),
                default_value: default_value.clone(),
                on_value_change: move |next: String| on_value_change.call(next),
                disabled,
                for (index, option) in options.iter().enumerate() {
                    label {
                        key: "{option.value}",
                        class: "ui-radio-option",
                        "data-disabled": option.disabled,
                        prim::RadioItem {
                            class: "ui-radio-item".to_string(),
                            value: option.value.clone(),
                            index,
                            disabled: disabled || option.disabled,
                        }
                        span { class: "ui-radio-option-text",
                            span { class: "ui-radio-option-label", "{option.label}" }
                            if let Some(detail) = &option.description {
                                span { class: "ui-radio-option-description", "{detail}" }
                            }
                        }
                    }
                }
            }
            if let Some(message) = error {
                p { class: "ui-field-error", role: "alert", "{message}" }
            }
        }
    }
}
