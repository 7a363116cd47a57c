use dioxus::prelude::*;

use crate::session::use_element_id;
use crate::state::use_controllable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SwitchSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchSize::Small => "small",
            SwitchSize::Medium => "medium",
            SwitchSize::Large => "large",
        }
    }
}

/// On/off toggle rendered as `role="switch"`.
#[component]
pub fn Switch(
    #[props(default)] checked: Option<bool>,
    #[props(default = false)] default_checked: bool,
    #[props(default)] on_checked_change: EventHandler<bool>,
    #[props(default)] size: SwitchSize,
    #[props(default = false)] disabled: bool,
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut state = use_controllable(checked, || default_checked);
    let label_id = use_element_id("ui-switch-label");
    let on = state.get();
    let labelled_by = label.as_ref().map(|_| label_id.clone());

    let mut toggle = move || {
        if disabled {
            return;
        }
        if let Some(next) = state.request(!state.get()) {
            on_checked_change.call(next);
        }
    };

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "ui-switch", None, false),
            Attribute::new("data-size", size.as_str(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "ui-switch-field", "data-disabled": disabled,
            button {
                r#type: "button",
                role: "switch",
                "aria-checked": on,
                "aria-labelledby": labelled_by,
                "data-state": if on { "checked" } else { "unchecked" },
                disabled,
                // Native button activation covers Space and Enter.
                onclick: move |_| toggle(),
                ..merged,
                span { class: "ui-switch-thumb" }
            }
            if let Some(text) = label {
                span { class: "ui-switch-label", id: "{label_id}", "{text}" }
            }
        }
    }
}
