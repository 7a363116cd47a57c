use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCheck;
use dioxus_free_icons::Icon;

use crate::session::use_element_id;
use crate::state::use_controllable;

/// Checkbox with a label and an optional description line.
#[component]
pub fn Checkbox(
    #[props(default)] checked: Option<bool>,
    #[props(default = false)] default_checked: bool,
    #[props(default)] on_checked_change: EventHandler<bool>,
    #[props(default = false)] disabled: bool,
    #[props(default)] label: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut state = use_controllable(checked, || default_checked);
    let id = use_element_id("ui-checkbox");
    let on = state.get();
    let labelled_by = label.as_ref().map(|_| format!("{id}-label"));
    let described_by = description.as_ref().map(|_| format!("{id}-description"));

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-checkbox", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "ui-checkbox-field", "data-disabled": disabled,
            button {
                id: "{id}",
                r#type: "button",
                role: "checkbox",
                "aria-checked": on,
                "aria-labelledby": labelled_by,
                "aria-describedby": described_by,
                "data-state": if on { "checked" } else { "unchecked" },
                disabled,
                onclick: move |_| {
                    if disabled {
                        return;
                    }
                    if let Some(next) = state.request(!state.get()) {
                        on_checked_change.call(next);
                    }
                },
                ..merged,
                if on {
                    span { class: "ui-checkbox-indicator",
                        Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                    }
                }
            }
            div { class: "ui-checkbox-text",
                if let Some(text) = label {
                    label { class: "ui-checkbox-label", id: "{id}-label", r#for: "{id}", "{text}" }
                }
                if let Some(text) = description {
                    p { class: "ui-checkbox-description", id: "{id}-description", "{text}" }
                }
            }
        }
    }
}
