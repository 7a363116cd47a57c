use dioxus::prelude::*;
use ui_types::Side;

use crate::session::use_element_id;

/// Hover/focus hint. Visibility is pure CSS on the wrapper's `:hover` and
/// `:focus-within`, so nothing is mounted or measured.
#[component]
pub fn Tooltip(
    text: String,
    #[props(default)] side: Side,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let id = use_element_id("ui-tooltip");
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "ui-tooltip", None, false),
            Attribute::new("data-side", side.as_str(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { "aria-describedby": "{id}", ..merged,
            {children}
            span { class: "ui-tooltip-bubble", id: "{id}", role: "tooltip", "{text}" }
        }
    }
}
