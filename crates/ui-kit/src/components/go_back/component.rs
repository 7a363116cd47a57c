use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronLeft;
use dioxus_free_icons::Icon;

use crate::components::button::{Button, Fill, Tone};

/// Outline ghost button that walks one step back in browser history.
///
/// `on_click` replaces the history step, for hosts that route themselves.
#[component]
pub fn GoBackButton(
    #[props(default = "Back".to_string())] text: String,
    #[props(default)] on_click: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-go-back", None, false)],
        attributes,
    ]);

    rsx! {
        Button {
            tone: Tone::Ghost,
            fill: Fill::Outline,
            start_icon: rsx! {
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
            },
            onclick: move |evt: MouseEvent| {
                if let Some(handler) = &on_click {
                    handler.call(evt);
                    return;
                }
                spawn(async move {
                    if let Err(err) = document::eval("history.back()").await {
                        tracing::debug!(?err, "history back failed");
                    }
                });
            },
            ..merged,
            span { "{text}" }
        }
    }
}
