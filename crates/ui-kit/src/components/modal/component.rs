use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use dioxus_primitives::dialog as prim;

/// Modal dialog. The primitive owns focus trapping, Escape and backdrop
/// dismissal; every close request is reported through `on_open_change`.
#[component]
pub fn Modal(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] footer: Option<Element>,
    #[props(default = true)] show_close: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "ui-modal-overlay",
            open,
            on_open_change: move |next: bool| on_open_change.call(next),
            prim::DialogContent { class: "ui-modal-content".to_string(),
                div { class: "ui-modal-header",
                    prim::DialogTitle { class: "ui-modal-title", "{title}" }
                    if show_close {
                        button {
                            r#type: "button",
                            class: "ui-modal-close",
                            "aria-label": "Close",
                            onclick: move |_| on_open_change.call(false),
                            Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                        }
                    }
                }
                if let Some(text) = description {
                    prim::DialogDescription { class: "ui-modal-description", "{text}" }
                }
                div { class: "ui-modal-body", {children} }
                if let Some(actions) = footer {
                    div { class: "ui-modal-footer", {actions} }
                }
            }
        }
    }
}
