use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronLeft, LdChevronRight, LdChevronsLeft, LdChevronsRight, LdEllipsis,
};
use dioxus_free_icons::Icon;
use ui_types::pagination::{next_page, page_items, previous_page, PageItem};

use crate::components::button::{Button, ControlSize, Fill, Tone};

/// Windowed page navigation. Pages are 1-based; `total` is the page count.
#[component]
pub fn Pagination(
    current: u32,
    total: u32,
    on_page_change: EventHandler<u32>,
    #[props(default = 5)] max_visible: u32,
    #[props(default = true)] show_first_last: bool,
    #[props(default)] size: ControlSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    if total == 0 {
        return rsx! {};
    }
    let current = current.clamp(1, total);
    let previous = previous_page(current);
    let next = next_page(current, total);

    let go = move |target: Option<u32>| {
        move |_: MouseEvent| {
            if let Some(page) = target {
                on_page_change.call(page);
            }
        }
    };

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-pagination", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { "aria-label": "Pagination", ..merged,
            if show_first_last {
                Button {
                    fill: Fill::Text,
                    size,
                    disabled: current == 1,
                    aria_label: "First page",
                    onclick: go(Some(1).filter(|_| current > 1)),
                    Icon::<LdChevronsLeft> { icon: LdChevronsLeft, width: 16, height: 16 }
                }
            }
            Button {
                fill: Fill::Text,
                size,
                disabled: previous.is_none(),
                aria_label: "Previous page",
                onclick: go(previous),
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
            }
            {page_items(current, total, max_visible).into_iter().enumerate().map(|(index, item)| match item {
                PageItem::Page { number, active } => rsx! {
                    Button {
                        key: "page-{number}",
                        tone: if active { Tone::Primary } else { Tone::Default },
                        fill: if active { Fill::Contained } else { Fill::Outline },
                        size,
                        aria_current: if active { Some("page") } else { None },
                        onclick: go(Some(number).filter(|_| !active)),
                        "{number}"
                    }
                },
                PageItem::Gap => rsx! {
                    span { key: "gap-{index}", class: "ui-pagination-gap", "aria-hidden": "true",
                        Icon::<LdEllipsis> { icon: LdEllipsis, width: 16, height: 16 }
                    }
                },
            })}
            Button {
                fill: Fill::Text,
                size,
                disabled: next.is_none(),
                aria_label: "Next page",
                onclick: go(next),
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
            }
            if show_first_last {
                Button {
                    fill: Fill::Text,
                    size,
                    disabled: current == total,
                    aria_label: "Last page",
                    onclick: go(Some(total).filter(|_| current < total)),
                    Icon::<LdChevronsRight> { icon: LdChevronsRight, width: 16, height: 16 }
                }
            }
        }
    }
}
