use dioxus::prelude::*;

use crate::components::button::{ControlSize, Tone};

/// Badges are either solid or outlined; there is no text-only badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeFill {
    #[default]
    Contained,
    Outline,
}

impl BadgeFill {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeFill::Contained => "contained",
            BadgeFill::Outline => "outline",
        }
    }
}

/// An inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] tone: Tone,
    #[props(default)] fill: BadgeFill,
    #[props(default)] size: ControlSize,
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "ui-badge", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
        Attribute::new("data-fill", fill.as_str(), None, false),
        Attribute::new("data-size", size.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if let Some(icon) = icon {
                span { class: "ui-badge-icon", {icon} }
            }
            {children}
        }
    }
}
