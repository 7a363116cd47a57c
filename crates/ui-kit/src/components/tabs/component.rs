use std::rc::Rc;

use dioxus::prelude::*;
use ui_types::focus::{self, FocusMove};

use crate::session::{focus_later, use_element_id};
use crate::state::use_controllable;

#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabsOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl TabsOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabsOrientation::Horizontal => "horizontal",
            TabsOrientation::Vertical => "vertical",
        }
    }
}

/// Arrow keys follow the tab list's axis; Home and End work on either.
pub fn tab_move(key: &Key, orientation: TabsOrientation) -> Option<FocusMove> {
    match (key, orientation) {
        (Key::ArrowRight, TabsOrientation::Horizontal) | (Key::ArrowDown, TabsOrientation::Vertical) => {
            Some(FocusMove::Next)
        }
        (Key::ArrowLeft, TabsOrientation::Horizontal) | (Key::ArrowUp, TabsOrientation::Vertical) => {
            Some(FocusMove::Previous)
        }
        (Key::Home, _) => Some(FocusMove::First),
        (Key::End, _) => Some(FocusMove::Last),
        _ => None,
    }
}

/// Tab list with a single panel rendered by `content` for the selected value.
///
/// Arrow keys move focus and selection together, skipping disabled tabs.
#[component]
pub fn Tabs(
    tabs: Vec<TabItem>,
    #[props(default)] value: Option<String>,
    #[props(default)] default_value: Option<String>,
    #[props(default)] on_value_change: EventHandler<String>,
    #[props(default)] orientation: TabsOrientation,
    content: Callback<String, Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let first = tabs
        .iter()
        .find(|t| !t.disabled)
        .map(|t| t.value.clone())
        .unwrap_or_default();
    let mut state = use_controllable(value, move || default_value.unwrap_or(first));
    let mut mounted = use_signal(Vec::<Option<Rc<MountedData>>>::new);
    let id = use_element_id("ui-tabs");
    let selected = state.get();
    let enabled: Vec<bool> = tabs.iter().map(|t| !t.disabled).collect();
    let values: Vec<String> = tabs.iter().map(|t| t.value.clone()).collect();

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "ui-tabs", None, false),
            Attribute::new("data-orientation", orientation.as_str(), None, false),
        ],
        attributes,
    ]);

    let select = use_callback(move |next: String| {
        if let Some(reported) = state.request(next) {
            on_value_change.call(reported);
        }
    });
    let focused = selected.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            div {
                class: "ui-tabs-list",
                role: "tablist",
                "aria-orientation": orientation.as_str(),
                onkeydown: move |evt: KeyboardEvent| {
                    let Some(movement) = tab_move(&evt.key(), orientation) else {
                        return;
                    };
                    evt.prevent_default();
                    let current = values.iter().position(|v| *v == focused);
                    let Some(next) = focus::step(&enabled, current, movement) else {
                        return;
                    };
                    select.call(values[next].clone());
                    let target = mounted.peek().get(next).cloned().flatten();
                    if let Some(target) = target {
                        focus_later(target);
                    }
                },
                {tabs.iter().cloned().enumerate().map(|(index, tab)| {
                    let active = tab.value == selected;
                    let value = tab.value.clone();
                    let disabled = tab.disabled;
                    rsx! {
                        button {
                            key: "{tab.value}",
                            r#type: "button",
                            role: "tab",
                            id: "{id}-tab-{index}",
                            "aria-selected": active,
                            "aria-controls": "{id}-panel",
                            "data-state": if active { "active" } else { "inactive" },
                            tabindex: if active { "0" } else { "-1" },
                            disabled,
                            onmounted: move |evt: MountedEvent| {
                                let mut slots = mounted.write();
                                if slots.len() <= index {
                                    slots.resize(index + 1, None);
                                }
                                slots[index] = Some(evt.data());
                            },
                            onclick: move |_| {
                                if !disabled {
                                    select.call(value.clone());
                                }
                            },
                            "{tab.label}"
                        }
                    }
                })}
            }
            div {
                class: "ui-tabs-panel",
                role: "tabpanel",
                id: "{id}-panel",
                tabindex: "0",
                {content.call(selected.clone())}
            }
        }
    }
}
