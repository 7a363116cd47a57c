use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use ui_types::focus::{self, FocusMove};
use ui_types::{
    resolve_placement, Align, OverlayPlacement, PlacementRequest, ResolvedPlacement, SessionEvent,
    SessionKind, Side,
};

use crate::session::{focus_later, use_element_id, use_session_slot, SessionTargets};
use crate::state::use_controllable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl DropdownSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownSize::Sm => "sm",
            DropdownSize::Md => "md",
            DropdownSize::Lg => "lg",
            DropdownSize::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl DropdownVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownVariant::Default => "default",
            DropdownVariant::Primary => "primary",
            DropdownVariant::Secondary => "secondary",
            DropdownVariant::Outline => "outline",
            DropdownVariant::Ghost => "ghost",
            DropdownVariant::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub destructive: bool,
    pub shortcut: Option<String>,
}

impl MenuItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            destructive: false,
            shortcut: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    pub fn shortcut(mut self, keys: impl Into<String>) -> Self {
        self.shortcut = Some(keys.into());
        self
    }
}

/// One row of a menu panel.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
    Label(String),
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        MenuEntry::Item(item)
    }
}

/// Focus movement for a key pressed inside an open menu.
pub fn menu_move(key: &Key) -> Option<FocusMove> {
    match key {
        Key::ArrowDown => Some(FocusMove::Next),
        Key::ArrowUp => Some(FocusMove::Previous),
        Key::Home => Some(FocusMove::First),
        Key::End => Some(FocusMove::Last),
        _ => None,
    }
}

/// Inline style for the panel: the trigger gap, plus a size cap and
/// internal scrolling on any axis the resolved placement says overflows.
pub fn panel_style(request: &PlacementRequest, resolved: Option<&ResolvedPlacement>) -> String {
    let mut style = format!("--ui-dropdown-offset: {}px;", request.offset);
    let Some(resolved) = resolved else {
        return style;
    };
    let along_side = resolved.placement.side.is_vertical();
    if resolved.overflow.vertical {
        if along_side {
            style.push_str(&format!(" max-height: {}px;", resolved.max_extent));
        } else {
            style.push_str(" max-height: 100vh;");
        }
        style.push_str(" overflow-y: auto;");
    }
    if resolved.overflow.horizontal {
        if along_side {
            style.push_str(" max-width: 100vw;");
        } else {
            style.push_str(&format!(" max-width: {}px;", resolved.max_extent));
        }
        style.push_str(" overflow-x: auto;");
    }
    style
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dismiss {
    Escape,
    Outside,
    Tab,
}

/// Menu opened from a trigger button and positioned to stay in the viewport.
///
/// Open state is controlled when `open` is `Some`; every change, including
/// Escape, outside clicks and selection, is reported via `on_open_change`.
#[component]
pub fn Dropdown(
    label: String,
    entries: Vec<MenuEntry>,
    #[props(default)] on_select: EventHandler<String>,
    #[props(default)] open: Option<bool>,
    #[props(default = false)] default_open: bool,
    #[props(default)] on_open_change: EventHandler<bool>,
    #[props(default)] side: Side,
    #[props(default)] align: Align,
    #[props(default = 4.0)] offset: f64,
    #[props(default)] size: DropdownSize,
    #[props(default)] variant: DropdownVariant,
    #[props(default = true)] show_chevron: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut state = use_controllable(open, || default_open);
    let mut trigger = use_signal(|| None::<Rc<MountedData>>);
    let id = use_element_id("ui-dropdown");
    let trigger_id = format!("{id}-trigger");
    let panel_id = format!("{id}-panel");
    let is_open = state.get();

    let mut set_open = move |next: bool| {
        if let Some(reported) = state.request(next) {
            on_open_change.call(reported);
        }
    };
    let refocus_trigger = move || {
        if let Some(target) = (*trigger.peek()).clone() {
            focus_later(target);
        }
    };

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-dropdown", None, false)],
        attributes,
    ]);
    let request = PlacementRequest {
        side,
        align,
        offset,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            id: "{id}",
            "data-state": if is_open { "open" } else { "closed" },
            ..merged,
            button {
                id: "{trigger_id}",
                r#type: "button",
                class: "ui-dropdown-trigger",
                "data-size": size.as_str(),
                "data-variant": variant.as_str(),
                "aria-haspopup": "menu",
                "aria-expanded": is_open,
                "aria-controls": "{panel_id}",
                disabled,
                onmounted: move |evt: MountedEvent| trigger.set(Some(evt.data())),
                onclick: move |_| {
                    if !disabled {
                        set_open(!is_open);
                    }
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if !disabled && !is_open && evt.key() == Key::ArrowDown {
                        evt.prevent_default();
                        set_open(true);
                    }
                },
                if let Some(icon) = icon {
                    span { class: "ui-dropdown-trigger-icon", {icon} }
                }
                span { class: "ui-dropdown-trigger-label", "{label}" }
                if show_chevron {
                    span { class: "ui-dropdown-chevron", "data-open": is_open,
                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                    }
                }
            }
            if is_open {
                MenuPanel {
                    root_id: id.clone(),
                    trigger_id: trigger_id.clone(),
                    panel_id: panel_id.clone(),
                    request,
                    entries: entries.clone(),
                    on_select: move |value: String| {
                        on_select.call(value);
                        set_open(false);
                        refocus_trigger();
                    },
                    on_dismiss: move |reason: Dismiss| {
                        set_open(false);
                        if reason == Dismiss::Escape {
                            refocus_trigger();
                        }
                    },
                }
            }
        }
    }
}

/// The open panel. Mounting it starts the overlay session and unmounting it
/// ends the session, so listeners live exactly as long as the menu is open.
#[component]
fn MenuPanel(
    root_id: String,
    trigger_id: String,
    panel_id: String,
    request: PlacementRequest,
    entries: Vec<MenuEntry>,
    on_select: EventHandler<String>,
    on_dismiss: EventHandler<Dismiss>,
) -> Element {
    let slot = use_session_slot();
    let mut resolved = use_signal(|| None::<ResolvedPlacement>);
    let mut items = use_signal(Vec::<Option<Rc<MountedData>>>::new);
    let mut focused = use_signal(|| None::<usize>);

    let on_event = use_callback(move |event: SessionEvent| match event {
        SessionEvent::Layout { geometry } => {
            let next = resolve_placement(&geometry, &request);
            if resolved.peek().as_ref() != Some(&next) {
                resolved.set(Some(next));
            }
        }
        SessionEvent::Escape => on_dismiss.call(Dismiss::Escape),
        SessionEvent::OutsidePointer => on_dismiss.call(Dismiss::Outside),
        _ => {}
    });

    let targets = SessionTargets::Overlay {
        root_id,
        trigger_id: trigger_id.clone(),
        panel_id: panel_id.clone(),
    };

    // Position among focusable rows for each entry; separators and labels
    // have none.
    let item_slots: Vec<Option<usize>> = entries
        .iter()
        .scan(0usize, |next, entry| {
            Some(match entry {
                MenuEntry::Item(_) => {
                    *next += 1;
                    Some(*next - 1)
                }
                _ => None,
            })
        })
        .collect();
    let enabled: Vec<bool> = entries
        .iter()
        .filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(!item.disabled),
            _ => None,
        })
        .collect();
    let initial = focus::first_enabled(&enabled);

    let placement = resolved()
        .map(|r| r.placement)
        .unwrap_or(OverlayPlacement {
            side: request.side,
            align: request.align,
        });
    let style = panel_style(&request, resolved.read().as_ref());

    let mut move_focus = move |index: usize| {
        focused.set(Some(index));
        let target = items.peek().get(index).cloned().flatten();
        if let Some(target) = target {
            focus_later(target);
        }
    };

    rsx! {
        div {
            id: "{panel_id}",
            class: "ui-dropdown-panel",
            role: "menu",
            "aria-labelledby": "{trigger_id}",
            "data-side": placement.side.as_str(),
            "data-align": placement.align.as_str(),
            style: "{style}",
            onmounted: move |_| slot.begin(SessionKind::Overlay, targets.clone(), on_event),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Tab {
                    on_dismiss.call(Dismiss::Tab);
                    return;
                }
                let Some(movement) = menu_move(&evt.key()) else {
                    return;
                };
                evt.prevent_default();
                if let Some(next) = focus::step(&enabled, *focused.peek(), movement) {
                    move_focus(next);
                }
            },
            {entries.iter().cloned().zip(item_slots).enumerate().map(|(row, (entry, slot_index))| {
                match (entry, slot_index) {
                    (MenuEntry::Item(item), Some(index)) => {
                        let value = item.value.clone();
                        let disabled = item.disabled;
                        rsx! {
                            button {
                                key: "{row}",
                                r#type: "button",
                                role: "menuitem",
                                class: "ui-dropdown-item",
                                tabindex: "-1",
                                disabled,
                                "aria-disabled": disabled,
                                "data-destructive": item.destructive,
                                onmounted: move |evt: MountedEvent| {
                                    let data = evt.data();
                                    {
                                        let mut slots = items.write();
                                        if slots.len() <= index {
                                            slots.resize(index + 1, None);
                                        }
                                        slots[index] = Some(data.clone());
                                    }
                                    if initial == Some(index) {
                                        focused.set(Some(index));
                                        focus_later(data);
                                    }
                                },
                                onfocus: move |_| focused.set(Some(index)),
                                onclick: move |_| {
                                    if !disabled {
                                        on_select.call(value.clone());
                                    }
                                },
                                span { class: "ui-dropdown-item-label", "{item.label}" }
                                if let Some(keys) = item.shortcut {
                                    span { class: "ui-dropdown-shortcut", "{keys}" }
                                }
                            }
                        }
                    }
                    (MenuEntry::Label(text), _) => rsx! {
                        div { key: "{row}", class: "ui-dropdown-label", role: "presentation", "{text}" }
                    },
                    _ => rsx! {
                        div { key: "{row}", class: "ui-dropdown-separator", role: "separator" }
                    },
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_types::Overflow;

    #[test]
    fn arrows_and_home_end_move_focus() {
        assert_eq!(menu_move(&Key::ArrowDown), Some(FocusMove::Next));
        assert_eq!(menu_move(&Key::ArrowUp), Some(FocusMove::Previous));
        assert_eq!(menu_move(&Key::Home), Some(FocusMove::First));
        assert_eq!(menu_move(&Key::End), Some(FocusMove::Last));
        assert_eq!(menu_move(&Key::ArrowLeft), None);
    }

    #[test]
    fn unmeasured_panel_only_carries_the_offset() {
        let request = PlacementRequest::default();
        assert_eq!(panel_style(&request, None), "--ui-dropdown-offset: 4px;");
    }

    #[test]
    fn clipped_bottom_panel_scrolls_within_the_space_below() {
        let request = PlacementRequest::default();
        let resolved = ResolvedPlacement {
            placement: OverlayPlacement {
                side: Side::Bottom,
                align: Align::Start,
            },
            overflow: Overflow {
                vertical: true,
                horizontal: false,
            },
            max_extent: 180.0,
        };
        let style = panel_style(&request, Some(&resolved));
        assert!(style.contains("max-height: 180px;"));
        assert!(style.contains("overflow-y: auto;"));
        assert!(!style.contains("overflow-x"));
    }

    #[test]
    fn clipped_side_panel_caps_width_by_extent() {
        let request = PlacementRequest {
            side: Side::Right,
            ..PlacementRequest::default()
        };
        let resolved = ResolvedPlacement {
            placement: OverlayPlacement {
                side: Side::Right,
                align: Align::Start,
            },
            overflow: Overflow {
                vertical: false,
                horizontal: true,
            },
            max_extent: 96.0,
        };
        let style = panel_style(&request, Some(&resolved));
        assert!(style.contains("max-width: 96px;"));
        assert!(style.contains("overflow-x: auto;"));
    }
}
