use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdChevronDown, LdLoader, LdPlus, LdX};
use dioxus_free_icons::Icon;
use ui_types::focus::{self, FocusMove};
use ui_types::options::{self, SelectOption};

use crate::session::use_element_id;

/// One row of the suggestion list.
#[derive(Debug, Clone, PartialEq)]
enum Row {
    Existing(SelectOption),
    Create(String),
}

/// Matching options followed by a "create" row when the typed text is new.
fn suggestion_rows(options: &[SelectOption], query: &str) -> Vec<Row> {
    let mut rows: Vec<Row> = options::filter_options(options, query)
        .into_iter()
        .cloned()
        .map(Row::Existing)
        .collect();
    if let Some(text) = options::creatable_text(options, query) {
        rows.push(Row::Create(text));
    }
    rows
}

fn list_move(key: &Key) -> Option<FocusMove> {
    match key {
        Key::ArrowDown => Some(FocusMove::Next),
        Key::ArrowUp => Some(FocusMove::Previous),
        _ => None,
    }
}

/// Select that filters its options as you type and can add the typed text
/// as a new option.
///
/// The selection is always controlled: `value` holds the selected option
/// values and every change is reported through `on_change`. A created
/// option is reported through `on_create` before it is selected so the
/// host can add it to `options`.
#[component]
pub fn CreatableSelect(
    options: Vec<SelectOption>,
    #[props(default)] value: Vec<String>,
    #[props(default)] on_change: EventHandler<Vec<String>>,
    #[props(default)] on_create: EventHandler<SelectOption>,
    #[props(default = false)] multi: bool,
    #[props(default)] label: Option<String>,
    #[props(default = "Select an option...".to_string())] placeholder: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] loading: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-creatable");
    let list_id = format!("{id}-list");
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| false);
    let mut highlighted = use_signal(|| None::<usize>);

    let rows = if loading {
        Vec::new()
    } else {
        suggestion_rows(&options, &query.read())
    };
    let enabled = vec![true; rows.len()];
    let active = highlighted().filter(|i| *i < rows.len());
    let is_open = open() && !disabled;

    let selected = value.clone();
    let choose = use_callback(move |row: Row| {
        let picked = match row {
            Row::Existing(option) => option.value,
            Row::Create(text) => {
                let created = SelectOption::from_text(&text);
                on_create.call(created.clone());
                created.value
            }
        };
        on_change.call(options::pick_value(&selected, &picked, multi));
        query.set(String::new());
        highlighted.set(None);
        if !multi {
            open.set(false);
        }
    });

    // (value, label, selection without it)
    let chips: Vec<(String, String, Vec<String>)> = if multi {
        value
            .iter()
            .map(|v| {
                let kept = value.iter().filter(|other| *other != v).cloned().collect();
                (v.clone(), options::label_for(&options, v).to_string(), kept)
            })
            .collect()
    } else {
        Vec::new()
    };
    let shown_placeholder = match (multi, value.first()) {
        (false, Some(current)) => options::label_for(&options, current).to_string(),
        _ => placeholder.clone(),
    };
    let has_value = !value.is_empty();
    let invalid = error.is_some();
    let active_id = active.map(|i| format!("{id}-option-{i}"));
    let key_rows = rows.clone();
    let no_rows = rows.is_empty();
    let remaining = value.clone();

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-creatable", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-open": is_open,
            "data-disabled": disabled,
            "data-invalid": invalid,
            "data-has-value": has_value,
            ..merged,
            if let Some(text) = label {
                label { class: "ui-creatable-label", r#for: "{id}",
                    "{text}"
                    if required {
                        span { class: "ui-creatable-required", "aria-hidden": "true", "*" }
                    }
                }
            }
            div { class: "ui-creatable-control",
                for (chip_value, chip_label, kept) in chips {
                    span { key: "{chip_value}", class: "ui-creatable-chip",
                        "{chip_label}"
                        button {
                            r#type: "button",
                            class: "ui-creatable-chip-remove",
                            "aria-label": "Remove {chip_label}",
                            disabled,
                            onclick: move |_| on_change.call(kept.clone()),
                            Icon::<LdX> { icon: LdX, width: 12, height: 12 }
                        }
                    }
                }
                input {
                    id: "{id}",
                    class: "ui-creatable-input",
                    r#type: "text",
                    role: "combobox",
                    autocomplete: "off",
                    "aria-expanded": is_open,
                    "aria-controls": "{list_id}",
                    "aria-autocomplete": "list",
                    "aria-activedescendant": active_id,
                    "aria-invalid": invalid,
                    "aria-busy": loading,
                    value: "{query}",
                    placeholder: shown_placeholder,
                    required: required && !has_value,
                    disabled,
                    onfocus: move |_| open.set(true),
                    onblur: move |_| {
                        open.set(false);
                        highlighted.set(None);
                    },
                    oninput: move |evt: FormEvent| {
                        query.set(evt.value());
                        open.set(true);
                        highlighted.set(Some(0));
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        let key = evt.key();
                        if let Some(movement) = list_move(&key) {
                            evt.prevent_default();
                            open.set(true);
                            highlighted.set(focus::step(&enabled, active, movement));
                            return;
                        }
                        match key {
                            Key::Enter => {
                                if let Some(row) = active.and_then(|i| key_rows.get(i)) {
                                    evt.prevent_default();
                                    choose.call(row.clone());
                                }
                            }
                            Key::Escape => {
                                open.set(false);
                                highlighted.set(None);
                            }
                            Key::Backspace if multi && query.peek().is_empty() => {
                                if let Some((_, rest)) = remaining.split_last() {
                                    on_change.call(rest.to_vec());
                                }
                            }
                            _ => {}
                        }
                    },
                }
                span { class: "ui-creatable-indicator", "aria-hidden": "true",
                    if loading {
                        Icon::<LdLoader> { icon: LdLoader, width: 16, height: 16 }
                    } else {
                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                    }
                }
            }
            if is_open {
                ul { id: "{list_id}", class: "ui-creatable-list", role: "listbox",
                    "aria-multiselectable": multi,
                    if loading {
                        li { class: "ui-creatable-empty", "Loading..." }
                    } else if no_rows {
                        li { class: "ui-creatable-empty", "No options" }
                    }
                    for (index, row) in rows.into_iter().enumerate() {
                        {
                            let is_active = active == Some(index);
                            let (key, text, is_selected, is_create) = match &row {
                                Row::Existing(option) => (
                                    option.value.clone(),
                                    option.label.clone(),
                                    value.contains(&option.value),
                                    false,
                                ),
                                Row::Create(text) => (format!("create:{text}"), text.clone(), false, true),
                            };
                            rsx! {
                                li {
                                    key: "{key}",
                                    id: "{id}-option-{index}",
                                    class: "ui-creatable-option",
                                    role: "option",
                                    "aria-selected": is_selected,
                                    "data-active": is_active,
                                    "data-create": is_create,
                                    onmousedown: move |evt: MouseEvent| evt.prevent_default(),
                                    onmouseenter: move |_| highlighted.set(Some(index)),
                                    onclick: move |_| choose.call(row.clone()),
                                    if is_create {
                                        Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                                        span { "Create \"{text}\"" }
                                    } else {
                                        span { "{text}" }
                                        if is_selected {
                                            Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(message) = error {
                p { class: "ui-creatable-error", role: "alert", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<SelectOption> {
        vec![SelectOption::new("red", "Red"), SelectOption::new("green", "Green")]
    }

    #[test]
    fn new_text_adds_a_create_row_last() {
        let rows = suggestion_rows(&colors(), "re");
        assert_eq!(
            rows,
            vec![
                Row::Existing(SelectOption::new("red", "Red")),
                Row::Existing(SelectOption::new("green", "Green")),
                Row::Create("re".to_string()),
            ]
        );
    }

    #[test]
    fn exact_match_offers_no_create_row() {
        let rows = suggestion_rows(&colors(), "RED");
        assert_eq!(rows, vec![Row::Existing(SelectOption::new("red", "Red"))]);
    }

    #[test]
    fn blank_query_lists_everything() {
        assert_eq!(suggestion_rows(&colors(), "").len(), 2);
    }

    #[test]
    fn only_vertical_arrows_move_the_highlight() {
        assert_eq!(list_move(&Key::ArrowDown), Some(FocusMove::Next));
        assert_eq!(list_move(&Key::ArrowUp), Some(FocusMove::Previous));
        assert_eq!(list_move(&Key::ArrowLeft), None);
    }
}
