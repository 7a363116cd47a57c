use dioxus::prelude::*;
use ui_kit::*;
use ui_types::options::SelectOption;

use crate::common::{count, render};

fn languages() -> Vec<SelectOption> {
    vec![
        SelectOption::new("rust", "Rust"),
        SelectOption::new("go", "Go"),
    ]
}

#[test]
fn test_closed_select_has_no_listbox() {
    fn app() -> Element {
        rsx! {
            CreatableSelect { label: "Language", options: languages() }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"role="combobox""#));
    assert!(html.contains(r#"placeholder="Select an option...""#));
    assert_eq!(count(&html, r#"role="listbox""#), 0);
}

#[test]
fn test_single_select_shows_selected_label_as_placeholder() {
    fn app() -> Element {
        rsx! {
            CreatableSelect { options: languages(), value: vec!["go".to_string()] }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"placeholder="Go""#), "{html}");
    assert_eq!(count(&html, "ui-creatable-chip\""), 0);
}

#[test]
fn test_multi_select_renders_chips_with_created_values() {
    fn app() -> Element {
        rsx! {
            CreatableSelect {
                multi: true,
                options: languages(),
                value: vec!["rust".to_string(), "Zig".to_string()],
            }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, r#"class="ui-creatable-chip""#), 2);
    assert!(html.contains("Rust"));
    assert!(html.contains(r#"aria-label="Remove Zig""#));
}
