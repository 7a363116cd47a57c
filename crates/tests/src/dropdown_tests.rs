use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

fn entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Label("File".into()),
        MenuItem::new("open", "Open").shortcut("Ctrl+O").into(),
        MenuItem::new("share", "Share").disabled().into(),
        MenuEntry::Separator,
        MenuItem::new("delete", "Delete").destructive().into(),
    ]
}

#[test]
fn test_closed_dropdown_renders_only_trigger() {
    fn app() -> Element {
        rsx! {
            Dropdown { label: "Actions", entries: entries() }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-haspopup="menu""#));
    assert!(html.contains(r#"data-state="closed""#));
    assert!(html.contains("ui-dropdown-chevron"));
    assert_eq!(count(&html, "ui-dropdown-panel"), 0);
}

#[test]
fn test_open_dropdown_renders_entries_at_requested_placement() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                label: "Actions",
                entries: entries(),
                default_open: true,
                side: Side::Top,
                align: Align::End,
                offset: 8.0,
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-state="open""#));
    assert!(html.contains(r#"role="menu""#));
    assert_eq!(count(&html, r#"role="menuitem""#), 3);
    assert_eq!(count(&html, r#"role="separator""#), 1);
    assert!(html.contains("Ctrl+O"));
    // Before any measurement the panel sits where it was asked to.
    assert!(html.contains(r#"data-side="top""#));
    assert!(html.contains(r#"data-align="end""#));
    assert!(html.contains("--ui-dropdown-offset: 8px;"));
}

#[test]
fn test_controlled_closed_overrides_default_open() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                label: "Actions",
                entries: entries(),
                open: false,
                default_open: true,
                show_chevron: false,
                size: DropdownSize::Xl,
                variant: DropdownVariant::Danger,
            }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, "ui-dropdown-panel"), 0);
    assert_eq!(count(&html, "ui-dropdown-chevron"), 0);
    assert!(html.contains(r#"data-size="xl""#));
    assert!(html.contains(r#"data-variant="danger""#));
}
