use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

fn items() -> Vec<TabItem> {
    vec![
        TabItem::new("one", "One").disabled(),
        TabItem::new("two", "Two"),
        TabItem::new("three", "Three"),
    ]
}

#[test]
fn test_first_enabled_tab_is_selected_by_default() {
    fn app() -> Element {
        rsx! {
            Tabs {
                tabs: items(),
                content: move |value: String| rsx! { p { "panel {value}" } },
            }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, r#"data-state="active""#), 1);
    assert!(html.contains("panel two"), "{html}");
    assert_eq!(count(&html, r#"role="tab""#), 3);
}

#[test]
fn test_controlled_value_wins() {
    fn app() -> Element {
        rsx! {
            Tabs {
                tabs: items(),
                value: "three",
                default_value: "two",
                orientation: TabsOrientation::Vertical,
                content: move |value: String| rsx! { p { "panel {value}" } },
            }
        }
    }
    let html = render(app);
    assert!(html.contains("panel three"));
    assert!(html.contains(r#"aria-orientation="vertical""#));
}
