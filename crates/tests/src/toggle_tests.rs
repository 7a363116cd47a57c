use dioxus::prelude::*;
use ui_kit::*;

use crate::common::render;

#[test]
fn test_switch_uncontrolled_default() {
    fn app() -> Element {
        rsx! {
            Switch { default_checked: true, size: SwitchSize::Large, label: "Wi-Fi" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"role="switch""#));
    assert!(html.contains(r#"data-state="checked""#));
    assert!(html.contains(r#"data-size="large""#));
    assert!(html.contains("Wi-Fi"));
}

#[test]
fn test_controlled_switch_ignores_default() {
    fn app() -> Element {
        rsx! {
            Switch { checked: false, default_checked: true }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-state="unchecked""#));
}

#[test]
fn test_checkbox_label_and_description() {
    fn app() -> Element {
        rsx! {
            Checkbox { checked: true, label: "Accept", description: "Required to continue" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"role="checkbox""#));
    assert!(html.contains(r#"data-state="checked""#));
    assert!(html.contains("ui-checkbox-indicator"));
    assert!(html.contains("Required to continue"));
}
