use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

fn plans() -> Vec<RadioOption> {
    vec![
        RadioOption::new("solo", "Solo").description("One seat"),
        RadioOption::new("team", "Team"),
        RadioOption::new("enterprise", "Enterprise").disabled(),
    ]
}

#[test]
fn test_radio_group_lists_every_option() {
    fn app() -> Element {
        rsx! {
            RadioGroup { label: "Plan", required: true, options: plans(), default_value: "team" }
        }
    }
    let html = render(app);
    assert!(html.contains("Plan"));
    assert_eq!(count(&html, "ui-radio-option-label"), 3);
    assert_eq!(count(&html, "ui-radio-option-description"), 1);
    assert!(html.contains("One seat"));
    assert_eq!(count(&html, "ui-field-required"), 1);
    assert!(html.contains(r#"data-layout="list""#));
}

#[test]
fn test_radio_group_card_layout_and_error() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                options: plans(),
                layout: RadioLayout::Cards,
                error: "Choose a plan",
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-layout="cards""#));
    assert!(html.contains("Choose a plan"));
    assert!(html.contains(r#"role="alert""#));
    assert_eq!(count(&html, "ui-radio-group-label"), 0);
}
