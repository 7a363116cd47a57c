use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

#[test]
fn test_input_with_error_links_message() {
    fn app() -> Element {
        rsx! {
            InputField { label: "Email", required: true, error: "Email is required" }
        }
    }
    let html = render(app);
    assert!(html.contains("Email is required"));
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("-error"), "{html}");
    assert_eq!(count(&html, "ui-field-required"), 1);
}

#[test]
fn test_input_without_error_has_no_alert() {
    fn app() -> Element {
        rsx! {
            InputField { label: "Name", placeholder: "Your name" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"placeholder="Your name""#));
    assert_eq!(count(&html, r#"role="alert""#), 0);
    assert_eq!(count(&html, "ui-field-required"), 0);
}

#[test]
fn test_number_field_renders_bounds() {
    fn app() -> Element {
        rsx! {
            NumberField { label: "Qty", value: 3.0, min: 0.0, max: 10.0, step: 0.5 }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"type="number""#));
    assert!(html.contains(r#"min="0""#));
    assert!(html.contains(r#"max="10""#));
    assert!(html.contains(r#"step="0.5""#));
}

#[test]
fn test_textarea_rows() {
    fn app() -> Element {
        rsx! {
            TextareaField { label: "Notes", rows: 6 }
        }
    }
    let html = render(app);
    assert!(html.contains("<textarea"));
    assert!(html.contains(r#"rows="6""#));
}

#[test]
fn test_date_field_renders_range_and_icon_slot() {
    fn app() -> Element {
        rsx! {
            DateField {
                label: "Start date",
                value: "2024-03-01",
                min: "2024-01-01",
                max: "2024-12-31",
                icon: rsx! { span { "cal" } },
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"type="date""#));
    assert!(html.contains(r#"min="2024-01-01""#));
    assert!(html.contains(r#"max="2024-12-31""#));
    assert!(html.contains(r#"value="2024-03-01""#));
    assert_eq!(count(&html, "ui-field-icon"), 1);
}

#[test]
fn test_file_field_filters_by_accept() {
    fn app() -> Element {
        rsx! {
            FileField { label: "Avatar", accept: "image/*", error: "Pick an image" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"type="file""#));
    assert!(html.contains(r#"accept="image/*""#));
    assert!(html.contains("ui-file-input"));
    assert!(html.contains("Pick an image"));
}
