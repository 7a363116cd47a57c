use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

#[test]
fn test_button_renders_variant_attributes() {
    fn app() -> Element {
        rsx! {
            Button { tone: Tone::Danger, fill: Fill::Outline, size: ControlSize::Lg, "Delete" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-tone="danger""#), "{html}");
    assert!(html.contains(r#"data-fill="outline""#));
    assert!(html.contains(r#"data-size="lg""#));
    assert!(html.contains("Delete"));
    assert_eq!(count(&html, "ui-button-spinner"), 0);
}

#[test]
fn test_button_defaults_to_neutral_contained_medium() {
    fn app() -> Element {
        rsx! {
            Button { "Plain" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-tone="default""#));
    assert!(html.contains(r#"data-fill="contained""#));
    assert!(html.contains(r#"data-size="md""#));
}

#[test]
fn test_loading_button_shows_spinner() {
    fn app() -> Element {
        rsx! {
            Button { loading: true, "Saving" }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, "ui-button-spinner"), 1);
    assert!(html.contains("Saving"));
}

#[test]
fn test_badge_and_card_compose() {
    fn app() -> Element {
        rsx! {
            Card {
                CardHeader {
                    CardTitle { "Title" }
                    Badge { tone: Tone::Success, fill: BadgeFill::Outline, "New" }
                }
                CardContent { "Body" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("ui-card-header"));
    assert!(html.contains("<h3"));
    assert!(html.contains(r#"data-tone="success""#));
    assert!(html.contains(r#"data-fill="outline""#));
    assert!(html.contains("Body"));
}

#[test]
fn test_go_back_button_is_an_outline_ghost() {
    fn app() -> Element {
        rsx! {
            GoBackButton { text: "Back to cases" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-tone="ghost""#));
    assert!(html.contains(r#"data-fill="outline""#));
    assert!(html.contains("ui-go-back"));
    assert!(html.contains("Back to cases"));
    assert_eq!(count(&html, "ui-button-icon"), 1);
}
