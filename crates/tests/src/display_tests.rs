use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_kit::*;

use crate::common::{count, render};

#[test]
fn test_progress_steps_labels() {
    fn app() -> Element {
        rsx! {
            ProgressSteps {
                current: 1,
                total: 4,
                labels: vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Step 2 of 4"));
    assert!(html.contains("50% Complete"));
    assert!(html.contains("width: 50%"));
    assert_eq!(count(&html, r#"data-state="complete""#), 1);
    assert_eq!(count(&html, r#"data-state="current""#), 1);
    assert_eq!(count(&html, r#"data-state="upcoming""#), 2);
}

#[test]
fn test_progress_steps_without_steps() {
    fn app() -> Element {
        rsx! {
            ProgressSteps { current: 0, total: 0 }
        }
    }
    let html = render(app);
    assert!(html.contains("No steps"));
    assert!(html.contains("0% Complete"));
}

#[test]
fn test_code_block_title_falls_back_to_language() {
    fn app() -> Element {
        rsx! {
            CodeBlock { code: "let answer = 42;", language: "rust" }
        }
    }
    let html = render(app);
    assert!(html.contains("let answer = 42;"));
    assert!(html.contains(r#"data-language="rust""#));
    assert!(html.contains(">rust<"));
    assert!(html.contains("Copy"));
}

#[test]
fn test_tooltip_side_and_text() {
    fn app() -> Element {
        rsx! {
            Tooltip { text: "Hint", side: Side::Left,
                span { "target" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-side="left""#));
    assert!(html.contains(r#"role="tooltip""#));
    assert!(html.contains("Hint"));
    assert!(html.contains("target"));
}
