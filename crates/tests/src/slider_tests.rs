use dioxus::prelude::*;
use ui_kit::*;

use crate::common::render;

#[test]
fn test_uncontrolled_slider_starts_at_default() {
    fn app() -> Element {
        rsx! {
            Slider { default_value: 50.0, label: "Volume", show_value: true }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"role="slider""#));
    assert!(html.contains(r#"aria-valuenow="50""#));
    assert!(html.contains(r#"aria-valuemin="0""#));
    assert!(html.contains(r#"aria-valuemax="100""#));
    assert!(html.contains(r#"aria-orientation="horizontal""#));
    assert!(html.contains("left: 50%"));
    assert!(html.contains(r#"tabindex="0""#));
}

#[test]
fn test_controlled_value_sets_fill() {
    fn app() -> Element {
        rsx! {
            Slider { min: 0.0, max: 60.0, step: 10.0, value: 30.0, default_value: 10.0 }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-valuenow="30""#));
    assert!(html.contains("width: 50%"));
}

#[test]
fn test_default_outside_bounds_is_clamped() {
    fn app() -> Element {
        rsx! {
            Slider { min: 0.0, max: 100.0, default_value: 150.0 }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"aria-valuenow="100""#));
}

#[test]
fn test_disabled_slider_leaves_tab_order() {
    fn app() -> Element {
        rsx! {
            Slider { default_value: 20.0, disabled: true }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"tabindex="-1""#));
}

#[test]
fn test_invalid_bounds_render_inert_at_min() {
    fn app() -> Element {
        rsx! {
            Slider { min: 10.0, max: 0.0, default_value: 5.0 }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"tabindex="-1""#));
    assert!(html.contains(r#"aria-valuenow="10""#));
    assert!(html.contains("width: 0%"));
}
