use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

#[test]
fn test_middle_page_has_two_gaps() {
    fn app() -> Element {
        rsx! {
            Pagination { current: 5, total: 10, on_page_change: move |_| {} }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, "ui-pagination-gap"), 2);
    assert_eq!(count(&html, r#"aria-current="page""#), 1);
    assert!(html.contains(">5<"));
    assert!(html.contains(">10<"));
}

#[test]
fn test_short_range_has_no_gaps_or_first_last() {
    fn app() -> Element {
        rsx! {
            Pagination { current: 2, total: 3, show_first_last: false, on_page_change: move |_| {} }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, "ui-pagination-gap"), 0);
    assert_eq!(count(&html, r#"aria-label="First page""#), 0);
    assert_eq!(count(&html, r#"aria-label="Previous page""#), 1);
}

#[test]
fn test_zero_pages_render_nothing() {
    fn app() -> Element {
        rsx! {
            Pagination { current: 1, total: 0, on_page_change: move |_| {} }
        }
    }
    let html = render(app);
    assert_eq!(count(&html, "ui-pagination"), 0);
}
