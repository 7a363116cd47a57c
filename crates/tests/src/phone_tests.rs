use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

#[test]
fn test_controlled_number_is_formatted_for_its_country() {
    fn app() -> Element {
        rsx! {
            PhoneInput { value: "+254712121212" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"value="712 121 212""#), "{html}");
    assert!(html.contains(r#"type="tel""#));
    assert!(html.contains("Phone Number"));
    assert_eq!(count(&html, r#"role="alert""#), 0);
}

#[test]
fn test_short_number_shows_format_error() {
    fn app() -> Element {
        rsx! {
            PhoneInput { value: "+25471" }
        }
    }
    let html = render(app);
    assert!(html.contains("Phone number must start with"));
    assert_eq!(count(&html, r#"role="alert""#), 1);
}

#[test]
fn test_empty_input_shows_placeholder_and_every_country() {
    fn app() -> Element {
        rsx! {
            PhoneInput { label: "Mobile" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"placeholder="712 121 212""#));
    assert!(html.contains("Mobile"));
    assert!(html.contains("+254"));
    assert_eq!(count(&html, "<option"), ui_types::phone::COUNTRIES.len());
    assert_eq!(count(&html, r#"role="alert""#), 0);
}

#[test]
fn test_external_error_wins() {
    fn app() -> Element {
        rsx! {
            PhoneInput { value: "+25471", error: "Number already registered" }
        }
    }
    let html = render(app);
    assert!(html.contains("Number already registered"));
    assert!(!html.contains("Phone number must start with"));
}
