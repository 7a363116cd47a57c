use dioxus::prelude::*;
use ui_kit::*;

use crate::common::{count, render};

#[test]
fn test_avatar_falls_back_to_initials() {
    fn app() -> Element {
        rsx! {
            Avatar { name: "grace brewster hopper", presence: Presence::Online }
        }
    }
    let html = render(app);
    assert!(html.contains(">GB<"), "{html}");
    assert!(html.contains(r#"data-presence="online""#));
    assert_eq!(count(&html, "<img"), 0);
}

#[test]
fn test_avatar_with_image() {
    fn app() -> Element {
        rsx! {
            Avatar { src: "/me.png", name: "Ada", size: AvatarSize::Xl, shape: AvatarShape::Square }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"src="/me.png""#));
    assert!(html.contains(r#"data-size="xl""#));
    assert!(html.contains(r#"data-shape="square""#));
}

#[test]
fn test_loading_avatar_renders_skeleton_only() {
    fn app() -> Element {
        rsx! {
            Avatar { src: "/me.png", name: "Ada", loading: true }
        }
    }
    let html = render(app);
    assert!(html.contains("ui-avatar-skeleton"));
    assert_eq!(count(&html, "<img"), 0);
}

#[test]
fn test_anonymous_avatar_shows_placeholder() {
    fn app() -> Element {
        rsx! {
            Avatar {}
        }
    }
    let html = render(app);
    assert!(html.contains(">?<"));
}
