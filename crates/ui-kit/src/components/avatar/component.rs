use dioxus::prelude::*;
use ui_types::avatar::{initials, DEFAULT_PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
}

impl AvatarSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarSize::Xs => "xs",
            AvatarSize::Sm => "sm",
            AvatarSize::Md => "md",
            AvatarSize::Lg => "lg",
            AvatarSize::Xl => "xl",
            AvatarSize::Xxl => "xxl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
    Rounded,
}

impl AvatarShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarShape::Circle => "circle",
            AvatarShape::Square => "square",
            AvatarShape::Rounded => "rounded",
        }
    }
}

/// Status dot drawn on the avatar's corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
    Away,
    Busy,
    Verified,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Offline => "offline",
            Presence::Away => "away",
            Presence::Busy => "busy",
            Presence::Verified => "verified",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Offline => "Offline",
            Presence::Away => "Away",
            Presence::Busy => "Busy",
            Presence::Verified => "Verified",
        }
    }
}

/// User picture that falls back to initials when there is no image or it
/// fails to load.
#[component]
pub fn Avatar(
    #[props(default)] src: Option<String>,
    #[props(default)] name: Option<String>,
    #[props(default)] initials_text: Option<String>,
    #[props(default = DEFAULT_PLACEHOLDER.to_string())] placeholder: String,
    #[props(default)] size: AvatarSize,
    #[props(default)] shape: AvatarShape,
    #[props(default)] presence: Option<Presence>,
    #[props(default = false)] loading: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut failed = use_signal(|| false);
    let fallback = initials(initials_text.as_deref(), name.as_deref(), &placeholder);
    let alt = name.clone().unwrap_or_default();
    let image = src.filter(|_| !failed());

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "ui-avatar", None, false),
            Attribute::new("data-size", size.as_str(), None, false),
            Attribute::new("data-shape", shape.as_str(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            "data-loading": loading,
            "aria-busy": loading,
            ..merged,
            if loading {
                span { class: "ui-avatar-skeleton", "aria-hidden": "true" }
            } else if let Some(url) = image {
                img {
                    class: "ui-avatar-image",
                    src: "{url}",
                    alt: "{alt}",
                    onerror: move |_| {
                        tracing::debug!("avatar image failed to load, showing initials");
                        failed.set(true);
                    },
                }
            } else {
                span { class: "ui-avatar-fallback", "aria-label": "{alt}", "{fallback}" }
            }
            if let Some(status) = presence {
                span {
                    class: "ui-avatar-presence",
                    "data-presence": status.as_str(),
                    title: status.label(),
                    "aria-label": status.label(),
                }
            }
        }
    }
}
