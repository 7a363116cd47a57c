use dioxus::prelude::*;
use ui_types::{UiConfig, UiError};

mod sections;

const GALLERY_CSS: Asset = asset!("/assets/gallery.css");

/// Settings compiled into the binary; edit `gallery.toml` and rebuild.
const GALLERY_TOML: &str = include_str!("../gallery.toml");

/// Parse `text`, keeping the rejection so it can be logged once the
/// subscriber is running.
fn parse_config(text: &str) -> (UiConfig, Option<UiError>) {
    match UiConfig::from_toml_str(text) {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    }
}

fn log_level(config: &UiConfig) -> tracing::Level {
    config.log_level.parse().unwrap_or(tracing::Level::INFO)
}

fn main() {
    let (config, rejected) = parse_config(GALLERY_TOML);
    if let Err(err) = dioxus::logger::init(log_level(&config)) {
        eprintln!("logger already initialized: {err}");
    }
    if let Some(err) = rejected {
        tracing::warn!(%err, "gallery.toml rejected, using defaults");
    }
    tracing::info!(
        platform = client_platform(),
        log_level = %config.log_level,
        "starting component gallery"
    );
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: GALLERY_CSS }
        main { class: "gallery",
            header { class: "gallery-header",
                h1 { "ui-kit gallery" }
                p { "Every component with its default configuration and a live variant." }
            }
            sections::Buttons {}
            sections::Fields {}
            sections::Toggles {}
            sections::Choices {}
            sections::PhoneDemo {}
            sections::CreatableDemo {}
            sections::TabsDemo {}
            sections::Avatars {}
            sections::PaginationDemo {}
            sections::Overlays {}
            sections::SliderDemo {}
            sections::Progress {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        let (config, rejected) = parse_config(GALLERY_TOML);
        assert!(rejected.is_none());
        assert_eq!(config.range.step, 5.0);
        assert_eq!(log_level(&config), tracing::Level::DEBUG);
    }

    #[test]
    fn rejected_config_falls_back_to_defaults() {
        let (config, rejected) = parse_config("[range]\nmin = 10.0\nmax = 0.0\n");
        assert!(rejected.is_some());
        assert_eq!(config.range.max, UiConfig::default().range.max);
        assert_eq!(log_level(&config), tracing::Level::INFO);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = UiConfig {
            log_level: "chatty".into(),
            ..UiConfig::default()
        };
        assert_eq!(log_level(&config), tracing::Level::INFO);
    }
}
