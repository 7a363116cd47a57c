use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::placement::{Align, PlacementRequest, Side};
use crate::range::RangeBounds;

/// Default placement for overlays that do not specify one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OverlayDefaults {
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub align: Align,
    #[serde(default = "default_offset")]
    pub offset: f64,
}

fn default_offset() -> f64 {
    4.0
}

impl Default for OverlayDefaults {
    fn default() -> Self {
        Self {
            side: Side::default(),
            align: Align::default(),
            offset: default_offset(),
        }
    }
}

impl OverlayDefaults {
    pub fn request(&self) -> PlacementRequest {
        PlacementRequest {
            side: self.side,
            align: self.align,
            offset: self.offset,
        }
    }
}

/// Default bounds for range controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RangeDefaults {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
}

impl Default for RangeDefaults {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            default_value: 50.0,
        }
    }
}

impl RangeDefaults {
    pub fn bounds(&self) -> Result<RangeBounds, UiError> {
        RangeBounds::new(self.min, self.max, self.step)
    }
}

/// Default pagination window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaginationDefaults {
    pub max_visible: u32,
    pub show_first_last: bool,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            max_visible: 5,
            show_first_last: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Top-level config file structure.
///
/// Every section falls back to its defaults so that a missing or partial
/// file still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub overlay: OverlayDefaults,
    #[serde(default)]
    pub range: RangeDefaults,
    #[serde(default)]
    pub pagination: PaginationDefaults,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            overlay: OverlayDefaults::default(),
            range: RangeDefaults::default(),
            pagination: PaginationDefaults::default(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, UiError> {
        let config: UiConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), UiError> {
        self.range.bounds()?;
        if self.overlay.offset < 0.0 || !self.overlay.offset.is_finite() {
            return Err(UiError::invalid_config(format!(
                "overlay offset must be a non-negative number, got {}",
                self.overlay.offset
            )));
        }
        Ok(())
    }
}
