//! Pointer and keyboard input mapped onto a stepped numeric range.

use crate::controllable::Controllable;
use crate::error::UiError;
use crate::geometry::Rect;

/// Multiplier applied to `step` for PageUp / PageDown.
pub const PAGE_STEPS: f64 = 10.0;

/// Finest precision that noise rounding is applied at.
const MAX_TIDY_PLACES: usize = 12;

/// Validated `[min, max]` interval quantized by `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    min: f64,
    max: f64,
    step: f64,
}

impl RangeBounds {
    /// Validate the bounds once, at construction.
    ///
    /// Interactions never re-check these, so a misconfigured range is
    /// reported exactly one time.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, UiError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(UiError::invalid_range(format!(
                "range bounds must be finite (min={min}, max={max}, step={step})"
            )));
        }
        if min > max {
            return Err(UiError::invalid_range(format!(
                "min ({min}) must not exceed max ({max})"
            )));
        }
        if step <= 0.0 {
            return Err(UiError::invalid_range(format!(
                "step must be positive, got {step}"
            )));
        }

        let bounds = Self { min, max, step };
        if !bounds.is_on_grid(max) {
            tracing::warn!(
                min,
                max,
                step,
                "range span is not a multiple of step; the top value is off the step grid"
            );
        }
        Ok(bounds)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Snap `raw` to the nearest grid point `min + k * step`, then clamp.
    pub fn snap(&self, raw: f64) -> f64 {
        let steps = ((raw - self.min) / self.step).round();
        self.clamp(self.tidy(self.min + steps * self.step))
    }

    /// Position of `value` along the track, in percent.
    pub fn percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span * 100.0).clamp(0.0, 100.0)
    }

    /// Whether `value - min` is a whole number of steps.
    pub fn is_on_grid(&self, value: f64) -> bool {
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }

    /// Round away binary noise (`0.1 + 0.2`) to the precision of the inputs.
    /// Inputs finer than [`MAX_TIDY_PLACES`] are left untouched, since
    /// rounding there would collapse the grid.
    fn tidy(&self, value: f64) -> f64 {
        let places = decimal_places(self.step).max(decimal_places(self.min));
        if places > MAX_TIDY_PLACES {
            return value;
        }
        let factor = 10f64.powi(places as i32);
        (value * factor).round() / factor
    }
}

fn decimal_places(value: f64) -> usize {
    let text = format!("{value}");
    text.split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

/// Keyboard intents understood by the range control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKey {
    Increment,
    Decrement,
    PageIncrement,
    PageDecrement,
    Home,
    End,
    Other,
}

impl RangeKey {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowRight" | "ArrowUp" => RangeKey::Increment,
            "ArrowLeft" | "ArrowDown" => RangeKey::Decrement,
            "PageUp" => RangeKey::PageIncrement,
            "PageDown" => RangeKey::PageDecrement,
            "Home" => RangeKey::Home,
            "End" => RangeKey::End,
            _ => RangeKey::Other,
        }
    }
}

/// Map a pointer's horizontal position over the track to a snapped value.
///
/// Positions left or right of the track clamp to the ends. A track with no
/// width maps to `min`.
pub fn value_from_pointer(client_x: f64, track: &Rect, bounds: &RangeBounds) -> f64 {
    let fraction = if track.width > 0.0 {
        ((client_x - track.left) / track.width).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let raw = bounds.min + fraction * (bounds.max - bounds.min);
    bounds.snap(raw)
}

/// Apply a keyboard intent to `current`. Unknown keys return `current`.
pub fn value_from_key(current: f64, key: RangeKey, bounds: &RangeBounds) -> f64 {
    match key {
        RangeKey::Increment => bounds.max.min(bounds.tidy(current + bounds.step)),
        RangeKey::Decrement => bounds.min.max(bounds.tidy(current - bounds.step)),
        RangeKey::PageIncrement => bounds
            .max
            .min(bounds.tidy(current + bounds.step * PAGE_STEPS)),
        RangeKey::PageDecrement => bounds
            .min
            .max(bounds.tidy(current - bounds.step * PAGE_STEPS)),
        RangeKey::Home => bounds.min,
        RangeKey::End => bounds.max,
        RangeKey::Other => current,
    }
}

/// A range control's state machine: bounds, value ownership and the
/// disabled flag. Every transition returns the value to report, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeControl {
    bounds: RangeBounds,
    value: Controllable<f64>,
    disabled: bool,
}

impl RangeControl {
    pub fn new(bounds: RangeBounds, controlled: Option<f64>, default_value: f64) -> Self {
        Self {
            bounds,
            value: Controllable::new(controlled, bounds.snap(default_value)),
            disabled: false,
        }
    }

    pub fn bounds(&self) -> &RangeBounds {
        &self.bounds
    }

    pub fn value(&self) -> f64 {
        self.value.get()
    }

    pub fn percent(&self) -> f64 {
        self.bounds.percent(self.value())
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Mirror the host's `value` prop.
    pub fn sync(&mut self, controlled: Option<f64>) {
        self.value.sync(controlled);
    }

    pub fn pointer(&mut self, client_x: f64, track: &Rect) -> Option<f64> {
        if self.disabled {
            return None;
        }
        let next = value_from_pointer(client_x, track, &self.bounds);
        self.value.request(next)
    }

    pub fn key(&mut self, key: RangeKey) -> Option<f64> {
        if self.disabled || key == RangeKey::Other {
            return None;
        }
        let next = value_from_key(self.value(), key, &self.bounds);
        self.value.request(next)
    }
}
