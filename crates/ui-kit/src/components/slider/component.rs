use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use ui_types::{RangeBounds, RangeControl, RangeKey, Rect, SessionEvent, SessionKind, UiError};

use crate::session::{use_element_id, use_session_slot, SessionTargets};

type BoundsKey = (u64, u64, u64);

/// Validated bounds, recomputed only when `min`, `max` or `step` change, so
/// an invalid configuration is logged once rather than on every render.
fn use_validated_bounds(min: f64, max: f64, step: f64) -> Result<RangeBounds, UiError> {
    let cache = use_hook(|| Rc::new(RefCell::new(None::<(BoundsKey, Result<RangeBounds, UiError>)>)));
    let key = (min.to_bits(), max.to_bits(), step.to_bits());
    let mut cached = cache.borrow_mut();
    match cached.as_ref() {
        Some((previous, result)) if *previous == key => result.clone(),
        _ => {
            let result = RangeBounds::new(min, max, step);
            if let Err(err) = &result {
                tracing::warn!(%err, "slider disabled by invalid bounds");
            }
            *cached = Some((key, result.clone()));
            result
        }
    }
}

/// What one transition does to the slider: the value to keep internally
/// (uncontrolled only) and the value to hand to `on_value_change`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Commit {
    store: Option<f64>,
    report: Option<f64>,
}

fn commit(control: &RangeControl, reported: Option<f64>) -> Commit {
    match reported {
        Some(next) => Commit {
            store: (!control.is_controlled()).then_some(next),
            report: Some(next),
        },
        None => Commit::default(),
    }
}

/// State machine for one transition, seeded from this render's props and
/// the internally stored value.
fn control_for(bounds: RangeBounds, controlled: Option<f64>, stored: f64, disabled: bool) -> RangeControl {
    let mut control = RangeControl::new(bounds, controlled, stored);
    control.set_disabled(disabled);
    control
}

/// Horizontal range input with pointer dragging and keyboard stepping.
///
/// `value` makes the slider controlled: drags and keys only report through
/// `on_value_change`. Without it the slider starts at `default_value` (or
/// `min`) and tracks its own value.
#[component]
pub fn Slider(
    #[props(default = 0.0)] min: f64,
    #[props(default = 100.0)] max: f64,
    #[props(default = 1.0)] step: f64,
    #[props(default)] value: Option<f64>,
    #[props(default)] default_value: Option<f64>,
    #[props(default)] on_value_change: EventHandler<f64>,
    #[props(default = false)] disabled: bool,
    #[props(default)] label: Option<String>,
    #[props(default = false)] show_value: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let bounds = use_validated_bounds(min, max, step).ok();
    let mut internal = use_signal(move || default_value.unwrap_or(min));
    let mut track = use_signal(|| None::<Rect>);
    let mut pending = use_signal(|| None::<f64>);
    let mut dragging = use_signal(|| false);
    let slot = use_session_slot();
    let id = use_element_id("ui-slider");
    let track_id = format!("{id}-track");
    let drag_targets = SessionTargets::Track {
        track_id: track_id.clone(),
    };
    let inert = disabled || bounds.is_none();

    // A fresh state machine per transition: bounds and the controlled value
    // come from this render's props, the uncontrolled value from the signal.
    let snapshot = move || bounds.map(|b| control_for(b, value, *internal.peek(), disabled));
    let mut report = move |control: &RangeControl, reported: Option<f64>| {
        let outcome = commit(control, reported);
        if let Some(next) = outcome.store {
            internal.set(next);
        }
        if let Some(next) = outcome.report {
            on_value_change.call(next);
        }
    };

    let drag_slot = slot.clone();
    let on_event = use_callback(move |event: SessionEvent| match event {
        SessionEvent::TrackMeasured { rect } => {
            track.set(Some(rect));
            let start = pending.write().take();
            if let (Some(client_x), Some(mut control)) = (start, snapshot()) {
                let reported = control.pointer(client_x, &rect);
                report(&control, reported);
            }
        }
        SessionEvent::PointerMove { client_x } => {
            if !*dragging.peek() {
                return;
            }
            let rect = *track.peek();
            if let (Some(rect), Some(mut control)) = (rect, snapshot()) {
                let reported = control.pointer(client_x, &rect);
                report(&control, reported);
            }
        }
        SessionEvent::PointerUp => {
            dragging.set(false);
            track.set(None);
            // Ending stops the task delivering this event; let it return first.
            let slot = drag_slot.clone();
            spawn(async move {
                if !*dragging.peek() {
                    slot.end();
                }
            });
        }
        _ => {}
    });

    let (current, percent) = match bounds {
        Some(b) => {
            let control = RangeControl::new(b, value, internal());
            (control.value(), control.percent())
        }
        None => (min, 0.0),
    };
    let labelled_by = label.as_ref().map(|_| format!("{id}-label"));
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-slider", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { "data-disabled": inert, ..merged,
            if label.is_some() || show_value {
                div { class: "ui-slider-header",
                    if let Some(text) = label {
                        span { class: "ui-slider-label", id: "{id}-label", "{text}" }
                    }
                    if show_value {
                        span { class: "ui-slider-value", "{current}" }
                    }
                }
            }
            div {
                id: "{track_id}",
                class: "ui-slider-track",
                "data-dragging": dragging(),
                onpointerdown: move |evt: PointerEvent| {
                    if inert {
                        return;
                    }
                    evt.prevent_default();
                    pending.set(Some(evt.client_coordinates().x));
                    dragging.set(true);
                    slot.begin(SessionKind::Drag, drag_targets.clone(), on_event);
                },
                div { class: "ui-slider-range", style: "width: {percent}%" }
                div {
                    class: "ui-slider-thumb",
                    role: "slider",
                    tabindex: if inert { "-1" } else { "0" },
                    style: "left: {percent}%",
                    "aria-valuemin": "{min}",
                    "aria-valuemax": "{max}",
                    "aria-valuenow": "{current}",
                    "aria-disabled": inert,
                    "aria-orientation": "horizontal",
                    "aria-labelledby": labelled_by,
                    onkeydown: move |evt: KeyboardEvent| {
                        let key = RangeKey::from_key_name(&evt.key().to_string());
                        if key == RangeKey::Other {
                            return;
                        }
                        evt.prevent_default();
                        if let Some(mut control) = snapshot() {
                            let reported = control.key(key);
                            report(&control, reported);
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> RangeBounds {
        RangeBounds::new(0.0, 100.0, 5.0).unwrap()
    }

    /// Press `key` the way the thumb's keydown handler does, feeding each
    /// stored value into the next press.
    fn press(stored: &mut f64, controlled: Option<f64>, key: RangeKey, reports: &mut Vec<f64>) {
        let mut control = control_for(bounds(), controlled, *stored, false);
        let reported = control.key(key);
        let outcome = commit(&control, reported);
        if let Some(next) = outcome.store {
            *stored = next;
        }
        reports.extend(outcome.report);
    }

    #[test]
    fn uncontrolled_arrow_right_stores_and_reports_once() {
        let mut stored = 50.0;
        let mut reports = Vec::new();
        press(&mut stored, None, RangeKey::Increment, &mut reports);
        assert_eq!(stored, 55.0);
        assert_eq!(reports, vec![55.0]);
    }

    #[test]
    fn controlled_press_reports_without_storing() {
        let mut stored = 50.0;
        let mut reports = Vec::new();
        press(&mut stored, Some(20.0), RangeKey::Increment, &mut reports);
        assert_eq!(stored, 50.0);
        assert_eq!(reports, vec![25.0]);
    }

    #[test]
    fn repeated_end_reports_only_the_first_move() {
        let mut stored = 40.0;
        let mut reports = Vec::new();
        press(&mut stored, None, RangeKey::End, &mut reports);
        press(&mut stored, None, RangeKey::End, &mut reports);
        assert_eq!(reports, vec![100.0]);
    }

    #[test]
    fn disabled_control_commits_nothing() {
        let mut control = control_for(bounds(), None, 50.0, true);
        let reported = control.key(RangeKey::Home);
        assert_eq!(commit(&control, reported), Commit::default());
    }
}
