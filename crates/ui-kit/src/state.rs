use dioxus::prelude::*;
use ui_types::Controllable;

/// Per-render view of a [`Controllable`] value whose internal half lives in
/// a signal.
///
/// The controlled half is the prop from the current render, so nothing is
/// written while rendering; only [`ControllableState::request`] touches the
/// signal, and only when the value is uncontrolled.
#[derive(Clone, Copy)]
pub struct ControllableState<T: 'static> {
    internal: Signal<T>,
    controlled: Option<T>,
}

impl<T: Clone + PartialEq + 'static> ControllableState<T> {
    fn model(&self) -> Controllable<T> {
        Controllable::new(self.controlled.clone(), self.internal.peek().clone())
    }

    pub fn get(&self) -> T {
        match &self.controlled {
            Some(value) => value.clone(),
            None => self.internal.read().clone(),
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Ask for `next`; returns the value to report when it differs.
    pub fn request(&mut self, next: T) -> Option<T> {
        let mut model = self.model();
        let reported = model.request(next)?;
        if !model.is_controlled() {
            self.internal.set(model.get());
        }
        Some(reported)
    }
}

pub fn use_controllable<T: Clone + PartialEq + 'static>(
    controlled: Option<T>,
    default: impl FnOnce() -> T,
) -> ControllableState<T> {
    let internal = use_signal(default);
    ControllableState {
        internal,
        controlled,
    }
}
