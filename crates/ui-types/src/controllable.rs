/// State that is either owned by the host (controlled) or by the component
/// (uncontrolled).
///
/// Controlled values are never written internally: a requested change is
/// only reported, and the host decides whether to feed it back through
/// [`Controllable::sync`]. Uncontrolled values are updated in place and
/// reported the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Controllable<T> {
    internal: T,
    controlled: Option<T>,
}

impl<T: Clone + PartialEq> Controllable<T> {
    pub fn new(controlled: Option<T>, default: T) -> Self {
        Self {
            internal: default,
            controlled,
        }
    }

    pub fn uncontrolled(default: T) -> Self {
        Self::new(None, default)
    }

    pub fn controlled(value: T) -> Self {
        Self::new(Some(value.clone()), value)
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// The value currently in effect.
    pub fn get(&self) -> T {
        self.controlled
            .clone()
            .unwrap_or_else(|| self.internal.clone())
    }

    /// Mirror the host's latest prop. `None` switches back to internal state.
    pub fn sync(&mut self, controlled: Option<T>) {
        self.controlled = controlled;
    }

    /// Request a transition to `next`.
    ///
    /// Returns the value to report through the change callback, or `None`
    /// when `next` equals the current value.
    pub fn request(&mut self, next: T) -> Option<T> {
        if next == self.get() {
            return None;
        }
        if self.controlled.is_none() {
            self.internal = next.clone();
        }
        Some(next)
    }
}
