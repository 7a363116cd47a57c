/// Roving focus movement within a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
    First,
    Last,
}

/// Index of the item that should receive focus after `movement`.
///
/// `enabled[i]` says whether item `i` can take focus. Next/Previous wrap at
/// the ends; with no current item they behave like First/Last. Returns
/// `None` when no item is enabled.
pub fn step(enabled: &[bool], current: Option<usize>, movement: FocusMove) -> Option<usize> {
    let len = enabled.len();
    if !enabled.iter().any(|e| *e) {
        return None;
    }

    match (movement, current) {
        (FocusMove::First, _) | (FocusMove::Next, None) => enabled.iter().position(|e| *e),
        (FocusMove::Last, _) | (FocusMove::Previous, None) => enabled.iter().rposition(|e| *e),
        (FocusMove::Next, Some(from)) => (1..=len)
            .map(|offset| (from + offset) % len)
            .find(|i| enabled[*i]),
        (FocusMove::Previous, Some(from)) => (1..=len)
            .map(|offset| (from + len - offset % len) % len)
            .find(|i| enabled[*i]),
    }
}

/// First focusable item, used when a menu opens.
pub fn first_enabled(enabled: &[bool]) -> Option<usize> {
    step(enabled, None, FocusMove::First)
}
