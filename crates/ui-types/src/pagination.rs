/// One slot in a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, active: bool },
    /// Collapsed run of pages, rendered as an ellipsis.
    Gap,
}

/// Pages to render for `current` out of `total`, showing at most
/// `max_visible` consecutive pages around the current one.
///
/// The first and last pages are always reachable: when the window does not
/// touch an end, that end's page is pinned and separated by a [`PageItem::Gap`]
/// if any pages are skipped.
pub fn page_items(current: u32, total: u32, max_visible: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let max_visible = max_visible.max(1);
    let half = max_visible / 2;
    let span = max_visible - 1;

    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(span).min(total);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }

    let page = |number: u32| PageItem::Page {
        number,
        active: number == current,
    };

    let mut items = Vec::with_capacity(max_visible.min(total) as usize + 4);
    if start > 1 {
        items.push(page(1));
        if start > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((start..=end).map(&page));
    if end < total {
        if end + 1 < total {
            items.push(PageItem::Gap);
        }
        items.push(page(total));
    }
    items
}

/// Target of the "previous" button, if it is enabled.
pub fn previous_page(current: u32) -> Option<u32> {
    (current > 1).then(|| current - 1)
}

/// Target of the "next" button, if it is enabled.
pub fn next_page(current: u32, total: u32) -> Option<u32> {
    (current < total).then(|| current + 1)
}
