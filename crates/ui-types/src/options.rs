//! Option lists for selects that can grow new entries from typed text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// An option made from typed text; value and label are the same.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        Self::new(text, text)
    }
}

/// Options whose label contains `query`, ignoring case. A blank query
/// matches everything.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
        .collect()
}

/// Text that may be offered as a new option: non-blank and not already
/// present as a label or value (ignoring case).
pub fn creatable_text(options: &[SelectOption], query: &str) -> Option<String> {
    let text = query.trim();
    if text.is_empty() {
        return None;
    }
    let exists = options
        .iter()
        .any(|o| o.label.eq_ignore_ascii_case(text) || o.value.eq_ignore_ascii_case(text));
    (!exists).then(|| text.to_string())
}

/// Selection after picking `value`: multi-selects toggle membership,
/// single selects replace.
pub fn pick_value(selected: &[String], value: &str, multi: bool) -> Vec<String> {
    if !multi {
        return vec![value.to_string()];
    }
    if selected.iter().any(|v| v == value) {
        selected.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Label for `value`, falling back to the value itself for created entries
/// the host has not added to its option list yet.
pub fn label_for<'a>(options: &'a [SelectOption], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::new("banana", "Banana"),
            SelectOption::new("blood-orange", "Blood Orange"),
        ]
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = fruits();
        let labels: Vec<_> = filter_options(&options, "AN").iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Banana", "Blood Orange"]);
        assert_eq!(filter_options(&options, "  ").len(), 3);
    }

    #[test]
    fn existing_entries_are_not_creatable() {
        let options = fruits();
        assert_eq!(creatable_text(&options, "apple"), None);
        assert_eq!(creatable_text(&options, "BLOOD-ORANGE"), None);
        assert_eq!(creatable_text(&options, "   "), None);
        assert_eq!(creatable_text(&options, " Cherry "), Some("Cherry".to_string()));
    }

    #[test]
    fn multi_pick_toggles_and_single_pick_replaces() {
        let selected = vec!["apple".to_string()];
        assert_eq!(pick_value(&selected, "banana", true), vec!["apple", "banana"]);
        assert!(pick_value(&selected, "apple", true).is_empty());
        assert_eq!(pick_value(&selected, "banana", false), vec!["banana"]);
    }

    #[test]
    fn created_values_label_themselves() {
        let options = fruits();
        assert_eq!(label_for(&options, "apple"), "Apple");
        assert_eq!(label_for(&options, "Cherry"), "Cherry");
        assert_eq!(SelectOption::from_text("  Kiwi "), SelectOption::new("Kiwi", "Kiwi"));
    }
}
