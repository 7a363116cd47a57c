/// Placeholder shown when there is neither a name nor explicit initials.
pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Text for an avatar's fallback.
///
/// Explicit initials win (uppercased). Otherwise the first letter of each of
/// the first two words of `name`. Otherwise `placeholder`.
pub fn initials(explicit: Option<&str>, name: Option<&str>, placeholder: &str) -> String {
    if let Some(explicit) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return explicit.to_uppercase();
    }

    let derived: String = name
        .unwrap_or_default()
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase();

    if derived.is_empty() {
        placeholder.to_string()
    } else {
        derived
    }
}
