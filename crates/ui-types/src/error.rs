use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of configuration errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UiErrorKind {
    /// Range bounds that cannot describe a value interval (`min > max`,
    /// non-positive step, non-finite numbers).
    InvalidRange,
    /// A configuration document that failed to parse.
    InvalidConfig,
    /// User input that fails a format check, such as a phone number.
    InvalidInput,
}

impl fmt::Display for UiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiErrorKind::InvalidRange => write!(f, "InvalidRange"),
            UiErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            UiErrorKind::InvalidInput => write!(f, "InvalidInput"),
        }
    }
}

/// Structured error for component configuration and input format problems.
///
/// Pointer and keyboard interactions never produce this; configuration
/// errors are raised once, when a component or config document is
/// constructed, and input errors are shown next to the offending field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl UiError {
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidRange,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidInput,
            message: message.into(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for UiError {}

impl From<toml::de::Error> for UiError {
    fn from(err: toml::de::Error) -> Self {
        UiError::invalid_config(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_has_correct_kind() {
        let err = UiError::invalid_range("min exceeds max");
        assert_eq!(err.kind, UiErrorKind::InvalidRange);
        assert_eq!(err.message, "min exceeds max");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = UiError::invalid_config("expected a table");
        assert_eq!(format!("{}", err), "InvalidConfig: expected a table");
    }

    #[test]
    fn toml_errors_convert_to_invalid_config() {
        let parse = toml::from_str::<toml::Value>("this is = = not toml");
        let err: UiError = parse.unwrap_err().into();
        assert_eq!(err.kind, UiErrorKind::InvalidConfig);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = UiError::invalid_range("step must be positive");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: UiError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
