//! Country dial codes, national number formatting and E.164-style checks.

use crate::error::UiError;

/// A selectable country: ISO code, dial prefix and a `#` digit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
    pub pattern: &'static str,
}

impl Country {
    /// Regional-indicator flag emoji for the two-letter code.
    pub fn flag(&self) -> String {
        self.code
            .chars()
            .filter(|c| c.is_ascii_uppercase())
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}

const fn country(
    code: &'static str,
    name: &'static str,
    dial_code: &'static str,
    pattern: &'static str,
) -> Country {
    Country {
        code,
        name,
        dial_code,
        pattern,
    }
}

pub const COUNTRIES: &[Country] = &[
    country("US", "United States", "+1", "(###) ###-####"),
    country("CA", "Canada", "+1", "(###) ###-####"),
    country("GB", "United Kingdom", "+44", "#### ### ####"),
    country("KE", "Kenya", "+254", "### ### ###"),
    country("NG", "Nigeria", "+234", "### ### ####"),
    country("ZA", "South Africa", "+27", "## ### ####"),
    country("IN", "India", "+91", "##### #####"),
    country("AU", "Australia", "+61", "### ### ###"),
    country("DE", "Germany", "+49", "### ########"),
    country("FR", "France", "+33", "# ## ## ## ##"),
    country("BR", "Brazil", "+55", "(##) #####-####"),
    country("MX", "Mexico", "+52", "### ### ####"),
    country("JP", "Japan", "+81", "###-####-####"),
    country("CN", "China", "+86", "### #### ####"),
    country("EG", "Egypt", "+20", "### ### ####"),
    country("UG", "Uganda", "+256", "### ### ###"),
    country("TZ", "Tanzania", "+255", "### ### ###"),
    country("RW", "Rwanda", "+250", "### ### ###"),
    country("GH", "Ghana", "+233", "### ### ####"),
    country("ET", "Ethiopia", "+251", "### ### ####"),
];

/// Country used when a requested code is unknown.
const FALLBACK_COUNTRY: usize = 2;

/// Look a country up by ISO code, case-insensitively.
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// `code`'s country, or the fallback when the code is unknown.
pub fn country_or_fallback(code: &str) -> &'static Country {
    find_country(code).unwrap_or(&COUNTRIES[FALLBACK_COUNTRY])
}

/// ASCII digits of `input`, everything else dropped.
pub fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Lay `digits` out over `pattern`, where `#` takes the next digit.
///
/// Literal characters are emitted only while digits remain, so a partial
/// number has no trailing separators. Digits beyond the pattern are dropped.
pub fn format_national(digits: &str, pattern: &str) -> String {
    let mut remaining = digits.chars().filter(|c| c.is_ascii_digit()).peekable();
    let mut out = String::with_capacity(pattern.len());
    for slot in pattern.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = remaining.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }
    out
}

/// Check a full number: `+` followed by 7 to 15 digits.
pub fn validate_full_number(full: &str) -> Result<(), UiError> {
    let valid = full
        .strip_prefix('+')
        .map(|rest| (7..=15).contains(&rest.len()) && rest.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(UiError::invalid_input(
            "Phone number must start with '+' and contain 7 to 15 digits.",
        ))
    }
}

/// A phone number split into its country and national digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    pub country: &'static Country,
    pub national: String,
}

impl PhoneNumber {
    pub fn new(country: &'static Country, national: &str) -> Self {
        Self {
            country,
            national: digits(national),
        }
    }

    /// Split a full number on the longest matching dial code. Numbers
    /// with no known prefix keep `fallback` and all their digits.
    ///
    /// Countries sharing a prefix resolve to `fallback` when it is one of
    /// them, otherwise to the first in [`COUNTRIES`].
    pub fn parse(full: &str, fallback: &'static Country) -> Self {
        let best = COUNTRIES
            .iter()
            .filter(|c| full.starts_with(c.dial_code))
            .map(|c| c.dial_code.len())
            .max();
        match best {
            Some(len) => {
                let prefix = &full[..len];
                let country = if fallback.dial_code == prefix {
                    fallback
                } else {
                    COUNTRIES
                        .iter()
                        .find(|c| c.dial_code == prefix)
                        .unwrap_or(fallback)
                };
                Self::new(country, &full[len..])
            }
            None => Self::new(fallback, full),
        }
    }

    /// Dial code followed by the national digits.
    pub fn full(&self) -> String {
        format!("{}{}", self.country.dial_code, self.national)
    }

    /// National digits laid out with the country's pattern.
    pub fn display(&self) -> String {
        format_national(&self.national, self.country.pattern)
    }

    /// Format problem to show, if any. An empty number is not an error.
    pub fn error(&self) -> Option<UiError> {
        if self.national.is_empty() {
            return None;
        }
        validate_full_number(&self.full()).err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiErrorKind;
    use pretty_assertions::assert_eq;

    fn kenya() -> &'static Country {
        find_country("KE").unwrap()
    }

    #[test]
    fn partial_numbers_have_no_trailing_separators() {
        assert_eq!(format_national("712", "(###) ###-####"), "(712");
        assert_eq!(format_national("7125", "(###) ###-####"), "(712) 5");
        assert_eq!(format_national("712121212", "### ### ###"), "712 121 212");
    }

    #[test]
    fn digits_beyond_the_pattern_are_dropped() {
        assert_eq!(format_national("12345", "## #"), "12 3");
    }

    #[test]
    fn full_number_validation() {
        assert!(validate_full_number("+254712121212").is_ok());
        assert!(validate_full_number("+1234567").is_ok());
        let err = validate_full_number("254712121212").unwrap_err();
        assert_eq!(err.kind, UiErrorKind::InvalidInput);
        assert!(validate_full_number("+123456").is_err());
        assert!(validate_full_number("+1234567890123456").is_err());
        assert!(validate_full_number("+25471a121212").is_err());
    }

    #[test]
    fn parse_uses_the_longest_dial_code() {
        let number = PhoneNumber::parse("+254712121212", &COUNTRIES[0]);
        assert_eq!(number.country.code, "KE");
        assert_eq!(number.national, "712121212");
        assert_eq!(number.display(), "712 121 212");
        assert_eq!(number.full(), "+254712121212");
    }

    #[test]
    fn shared_prefix_prefers_the_fallback_country() {
        let canada = find_country("ca").unwrap();
        assert_eq!(PhoneNumber::parse("+14165550100", canada).country.code, "CA");
        assert_eq!(PhoneNumber::parse("+14165550100", kenya()).country.code, "US");
    }

    #[test]
    fn unknown_prefix_keeps_fallback_and_digits() {
        let number = PhoneNumber::parse("+999123", kenya());
        assert_eq!(number.country.code, "KE");
        assert_eq!(number.national, "999123");
    }

    #[test]
    fn empty_number_has_no_error() {
        assert_eq!(PhoneNumber::new(kenya(), "").error(), None);
        assert!(PhoneNumber::new(kenya(), "71").error().is_some());
        assert_eq!(PhoneNumber::new(kenya(), "712 121 212").error(), None);
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(country_or_fallback("zz").code, "GB");
        assert_eq!(country_or_fallback("KE").code, "KE");
    }

    #[test]
    fn flags_are_regional_indicators() {
        assert_eq!(kenya().flag(), "\u{1F1F0}\u{1F1EA}");
    }
}
