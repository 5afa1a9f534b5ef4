//! US Phone Number Normalization
//!
//! Three views of the same user input:
//!
//! - **display**: `(555) 123-4567`, re-rendered on every keystroke, never sent anywhere
//! - **canonical**: `+15551234567`, the only form the update endpoint accepts
//! - **validity**: a loose check used before canonicalizing
//!
//! ```rust
//! use billing_core::phone;
//!
//! assert_eq!(phone::format_for_display("5551234567"), "(555) 123-4567");
//! assert_eq!(phone::to_canonical_us_format("(555) 123-4567"), "+15551234567");
//! assert!(phone::is_canonical_us("+1 555-123-4567"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Maximum digits kept by the display formatter
pub const DISPLAY_MAX_DIGITS: usize = 10;

/// Human-readable description of the canonical format, used in error messages
pub const CANONICAL_FORMAT_HINT: &str = "+1 followed by 10 digits (e.g. +15551234567)";

static LOOSE_PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").ok());

static CANONICAL_US: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\+1[0-9]{10}$").ok());

fn pattern_matches(pattern: &LazyLock<Option<Regex>>, candidate: &str) -> bool {
    pattern
        .as_ref()
        .is_some_and(|regex| regex.is_match(candidate))
}

/// Remove whitespace, hyphens and parentheses, keeping everything else
pub fn strip_formatting(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Loose validity check: an optional `+` followed by 10 to 15 digits once
/// separators are stripped.
pub fn is_valid_phone(input: &str) -> bool {
    pattern_matches(&LOOSE_PHONE, &strip_formatting(input))
}

/// Strict server-side check: exactly `+1` and 10 digits once separators are stripped.
pub fn is_canonical_us(input: &str) -> bool {
    pattern_matches(&CANONICAL_US, &strip_formatting(input))
}

/// Convert free-form input to `+1XXXXXXXXXX` where possible.
///
/// This does not validate. Inputs that already start with `+` but have the
/// wrong digit count come back with separators stripped and nothing else
/// checked; anything else that is not 10 or 11 digits comes back as bare
/// digits. Callers gate on [`is_valid_phone`] first.
pub fn to_canonical_us_format(input: &str) -> String {
    let digits = digits_only(input);

    if digits.len() == 11 && digits.starts_with('1') {
        return format!("+{digits}");
    }

    if digits.len() == 10 {
        return format!("+1{digits}");
    }

    if input.starts_with('+') {
        return strip_formatting(input);
    }

    digits
}

/// Progressive `(XXX) XXX-XXXX` rendering for a text field.
///
/// Idempotent: feeding the output back in yields the same string.
pub fn format_for_display(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(DISPLAY_MAX_DIGITS).collect();

    // digits are ASCII so byte slicing is char slicing
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
