//! Field validation rules
//!
//! Pure, synchronous checks mapping a field and its raw value to a
//! pass/fail outcome. No I/O and no view updates happen here.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::field::{FieldName, ValidationError};

/// Minimum trimmed length for the name field
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed length for the message field
pub const MESSAGE_MIN_CHARS: usize = 10;

// U+FEFF counts as whitespace here; the Unicode `\s` class leaves it out
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("email pattern is valid")
});

/// Strips leading and trailing whitespace, byte order marks included
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Returns true if `value` has the `local@domain.tld` shape
///
/// The whole value is matched, so surrounding whitespace fails.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validates a single field value
///
/// Emptiness and length checks use the trimmed value, counted in chars.
/// The email shape check runs against the untrimmed value.
///
/// # Example
/// ```rust
/// use site_interactions::domain::{field::FieldName, validator::validate};
///
/// assert!(validate(FieldName::Name, "Ada").is_ok());
/// assert_eq!(
///     validate(FieldName::Email, "ada@example").unwrap_err().to_string(),
///     "Please enter a valid email address"
/// );
/// ```
pub fn validate(field: FieldName, value: &str) -> Result<(), ValidationError> {
    let trimmed = trim_field(value);
    match field {
        FieldName::Name => {
            if trimmed.is_empty() {
                Err(ValidationError::NameRequired)
            } else if trimmed.chars().count() < NAME_MIN_CHARS {
                Err(ValidationError::NameTooShort)
            } else {
                Ok(())
            }
        }
        FieldName::Email => {
            if trimmed.is_empty() {
                Err(ValidationError::EmailRequired)
            } else if !is_valid_email(value) {
                Err(ValidationError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        FieldName::Message => {
            if trimmed.is_empty() {
                Err(ValidationError::MessageRequired)
            } else if trimmed.chars().count() < MESSAGE_MIN_CHARS {
                Err(ValidationError::MessageTooShort)
            } else {
                Ok(())
            }
        }
    }
}
