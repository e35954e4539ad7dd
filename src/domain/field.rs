//! Contact form fields and their validation errors
//!
//! This module defines the pure field types shared by the validator, the
//! form session and the view layer.

use std::fmt;

use thiserror::Error;

/// One of the three contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// Every field, in form order
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    /// Input element id and form control name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }

    /// Id of the inline error container for this field
    pub fn error_target(&self) -> String {
        format!("{}-error", self.as_str())
    }

    /// Looks a field up by its control name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::Message => 2,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Trimmed value is empty
    Required,
    /// Trimmed value is below the field's minimum length
    TooShort,
    /// Value does not have the expected shape
    InvalidFormat,
}

/// A failed validation rule for a single field
///
/// `Display` yields the exact message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(&self) -> FieldName {
        match self {
            ValidationError::NameRequired | ValidationError::NameTooShort => FieldName::Name,
            ValidationError::EmailRequired | ValidationError::EmailInvalid => FieldName::Email,
            ValidationError::MessageRequired | ValidationError::MessageTooShort => {
                FieldName::Message
            }
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::NameRequired
            | ValidationError::EmailRequired
            | ValidationError::MessageRequired => ValidationErrorKind::Required,
            ValidationError::NameTooShort | ValidationError::MessageTooShort => {
                ValidationErrorKind::TooShort
            }
            ValidationError::EmailInvalid => ValidationErrorKind::InvalidFormat,
        }
    }
}

/// Value and last validation outcome of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FieldState {
    /// Error message currently attached to the field, empty when it passes
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
