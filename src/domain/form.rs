//! Form session state
//!
//! Tracks the value and error of every field together with the submission
//! lifecycle. The submission state is a single enum, so "submitting" and
//! "succeeded" can never both hold.

use std::collections::BTreeMap;

use crate::domain::field::{FieldName, FieldState, ValidationError};
use crate::domain::submission::SubmissionState;
use crate::domain::validator::validate;

/// Outcome of validating every field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<FieldName, ValidationError>,
}

impl FormValidation {
    pub fn error_for(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }
}

/// Per-field state plus the submission lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: [FieldState; 3],
    submission: SubmissionState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FieldName) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: FieldName) -> &str {
        &self.fields[field.index()].value
    }

    pub fn error(&self, field: FieldName) -> Option<&ValidationError> {
        self.fields[field.index()].error.as_ref()
    }

    /// Stores a new value and clears the field's error without revalidating
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = &mut self.fields[field.index()];
        slot.value = value.into();
        slot.error = None;
    }

    /// Revalidates a single field and records the outcome
    pub fn blur(&mut self, field: FieldName) -> Result<(), ValidationError> {
        let slot = &mut self.fields[field.index()];
        let outcome = validate(field, &slot.value);
        slot.error = outcome.clone().err();
        outcome
    }

    /// Records the outcome of [`validate_all`] on every field
    ///
    /// Fields that pass have their previous error cleared.
    pub fn apply_validation(&mut self, validation: &FormValidation) {
        for field in FieldName::ALL {
            self.fields[field.index()].error = validation.error_for(field).cloned();
        }
    }

    /// Empties all values and errors, leaving the submission state alone
    pub fn clear_fields(&mut self) {
        self.fields = Default::default();
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub(crate) fn set_submission(&mut self, state: SubmissionState) {
        self.submission = state;
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn has_succeeded(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }
}

/// Validates every field without short-circuiting
///
/// # Example
/// ```rust
/// use site_interactions::domain::field::FieldName;
/// use site_interactions::domain::form::{validate_all, FormState};
///
/// let mut form = FormState::new();
/// form.input(FieldName::Email, "a@b.c");
/// form.input(FieldName::Message, "1234567890");
///
/// let outcome = validate_all(&form);
/// assert!(!outcome.is_valid);
/// assert_eq!(outcome.errors.len(), 1);
/// ```
pub fn validate_all(state: &FormState) -> FormValidation {
    let errors: BTreeMap<FieldName, ValidationError> = FieldName::ALL
        .into_iter()
        .filter_map(|field| validate(field, state.value(field)).err().map(|err| (field, err)))
        .collect();

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> FormState {
        let mut form = FormState::new();
        form.input(FieldName::Name, name);
        form.input(FieldName::Email, email);
        form.input(FieldName::Message, message);
        form
    }

    #[test]
    fn new_form_is_empty_and_idle() {
        let form = FormState::new();
        for field in FieldName::ALL {
            assert_eq!(form.value(field), "");
            assert!(form.error(field).is_none());
        }
        assert!(!form.is_submitting());
        assert!(!form.has_succeeded());
    }

    #[test]
    fn only_missing_name_is_reported() {
        let outcome = validate_all(&filled("", "a@b.c", "1234567890"));
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(
            outcome.error_for(FieldName::Name),
            Some(&ValidationError::NameRequired)
        );
    }

    #[test]
    fn every_field_is_checked() {
        let outcome = validate_all(&FormState::new());
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.len(), 3);
        assert_eq!(
            outcome.error_for(FieldName::Message),
            Some(&ValidationError::MessageRequired)
        );
    }

    #[test]
    fn valid_form_has_no_errors() {
        let outcome = validate_all(&filled("Ada", "ada@example.com", "Hello there, world"));
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn input_clears_error_without_revalidating() {
        let mut form = FormState::new();
        assert!(form.blur(FieldName::Name).is_err());
        assert!(form.error(FieldName::Name).is_some());

        // Still invalid, but the error is cleared optimistically
        form.input(FieldName::Name, "A");
        assert!(form.error(FieldName::Name).is_none());

        assert_eq!(form.blur(FieldName::Name), Err(ValidationError::NameTooShort));
        assert_eq!(form.error(FieldName::Name), Some(&ValidationError::NameTooShort));
    }

    #[test]
    fn apply_validation_clears_passing_fields() {
        let mut form = filled("", "bad", "short");
        let outcome = validate_all(&form);
        form.apply_validation(&outcome);
        assert!(form.error(FieldName::Email).is_some());

        form.input(FieldName::Name, "Ada");
        form.input(FieldName::Email, "ada@example.com");
        let outcome = validate_all(&form);
        form.apply_validation(&outcome);

        assert!(form.error(FieldName::Name).is_none());
        assert!(form.error(FieldName::Email).is_none());
        assert_eq!(
            form.error(FieldName::Message),
            Some(&ValidationError::MessageTooShort)
        );
    }

    #[test]
    fn clear_fields_resets_values_and_errors() {
        let mut form = filled("Ada", "bad", "msg");
        let outcome = validate_all(&form);
        form.apply_validation(&outcome);
        form.clear_fields();

        assert_eq!(form, FormState::new());
    }
}
