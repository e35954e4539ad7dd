//! Domain logic and core data structures
//!
//! This module contains pure rules that are independent of any view or
//! timer implementation.

pub mod easing;
pub mod field;
pub mod form;
pub mod submission;
pub mod validator;

pub use field::{FieldName, FieldState, ValidationError, ValidationErrorKind};
pub use form::{FormState, FormValidation, validate_all};
pub use submission::{StateMachine, SubmissionEvent, SubmissionState};
pub use validator::validate;
