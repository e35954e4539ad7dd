//! Application orchestration layer
//!
//! This module coordinates between user events, the domain rules, the
//! widgets and the view. It owns the scheduler that drives every timer.

pub mod contact;
pub mod controller;
pub mod events;

pub use contact::{ContactForm, SubmitOutcome};
pub use controller::{Site, SiteError};
pub use events::{TimerEvent, UserEvent};
