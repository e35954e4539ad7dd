//! Events flowing into the site
//!
//! [`UserEvent`] covers everything a visitor can do to the page.
//! [`TimerEvent`] is the payload of every timer on the site scheduler.

use crate::domain::field::FieldName;
use crate::domain::submission::SubmissionEvent;

/// Something the visitor did
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    /// Typing into a form field
    Input { field: FieldName, value: String },
    /// A form field lost focus
    Blur(FieldName),
    /// The contact form was submitted
    Submit,
    /// The mobile menu button was clicked
    NavToggleClick,
    /// A navigation link was clicked
    NavLinkClick(String),
    /// Window scrolled to vertical offset `y`
    Scroll { y: u32 },
    /// Window resized to `width`
    Resize { width: u32 },
    /// An element's visible ratio changed
    Intersect { target: String, ratio: f64 },
    /// A testimonial dot was clicked
    DotClick(usize),
    /// A portfolio filter button was clicked
    FilterClick(String),
    /// An FAQ question was clicked
    FaqClick(String),
}

/// Payload carried by site timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Submission(SubmissionEvent),
    ResizeSettled,
    SlideAdvance,
    CounterFrame,
    CardFadeIn(usize),
    CardHide(usize),
}
