//! Headless interactivity for the CreativeFlow marketing site
//!
//! Contact form validation with a simulated submission, navigation, scroll
//! effects, a testimonial carousel, portfolio filtering and an FAQ
//! accordion. Everything renders through the [`ui::View`] trait and every
//! delay runs on the virtual clock in [`runtime`].

pub mod app;
pub mod config;
pub mod domain;
pub mod runtime;
pub mod ui;
pub mod widgets;

pub use app::{Site, SiteError, SubmitOutcome, TimerEvent, UserEvent};
pub use config::SiteConfig;
