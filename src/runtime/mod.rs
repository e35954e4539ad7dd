//! Deterministic timing primitives
//!
//! Everything that would be a browser timer in a live page goes through
//! the virtual clock in this module.

pub mod scheduler;

pub use scheduler::{Debouncer, PendingTimer, Scheduler, TimerId};
