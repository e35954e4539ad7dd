//! View boundary and the element ids the widgets address

pub mod elements;
pub mod view;

pub use view::{ElementState, RecordingView, View};
