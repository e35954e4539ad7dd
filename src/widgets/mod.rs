//! Independent page behaviours
//!
//! Each widget owns its own state and receives the view and scheduler
//! explicitly; none of them share state with another.

pub mod accordion;
pub mod navigation;
pub mod portfolio;
pub mod reveal;
pub mod testimonials;

pub use accordion::Accordion;
pub use navigation::Navigation;
pub use portfolio::PortfolioFilter;
pub use reveal::{Counters, ScrollReveal};
pub use testimonials::TestimonialSlider;
