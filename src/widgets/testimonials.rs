//! Testimonial carousel with a single active card

use tracing::debug;

use crate::app::events::TimerEvent;
use crate::config::Timings;
use crate::runtime::{Scheduler, TimerId};
use crate::ui::View;
use crate::ui::elements::{CLASS_ACTIVE, slider_dot, testimonial_card};

#[derive(Debug, Clone)]
pub struct TestimonialSlider {
    cards: usize,
    current: usize,
    timer: TimerId,
}

impl TestimonialSlider {
    /// Starts auto-rotation once the first card is on the page
    pub fn attach(
        view: &mut dyn View,
        scheduler: &mut Scheduler<TimerEvent>,
        cards: usize,
        timings: &Timings,
    ) -> Option<Self> {
        if cards == 0 || !view.has_element(&testimonial_card(0)) {
            return None;
        }

        let timer =
            scheduler.schedule_interval(timings.slide_interval_ms, TimerEvent::SlideAdvance);
        let mut slider = Self {
            cards,
            current: 0,
            timer,
        };
        slider.show(view, 0);
        Some(slider)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn card_count(&self) -> usize {
        self.cards
    }

    pub fn timer(&self) -> TimerId {
        self.timer
    }

    /// Makes card `index` and its dot the only active ones
    pub fn show(&mut self, view: &mut dyn View, index: usize) {
        if index >= self.cards {
            return;
        }
        for i in 0..self.cards {
            let active = i == index;
            view.set_class(&testimonial_card(i), CLASS_ACTIVE, active);
            view.set_class(&slider_dot(i), CLASS_ACTIVE, active);
        }
        self.current = index;
    }

    /// Interval tick: moves to the next card, wrapping at the end
    pub fn advance(&mut self, view: &mut dyn View) {
        let next = (self.current + 1) % self.cards;
        debug!(from = self.current, to = next, "testimonial advanced");
        self.show(view, next);
    }
}
