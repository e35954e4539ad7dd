//! Portfolio filtering by category
//!
//! Cards matching the chosen filter are shown right away and fade in a
//! moment later; the rest fade out first and are hidden afterwards. Each
//! card keeps at most one pending fade timer, so a quick second click
//! always wins over the first.

use tracing::debug;

use crate::app::events::TimerEvent;
use crate::config::{FilterButton, ProjectCard, Timings};
use crate::runtime::{Scheduler, TimerId};
use crate::ui::View;
use crate::ui::elements::{CLASS_ACTIVE, CLASS_FADE_IN};

/// Filter value that matches every card
pub const FILTER_ALL: &str = "all";

/// Returns true if a card in `category` should show under `filter`
pub fn matches_filter(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || category.contains(filter)
}

#[derive(Debug, Clone)]
struct CardState {
    card: ProjectCard,
    pending: Option<TimerId>,
}

#[derive(Debug, Clone)]
pub struct PortfolioFilter {
    buttons: Vec<FilterButton>,
    cards: Vec<CardState>,
    active_filter: String,
    show_delay_ms: u64,
    hide_delay_ms: u64,
}

impl PortfolioFilter {
    /// Attaches when at least one filter button is on the page
    pub fn attach(
        view: &dyn View,
        buttons: &[FilterButton],
        cards: &[ProjectCard],
        timings: &Timings,
    ) -> Option<Self> {
        let buttons: Vec<FilterButton> = buttons
            .iter()
            .filter(|button| view.has_element(&button.id))
            .cloned()
            .collect();
        if buttons.is_empty() {
            debug!("portfolio filter not attached: no filter buttons");
            return None;
        }

        Some(Self {
            buttons,
            cards: cards
                .iter()
                .cloned()
                .map(|card| CardState { card, pending: None })
                .collect(),
            active_filter: FILTER_ALL.to_string(),
            show_delay_ms: timings.portfolio_show_delay_ms,
            hide_delay_ms: timings.portfolio_hide_delay_ms,
        })
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Ids of the cards matching the active filter
    pub fn matching_cards(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|state| matches_filter(&self.active_filter, &state.card.category))
            .map(|state| state.card.id.as_str())
            .collect()
    }

    /// Applies the filter of the clicked button
    pub fn button_clicked(
        &mut self,
        view: &mut dyn View,
        scheduler: &mut Scheduler<TimerEvent>,
        button_id: &str,
    ) {
        let Some(button) = self.buttons.iter().find(|b| b.id == button_id) else {
            return;
        };
        let filter = button.filter.clone();

        for b in &self.buttons {
            view.set_class(&b.id, CLASS_ACTIVE, b.id == button_id);
        }

        for (index, state) in self.cards.iter_mut().enumerate() {
            if let Some(timer) = state.pending.take() {
                scheduler.cancel(timer);
            }

            let timer = if matches_filter(&filter, &state.card.category) {
                view.set_visible(&state.card.id, true);
                scheduler.schedule_once(self.show_delay_ms, TimerEvent::CardFadeIn(index))
            } else {
                view.set_class(&state.card.id, CLASS_FADE_IN, false);
                scheduler.schedule_once(self.hide_delay_ms, TimerEvent::CardHide(index))
            };
            state.pending = Some(timer);
        }

        debug!(filter = %filter, "portfolio filtered");
        self.active_filter = filter;
    }

    pub fn fade_in(&mut self, view: &mut dyn View, index: usize) {
        if let Some(state) = self.cards.get_mut(index) {
            state.pending = None;
            view.set_class(&state.card.id, CLASS_FADE_IN, true);
        }
    }

    pub fn hide(&mut self, view: &mut dyn View, index: usize) {
        if let Some(state) = self.cards.get_mut(index) {
            state.pending = None;
            view.set_visible(&state.card.id, false);
        }
    }
}
