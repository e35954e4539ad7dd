//! Site controller and coordination layer
//!
//! The controller owns the view, the virtual clock and every widget that
//! attached to the page. User events are routed to the widget they concern;
//! timers are drained in order as the clock advances.

use thiserror::Error;
use tracing::{debug, info};

use crate::app::contact::{ContactForm, SubmitOutcome};
use crate::app::events::{TimerEvent, UserEvent};
use crate::config::{ConfigError, SiteConfig};
use crate::domain::submission::SubmissionState;
use crate::runtime::Scheduler;
use crate::ui::View;
use crate::widgets::{
    Accordion, Counters, Navigation, PortfolioFilter, ScrollReveal, TestimonialSlider,
};

/// Errors surfaced at the application boundary
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Contact form ended in {0:?} instead of idle")]
    UnexpectedSubmissionState(SubmissionState),
}

/// Main site controller
///
/// Widgets whose elements are missing from the view are simply absent, and
/// events aimed at them are no-ops.
pub struct Site<V: View> {
    view: V,
    scheduler: Scheduler<TimerEvent>,
    navigation: Navigation,
    reveal: ScrollReveal,
    counters: Counters,
    slider: Option<TestimonialSlider>,
    portfolio: Option<PortfolioFilter>,
    contact: Option<ContactForm>,
    faq: Accordion,
}

impl<V: View> Site<V> {
    /// Attaches every widget the view supports
    pub fn new(config: &SiteConfig, mut view: V) -> Self {
        let timings = &config.timings;
        let layout = &config.layout;
        let mut scheduler = Scheduler::new();

        let navigation = Navigation::attach(&view, &layout.nav_links, timings);
        navigation.highlight_active(&mut view, &layout.location_path);
        let contact = ContactForm::attach(&view, timings);
        let slider =
            TestimonialSlider::attach(&mut view, &mut scheduler, layout.testimonials, timings);
        let portfolio =
            PortfolioFilter::attach(&view, &layout.filter_buttons, &layout.projects, timings);

        info!(
            menu = navigation.has_menu(),
            contact = contact.is_some(),
            slider = slider.is_some(),
            portfolio = portfolio.is_some(),
            "site initialised"
        );

        Self {
            view,
            scheduler,
            navigation,
            reveal: ScrollReveal::new(&layout.reveal_targets, timings),
            counters: Counters::new(&layout.counters, timings),
            slider,
            portfolio,
            contact,
            faq: Accordion::new(&layout.faqs),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &Scheduler<TimerEvent> {
        &self.scheduler
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn contact(&self) -> Option<&ContactForm> {
        self.contact.as_ref()
    }

    pub fn slider(&self) -> Option<&TestimonialSlider> {
        self.slider.as_ref()
    }

    pub fn portfolio(&self) -> Option<&PortfolioFilter> {
        self.portfolio.as_ref()
    }

    pub fn faq(&self) -> &Accordion {
        &self.faq
    }

    /// Routes a user event to the widget it concerns
    ///
    /// # Returns
    /// The submit outcome for [`UserEvent::Submit`], `None` otherwise
    pub fn dispatch(&mut self, event: UserEvent) -> Option<SubmitOutcome> {
        let view = &mut self.view;
        let scheduler = &mut self.scheduler;

        match event {
            UserEvent::Input { field, value } => {
                if let Some(contact) = &mut self.contact {
                    contact.input(view, field, value);
                }
            }
            UserEvent::Blur(field) => {
                if let Some(contact) = &mut self.contact {
                    contact.blur(view, field);
                }
            }
            UserEvent::Submit => {
                if let Some(contact) = &mut self.contact {
                    return Some(contact.submit(view, scheduler));
                }
            }
            UserEvent::NavToggleClick => self.navigation.toggle_menu(view),
            UserEvent::NavLinkClick(link_id) => self.navigation.link_clicked(view, &link_id),
            UserEvent::Scroll { y } => self.navigation.scrolled_to(view, y),
            UserEvent::Resize { width } => self.navigation.resized(scheduler, width),
            UserEvent::Intersect { target, ratio } => {
                self.reveal.intersected(view, &target, ratio);
                self.counters.intersected(view, scheduler, &target, ratio);
            }
            UserEvent::DotClick(index) => {
                if let Some(slider) = &mut self.slider {
                    slider.show(view, index);
                }
            }
            UserEvent::FilterClick(button_id) => {
                if let Some(portfolio) = &mut self.portfolio {
                    portfolio.button_clicked(view, scheduler, &button_id);
                }
            }
            UserEvent::FaqClick(faq_id) => {
                self.faq.question_clicked(view, &faq_id);
            }
        }
        None
    }

    /// Advances the virtual clock, firing every timer that falls due
    ///
    /// Timers scheduled while handling another timer also fire if they fall
    /// inside the window.
    pub fn advance(&mut self, delta_ms: u64) -> usize {
        let target = self.scheduler.now_ms().saturating_add(delta_ms);
        let mut fired = 0;
        while let Some(event) = self.scheduler.pop_due(target) {
            self.handle_timer(event);
            fired += 1;
        }
        self.scheduler.settle(target);
        debug!(now = target, fired, "clock advanced");
        fired
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        let view = &mut self.view;
        let scheduler = &mut self.scheduler;

        match event {
            TimerEvent::Submission(event) => {
                if let Some(contact) = &mut self.contact {
                    contact.timer_fired(view, scheduler, event);
                }
            }
            TimerEvent::ResizeSettled => self.navigation.resize_settled(view),
            TimerEvent::SlideAdvance => {
                if let Some(slider) = &mut self.slider {
                    slider.advance(view);
                }
            }
            TimerEvent::CounterFrame => self.counters.frame(view, scheduler),
            TimerEvent::CardFadeIn(index) => {
                if let Some(portfolio) = &mut self.portfolio {
                    portfolio.fade_in(view, index);
                }
            }
            TimerEvent::CardHide(index) => {
                if let Some(portfolio) = &mut self.portfolio {
                    portfolio.hide(view, index);
                }
            }
        }
    }

    /// Gives the view back, consuming the site
    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::FieldName;
    use crate::ui::RecordingView;
    use crate::ui::elements::{
        CLASS_ACTIVE, CLASS_REVEALED, CLASS_SCROLLED, HEADER, NAV_MENU, NAV_TOGGLE,
    };

    fn site() -> Site<RecordingView> {
        let config = SiteConfig::default();
        let view = RecordingView::from_layout(&config.layout);
        Site::new(&config, view)
    }

    #[test]
    fn default_page_attaches_everything() {
        let site = site();
        assert!(site.navigation().has_menu());
        assert!(site.contact().is_some());
        assert!(site.slider().is_some());
        assert!(site.portfolio().is_some());
        assert!(site.view().has_class("nav-index", CLASS_ACTIVE));
    }

    #[test]
    fn bare_page_ignores_events() {
        let config = SiteConfig::default();
        let mut site = Site::new(&config, RecordingView::new());

        assert!(!site.navigation().has_menu());
        assert!(site.contact().is_none());
        assert_eq!(site.dispatch(UserEvent::Submit), None);
        site.dispatch(UserEvent::NavToggleClick);
        site.dispatch(UserEvent::FilterClick("filter-web".into()));
        site.advance(10_000);
    }

    #[test]
    fn bare_page_schedules_no_timers() {
        let config = SiteConfig::default();
        let mut site = Site::new(&config, RecordingView::new());

        assert!(site.slider().is_none());
        assert!(site.portfolio().is_none());
        assert_eq!(site.scheduler().pending_count(), 0);

        site.dispatch(UserEvent::Scroll { y: 240 });
        site.dispatch(UserEvent::Resize { width: 1280 });
        site.advance(10_000);
        assert_eq!(site.scheduler().pending_count(), 0);
        assert_eq!(site.view().dropped_updates(), 0);
    }

    #[test]
    fn header_works_without_mobile_menu() {
        let config = SiteConfig::default();
        let mut view = RecordingView::from_layout(&config.layout);
        view.remove(NAV_TOGGLE);
        let mut site = Site::new(&config, view);

        assert!(site.view().has_class("nav-index", CLASS_ACTIVE));
        site.dispatch(UserEvent::Scroll { y: 240 });
        assert!(site.view().has_class(HEADER, CLASS_SCROLLED));

        site.dispatch(UserEvent::NavToggleClick);
        assert!(!site.view().has_class(NAV_MENU, CLASS_ACTIVE));
    }

    #[test]
    fn submission_timers_chain_within_one_advance() {
        let mut site = site();
        for (field, value) in [
            (FieldName::Name, "Grace"),
            (FieldName::Email, "grace@navy.mil"),
            (FieldName::Message, "Please call me back."),
        ] {
            site.dispatch(UserEvent::Input {
                field,
                value: value.into(),
            });
        }

        assert_eq!(site.dispatch(UserEvent::Submit), Some(SubmitOutcome::Started));
        site.advance(5000);

        let contact = site.contact().unwrap();
        assert_eq!(contact.submission(), SubmissionState::Idle);
        assert_eq!(contact.state().value(FieldName::Name), "");
    }

    #[test]
    fn slider_and_menu_share_the_clock() {
        let mut site = site();
        site.dispatch(UserEvent::NavToggleClick);
        site.dispatch(UserEvent::Resize { width: 1280 });

        site.advance(5000);
        assert!(!site.view().has_class(NAV_MENU, CLASS_ACTIVE));
        assert_eq!(site.slider().unwrap().current(), 1);
    }

    #[test]
    fn intersection_reaches_reveal_and_counters() {
        let mut site = site();
        site.dispatch(UserEvent::Intersect {
            target: "hero".into(),
            ratio: 0.2,
        });
        site.dispatch(UserEvent::Intersect {
            target: "stat-clients".into(),
            ratio: 0.6,
        });
        site.advance(2100);

        assert!(site.view().has_class("hero", CLASS_REVEALED));
        assert_eq!(site.view().text("stat-clients"), Some("85"));
    }
}
