//! View-update boundary
//!
//! Core logic never touches a rendering environment directly. It talks to a
//! [`View`], which can show or hide an element, set its text and toggle its
//! classes. Updates aimed at elements the view does not know are dropped
//! quietly: a missing target is never an error.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::config::PageLayout;
use crate::domain::field::FieldName;
use crate::ui::elements;

/// Capability set the widgets need from a page
pub trait View {
    /// Returns true if an element with this id exists
    fn has_element(&self, id: &str) -> bool;

    fn set_visible(&mut self, id: &str, visible: bool);

    fn set_text(&mut self, id: &str, text: &str);

    /// Adds `class` when `enabled`, removes it otherwise
    fn set_class(&mut self, id: &str, class: &str, enabled: bool);

    fn toggle_class(&mut self, id: &str, class: &str) -> bool;
}

/// Recorded state of one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    pub visible: bool,
    pub text: String,
    pub classes: BTreeSet<String>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            visible: true,
            text: String::new(),
            classes: BTreeSet::new(),
        }
    }
}

impl ElementState {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// In-memory [`View`] that keeps the last state of every known element
///
/// Only registered elements accept updates; anything else is counted in
/// [`RecordingView::dropped_updates`] and otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    elements: BTreeMap<String, ElementState>,
    dropped_updates: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a view holding every element the layout describes
    pub fn from_layout(layout: &PageLayout) -> Self {
        let mut view = Self::new();

        for id in [elements::HEADER, elements::NAV_TOGGLE, elements::NAV_MENU] {
            view.register(id);
        }
        for link in &layout.nav_links {
            view.register(&link.id);
        }

        if layout.contact_form {
            for id in [
                elements::CONTACT_FORM,
                elements::FORM_SUBMIT,
                elements::BTN_TEXT,
            ] {
                view.register(id);
            }
            view.register_hidden(elements::BTN_LOADING);
            view.register_hidden(elements::FORM_SUCCESS);
            for field in FieldName::ALL {
                view.register(field.as_str());
                view.register_hidden(&field.error_target());
            }
        }

        for id in &layout.reveal_targets {
            view.register(id);
        }
        for counter in &layout.counters {
            view.register(&counter.id);
        }
        for index in 0..layout.testimonials {
            view.register(&elements::testimonial_card(index));
            view.register(&elements::slider_dot(index));
        }
        for button in &layout.filter_buttons {
            view.register(&button.id);
        }
        for project in &layout.projects {
            view.register(&project.id);
        }
        for faq_id in &layout.faqs {
            view.register(&elements::faq_question(faq_id));
            view.register(&elements::faq_answer(faq_id));
        }

        view
    }

    /// Adds a visible element
    pub fn register(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }

    /// Adds an element that starts hidden
    pub fn register_hidden(&mut self, id: &str) {
        self.elements.insert(
            id.to_string(),
            ElementState {
                visible: false,
                ..ElementState::default()
            },
        );
    }

    pub fn remove(&mut self, id: &str) {
        self.elements.remove(id);
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|el| el.visible)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.text.as_str())
    }

    /// Ids carrying `class`, in id order
    pub fn ids_with_class(&self, class: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, el)| el.has_class(class))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Number of updates aimed at unknown elements
    pub fn dropped_updates(&self) -> usize {
        self.dropped_updates
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut ElementState> {
        let found = self.elements.get_mut(id);
        if found.is_none() {
            self.dropped_updates += 1;
            trace!(id, "view update for missing element dropped");
        }
        found
    }
}

impl View for RecordingView {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(el) = self.element_mut(id) {
            el.visible = visible;
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.element_mut(id) {
            el.text = text.to_string();
        }
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) {
        if let Some(el) = self.element_mut(id) {
            if enabled {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                if !el.classes.remove(class) {
                    el.classes.insert(class.to_string());
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_to_missing_elements_are_dropped() {
        let mut view = RecordingView::new();
        view.set_text("email-error", "Email is required");
        view.set_visible("email-error", true);
        view.set_class("email", "error", true);

        assert!(!view.has_element("email-error"));
        assert_eq!(view.dropped_updates(), 3);
    }

    #[test]
    fn class_updates_are_recorded() {
        let mut view = RecordingView::new();
        view.register("nav-menu");

        assert!(view.toggle_class("nav-menu", "active"));
        assert!(view.has_class("nav-menu", "active"));
        assert!(!view.toggle_class("nav-menu", "active"));
        assert!(!view.has_class("nav-menu", "active"));

        view.set_class("nav-menu", "active", true);
        view.set_class("nav-menu", "active", true);
        assert_eq!(view.ids_with_class("active"), vec!["nav-menu"]);
    }

    #[test]
    fn layout_registers_form_elements() {
        let layout = PageLayout::default();
        let view = RecordingView::from_layout(&layout);

        assert!(view.has_element("contact-form"));
        assert!(view.has_element("message-error"));
        assert!(!view.is_visible("message-error"));
        assert!(!view.is_visible("form-success"));
        assert!(!view.is_visible("btn-loading"));
        assert!(view.is_visible("btn-text"));
    }
}
