//! Element ids and class names shared by the page and the widgets

pub const NAV_TOGGLE: &str = "nav-toggle";
pub const NAV_MENU: &str = "nav-menu";
pub const HEADER: &str = "header";

pub const CONTACT_FORM: &str = "contact-form";
pub const FORM_SUCCESS: &str = "form-success";
pub const FORM_SUBMIT: &str = "form-submit";
pub const BTN_TEXT: &str = "btn-text";
pub const BTN_LOADING: &str = "btn-loading";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ERROR: &str = "error";
pub const CLASS_DISABLED: &str = "disabled";
pub const CLASS_REVEALED: &str = "aos-animate";
pub const CLASS_ANIMATED: &str = "animated";
pub const CLASS_FADE_IN: &str = "fade-in";

/// Id of the testimonial card at `index`
pub fn testimonial_card(index: usize) -> String {
    format!("testimonial-{index}")
}

/// Id of the slider dot at `index`
pub fn slider_dot(index: usize) -> String {
    format!("dot-{index}")
}

/// Id of the clickable FAQ question for `faq_id`
pub fn faq_question(faq_id: &str) -> String {
    format!("faq-question-{faq_id}")
}

/// Id of the FAQ answer panel for `faq_id`
pub fn faq_answer(faq_id: &str) -> String {
    format!("faq-{faq_id}")
}
