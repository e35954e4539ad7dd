//! Contact form controller
//!
//! Connects the form session and the submission state machine to the view
//! and the scheduler. All rule decisions live in the domain layer; this
//! module only applies their outcome.

use tracing::{debug, info};

use crate::app::events::TimerEvent;
use crate::config::Timings;
use crate::domain::field::{FieldName, ValidationError};
use crate::domain::form::{FormState, validate_all};
use crate::domain::submission::{StateMachine, SubmissionEvent, SubmissionState};
use crate::runtime::{Scheduler, TimerId};
use crate::ui::View;
use crate::ui::elements::{
    BTN_LOADING, BTN_TEXT, CLASS_DISABLED, CLASS_ERROR, CONTACT_FORM, FORM_SUBMIT, FORM_SUCCESS,
};

/// What happened to a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the simulated call started
    Started,
    /// At least one field failed; errors are showing
    Rejected,
    /// A submission is already running
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    form: FormState,
    latency_ms: u64,
    success_display_ms: u64,
    pending_timer: Option<TimerId>,
}

impl ContactForm {
    /// Attaches when the page carries a contact form
    pub fn attach(view: &dyn View, timings: &Timings) -> Option<Self> {
        if !view.has_element(CONTACT_FORM) {
            debug!("contact form not attached: element missing");
            return None;
        }

        Some(Self {
            form: FormState::new(),
            latency_ms: timings.submit_latency_ms,
            success_display_ms: timings.success_display_ms,
            pending_timer: None,
        })
    }

    pub fn state(&self) -> &FormState {
        &self.form
    }

    pub fn submission(&self) -> SubmissionState {
        self.form.submission()
    }

    /// Timer currently driving the submission, if any
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }

    /// Stores the typed value and clears the field's error right away
    pub fn input(&mut self, view: &mut dyn View, field: FieldName, value: impl Into<String>) {
        self.form.input(field, value);
        clear_error(view, field);
    }

    /// Revalidates a single field
    pub fn blur(&mut self, view: &mut dyn View, field: FieldName) {
        match self.form.blur(field) {
            Ok(()) => clear_error(view, field),
            Err(err) => show_error(view, &err),
        }
    }

    /// Validates every field and starts the simulated submission if all pass
    pub fn submit(
        &mut self,
        view: &mut dyn View,
        scheduler: &mut Scheduler<TimerEvent>,
    ) -> SubmitOutcome {
        if self.form.submission() != SubmissionState::Idle {
            debug!(state = ?self.form.submission(), "submit ignored while busy");
            return SubmitOutcome::Ignored;
        }

        let validation = validate_all(&self.form);
        self.form.apply_validation(&validation);
        for field in FieldName::ALL {
            match validation.error_for(field) {
                Some(err) => show_error(view, err),
                None => clear_error(view, field),
            }
        }

        if !validation.is_valid {
            debug!(errors = validation.errors.len(), "submit rejected");
            return SubmitOutcome::Rejected;
        }

        self.transition(SubmissionEvent::SubmitAccepted);
        view.set_class(FORM_SUBMIT, CLASS_DISABLED, true);
        view.set_visible(BTN_TEXT, false);
        view.set_visible(BTN_LOADING, true);
        self.pending_timer = Some(scheduler.schedule_once(
            self.latency_ms,
            TimerEvent::Submission(SubmissionEvent::LatencyElapsed),
        ));
        info!("contact form submitting");
        SubmitOutcome::Started
    }

    /// Handles one of the submission timers
    pub fn timer_fired(
        &mut self,
        view: &mut dyn View,
        scheduler: &mut Scheduler<TimerEvent>,
        event: SubmissionEvent,
    ) {
        let before = self.form.submission();
        let after = self.transition(event);
        if before == after {
            return;
        }
        self.pending_timer = None;

        match after {
            SubmissionState::Succeeded => {
                view.set_visible(CONTACT_FORM, false);
                view.set_visible(FORM_SUCCESS, true);
                self.pending_timer = Some(scheduler.schedule_once(
                    self.success_display_ms,
                    TimerEvent::Submission(SubmissionEvent::SuccessDisplayElapsed),
                ));
                info!("contact form submitted");
            }
            SubmissionState::Idle => {
                self.form.clear_fields();
                for field in FieldName::ALL {
                    view.set_text(field.as_str(), "");
                    clear_error(view, field);
                }
                view.set_class(FORM_SUBMIT, CLASS_DISABLED, false);
                view.set_visible(BTN_TEXT, true);
                view.set_visible(BTN_LOADING, false);
                view.set_visible(FORM_SUCCESS, false);
                view.set_visible(CONTACT_FORM, true);
                info!("contact form reset");
            }
            SubmissionState::Submitting => {}
        }
    }

    fn transition(&mut self, event: SubmissionEvent) -> SubmissionState {
        let next = StateMachine::process_event(self.form.submission(), event);
        self.form.set_submission(next);
        next
    }
}

fn show_error(view: &mut dyn View, err: &ValidationError) {
    let field = err.field();
    let target = field.error_target();
    view.set_text(&target, &err.to_string());
    view.set_visible(&target, true);
    view.set_class(field.as_str(), CLASS_ERROR, true);
}

fn clear_error(view: &mut dyn View, field: FieldName) {
    view.set_visible(&field.error_target(), false);
    view.set_class(field.as_str(), CLASS_ERROR, false);
}
