//! Simulated submission lifecycle
//!
//! Defines the submission state machine and its transitions. Timers and
//! view updates live in the contact form controller; this module only
//! decides which state follows which event.

use tracing::debug;

/// Where the contact form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Waiting for the user to submit
    #[default]
    Idle,
    /// Validation passed, simulated network call in flight
    Submitting,
    /// Success view is showing, waiting to reset
    Succeeded,
}

/// Events that move the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Submit was requested and every field passed validation
    SubmitAccepted,
    /// Simulated network latency elapsed
    LatencyElapsed,
    /// Success view has been shown long enough
    SuccessDisplayElapsed,
}

/// State machine for submission state transitions
pub struct StateMachine;

impl StateMachine {
    /// Processes an event and returns the new state
    ///
    /// # Arguments
    /// * `current_state` - Current submission state
    /// * `event` - Event to process
    ///
    /// # Returns
    /// New state after processing the event. Events that do not apply to
    /// the current state leave it unchanged.
    pub fn process_event(
        current_state: SubmissionState,
        event: SubmissionEvent,
    ) -> SubmissionState {
        let next = match (current_state, event) {
            (SubmissionState::Idle, SubmissionEvent::SubmitAccepted) => SubmissionState::Submitting,
            (SubmissionState::Submitting, SubmissionEvent::LatencyElapsed) => {
                SubmissionState::Succeeded
            }
            (SubmissionState::Succeeded, SubmissionEvent::SuccessDisplayElapsed) => {
                SubmissionState::Idle
            }

            // Invalid transitions - ignore event
            (state, _) => state,
        };

        if next != current_state {
            debug!(from = ?current_state, to = ?next, ?event, "submission transition");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn full_cycle_returns_to_idle() {
        let state =
            StateMachine::process_event(SubmissionState::Idle, SubmissionEvent::SubmitAccepted);
        assert_eq!(state, SubmissionState::Submitting);

        let state = StateMachine::process_event(state, SubmissionEvent::LatencyElapsed);
        assert_eq!(state, SubmissionState::Succeeded);

        let state = StateMachine::process_event(state, SubmissionEvent::SuccessDisplayElapsed);
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let state = StateMachine::process_event(
            SubmissionState::Submitting,
            SubmissionEvent::SubmitAccepted,
        );
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn submit_while_succeeded_is_ignored() {
        let state = StateMachine::process_event(
            SubmissionState::Succeeded,
            SubmissionEvent::SubmitAccepted,
        );
        assert_eq!(state, SubmissionState::Succeeded);
    }

    #[test]
    fn stray_timers_do_not_move_idle() {
        for event in [
            SubmissionEvent::LatencyElapsed,
            SubmissionEvent::SuccessDisplayElapsed,
        ] {
            assert_eq!(
                StateMachine::process_event(SubmissionState::Idle, event),
                SubmissionState::Idle
            );
        }
    }

    #[test]
    fn timers_out_of_order_are_ignored() {
        let state = StateMachine::process_event(
            SubmissionState::Submitting,
            SubmissionEvent::SuccessDisplayElapsed,
        );
        assert_eq!(state, SubmissionState::Submitting);
    }
}
