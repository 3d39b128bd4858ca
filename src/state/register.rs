//! Registration page state.
//!
//! A `RegisterPage` exists while the registration view is mounted. It owns the
//! form record, the error message, the focus, and the attempt currently
//! waiting on the identity service.

use super::form::{is_submittable, Field, FieldValue, RegistrationForm};
use super::navigation::Focus;
use super::submission::{SubmissionError, SubmissionOutcome};
use super::StateError;
use crate::identity::Registration;
use log::*;

/// Houses the state of one mounted registration form.
///
#[derive(Debug, Default)]
pub struct RegisterPage {
    form: RegistrationForm,
    error: String,
    outcome: SubmissionOutcome,
    pending_attempt: Option<u64>,
    focus: Focus,
}

impl RegisterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Returns the error message, empty when no error is active.
    ///
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn is_in_flight(&self) -> bool {
        self.outcome() == &SubmissionOutcome::InFlight
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    pub fn focus_previous(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    /// Replace one field of the form. The error message is left as is.
    ///
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), StateError> {
        trace!("Updating registration field '{}'...", field.name());
        self.form.set_field(field, value)
    }

    /// Start a submission attempt with the given id. Returns the payload to
    /// send, or None if nothing should be sent.
    ///
    pub fn begin_attempt(&mut self, attempt: u64) -> Option<Registration> {
        if self.is_in_flight() {
            warn!(
                "Ignoring registration submit while attempt {:?} is in flight.",
                self.pending_attempt
            );
            return None;
        }

        self.error.clear();
        if !is_submittable(&self.form) {
            debug!("Registration form is incomplete, not submitting.");
            self.error = SubmissionError::LocalValidation.to_string();
            return None;
        }

        self.outcome = SubmissionOutcome::InFlight;
        self.pending_attempt = Some(attempt);
        Some(Registration::from(&self.form))
    }

    /// Apply the result of an attempt. Returns None when the attempt is not
    /// the one this page is waiting on.
    ///
    pub fn resolve(
        &mut self,
        attempt: u64,
        result: Result<(), SubmissionError>,
    ) -> Option<SubmissionOutcome> {
        if self.pending_attempt != Some(attempt) {
            return None;
        }
        self.pending_attempt = None;

        match result {
            Ok(()) => {
                self.outcome = SubmissionOutcome::Succeeded;
                Some(SubmissionOutcome::Succeeded)
            }
            Err(error) => {
                self.error = error.to_string();
                self.outcome = SubmissionOutcome::Idle;
                Some(SubmissionOutcome::Failed(self.error.clone()))
            }
        }
    }
}
