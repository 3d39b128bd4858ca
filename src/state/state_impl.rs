use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::identity::{IdentityError, ServiceResponse};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;

use super::form::{Field, FieldValue};
use super::navigation::{Link, LinkTarget, View};
use super::register::RegisterPage;
use super::submission::{classify, SubmissionError, SubmissionOutcome};
use super::StateError;

/// Specify how many log entries are kept for display.
///
const MAX_LOG_ENTRIES: usize = 200;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    view_stack: Vec<View>,
    register_page: Option<RegisterPage>,
    attempt_counter: u64,
    spinner_index: usize,
    log_entries: Vec<String>,
    theme: Theme,
    service_url: String,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            view_stack: vec![View::Register],
            register_page: Some(RegisterPage::new()),
            attempt_counter: 0,
            spinner_index: 0,
            log_entries: vec![],
            theme: Theme::default(),
            service_url: String::new(),
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, theme: Theme, service_url: String) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            service_url,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the identity service address registrations are sent to.
    ///
    pub fn get_service_url(&self) -> &str {
        &self.service_url
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> &View {
        // The stack is never emptied, so the fallback is unreachable in practice.
        self.view_stack.last().unwrap_or(&View::Register)
    }

    /// Return the number of views on the stack.
    /// Used in tests.
    ///
    #[allow(dead_code)]
    pub fn view_stack_len(&self) -> usize {
        self.view_stack.len()
    }

    /// Move to the given top-level view, replacing the view stack. Leaving the
    /// registration view discards its form; entering it mounts a fresh one.
    ///
    pub fn navigate(&mut self, view: View) -> &mut Self {
        info!("Navigating to {}...", view.path());
        if *self.current_view() == View::Register {
            debug!("Unmounting registration form...");
            self.register_page = None;
        }
        if view == View::Register {
            self.register_page = Some(RegisterPage::new());
        }
        self.view_stack.clear();
        self.view_stack.push(view);
        self
    }

    /// Follow the given link if it leads anywhere.
    ///
    pub fn follow_link(&mut self, link: &Link) -> &mut Self {
        match link.target {
            LinkTarget::View(view) => self.navigate(view),
            LinkTarget::Inert => {
                debug!("Link '{}' has no destination.", link.label);
                self
            }
        }
    }

    /// Return the mounted registration page, if any.
    ///
    pub fn get_register_page(&self) -> Option<&RegisterPage> {
        self.register_page.as_ref()
    }

    /// Replace one field of the mounted registration form.
    ///
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), StateError> {
        self.register_page
            .as_mut()
            .ok_or(StateError::FormNotMounted)?
            .set_field(field, value)
    }

    /// Focus the next element of the registration form.
    ///
    pub fn focus_next(&mut self) -> &mut Self {
        if let Some(page) = self.register_page.as_mut() {
            page.focus_next();
        }
        self
    }

    /// Focus the previous element of the registration form.
    ///
    pub fn focus_previous(&mut self) -> &mut Self {
        if let Some(page) = self.register_page.as_mut() {
            page.focus_previous();
        }
        self
    }

    /// Validate the registration form and, if it passes, dispatch exactly one
    /// registration request to the network thread.
    ///
    pub fn submit_registration(&mut self) -> &mut Self {
        let attempt = self.attempt_counter + 1;
        let registration = match self.register_page.as_mut() {
            Some(page) => page.begin_attempt(attempt),
            None => {
                warn!("Ignoring registration submit without a mounted form.");
                return self;
            }
        };
        let Some(registration) = registration else {
            return self;
        };
        self.attempt_counter = attempt;

        let sent = match &self.net_sender {
            Some(sender) => sender
                .send(NetworkEvent::Register {
                    attempt,
                    registration,
                })
                .map_err(|e| e.to_string()),
            None => Err(String::from("network thread is not running")),
        };
        if let Err(detail) = sent {
            error!("Failed to dispatch registration request: {}", detail);
            self.finish_registration(attempt, Err(SubmissionError::Transport { detail }));
        }
        self
    }

    /// Apply the identity service's answer to the given attempt.
    ///
    pub fn resolve_registration(
        &mut self,
        attempt: u64,
        result: Result<ServiceResponse, IdentityError>,
    ) -> &mut Self {
        let result = match classify(result) {
            Ok(data) => {
                info!("Registration successful: {}", data);
                Ok(())
            }
            Err(error) => {
                match &error {
                    SubmissionError::Transport { detail } => {
                        error!("Registration error: {} ({})", error, detail)
                    }
                    _ => error!("Registration error: {}", error),
                }
                Err(error)
            }
        };
        self.finish_registration(attempt, result)
    }

    fn finish_registration(
        &mut self,
        attempt: u64,
        result: Result<(), SubmissionError>,
    ) -> &mut Self {
        let outcome = self
            .register_page
            .as_mut()
            .and_then(|page| page.resolve(attempt, result));
        match outcome {
            Some(SubmissionOutcome::Succeeded) => self.navigate(View::Login),
            Some(_) => self,
            None => {
                debug!(
                    "Discarding result of registration attempt {} for a form that is gone.",
                    attempt
                );
                self
            }
        }
    }

    /// Append log entries, keeping only the most recent ones.
    ///
    pub fn add_log_entries(&mut self, entries: Vec<String>) -> &mut Self {
        self.log_entries.extend(entries);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            let excess = self.log_entries.len() - MAX_LOG_ENTRIES;
            self.log_entries.drain(..excess);
        }
        self
    }

    pub fn get_log_entries(&self) -> &[String] {
        &self.log_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::{PRIVACY_POLICY_LINK, SIGN_IN_LINK};
    use crate::state::submission::{FALLBACK_MESSAGE, VALIDATION_MESSAGE};
    use serde_json::json;
    use std::sync::mpsc::{channel, Receiver};

    fn state_with_channel() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        (State::new(tx, Theme::default(), String::new()), rx)
    }

    fn fill_alice(state: &mut State) {
        let values = [
            (Field::UserName, "alice"),
            (Field::FirstName, "Alice"),
            (Field::LastName, "Smith"),
            (Field::Email, "a@x.com"),
            (Field::Password, "secret"),
        ];
        for (field, value) in values {
            state
                .set_field(field, FieldValue::Text(value.to_string()))
                .unwrap();
        }
        state
            .set_field(Field::Terms, FieldValue::Checked(true))
            .unwrap();
    }

    fn error_of(state: &State) -> &str {
        state.get_register_page().unwrap().error()
    }

    #[test]
    fn single_field_submit_is_blocked() {
        for field in Field::TEXT {
            let (mut state, rx) = state_with_channel();
            state
                .set_field(field, FieldValue::Text("value".to_string()))
                .unwrap();
            state.submit_registration();
            assert_eq!(error_of(&state), VALIDATION_MESSAGE);
            assert!(rx.try_recv().is_err());
            assert!(!state.get_register_page().unwrap().is_in_flight());
        }
    }

    #[test]
    fn unaccepted_terms_submit_is_blocked() {
        let (mut state, rx) = state_with_channel();
        fill_alice(&mut state);
        state
            .set_field(Field::Terms, FieldValue::Checked(false))
            .unwrap();
        state.submit_registration();
        assert_eq!(error_of(&state), VALIDATION_MESSAGE);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn complete_submit_sends_one_request() {
        let (mut state, rx) = state_with_channel();
        fill_alice(&mut state);
        state.submit_registration();

        match rx.try_recv() {
            Ok(NetworkEvent::Register {
                attempt,
                registration,
            }) => {
                assert_eq!(attempt, 1);
                assert_eq!(
                    serde_json::to_value(&registration).unwrap(),
                    json!({
                        "userName": "alice",
                        "firstName": "Alice",
                        "lastName": "Smith",
                        "email": "a@x.com",
                        "password": "secret",
                        "terms": true,
                    })
                );
            }
            other => panic!("expected a register event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
        assert!(state.get_register_page().unwrap().is_in_flight());
        assert!(error_of(&state).is_empty());
    }

    #[test]
    fn repeated_submit_while_in_flight_sends_nothing() {
        let (mut state, rx) = state_with_channel();
        fill_alice(&mut state);
        state.submit_registration();
        state.submit_registration();
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn success_navigates_to_login_once() {
        let (mut state, _rx) = state_with_channel();
        fill_alice(&mut state);
        state.submit_registration();
        state.resolve_registration(1, Ok(ServiceResponse::Accepted(json!({}))));

        assert_eq!(state.current_view(), &View::Login);
        assert_eq!(state.view_stack_len(), 1);
        assert!(state.get_register_page().is_none());

        // A duplicate answer for the same attempt does not navigate again.
        state.navigate(View::Register);
        state.resolve_registration(1, Ok(ServiceResponse::Accepted(json!({}))));
        assert_eq!(state.current_view(), &View::Register);
        assert!(state.get_register_page().is_some());
    }

    #[test]
    fn repeated_navigation_does_not_grow_view_stack() {
        let mut state = State::default();
        for _ in 0..1000 {
            state.follow_link(&SIGN_IN_LINK);
            state.navigate(View::Register);
        }
        assert_eq!(state.current_view(), &View::Register);
        assert_eq!(state.view_stack_len(), 1);
    }

    #[test]
    fn rejection_shows_service_message_and_keeps_fields() {
        let (mut state, _rx) = state_with_channel();
        fill_alice(&mut state);
        let form = state.get_register_page().unwrap().form().clone();
        state.submit_registration();
        state.resolve_registration(
            1,
            Ok(ServiceResponse::Rejected {
                status: 409,
                message: Some("Username taken".to_string()),
            }),
        );

        assert_eq!(state.current_view(), &View::Register);
        let page = state.get_register_page().unwrap();
        assert_eq!(page.error(), "Username taken");
        assert_eq!(page.form(), &form);
        assert_eq!(page.outcome(), &SubmissionOutcome::Idle);
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let (mut state, _rx) = state_with_channel();
        fill_alice(&mut state);
        state.submit_registration();
        state.resolve_registration(
            1,
            Ok(ServiceResponse::Rejected {
                status: 500,
                message: None,
            }),
        );
        assert_eq!(error_of(&state), FALLBACK_MESSAGE);
    }

    #[test]
    fn closed_channel_fails_as_transport_error() {
        let (mut state, rx) = state_with_channel();
        drop(rx);
        fill_alice(&mut state);
        state.submit_registration();
        assert_eq!(error_of(&state), FALLBACK_MESSAGE);
        assert!(!state.get_register_page().unwrap().is_in_flight());
    }

    #[test]
    fn result_for_unmounted_form_is_ignored() {
        let (mut state, _rx) = state_with_channel();
        fill_alice(&mut state);
        state.submit_registration();
        state.follow_link(&SIGN_IN_LINK);
        assert_eq!(state.current_view(), &View::Login);

        state.navigate(View::Register);
        state.resolve_registration(
            1,
            Ok(ServiceResponse::Rejected {
                status: 409,
                message: Some("Username taken".to_string()),
            }),
        );
        let page = state.get_register_page().unwrap();
        assert!(page.error().is_empty());
        assert_eq!(page.form().text(Field::UserName), Some(""));
        assert_eq!(state.current_view(), &View::Register);
    }

    #[test]
    fn inert_link_stays_on_view() {
        let mut state = State::default();
        state.follow_link(&PRIVACY_POLICY_LINK);
        assert_eq!(state.current_view(), &View::Register);
        assert_eq!(state.view_stack_len(), 1);
    }

    #[test]
    fn set_field_without_form_fails() {
        let mut state = State::default();
        state.navigate(View::Login);
        assert_eq!(
            state.set_field(Field::Email, FieldValue::Text("a@x.com".to_string())),
            Err(StateError::FormNotMounted)
        );
    }

    #[test]
    fn log_entries_are_capped() {
        let mut state = State::default();
        state.add_log_entries((0..MAX_LOG_ENTRIES + 5).map(|i| i.to_string()).collect());
        assert_eq!(state.get_log_entries().len(), MAX_LOG_ENTRIES);
        assert_eq!(state.get_log_entries()[0], "5");
    }
}
