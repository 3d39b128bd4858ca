use crate::state::{Field, FieldValue, Focus, State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            false
        }
        KeyCode::Esc => {
            debug!("Processing exit terminal event '{:?}'...", key);
            false
        }
        _ => match state.current_view() {
            View::Register => {
                handle_register_key(state, key);
                true
            }
            View::Login => handle_login_key(state, key),
        },
    }
}

/// Route a key press on the registration view.
///
fn handle_register_key(state: &mut State, key: KeyEvent) {
    let Some(focus) = state.get_register_page().map(|page| page.focus()) else {
        return;
    };
    match (key.code, focus) {
        (KeyCode::Tab | KeyCode::Down, _) => {
            state.focus_next();
        }
        (KeyCode::BackTab | KeyCode::Up, _) => {
            state.focus_previous();
        }
        (KeyCode::Enter, Focus::Link(link)) => {
            debug!("Following link '{}'...", link.label);
            state.follow_link(&link);
        }
        (KeyCode::Enter, _) => {
            debug!("Processing registration submit event...");
            state.submit_registration();
        }
        (KeyCode::Char(' '), Focus::Field(Field::Terms)) => toggle_terms(state),
        (KeyCode::Char(c), Focus::Field(field))
            if !field.is_checkbox()
                && (key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT) =>
        {
            edit_text(state, field, |text| text.push(c));
        }
        (KeyCode::Backspace, Focus::Field(field)) if !field.is_checkbox() => {
            edit_text(state, field, |text| {
                text.pop();
            });
        }
        _ => (),
    }
}

/// Route a key press on the sign-in view.
///
fn handle_login_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('r') => {
            state.navigate(View::Register);
            true
        }
        KeyCode::Char('q') => false,
        _ => true,
    }
}

fn edit_text(state: &mut State, field: Field, edit: impl FnOnce(&mut String)) {
    let current = state
        .get_register_page()
        .and_then(|page| page.form().text(field))
        .map(str::to_owned);
    if let Some(mut text) = current {
        edit(&mut text);
        if let Err(e) = state.set_field(field, FieldValue::Text(text)) {
            error!("Failed to update field '{}': {}", field.name(), e);
        }
    }
}

fn toggle_terms(state: &mut State) {
    let checked = matches!(
        state
            .get_register_page()
            .map(|page| page.form().value(Field::Terms)),
        Some(FieldValue::Checked(true))
    );
    if let Err(e) = state.set_field(Field::Terms, FieldValue::Checked(!checked)) {
        error!("Failed to update field '{}': {}", Field::Terms.name(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle_key(state, press(KeyCode::Char(c))));
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut state = State::default();
        type_text(&mut state, "alice");
        handle_key(&mut state, press(KeyCode::Backspace));
        handle_key(&mut state, press(KeyCode::Tab));
        type_text(&mut state, "Alice");

        let form = state.get_register_page().unwrap().form();
        assert_eq!(form.text(Field::UserName), Some("alic"));
        assert_eq!(form.text(Field::FirstName), Some("Alice"));
    }

    #[test]
    fn shifted_characters_are_typed() {
        let mut state = State::default();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
        );
        let form = state.get_register_page().unwrap().form();
        assert_eq!(form.text(Field::UserName), Some("A"));
    }

    #[test]
    fn space_toggles_terms_checkbox() {
        let mut state = State::default();
        while state.get_register_page().unwrap().focus() != Focus::Field(Field::Terms) {
            handle_key(&mut state, press(KeyCode::Tab));
        }
        handle_key(&mut state, press(KeyCode::Char(' ')));
        assert!(state.get_register_page().unwrap().form().terms_accepted());
        handle_key(&mut state, press(KeyCode::Char(' ')));
        assert!(!state.get_register_page().unwrap().form().terms_accepted());
    }

    #[test]
    fn enter_submits_form() {
        let mut state = State::default();
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(
            state.get_register_page().unwrap().error(),
            "Please fill in all fields."
        );
    }

    #[test]
    fn enter_on_sign_in_link_navigates() {
        let mut state = State::default();
        handle_key(&mut state, press(KeyCode::BackTab));
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.current_view(), &View::Login);

        handle_key(&mut state, press(KeyCode::Char('r')));
        assert_eq!(state.current_view(), &View::Register);
        assert_eq!(
            state.get_register_page().unwrap().form().text(Field::UserName),
            Some("")
        );
    }

    #[test]
    fn exit_keys() {
        let mut state = State::default();
        assert!(!handle_key(&mut state, press(KeyCode::Esc)));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        // 'q' types on the registration view but exits the sign-in view.
        assert!(handle_key(&mut state, press(KeyCode::Char('q'))));
        state.navigate(View::Login);
        assert!(!handle_key(&mut state, press(KeyCode::Char('q'))));
    }
}
