use super::*;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the current view with the log panel and footer beneath it.
///
pub fn all(frame: &mut Frame, state: &State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(24),   // View
            Constraint::Length(8), // Log
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    match state.current_view() {
        View::Register => register(frame, chunks[0], state),
        View::Login => login(frame, chunks[0], state),
    }
    log(frame, chunks[1], state);
    footer(frame, chunks[2], state);
}
