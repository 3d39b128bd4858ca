use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the key hints for the current view.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let in_flight = state
        .get_register_page()
        .map(|page| page.is_in_flight())
        .unwrap_or(false);

    let line = if in_flight {
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner::frame(*state.get_spinner_index())),
                styling::heading_style(theme),
            ),
            Span::styled(
                format!("Registering with {}...", state.get_service_url()),
                styling::muted_text_style(theme),
            ),
        ])
    } else {
        let hints = match state.current_view() {
            View::Register => {
                "Tab/↓: next  Shift+Tab/↑: previous  Space: toggle  Enter: submit/follow link  Esc: quit"
            }
            View::Login => "r: create another account  q/Esc: quit",
        };
        Line::from(Span::styled(hints, styling::muted_text_style(theme)))
    };

    frame.render_widget(Paragraph::new(line), size);
}
