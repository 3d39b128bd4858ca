use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the sign-in view reached after a successful registration.
///
pub fn login(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Sign in")
        .border_style(styling::active_block_border_style(theme));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Sign in", styling::heading_style(theme))),
        Line::from(""),
        Line::from(Span::styled(
            "Your account is ready. Sign in to continue.",
            styling::success_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Identity service: {}", state.get_service_url()),
            styling::muted_text_style(theme),
        )),
    ];

    let content = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(content, size);
}
