use super::Frame;
use crate::state::{
    Field, Focus, Link, RegisterPage, State, PRIVACY_POLICY_LINK, SIGN_IN_LINK,
    TERMS_OF_SERVICE_LINK,
};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const ABOUT: &str = "No matter what stage of life you are in, whether you're just starting \
elementary school or being promoted to CEO of a Fortune 500 company, you have much to offer \
to those who are trying to follow in your footsteps.

Whether you are willing to share your knowledge or you are just looking to meet mentors of \
your own, please start by joining the network here.";

/// Render the registration form and the about panel.
///
pub fn register(frame: &mut Frame, size: Rect, state: &State) {
    let Some(page) = state.get_register_page() else {
        return;
    };
    let theme = state.get_theme();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(size);

    render_form(frame, columns[0], page, theme, *state.get_spinner_index());
    render_about(frame, columns[1], theme);
}

fn render_form(
    frame: &mut Frame,
    size: Rect,
    page: &RegisterPage,
    theme: &Theme,
    spinner_index: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Join the Network",
            styling::active_block_title_style(),
        ))
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    // Rows sit inside a margin of one cell on each side.
    let error_height = wrapped_height(page.error(), inner.width.saturating_sub(2));
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)]; // Sign in line, spacing
    constraints.extend(Field::TEXT.iter().map(|_| Constraint::Length(3)));
    constraints.extend([
        Constraint::Length(1),            // Terms
        Constraint::Length(error_height), // Error
        Constraint::Length(3), // Submit
        Constraint::Min(0),
    ]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let focus = page.focus();
    let sign_in = Line::from(vec![
        Span::styled("Already have an account? ", styling::normal_text_style(theme)),
        link_span(&SIGN_IN_LINK, focus, theme),
    ]);
    frame.render_widget(
        Paragraph::new(sign_in).alignment(Alignment::Center),
        rows[0],
    );

    for (row, field) in Field::TEXT.iter().enumerate() {
        let focused = focus == Focus::Field(*field);
        render_input(frame, rows[row + 2], page, *field, focused, theme);
    }

    let terms_row = Field::TEXT.len() + 2;
    let checkbox = if page.form().terms_accepted() { "[x] " } else { "[ ] " };
    let checkbox_style = if focus == Focus::Field(Field::Terms) {
        styling::link_style(theme, true)
    } else {
        styling::normal_text_style(theme)
    };
    let terms = Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::styled("I agree to the ", styling::normal_text_style(theme)),
        link_span(&PRIVACY_POLICY_LINK, focus, theme),
        Span::styled(" and ", styling::normal_text_style(theme)),
        link_span(&TERMS_OF_SERVICE_LINK, focus, theme),
        Span::styled(".", styling::normal_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(terms), rows[terms_row]);

    if !page.error().is_empty() {
        let error = Paragraph::new(page.error())
            .style(styling::error_text_style(theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, rows[terms_row + 1]);
    }

    let label = if page.is_in_flight() {
        format!("{} Joining...", spinner::frame(spinner_index))
    } else {
        String::from("Agree and Join")
    };
    let submit_focused = focus == Focus::Submit;
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(styling::button_style(theme, submit_focused))
        .block(Block::default().borders(Borders::ALL).border_style(
            if submit_focused {
                styling::active_block_border_style(theme)
            } else {
                styling::normal_block_border_style(theme)
            },
        ));
    frame.render_widget(button, rows[terms_row + 2]);
}

fn render_input(
    frame: &mut Frame,
    size: Rect,
    page: &RegisterPage,
    field: Field,
    focused: bool,
    theme: &Theme,
) {
    let value = page.form().text(field).unwrap_or_default();
    let mut text = if field == Field::Password {
        "*".repeat(value.chars().count())
    } else {
        value.to_owned()
    };
    if focused {
        text.push('_');
    }

    let (content, style) = if text.is_empty() {
        (field.label().to_string(), styling::muted_text_style(theme))
    } else {
        (text, styling::normal_text_style(theme))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(field.label())
        .border_style(if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        });
    frame.render_widget(Paragraph::new(content).style(style).block(block), size);
}

/// Return the number of rows the text occupies when word-wrapped to the width.
///
fn wrapped_height(text: &str, width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    let width = usize::from(width.max(1));
    let mut lines = 1;
    let mut used = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        if used > 0 {
            lines += 1;
        }
        // Words longer than the width are broken across rows.
        let extra = (len.max(1) - 1) / width;
        lines += extra;
        used = len - extra * width;
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn link_span(link: &Link, focus: Focus, theme: &Theme) -> Span<'static> {
    Span::styled(link.label, styling::link_style(theme, focus == Focus::Link(*link)))
}

fn render_about(frame: &mut Frame, size: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("About")
        .border_style(styling::normal_block_border_style(theme));

    let mut lines = vec![
        Line::from(Span::styled("Evangadi Networks", styling::heading_style(theme))),
        Line::from(""),
    ];
    lines.extend(
        ABOUT
            .lines()
            .map(|line| Line::from(Span::styled(line, styling::normal_text_style(theme)))),
    );

    let about = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(about, size);
}
