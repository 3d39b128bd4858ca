use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for muted text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for links, highlighted when focused.
///
pub fn link_style(theme: &Theme, focused: bool) -> Style {
    let style = Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

/// Return the style for the submit button.
///
pub fn button_style(theme: &Theme, focused: bool) -> Style {
    let style = Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD);
    if focused {
        style.bg(theme.accent.to_color())
    } else {
        style
    }
}

/// Return the style for error messages.
///
pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for confirmation messages.
///
pub fn success_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.success.to_color())
}

/// Return the style for headings.
///
pub fn heading_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}
