//! Delete confirmation dialog

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::i18n::Locale;

use super::form::centered_rect;

/// Render the centered delete confirmation
///
/// Destructive action, so the dialog is styled dangerous and Esc always
/// backs out without side effects.
pub fn render_confirm_delete(
    frame: &mut Frame,
    area: Rect,
    target_name: &str,
    error: Option<&str>,
    locale: Locale,
) {
    let dialog = centered_rect(54, 9, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(locale.text("confirm-delete-title"))
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::raw(locale.text_with("confirm-delete", target_name))),
        Line::raw(""),
    ];

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "Enter: {} • Esc: {}",
            locale.text("delete"),
            locale.text("cancel")
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, dialog);
}
