//! Modal form rendering

use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::forms::{FieldKind, FormState};
use crate::i18n::Locale;

/// Center a modal of roughly the given size inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Render the form inside a cleared, centered modal
pub fn render_modal(frame: &mut Frame, area: Rect, form: &FormState, locale: Locale) {
    // Label + value per field, plus room for errors and the footer
    let height = (form.fields.len() as u16) * 3 + 6;
    let modal = centered_rect(60, height, area);

    frame.render_widget(Clear, modal);
    render_fields(frame, modal, form, locale, true);
}

/// Render the form fields into `area`
///
/// Shared between the modal forms and the login screen, which draws the
/// same field list without the overlay.
pub fn render_fields(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    locale: Locale,
    as_modal: bool,
) {
    let block = Block::default()
        .title(locale.text(form.title_key))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);

    let mut lines: Vec<Line> = Vec::new();

    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        let marker = if focused { "> " } else { "  " };

        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, locale.text(field.label_key)),
            label_style,
        )));

        let rendered = match &field.kind {
            FieldKind::Password => "*".repeat(field.input.value().chars().count()),
            FieldKind::Select { .. } => {
                format!("< {} >", field.selected_label().unwrap_or(""))
            }
            FieldKind::Text => field.input.value().to_string(),
        };
        let value_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!("  {}", rendered), value_style)));

        if let Some(error_key) = field.error {
            lines.push(Line::from(Span::styled(
                format!("  {}", locale.text(error_key)),
                Style::default().fg(Color::Red),
            )));
        }
    }

    if let Some(submit_error) = &form.submit_error {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            submit_error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    if as_modal {
        let action_key = if form.title_key == "sign-in" {
            "login"
        } else if form.title_key.starts_with("edit") {
            "update"
        } else {
            "create"
        };
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Tab: {} • Enter: {} • Esc: {}",
                locale.text("next"),
                locale.text(action_key),
                locale.text("cancel"),
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
