//! Generic entity page rendering: table, pagination footer, modals, toast

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::controller::{ListState, Modal, ResourceController};
use crate::i18n::Locale;
use crate::resources::Resource;
use crate::ui::widgets::{render_confirm_delete, render_modal, render_toast};

pub fn render<R: Resource>(
    frame: &mut Frame,
    controller: &ResourceController<R::Item>,
    locale: Locale,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Pagination footer
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_table::<R>(frame, chunks[0], controller, locale);
    render_pagination(frame, chunks[1], controller, locale);
    render_hints(frame, chunks[2], locale);

    match controller.modal() {
        Some(Modal::Create(form)) | Some(Modal::Edit { form, .. }) => {
            render_modal(frame, area, form, locale);
        }
        Some(Modal::ConfirmDelete { target, error }) => {
            render_confirm_delete(
                frame,
                area,
                &R::display_name(target),
                error.as_deref(),
                locale,
            );
        }
        None => {}
    }

    if let Some(toast) = controller.toast() {
        render_toast(frame, area, toast);
    }
}

fn render_table<R: Resource>(
    frame: &mut Frame,
    area: Rect,
    controller: &ResourceController<R::Item>,
    locale: Locale,
) {
    let title = format!(
        "{} ({})",
        locale.text(R::title_key()),
        controller.items().len()
    );
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL);

    match controller.state() {
        ListState::Loading => {
            let paragraph = Paragraph::new(locale.text("loading"))
                .block(block)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(paragraph, area);
        }
        ListState::Errored(message) => {
            // A failed fetch shows the error and an empty list, never stale rows
            let paragraph = Paragraph::new(message.clone())
                .block(block)
                .style(Style::default().fg(Color::Red));
            frame.render_widget(paragraph, area);
        }
        _ if controller.items().is_empty() => {
            let paragraph = Paragraph::new(locale.text("no-rows"))
                .block(block)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(paragraph, area);
        }
        _ => {
            let columns = R::columns();
            let header = Row::new(
                columns
                    .iter()
                    .map(|key| locale.text(key).to_string())
                    .collect::<Vec<_>>(),
            )
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

            let rows: Vec<Row> = controller
                .items()
                .iter()
                .map(|item| Row::new(R::row(item)))
                .collect();

            let widths = vec![Constraint::Fill(1); columns.len()];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol(">> ");

            let mut table_state = TableState::default();
            table_state.select(controller.selected_index());
            frame.render_stateful_widget(table, area, &mut table_state);
        }
    }
}

fn render_pagination<T: Clone>(
    frame: &mut Frame,
    area: Rect,
    controller: &ResourceController<T>,
    locale: Locale,
) {
    let previous_style = if controller.can_previous() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let next_style = if controller.can_next() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(format!("← {}", locale.text("previous")), previous_style),
        Span::raw(format!("   {} / {}   ", controller.page(), controller.total_pages())),
        Span::styled(format!("{} →", locale.text("next")), next_style),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_hints(frame: &mut Frame, area: Rect, locale: Locale) {
    let hints = format!(
        "n: {} • e: {} • d: {} • r: ↻ • Tab: ⇄ • l: {} • q: {}",
        locale.text("create"),
        locale.text("edit"),
        locale.text("delete"),
        locale.text("language"),
        locale.text("quit"),
    );
    let paragraph = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
