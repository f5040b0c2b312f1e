//! Toast overlay rendering

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::toast::{Toast, ToastKind};

/// Draw the toast as a one-line overlay near the top edge
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let text = format!(" {} ", toast.message);
    let width = (text.chars().count() as u16).min(area.width.saturating_sub(2));

    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + 1,
        width,
        height: 1,
    };

    let style = match toast.kind {
        ToastKind::Success => Style::default().bg(Color::Green).fg(Color::White),
        ToastKind::Error => Style::default().bg(Color::Red).fg(Color::White),
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(text).style(style), rect);
}
