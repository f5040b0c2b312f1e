//! Sign-in screen

use ratatui::prelude::*;

use crate::state::AppState;
use crate::ui::widgets::{centered_rect, render_fields, render_toast};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let form_area = centered_rect(50, 14, area);
    render_fields(frame, form_area, &state.login_form, state.locale, true);

    if let Some(toast) = &state.login_toast {
        render_toast(frame, area, toast);
    }
}
