//! Rendering layer

mod login;
mod resource;
pub mod widgets;

use ratatui::Frame;

use crate::resources::{CategoriesResource, ProductsResource, UsersResource};
use crate::state::{AppState, Screen};

/// Render the current screen
pub fn render(frame: &mut Frame, state: &AppState) {
    match state.screen {
        Screen::Login => login::render(frame, state),
        Screen::Users => resource::render::<UsersResource>(frame, &state.users, state.locale),
        Screen::Products => {
            resource::render::<ProductsResource>(frame, &state.products, state.locale)
        }
        Screen::Categories => {
            resource::render::<CategoriesResource>(frame, &state.categories, state.locale)
        }
    }
}
