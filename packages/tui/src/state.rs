//! Application state: current screen and the per-page controllers

use std::time::Duration;

use storekeep_client::{Category, Product, User};

use crate::controller::ResourceController;
use crate::forms::{validate_email, validate_password, FormField, FormState};
use crate::i18n::Locale;
use crate::toast::Toast;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Users,
    Products,
    Categories,
}

impl Screen {
    /// Next entity screen in the Tab cycle
    pub fn next_entity(&self) -> Screen {
        match self {
            Screen::Users => Screen::Products,
            Screen::Products => Screen::Categories,
            _ => Screen::Users,
        }
    }
}

/// State owned by the console
///
/// Each page controller owns its list, modal, and toast state exclusively;
/// nothing here is shared between pages.
pub struct AppState {
    pub screen: Screen,
    pub locale: Locale,
    pub login_form: FormState,
    pub login_toast: Option<Toast>,
    pub users: ResourceController<User>,
    pub products: ResourceController<Product>,
    pub categories: ResourceController<Category>,
}

impl AppState {
    pub fn new(locale: Locale, page_size: u32, toast_duration: Duration) -> Self {
        Self {
            screen: Screen::Login,
            locale,
            login_form: login_form(),
            login_toast: None,
            users: ResourceController::new(page_size, toast_duration),
            products: ResourceController::new(page_size, toast_duration),
            categories: ResourceController::new(page_size, toast_duration),
        }
    }

    /// Expire transient notifications
    pub fn tick(&mut self) {
        if self.login_toast.as_ref().is_some_and(Toast::is_expired) {
            self.login_toast = None;
        }
        self.users.tick();
        self.products.tick();
        self.categories.tick();
    }
}

/// A fresh sign-in form
pub fn login_form() -> FormState {
    FormState::new(
        "sign-in",
        vec![
            FormField::text("email", "email").with_validator(validate_email),
            FormField::password("password", "password").with_validator(validate_password),
        ],
    )
}
