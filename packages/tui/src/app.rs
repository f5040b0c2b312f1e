//! Console application: event loop and key routing

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};

use storekeep_client::{
    AuthClient, CategoryService, ClientResult, Gateway, LoginRequest, ProductService,
    SessionStore, UserService,
};

use crate::controller::{confirm_delete, refresh, submit_modal, Modal, ResourceController};
use crate::events::{AppEvent, EventHandler};
use crate::i18n::Locale;
use crate::resources::{CategoriesResource, ProductsResource, Resource, UsersResource};
use crate::state::{login_form, AppState, Screen};
use crate::toast::Toast;
use crate::ui;

enum ModalKind {
    None,
    Form,
    Confirm,
}

/// Main console application
pub struct App {
    pub state: AppState,
    session: SessionStore,
    auth: AuthClient,
    users: UsersResource,
    products: ProductsResource,
    categories: CategoriesResource,
    toast_duration: Duration,
    pub should_quit: bool,
}

impl App {
    /// Wire the session, gateway, and services together
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: SessionStore,
        page_size: u32,
        toast_duration: Duration,
    ) -> ClientResult<Self> {
        let locale = Locale::from_code(&session.lang());
        let gateway = Gateway::new(base_url, timeout, session.clone())?;
        let auth = AuthClient::new(base_url, timeout, session.clone())?;

        let users = UsersResource::new(UserService::new(gateway.clone()));
        let products = ProductsResource::new(
            ProductService::new(gateway.clone()),
            CategoryService::new(gateway.clone()),
        );
        let categories = CategoriesResource::new(CategoryService::new(gateway));

        Ok(Self {
            state: AppState::new(locale, page_size, toast_duration),
            session,
            auth,
            users,
            products,
            categories,
            toast_duration,
            should_quit: false,
        })
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let mut events = EventHandler::new(250);

        // A restored session skips the login screen
        if self.session.is_authenticated() {
            self.state.screen = Screen::Users;
            refresh(&mut self.state.users, &self.users).await;
        }

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            if let Some(event) = events.next().await {
                match event {
                    AppEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await;
                    }
                    AppEvent::Key(_) => {}
                    AppEvent::Tick => self.on_tick(),
                }
            }
        }

        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn on_tick(&mut self) {
        self.state.tick();

        // The gateway expired the session mid-flight; navigate to login
        if self.session.login_required() && self.state.screen != Screen::Login {
            self.state.screen = Screen::Login;
            self.state.login_form = login_form();
            self.state.login_toast = Some(Toast::error(
                self.state.locale.text("session-expired"),
                self.toast_duration,
            ));
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        match self.state.screen {
            Screen::Login => self.handle_login_key(key).await,
            _ => self.handle_entity_key(key).await,
        }
    }

    async fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Dismiss the notification first; a second Esc quits
                if self.state.login_toast.is_some() {
                    self.state.login_toast = None;
                } else {
                    self.quit();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.login_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.login_form.focus_previous(),
            KeyCode::Enter => self.submit_login().await,
            _ => self.state.login_form.handle_key(key),
        }
    }

    async fn submit_login(&mut self) {
        if !self.state.login_form.validate() {
            return;
        }

        let request = LoginRequest {
            user_name: self.state.login_form.value("email"),
            password: self.state.login_form.value("password"),
        };

        match self.auth.login(&request).await {
            Ok(envelope) if envelope.success && self.session.is_authenticated() => {
                self.state.login_form = login_form();
                self.state.login_toast = None;
                self.state.screen = Screen::Users;
                refresh(&mut self.state.users, &self.users).await;
            }
            Ok(envelope) => {
                let fallback = self.state.locale.text("login-failed");
                self.state.login_toast = Some(Toast::error(
                    envelope.message_or(fallback),
                    self.toast_duration,
                ));
            }
            Err(err) => {
                self.state.login_toast =
                    Some(Toast::error(err.to_string(), self.toast_duration));
            }
        }
    }

    async fn handle_entity_key(&mut self, key: KeyEvent) {
        let modal_open = match self.state.screen {
            Screen::Users => self.state.users.modal().is_some(),
            Screen::Products => self.state.products.modal().is_some(),
            Screen::Categories => self.state.categories.modal().is_some(),
            Screen::Login => false,
        };

        // Global keys apply only when no modal captures input
        if !modal_open {
            match key.code {
                KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                KeyCode::Tab => {
                    self.state.screen = self.state.screen.next_entity();
                    self.refresh_current().await;
                    return;
                }
                KeyCode::Char('l') => {
                    self.state.locale = self.state.locale.next();
                    if let Err(e) = self.session.set_lang(self.state.locale.code()).await {
                        tracing::warn!("could not persist language preference: {}", e);
                    }
                    return;
                }
                _ => {}
            }
        }

        let locale = self.state.locale;
        match self.state.screen {
            Screen::Users => {
                Self::entity_key(&mut self.state.users, &self.users, key, locale, "user").await;
            }
            Screen::Products => {
                Self::entity_key(&mut self.state.products, &self.products, key, locale, "product")
                    .await;
            }
            Screen::Categories => {
                Self::entity_key(
                    &mut self.state.categories,
                    &self.categories,
                    key,
                    locale,
                    "category",
                )
                .await;
            }
            Screen::Login => {}
        }
    }

    async fn refresh_current(&mut self) {
        match self.state.screen {
            Screen::Users => refresh(&mut self.state.users, &self.users).await,
            Screen::Products => refresh(&mut self.state.products, &self.products).await,
            Screen::Categories => refresh(&mut self.state.categories, &self.categories).await,
            Screen::Login => {}
        }
    }

    /// The shared key workflow every entity page follows
    async fn entity_key<R: Resource>(
        controller: &mut ResourceController<R::Item>,
        resource: &R,
        key: KeyEvent,
        locale: Locale,
        label_key: &'static str,
    ) {
        let label = locale.text(label_key);
        let modal_kind = match controller.modal() {
            None => ModalKind::None,
            Some(Modal::ConfirmDelete { .. }) => ModalKind::Confirm,
            Some(_) => ModalKind::Form,
        };

        match modal_kind {
            ModalKind::Form => match key.code {
                KeyCode::Esc => controller.cancel_modal(),
                KeyCode::Tab => {
                    if let Some(Modal::Create(form) | Modal::Edit { form, .. }) =
                        controller.modal_mut()
                    {
                        form.focus_next();
                    }
                }
                KeyCode::BackTab => {
                    if let Some(Modal::Create(form) | Modal::Edit { form, .. }) =
                        controller.modal_mut()
                    {
                        form.focus_previous();
                    }
                }
                KeyCode::Enter => {
                    submit_modal(controller, resource, label, locale).await;
                }
                _ => {
                    if let Some(Modal::Create(form) | Modal::Edit { form, .. }) =
                        controller.modal_mut()
                    {
                        form.handle_key(key);
                    }
                }
            },
            ModalKind::Confirm => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    confirm_delete(controller, resource, label, locale).await;
                }
                KeyCode::Esc | KeyCode::Char('n') => controller.cancel_modal(),
                _ => {}
            },
            ModalKind::None => match key.code {
                KeyCode::Up => controller.select_previous(),
                KeyCode::Down => controller.select_next(),
                KeyCode::Left => {
                    if controller.previous_page() {
                        refresh(controller, resource).await;
                    }
                }
                KeyCode::Right => {
                    if controller.next_page() {
                        refresh(controller, resource).await;
                    }
                }
                KeyCode::Char('n') => match resource.build_form(None).await {
                    Ok(form) => controller.open_create(form),
                    Err(e) => controller.toast_error(e.to_string()),
                },
                KeyCode::Char('e') => {
                    let selected = controller.selected_item().cloned();
                    if let Some(item) = selected {
                        match resource.build_form(Some(&item)).await {
                            Ok(form) => controller.open_edit(R::id(&item), form),
                            Err(e) => controller.toast_error(e.to_string()),
                        }
                    }
                }
                KeyCode::Char('d') => {
                    controller.request_delete();
                }
                KeyCode::Char('r') => refresh(controller, resource).await,
                KeyCode::Esc => controller.dismiss_toast(),
                _ => {}
            },
        }
    }
}

/// Set up the terminal, run the app, and restore the terminal afterwards
pub async fn launch(mut app: App) -> Result<()> {
    use crossterm::execute;
    use crossterm::terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    };

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
