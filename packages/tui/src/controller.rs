//! Generic paginated-resource page controller
//!
//! One state machine drives every entity page: a list in
//! `Idle -> Loading -> {Loaded, Errored}`, plus orthogonal transient
//! sub-states for the create/edit modal, the delete confirmation, and the
//! toast. The controller owns no I/O; the async drivers at the bottom wire
//! it to a [`Resource`] and enforce the refetch-after-mutation discipline.

use std::time::Duration;

use storekeep_client::pagination::{clamp_page, Page, MIN_PAGE};
use storekeep_client::{ClientError, ClientResult, Envelope};

use crate::forms::FormState;
use crate::resources::Resource;
use crate::toast::Toast;

/// List fetch state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Loaded,
    /// A failed fetch stores its message and empties the list
    Errored(String),
}

/// Transient modal sub-state
pub enum Modal<T> {
    Create(FormState),
    Edit { id: String, form: FormState },
    ConfirmDelete { target: T, error: Option<String> },
}

/// Outcome of a finished mutation, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Modal closed, toast shown; the current page must be refetched
    Refetch,
    /// Modal kept open with an inline error; nothing else changed
    KeptOpen,
    /// Session expired; navigation is the application's concern
    SessionExpired,
}

/// Page controller for one resource
pub struct ResourceController<T> {
    state: ListState,
    items: Vec<T>,
    page: u32,
    total_pages: u32,
    page_size: u32,
    selected: Option<usize>,
    modal: Option<Modal<T>>,
    toast: Option<Toast>,
    toast_duration: Duration,
    /// Fetch generation; responses from superseded fetches are discarded
    generation: u64,
}

impl<T: Clone> ResourceController<T> {
    pub fn new(page_size: u32, toast_duration: Duration) -> Self {
        Self {
            state: ListState::Idle,
            items: Vec::new(),
            page: MIN_PAGE,
            total_pages: 1,
            page_size,
            selected: None,
            modal: None,
            toast: None,
            toast_duration,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn modal(&self) -> Option<&Modal<T>> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut Modal<T>> {
        self.modal.as_mut()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message, self.toast_duration));
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Periodic housekeeping: expire the toast
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // --- selection -------------------------------------------------------

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|index| self.items.get(index))
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) if index + 1 < self.items.len() => index + 1,
            _ => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.items.len() - 1,
            Some(index) => index - 1,
        });
    }

    // --- pagination ------------------------------------------------------

    /// Whether the Next control is enabled
    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the Previous control is enabled
    pub fn can_previous(&self) -> bool {
        self.page > MIN_PAGE
    }

    /// Advance one page; returns true when the page actually changed and a
    /// fetch must follow
    pub fn next_page(&mut self) -> bool {
        let target = clamp_page(self.page + 1, self.total_pages);
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Go back one page; same contract as [`Self::next_page`]
    pub fn previous_page(&mut self) -> bool {
        let target = clamp_page(self.page.saturating_sub(1), self.total_pages);
        let changed = target != self.page;
        self.page = target;
        changed
    }

    // --- list fetch ------------------------------------------------------

    /// Enter `Loading` and stamp a new fetch generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.state = ListState::Loading;
        self.generation
    }

    /// Apply a finished fetch; stale generations are discarded
    pub fn finish_fetch(&mut self, generation: u64, result: ClientResult<Envelope<Page<T>>>) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale page response");
            return;
        }

        match result {
            Ok(envelope) if envelope.success => match envelope.data {
                Some(page) => {
                    self.items = page.items;
                    self.total_pages = page.total_pages.max(1);
                    self.page = clamp_page(self.page, self.total_pages);
                    self.selected = match self.items.is_empty() {
                        true => None,
                        false => Some(
                            self.selected
                                .unwrap_or(0)
                                .min(self.items.len() - 1),
                        ),
                    };
                    self.state = ListState::Loaded;
                }
                None => self.fail_fetch("Malformed page response".to_string()),
            },
            Ok(envelope) => {
                self.fail_fetch(envelope.message_or("Error fetching list"));
            }
            Err(ClientError::SessionExpired) => {
                // Navigation happens at the application level; leave the
                // list quiet rather than flashing an error first
                self.items.clear();
                self.selected = None;
                self.state = ListState::Idle;
            }
            Err(err) => self.fail_fetch(err.to_string()),
        }
    }

    fn fail_fetch(&mut self, message: String) {
        self.items.clear();
        self.selected = None;
        self.total_pages = 1;
        self.page = MIN_PAGE;
        self.state = ListState::Errored(message);
    }

    // --- modals ----------------------------------------------------------

    pub fn open_create(&mut self, form: FormState) {
        self.modal = Some(Modal::Create(form));
    }

    pub fn open_edit(&mut self, id: String, form: FormState) {
        self.modal = Some(Modal::Edit { id, form });
    }

    /// Open the delete confirmation for the selected row
    pub fn request_delete(&mut self) -> bool {
        match self.selected_item() {
            Some(item) => {
                self.modal = Some(Modal::ConfirmDelete {
                    target: item.clone(),
                    error: None,
                });
                true
            }
            None => false,
        }
    }

    /// Close whatever modal is open without side effects
    pub fn cancel_modal(&mut self) {
        self.modal = None;
    }

    /// Apply a finished create/update call
    pub fn finish_submit<U>(
        &mut self,
        result: ClientResult<Envelope<U>>,
        success_toast: String,
    ) -> MutationOutcome {
        match result {
            Ok(envelope) if envelope.success => {
                self.modal = None;
                self.show_toast(Toast::success(success_toast, self.toast_duration));
                MutationOutcome::Refetch
            }
            Ok(envelope) => {
                let message = envelope.message_or("Request failed");
                self.set_modal_error(message);
                MutationOutcome::KeptOpen
            }
            Err(ClientError::SessionExpired) => {
                self.modal = None;
                MutationOutcome::SessionExpired
            }
            Err(err) => {
                self.set_modal_error(err.to_string());
                MutationOutcome::KeptOpen
            }
        }
    }

    /// Apply a finished delete call; same contract as [`Self::finish_submit`]
    pub fn finish_delete(
        &mut self,
        result: ClientResult<Envelope<()>>,
        success_toast: String,
    ) -> MutationOutcome {
        self.finish_submit(result, success_toast)
    }

    fn set_modal_error(&mut self, message: String) {
        match &mut self.modal {
            Some(Modal::Create(form)) | Some(Modal::Edit { form, .. }) => {
                form.submit_error = Some(message);
            }
            Some(Modal::ConfirmDelete { error, .. }) => {
                *error = Some(message);
            }
            None => {
                // No modal to anchor the message; fall back to a toast
                self.show_toast(Toast::error(message, self.toast_duration));
            }
        }
    }
}

// --- async drivers -------------------------------------------------------

/// Fetch the controller's current page from the resource
pub async fn refresh<R: Resource>(controller: &mut ResourceController<R::Item>, resource: &R) {
    let generation = controller.begin_fetch();
    let query = storekeep_client::PageQuery::with_page_and_size(
        controller.page(),
        controller.page_size(),
    );
    let result = resource.fetch_page(query).await;
    controller.finish_fetch(generation, result);
}

/// Submit the open create/edit modal; refetches on success
///
/// Validation runs first: an invalid form never reaches the service.
pub async fn submit_modal<R: Resource>(
    controller: &mut ResourceController<R::Item>,
    resource: &R,
    entity_label: &str,
    locale: crate::i18n::Locale,
) -> MutationOutcome {
    let submission = match controller.modal_mut() {
        Some(Modal::Create(form)) => {
            if !form.validate() {
                return MutationOutcome::KeptOpen;
            }
            (None, form.values())
        }
        Some(Modal::Edit { id, form }) => {
            if !form.validate() {
                return MutationOutcome::KeptOpen;
            }
            (Some(id.clone()), form.values())
        }
        _ => return MutationOutcome::KeptOpen,
    };

    let (id, values) = submission;
    let outcome = match id {
        None => {
            let result = resource.create(&values).await;
            controller.finish_submit(result, locale.text_with("created", entity_label))
        }
        Some(id) => {
            let result = resource.update(&id, &values).await;
            controller.finish_submit(result, locale.text_with("updated", entity_label))
        }
    };

    if outcome == MutationOutcome::Refetch {
        refresh(controller, resource).await;
    }
    outcome
}

/// Execute the confirmed delete; refetches on success
pub async fn confirm_delete<R: Resource>(
    controller: &mut ResourceController<R::Item>,
    resource: &R,
    entity_label: &str,
    locale: crate::i18n::Locale,
) -> MutationOutcome {
    let id = match controller.modal() {
        Some(Modal::ConfirmDelete { target, .. }) => R::id(target),
        _ => return MutationOutcome::KeptOpen,
    };

    let result = resource.delete(&id).await;
    let outcome = controller.finish_delete(result, locale.text_with("deleted", entity_label));

    if outcome == MutationOutcome::Refetch {
        refresh(controller, resource).await;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FormField, FormState};
    use crate::i18n::Locale;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const TOAST: Duration = Duration::from_secs(3);

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        name: String,
    }

    fn widget(id: &str) -> Widget {
        Widget {
            id: id.to_string(),
            name: format!("widget {}", id),
        }
    }

    fn loaded_page(items: Vec<Widget>, page: u32, total_pages: u32) -> ClientResult<Envelope<Page<Widget>>> {
        Ok(Envelope {
            success: true,
            data: Some(Page {
                total_items: (total_pages as u64) * (items.len().max(1) as u64),
                page,
                total_pages,
                page_size: 5,
                items,
            }),
            message: None,
        })
    }

    fn controller() -> ResourceController<Widget> {
        ResourceController::new(5, TOAST)
    }

    /// Programmable stub resource counting every service call
    struct StubResource {
        fetch_calls: AtomicUsize,
        fail_mutations: bool,
        pages: Mutex<Vec<ClientResult<Envelope<Page<Widget>>>>>,
    }

    impl StubResource {
        fn new() -> Self {
            Self {
                fetch_calls: AtomicUsize::new(0),
                fail_mutations: false,
                pages: Mutex::new(Vec::new()),
            }
        }

        fn failing_mutations() -> Self {
            Self {
                fail_mutations: true,
                ..Self::new()
            }
        }

        fn push_page(&self, page: ClientResult<Envelope<Page<Widget>>>) {
            self.pages.lock().unwrap().push(page);
        }

        fn fetch_count(&self) -> usize {
            self.fetch_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Resource for StubResource {
        type Item = Widget;

        fn title_key() -> &'static str {
            "users"
        }

        fn id(item: &Widget) -> String {
            item.id.clone()
        }

        fn display_name(item: &Widget) -> String {
            item.name.clone()
        }

        fn columns() -> &'static [&'static str] {
            &["name"]
        }

        fn row(item: &Widget) -> Vec<String> {
            vec![item.name.clone()]
        }

        async fn fetch_page(&self, _query: storekeep_client::PageQuery) -> ClientResult<Envelope<Page<Widget>>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                loaded_page(vec![widget("w-1")], 1, 1)
            } else {
                pages.remove(0)
            }
        }

        async fn create(&self, _values: &crate::resources::FormValues) -> ClientResult<Envelope<Widget>> {
            if self.fail_mutations {
                Ok(Envelope::failure("Name already in use"))
            } else {
                Ok(Envelope {
                    success: true,
                    data: Some(widget("w-new")),
                    message: None,
                })
            }
        }

        async fn update(&self, id: &str, _values: &crate::resources::FormValues) -> ClientResult<Envelope<Widget>> {
            if self.fail_mutations {
                Ok(Envelope::failure("Name already in use"))
            } else {
                Ok(Envelope {
                    success: true,
                    data: Some(widget(id)),
                    message: None,
                })
            }
        }

        async fn delete(&self, _id: &str) -> ClientResult<Envelope<()>> {
            if self.fail_mutations {
                Ok(Envelope::failure("Not found"))
            } else {
                Ok(Envelope {
                    success: true,
                    data: None,
                    message: None,
                })
            }
        }

        async fn build_form(&self, _initial: Option<&Widget>) -> ClientResult<FormState> {
            Ok(valid_form())
        }
    }

    fn valid_form() -> FormState {
        FormState::new(
            "create-user",
            vec![FormField::text("name", "name").with_value("ok")],
        )
    }

    fn invalid_form() -> FormState {
        FormState::new("create-user", vec![FormField::text("name", "name")])
    }

    #[test]
    fn test_fetch_success_loads_items() {
        let mut ctl = controller();
        let generation = ctl.begin_fetch();
        assert_eq!(*ctl.state(), ListState::Loading);

        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1"), widget("w-2")], 1, 3));

        assert_eq!(*ctl.state(), ListState::Loaded);
        assert_eq!(ctl.items().len(), 2);
        assert_eq!(ctl.total_pages(), 3);
        assert_eq!(ctl.selected_index(), Some(0));
    }

    #[test]
    fn test_failed_fetch_shows_error_and_empties_list() {
        let mut ctl = controller();
        let generation = ctl.begin_fetch();
        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1")], 1, 1));

        // A later fetch fails; stale items must not linger
        let generation = ctl.begin_fetch();
        ctl.finish_fetch(generation, Ok(Envelope::failure("backend down")));

        assert_eq!(*ctl.state(), ListState::Errored("backend down".to_string()));
        assert!(ctl.items().is_empty());
        assert_eq!(ctl.total_pages(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ctl = controller();

        // Page 1 fetch starts, then a page-2 fetch supersedes it
        let first = ctl.begin_fetch();
        ctl.next_page();
        let second = ctl.begin_fetch();

        // Fast page-2 response lands first
        ctl.finish_fetch(second, loaded_page(vec![widget("w-6")], 2, 3));
        // Slow page-1 response resolves afterwards and must be ignored
        ctl.finish_fetch(first, loaded_page(vec![widget("w-1")], 1, 3));

        assert_eq!(ctl.items()[0].id, "w-6");
        assert_eq!(*ctl.state(), ListState::Loaded);
    }

    #[test]
    fn test_pagination_clamps_at_boundaries() {
        let mut ctl = controller();
        let generation = ctl.begin_fetch();
        // totalItems 12, pageSize 5 -> 3 pages
        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1")], 1, 3));

        assert!(!ctl.can_previous());
        assert!(ctl.can_next());
        assert!(!ctl.previous_page());

        assert!(ctl.next_page());
        assert!(ctl.next_page());
        assert_eq!(ctl.page(), 3);
        assert!(!ctl.can_next());
        assert!(!ctl.next_page());

        assert!(ctl.can_previous());
    }

    #[test]
    fn test_page_clamped_when_total_shrinks() {
        let mut ctl = controller();
        let generation = ctl.begin_fetch();
        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1")], 1, 3));
        ctl.next_page();
        ctl.next_page();
        assert_eq!(ctl.page(), 3);

        // The collection shrank server-side; page snaps back into range
        let generation = ctl.begin_fetch();
        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1")], 3, 2));
        assert_eq!(ctl.page(), 2);
    }

    #[test]
    fn test_selection_wraps_and_survives_refetch() {
        let mut ctl = controller();
        let generation = ctl.begin_fetch();
        ctl.finish_fetch(
            generation,
            loaded_page(vec![widget("w-1"), widget("w-2"), widget("w-3")], 1, 1),
        );

        ctl.select_next();
        ctl.select_next();
        assert_eq!(ctl.selected_index(), Some(2));
        ctl.select_next();
        assert_eq!(ctl.selected_index(), Some(0));
        ctl.select_previous();
        assert_eq!(ctl.selected_index(), Some(2));

        // Refetch returns fewer rows; selection clamps instead of dangling
        let generation = ctl.begin_fetch();
        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1")], 1, 1));
        assert_eq!(ctl.selected_index(), Some(0));
    }

    #[test]
    fn test_request_delete_needs_a_selected_row() {
        let mut ctl = controller();
        assert!(!ctl.request_delete());

        let generation = ctl.begin_fetch();
        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1")], 1, 1));
        assert!(ctl.request_delete());

        match ctl.modal() {
            Some(Modal::ConfirmDelete { target, error }) => {
                assert_eq!(target.id, "w-1");
                assert!(error.is_none());
            }
            _ => panic!("expected delete confirmation"),
        }
    }

    #[tokio::test]
    async fn test_cancel_delete_issues_no_network_call() {
        let resource = StubResource::new();
        let mut ctl = controller();
        refresh(&mut ctl, &resource).await;
        let fetches_before = resource.fetch_count();
        let items_before = ctl.items().to_vec();

        ctl.request_delete();
        ctl.cancel_modal();

        assert!(ctl.modal().is_none());
        assert_eq!(ctl.items(), items_before.as_slice());
        assert_eq!(resource.fetch_count(), fetches_before);
    }

    #[tokio::test]
    async fn test_successful_create_closes_toasts_and_refetches_once() {
        let resource = StubResource::new();
        let mut ctl = controller();
        refresh(&mut ctl, &resource).await;
        let fetches_before = resource.fetch_count();

        ctl.open_create(valid_form());
        let outcome = submit_modal(&mut ctl, &resource, "User", Locale::En).await;

        assert_eq!(outcome, MutationOutcome::Refetch);
        assert!(ctl.modal().is_none());
        assert_eq!(
            ctl.toast().map(|t| t.message.as_str()),
            Some("User created successfully")
        );
        // Exactly one fresh fetch, never a local patch
        assert_eq!(resource.fetch_count(), fetches_before + 1);
    }

    #[tokio::test]
    async fn test_successful_edit_refetches_once() {
        let resource = StubResource::new();
        let mut ctl = controller();
        refresh(&mut ctl, &resource).await;
        let fetches_before = resource.fetch_count();

        ctl.open_edit("w-1".to_string(), valid_form());
        let outcome = submit_modal(&mut ctl, &resource, "User", Locale::En).await;

        assert_eq!(outcome, MutationOutcome::Refetch);
        assert_eq!(resource.fetch_count(), fetches_before + 1);
        assert_eq!(
            ctl.toast().map(|t| t.message.as_str()),
            Some("User updated successfully")
        );
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_modal_open_with_inline_error() {
        let resource = StubResource::failing_mutations();
        let mut ctl = controller();
        ctl.open_create(valid_form());

        let outcome = submit_modal(&mut ctl, &resource, "User", Locale::En).await;

        assert_eq!(outcome, MutationOutcome::KeptOpen);
        match ctl.modal() {
            Some(Modal::Create(form)) => {
                assert_eq!(form.submit_error.as_deref(), Some("Name already in use"));
            }
            _ => panic!("modal should stay open"),
        }
        assert!(ctl.toast().is_none());
        assert_eq!(resource.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_service() {
        let resource = StubResource::new();
        let mut ctl = controller();
        ctl.open_create(invalid_form());

        let outcome = submit_modal(&mut ctl, &resource, "User", Locale::En).await;

        assert_eq!(outcome, MutationOutcome::KeptOpen);
        assert_eq!(resource.fetch_count(), 0);
        match ctl.modal() {
            Some(Modal::Create(form)) => {
                assert_eq!(form.fields[0].error, Some("field-required"));
            }
            _ => panic!("modal should stay open"),
        }
    }

    #[tokio::test]
    async fn test_confirmed_delete_refetches_once() {
        let resource = StubResource::new();
        let mut ctl = controller();
        refresh(&mut ctl, &resource).await;
        let fetches_before = resource.fetch_count();

        ctl.request_delete();
        let outcome = confirm_delete(&mut ctl, &resource, "User", Locale::En).await;

        assert_eq!(outcome, MutationOutcome::Refetch);
        assert!(ctl.modal().is_none());
        assert_eq!(resource.fetch_count(), fetches_before + 1);
        assert_eq!(
            ctl.toast().map(|t| t.message.as_str()),
            Some("User deleted successfully")
        );
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_confirmation_open() {
        let resource = StubResource::failing_mutations();
        let mut ctl = controller();
        ctl.begin_fetch();
        // Seed one row directly so the confirmation has a target
        let generation = ctl.generation;
        ctl.finish_fetch(generation, loaded_page(vec![widget("w-1")], 1, 1));
        ctl.request_delete();

        let outcome = confirm_delete(&mut ctl, &resource, "User", Locale::En).await;

        assert_eq!(outcome, MutationOutcome::KeptOpen);
        match ctl.modal() {
            Some(Modal::ConfirmDelete { error, .. }) => {
                assert_eq!(error.as_deref(), Some("Not found"));
            }
            _ => panic!("confirmation should stay open"),
        }
        assert_eq!(resource.fetch_count(), 0);
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut ctl = ResourceController::<Widget>::new(5, Duration::from_millis(1));
        ctl.show_toast(Toast::success("saved", Duration::from_millis(1)));
        std::thread::sleep(Duration::from_millis(5));
        ctl.tick();
        assert!(ctl.toast().is_none());
    }

    #[test]
    fn test_session_expiry_resets_quietly() {
        let mut ctl = controller();
        let generation = ctl.begin_fetch();
        ctl.finish_fetch(generation, Err(ClientError::SessionExpired));

        assert_eq!(*ctl.state(), ListState::Idle);
        assert!(ctl.items().is_empty());
    }
}
