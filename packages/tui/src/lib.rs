//! Storekeep TUI - terminal user interface for the Storekeep admin console
//!
//! One generic paginated-resource controller drives the Users, Products,
//! and Product Categories pages; per-entity code is confined to the
//! resource seam in [`resources`].

pub mod app;
pub mod controller;
pub mod events;
pub mod forms;
pub mod i18n;
pub mod resources;
pub mod state;
pub mod toast;
pub mod ui;

pub use app::{launch, App};
pub use state::{AppState, Screen};
