pub mod dialog;
pub mod form;
pub mod toast;

pub use dialog::render_confirm_delete;
pub use form::{centered_rect, render_fields, render_modal};
pub use toast::render_toast;
