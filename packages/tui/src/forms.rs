//! Form state and client-side validation
//!
//! Validation runs before submission; an invalid form never reaches the
//! service. Field errors and the submit error hold catalog keys or raw
//! messages resolved at render time.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Kind of input a field accepts
#[derive(Debug)]
pub enum FieldKind {
    Text,
    /// Rendered masked; an empty value on edit forms means "unchanged"
    Password,
    /// Fixed option list of (id, label) pairs
    Select { options: Vec<(String, String)>, selected: usize },
}

/// Validator result: `None` is valid, `Some(key)` is a catalog message key
pub type Validator = fn(&str) -> Option<&'static str>;

/// A single form field
pub struct FormField {
    pub name: &'static str,
    pub label_key: &'static str,
    pub kind: FieldKind,
    pub input: Input,
    pub required: bool,
    pub validator: Option<Validator>,
    /// Catalog key of the current validation error, if any
    pub error: Option<&'static str>,
}

impl FormField {
    pub fn text(name: &'static str, label_key: &'static str) -> Self {
        Self::new(name, label_key, FieldKind::Text)
    }

    pub fn password(name: &'static str, label_key: &'static str) -> Self {
        Self::new(name, label_key, FieldKind::Password)
    }

    pub fn select(
        name: &'static str,
        label_key: &'static str,
        options: Vec<(String, String)>,
    ) -> Self {
        Self::new(name, label_key, FieldKind::Select { options, selected: 0 })
    }

    fn new(name: &'static str, label_key: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label_key,
            kind,
            input: Input::default(),
            required: true,
            validator: None,
            error: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.input = Input::new(value.into());
        self
    }

    /// Preselect a select-field option by id
    pub fn with_selected(mut self, id: &str) -> Self {
        if let FieldKind::Select { options, selected } = &mut self.kind {
            if let Some(index) = options.iter().position(|(opt_id, _)| opt_id == id) {
                *selected = index;
            }
        }
        self
    }

    /// Current value: option id for selects, raw text otherwise
    pub fn value(&self) -> String {
        match &self.kind {
            FieldKind::Select { options, selected } => options
                .get(*selected)
                .map(|(id, _)| id.clone())
                .unwrap_or_default(),
            _ => self.input.value().to_string(),
        }
    }

    /// Label of the selected option, for rendering
    pub fn selected_label(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Select { options, selected } => {
                options.get(*selected).map(|(_, label)| label.as_str())
            }
            _ => None,
        }
    }

    fn validate(&mut self) -> bool {
        let value = self.value();

        if self.required && value.trim().is_empty() {
            self.error = Some("field-required");
            return false;
        }
        if let Some(validator) = self.validator {
            // Optional fields skip shape checks when left empty
            if !value.is_empty() {
                if let Some(key) = validator(&value) {
                    self.error = Some(key);
                    return false;
                }
            }
        }
        self.error = None;
        true
    }
}

/// A modal form: ordered fields, one focused at a time
pub struct FormState {
    pub title_key: &'static str,
    pub fields: Vec<FormField>,
    pub focused: usize,
    /// Inline error from a failed submission; keeps the modal open
    pub submit_error: Option<String>,
}

impl FormState {
    pub fn new(title_key: &'static str, fields: Vec<FormField>) -> Self {
        Self {
            title_key,
            fields,
            focused: 0,
            submit_error: None,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Route a key event into the focused field
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };

        match &mut field.kind {
            FieldKind::Select { options, selected } => match key.code {
                KeyCode::Up | KeyCode::Left => {
                    if *selected > 0 {
                        *selected -= 1;
                    } else if !options.is_empty() {
                        *selected = options.len() - 1;
                    }
                }
                KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => {
                    if !options.is_empty() {
                        *selected = (*selected + 1) % options.len();
                    }
                }
                _ => {}
            },
            _ => {
                field.input.handle_event(&Event::Key(key));
            }
        }
    }

    /// Validate every field; returns true when the form may be submitted
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            if !field.validate() {
                valid = false;
            }
        }
        valid
    }

    /// Current value of a named field
    pub fn value(&self, name: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value())
            .unwrap_or_default()
    }

    /// Snapshot of all field values keyed by field name
    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.value()))
            .collect()
    }
}

/// Email shape: `local@domain.tld`, no whitespace
pub fn validate_email(value: &str) -> Option<&'static str> {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Some("email-invalid");
    };

    let domain_ok = {
        let mut segments = domain.split('.');
        domain.contains('.') && segments.all(|s| !s.is_empty())
    };

    if local.is_empty()
        || !domain_ok
        || value.chars().any(char::is_whitespace)
    {
        Some("email-invalid")
    } else {
        None
    }
}

/// Phone shape: digits plus `+ - space ( )`, 7 to 20 characters
pub fn validate_phone(value: &str) -> Option<&'static str> {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));

    if allowed && (7..=20).contains(&value.chars().count()) {
        None
    } else {
        Some("phone-invalid")
    }
}

/// Minimum password length
pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.chars().count() >= 6 {
        None
    } else {
        Some("password-min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user_form() -> FormState {
        FormState::new(
            "create-user",
            vec![
                FormField::text("firstName", "first-name"),
                FormField::text("lastName", "last-name"),
                FormField::text("email", "email").with_validator(validate_email),
                FormField::text("phone", "phone").with_validator(validate_phone),
                FormField::password("password", "password").with_validator(validate_password),
            ],
        )
    }

    #[test]
    fn test_required_fields_block_submission() {
        let mut form = user_form();
        assert!(!form.validate());
        assert_eq!(form.fields[0].error, Some("field-required"));
    }

    #[test]
    fn test_valid_form_passes() {
        let mut form = user_form();
        form.fields[0] = FormField::text("firstName", "first-name").with_value("Ada");
        form.fields[1] = FormField::text("lastName", "last-name").with_value("Lovelace");
        form.fields[2] = FormField::text("email", "email")
            .with_validator(validate_email)
            .with_value("ada@example.com");
        form.fields[3] = FormField::text("phone", "phone")
            .with_validator(validate_phone)
            .with_value("+44 1234567");
        form.fields[4] = FormField::password("password", "password")
            .with_validator(validate_password)
            .with_value("secret1");

        assert!(form.validate());
        assert_eq!(form.value("email"), "ada@example.com");
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("ada@example.com").is_none());
        assert!(validate_email("ada@example.co.uk").is_none());
        assert!(validate_email("ada").is_some());
        assert!(validate_email("ada@").is_some());
        assert!(validate_email("ada@nodot").is_some());
        assert!(validate_email("a da@example.com").is_some());
        assert!(validate_email("ada@@example.com").is_some());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+44 (0) 1234-567").is_none());
        assert!(validate_phone("1234567").is_none());
        assert!(validate_phone("123").is_some());
        assert!(validate_phone("phone-number").is_some());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret1").is_none());
        assert!(validate_password("short").is_some());
    }

    #[test]
    fn test_optional_password_skipped_when_empty() {
        // Edit forms leave the password blank to mean "unchanged"
        let mut field = FormField::password("password", "password")
            .with_validator(validate_password)
            .optional();
        assert!(field.validate());
        assert!(field.error.is_none());
    }

    #[test]
    fn test_select_field_value_is_option_id() {
        let field = FormField::select(
            "categoryId",
            "category",
            vec![
                ("c-1".to_string(), "Snacks".to_string()),
                ("c-2".to_string(), "Dairy".to_string()),
            ],
        )
        .with_selected("c-2");

        assert_eq!(field.value(), "c-2");
        assert_eq!(field.selected_label(), Some("Dairy"));
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = user_form();
        assert_eq!(form.focused, 0);
        form.focus_previous();
        assert_eq!(form.focused, form.fields.len() - 1);
        form.focus_next();
        assert_eq!(form.focused, 0);
    }
}
