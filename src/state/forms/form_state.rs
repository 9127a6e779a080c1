//! Citation form state and its bridge to the reference session

use super::field::FormField;
use crate::model::{FieldValue, RawValue, Reference, ValueProvider};

/// Buttons on the form's action row
pub const FORM_BUTTONS: [&str; 2] = ["Отмена", "Оформить"];

/// Form for one citation submission: one edit buffer per reference field,
/// plus a buttons row at the end of the tab order
#[derive(Debug, Clone)]
pub struct CitationForm {
    pub type_name: &'static str,
    pub style_label: &'static str,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Cancel, 1=Format)
    pub selected_button: usize,
}

impl CitationForm {
    /// Build a form over a freshly created reference, seeding every buffer
    /// with the field's default value
    pub fn new(reference: &Reference, style_label: &'static str) -> Self {
        let fields = (0..reference.field_count())
            .filter_map(|index| reference.field(index))
            .map(|(_, field)| {
                let buffer = match field.value() {
                    FieldValue::Number(number) => number.to_string(),
                    FieldValue::Text(text) | FieldValue::Date(text) => text.clone(),
                };
                FormField::new(field.prompt(), buffer, field.kind(), field.optional())
            })
            .collect();
        Self {
            type_name: reference.kind().display_name(),
            style_label,
            fields,
            active_field_index: 0,
            selected_button: 1, // Default to "Оформить" button
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Index of the buttons row (one past the last field)
    pub fn buttons_row(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.buttons_row()
    }

    /// Move to the next field (wraps through the buttons row)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % (self.fields.len() + 1);
    }

    /// Move to the previous field (wraps through the buttons row)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.fields.len();
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FORM_BUTTONS.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FORM_BUTTONS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.fields.get_mut(index)
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

/// ValueProvider over the form's buffers, keyed by field index.
///
/// Every request is answered with the raw buffer text; parsing numbers and
/// dates out of it is the validators' job. An out-of-range key falls back
/// to the supplied default.
pub struct FormValues<'a> {
    form: &'a CitationForm,
}

impl<'a> FormValues<'a> {
    pub fn new(form: &'a CitationForm) -> Self {
        Self { form }
    }

    fn buffer_or(&self, key: usize, default: &str) -> String {
        self.form
            .fields
            .get(key)
            .map(|field| field.buffer.clone())
            .unwrap_or_else(|| default.to_string())
    }
}

impl ValueProvider for FormValues<'_> {
    fn request_text(&mut self, _prompt: &str, default: &str, key: usize) -> RawValue {
        RawValue::Text(self.buffer_or(key, default))
    }

    fn request_number(&mut self, _prompt: &str, default: i64, key: usize) -> RawValue {
        match self.form.fields.get(key) {
            Some(field) => RawValue::Text(field.buffer.clone()),
            None => RawValue::Number(default),
        }
    }

    fn request_date(&mut self, _prompt: &str, default: &str, key: usize) -> RawValue {
        RawValue::Date(self.buffer_or(key, default))
    }
}
