//! Form field edit buffers

use crate::model::ValueKind;

/// A single form input: the raw text buffer being edited for one
/// reference field
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub buffer: String,
    pub kind: ValueKind,
    pub optional: bool,
}

impl FormField {
    pub fn new(label: &str, buffer: String, kind: ValueKind, optional: bool) -> Self {
        Self {
            label: label.to_string(),
            buffer,
            kind,
            optional,
        }
    }

    /// Push a character to the buffer, filtered by the field's value kind
    pub fn push_char(&mut self, c: char) {
        let accepted = match self.kind {
            ValueKind::Text => true,
            ValueKind::Number => c.is_ascii_digit(),
            ValueKind::Date => c.is_ascii_digit() || c == '.',
        };
        if accepted {
            self.buffer.push(c);
        }
    }

    /// Remove the last character from the buffer
    pub fn pop_char(&mut self) {
        self.buffer.pop();
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Value shown in the input box
    pub fn display_value(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_accepts_any_char() {
        let mut field = FormField::new("Автор", String::new(), ValueKind::Text, false);
        field.push_char('К');
        field.push_char('.');
        field.push_char('7');
        assert_eq!(field.buffer, "К.7");
    }

    #[test]
    fn test_number_field_accepts_digits_only() {
        let mut field = FormField::new("Год", String::new(), ValueKind::Number, false);
        field.push_char('1');
        field.push_char('a');
        field.push_char('9');
        field.push_char('.');
        assert_eq!(field.buffer, "19");
    }

    #[test]
    fn test_date_field_accepts_digits_and_dots() {
        let mut field = FormField::new("Дата", String::new(), ValueKind::Date, true);
        for c in "05.10.2008x-".chars() {
            field.push_char(c);
        }
        assert_eq!(field.buffer, "05.10.2008");
    }

    #[test]
    fn test_pop_char_removes_last() {
        let mut field = FormField::new("Год", "1992".to_string(), ValueKind::Number, false);
        field.pop_char();
        assert_eq!(field.buffer, "199");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::new("Год", String::new(), ValueKind::Number, false);
        field.pop_char();
        assert_eq!(field.buffer, "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::new("Автор", "Шлыков П.".to_string(), ValueKind::Text, false);
        field.clear();
        assert_eq!(field.display_value(), "");
    }
}
