//! Typed, validated bibliographic field values

use std::fmt;

use super::validate::{validate, ValidationError, ValidatorKind};

/// Which input channel a field expects from a value provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Date,
}

/// A validated field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    /// A validated "day.month.year" string
    Date(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A raw value handed back by a value provider, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Text(String),
    Number(i64),
    Date(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(text) | RawValue::Date(text) => f.write_str(text),
            RawValue::Number(number) => write!(f, "{number}"),
        }
    }
}

/// One named, typed, validated input slot on a reference
#[derive(Debug, Clone)]
pub struct Field {
    prompt: &'static str,
    kind: ValueKind,
    validator: ValidatorKind,
    optional: bool,
    value: FieldValue,
}

impl Field {
    pub(crate) fn new(
        prompt: &'static str,
        kind: ValueKind,
        validator: ValidatorKind,
        optional: bool,
        value: FieldValue,
    ) -> Self {
        Self {
            prompt,
            kind,
            validator,
            optional,
            value,
        }
    }

    /// Prompt text shown when requesting this field's value
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Validate and store a raw value.
    ///
    /// On failure the field keeps its previous value.
    pub fn set_value(&mut self, raw: RawValue) -> Result<(), ValidationError> {
        self.value = validate(self.validator, raw, self.optional)?;
        Ok(())
    }

    /// Text content (empty for numeric values)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) | FieldValue::Date(text) => text,
            FieldValue::Number(_) => "",
        }
    }

    /// Numeric content (0 for text values)
    pub fn as_number(&self) -> i64 {
        match &self.value {
            FieldValue::Number(number) => *number,
            FieldValue::Text(_) | FieldValue::Date(_) => 0,
        }
    }
}
