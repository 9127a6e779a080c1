//! Orchestration: collect values for a chosen reference type and render it

use thiserror::Error;

use super::catalog::{Catalog, CatalogError};
use super::field::{RawValue, ValueKind};
use super::validate::ValidationError;

/// Capability to obtain one raw value per field from the user.
///
/// Each method is called once per field, in declaration order; `key` is the
/// field's index, stable for the whole session, so a stateful input widget
/// can persist across redraws. The returned value is raw — the session
/// validates it before storing.
pub trait ValueProvider {
    fn request_text(&mut self, prompt: &str, default: &str, key: usize) -> RawValue;
    fn request_number(&mut self, prompt: &str, default: i64, key: usize) -> RawValue;
    fn request_date(&mut self, prompt: &str, default: &str, key: usize) -> RawValue;
}

/// Failure of a whole `process` call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// A field rejected its value; nothing was rendered
    #[error("{field}: {source}")]
    Validation {
        field: &'static str,
        source: ValidationError,
    },
}

/// Drives one citation submission start to finish
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSession<'a> {
    catalog: &'a Catalog,
}

impl<'a> ReferenceSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Collect, validate and render one citation.
    ///
    /// Either every field accepts its value and the rendered string is
    /// returned, or the first rejection aborts the call with no output.
    /// Validation failures are terminal; re-prompting is the caller's job.
    pub fn process(
        &self,
        type_name: &str,
        style_label: &str,
        provider: &mut dyn ValueProvider,
    ) -> Result<String, ReferenceError> {
        let style = self.catalog.resolve_style(style_label)?;
        let mut reference = self.catalog.create(type_name)?;

        for index in 0..reference.field_count() {
            let Some((name, field)) = reference.field(index) else {
                break;
            };
            let prompt = field.prompt();
            let raw = match field.kind() {
                ValueKind::Text => {
                    let default = field.as_text().to_string();
                    provider.request_text(prompt, &default, index)
                }
                ValueKind::Number => provider.request_number(prompt, field.as_number(), index),
                ValueKind::Date => {
                    let default = field.as_text().to_string();
                    provider.request_date(prompt, &default, index)
                }
            };
            reference
                .set_field(index, raw)
                .map_err(|source| ReferenceError::Validation {
                    field: name,
                    source,
                })?;
        }

        reference.set_style(style);
        Ok(reference.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reference::ReferenceKind;

    /// Provider that hands every field its own default back
    #[derive(Default)]
    struct EchoProvider {
        requests: Vec<usize>,
    }

    impl ValueProvider for EchoProvider {
        fn request_text(&mut self, _prompt: &str, default: &str, key: usize) -> RawValue {
            self.requests.push(key);
            RawValue::Text(default.to_string())
        }

        fn request_number(&mut self, _prompt: &str, default: i64, key: usize) -> RawValue {
            self.requests.push(key);
            RawValue::Number(default)
        }

        fn request_date(&mut self, _prompt: &str, default: &str, key: usize) -> RawValue {
            self.requests.push(key);
            RawValue::Date(default.to_string())
        }
    }

    /// Provider that answers one chosen key with a fixed raw value and
    /// echoes defaults everywhere else
    struct OverrideProvider {
        key: usize,
        value: RawValue,
        inner: EchoProvider,
    }

    impl OverrideProvider {
        fn new(key: usize, value: RawValue) -> Self {
            Self {
                key,
                value,
                inner: EchoProvider::default(),
            }
        }

        fn answer(&mut self, default: RawValue, key: usize) -> RawValue {
            self.inner.requests.push(key);
            if key == self.key {
                self.value.clone()
            } else {
                default
            }
        }
    }

    impl ValueProvider for OverrideProvider {
        fn request_text(&mut self, _prompt: &str, default: &str, key: usize) -> RawValue {
            self.answer(RawValue::Text(default.to_string()), key)
        }

        fn request_number(&mut self, _prompt: &str, default: i64, key: usize) -> RawValue {
            self.answer(RawValue::Number(default), key)
        }

        fn request_date(&mut self, _prompt: &str, default: &str, key: usize) -> RawValue {
            self.answer(RawValue::Date(default.to_string()), key)
        }
    }

    #[test]
    fn test_defaults_succeed_for_every_type_and_style() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        for name in catalog.type_names() {
            let reference = catalog.create(name).unwrap();
            let lead_default = reference
                .field(0)
                .map(|(_, field)| field.as_text().to_string())
                .unwrap();
            for label in catalog.style_labels() {
                let mut provider = EchoProvider::default();
                let rendered = session.process(name, label, &mut provider).unwrap();
                assert!(!rendered.is_empty(), "{name} / {label}");
                // The lead author/name field appears verbatim, except in the
                // one unsupported style combination
                if label == "Затекстовая" {
                    assert!(rendered.contains(&lead_default), "{name} / {label}");
                }
            }
        }
    }

    #[test]
    fn test_rendered_defaults_contain_author_verbatim() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        let mut provider = EchoProvider::default();
        let rendered = session
            .process("Монография", "Затекстовая", &mut provider)
            .unwrap();
        assert!(rendered.contains("Корнелиус Х."));
        assert!(rendered.contains("Выиграть может каждый"));
    }

    #[test]
    fn test_fields_requested_in_declaration_order() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        let mut provider = EchoProvider::default();
        session
            .process("Монография", "Затекстовая", &mut provider)
            .unwrap();
        let expected: Vec<usize> =
            (0..ReferenceKind::Monography.field_specs().len()).collect();
        assert_eq!(provider.requests, expected);
    }

    #[test]
    fn test_unknown_style_fails_before_any_request() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        let mut provider = EchoProvider::default();
        let err = session
            .process("Монография", "Концевая", &mut provider)
            .unwrap_err();
        assert_eq!(
            err,
            ReferenceError::Catalog(CatalogError::UnknownStyle("Концевая".to_string()))
        );
        assert!(provider.requests.is_empty());
    }

    #[test]
    fn test_unknown_type_fails_before_any_request() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        let mut provider = EchoProvider::default();
        let err = session
            .process("Диссертация", "Затекстовая", &mut provider)
            .unwrap_err();
        assert_eq!(
            err,
            ReferenceError::Catalog(CatalogError::UnknownReferenceType(
                "Диссертация".to_string()
            ))
        );
        assert!(provider.requests.is_empty());
    }

    #[test]
    fn test_validation_failure_aborts_without_rendering() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        // year is field index 1 for Монография
        let mut provider = OverrideProvider::new(1, RawValue::Number(0));
        let err = session
            .process("Монография", "Затекстовая", &mut provider)
            .unwrap_err();
        assert_eq!(
            err,
            ReferenceError::Validation {
                field: "year",
                source: ValidationError::NotPositive(0),
            }
        );
    }

    #[test]
    fn test_validation_failure_stops_further_requests() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        let mut provider = OverrideProvider::new(1, RawValue::Text("abc".to_string()));
        let _ = session
            .process("Монография", "Затекстовая", &mut provider)
            .unwrap_err();
        // Requests 0 and 1 happened, nothing after the failing field
        assert_eq!(provider.inner.requests, vec![0, 1]);
    }

    #[test]
    fn test_bad_page_range_surfaces_specific_error() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        // pages is field index 7 for Монография
        let mut provider = OverrideProvider::new(7, RawValue::Text("1-2-3".to_string()));
        let err = session
            .process("Монография", "Затекстовая", &mut provider)
            .unwrap_err();
        assert_eq!(
            err,
            ReferenceError::Validation {
                field: "pages",
                source: ValidationError::TooManyHyphens(2),
            }
        );
    }

    #[test]
    fn test_subscript_style_applied_to_rendering() {
        let catalog = Catalog::new();
        let session = ReferenceSession::new(&catalog);
        let mut provider = EchoProvider::default();
        let rendered = session
            .process("Статья в сборнике", "Подстрочная", &mut provider)
            .unwrap();
        assert!(rendered.contains(", 2009."));
        assert!(!rendered.contains("(2009)"));
    }
}
