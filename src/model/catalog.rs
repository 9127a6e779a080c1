//! Fixed registry of reference type names and citation style labels

use thiserror::Error;

use super::reference::{CitationStyle, Reference, ReferenceKind};

/// Citation style labels shown in the selector, in display order
pub const STYLE_LABELS: [&str; 2] = ["Затекстовая", "Подстрочная"];

/// Lookup failure for a name or label outside the fixed catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown reference type: {0}")]
    UnknownReferenceType(String),
    #[error("Unknown citation style: {0}")]
    UnknownStyle(String),
}

/// Immutable registry mapping display names to reference kinds and style
/// labels to citation styles. Built once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    /// Display names of every reference type, in fixed order
    pub fn type_names(&self) -> Vec<&'static str> {
        ReferenceKind::ALL
            .iter()
            .map(|kind| kind.display_name())
            .collect()
    }

    /// Citation style labels, in fixed order
    pub fn style_labels(&self) -> [&'static str; 2] {
        STYLE_LABELS
    }

    /// Instantiate the reference type registered under `display_name`,
    /// seeded with its example defaults
    pub fn create(&self, display_name: &str) -> Result<Reference, CatalogError> {
        ReferenceKind::ALL
            .iter()
            .find(|kind| kind.display_name() == display_name)
            .map(|kind| Reference::new(*kind))
            .ok_or_else(|| CatalogError::UnknownReferenceType(display_name.to_string()))
    }

    /// Resolve a style label to its citation style tag
    pub fn resolve_style(&self, label: &str) -> Result<CitationStyle, CatalogError> {
        match label {
            "Затекстовая" => Ok(CitationStyle::Transtextual),
            "Подстрочная" => Ok(CitationStyle::Subscript),
            _ => Err(CatalogError::UnknownStyle(label.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_in_fixed_order() {
        let catalog = Catalog::new();
        let names = catalog.type_names();
        assert_eq!(
            names,
            vec![
                "Монография",
                "Статья в сборнике",
                "Статья в журнале",
                "Текст, опубликованный в многотомном издании",
                "Нормативно-правовой акт, электронный ресурс",
                "Online-статья",
            ]
        );
        // Stable across calls
        assert_eq!(names, catalog.type_names());
    }

    #[test]
    fn test_create_every_listed_name() {
        let catalog = Catalog::new();
        for name in catalog.type_names() {
            let reference = catalog.create(name).unwrap();
            assert_eq!(reference.kind().display_name(), name);
        }
    }

    #[test]
    fn test_create_unknown_name_fails() {
        let catalog = Catalog::new();
        let err = catalog.create("Диссертация").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownReferenceType("Диссертация".to_string())
        );
    }

    #[test]
    fn test_resolve_both_styles() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.resolve_style("Затекстовая"),
            Ok(CitationStyle::Transtextual)
        );
        assert_eq!(
            catalog.resolve_style("Подстрочная"),
            Ok(CitationStyle::Subscript)
        );
    }

    #[test]
    fn test_resolve_unknown_style_fails() {
        let catalog = Catalog::new();
        let err = catalog.resolve_style("Концевая");
        assert_eq!(err, Err(CatalogError::UnknownStyle("Концевая".to_string())));
    }

    #[test]
    fn test_style_labels_match_resolvable_labels() {
        let catalog = Catalog::new();
        for label in catalog.style_labels() {
            assert!(catalog.resolve_style(label).is_ok());
        }
    }
}
