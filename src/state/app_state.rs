//! Application state definitions

use super::forms::CitationForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Reference type and citation style selection
    #[default]
    Types,
    /// Field editing for the chosen reference type
    CitationForm,
    /// Rendered citation result
    Citation,
    /// Random cat images
    Kittens,
}

/// Kittens page state
#[derive(Debug, Clone, Default)]
pub struct KittensState {
    /// URL of the last fetched image
    pub last_url: Option<String>,
    pub fetched_count: u32,
}

/// Application state shared across views
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Selected row in the reference type list
    pub selected_type_index: usize,
    /// Selected citation style (index into the catalog's style labels)
    pub selected_style_index: usize,
    /// Form for the reference type being edited
    pub form: Option<CitationForm>,
    /// Last successfully rendered citation
    pub citation: Option<String>,
    /// Modal error dialog content
    pub error_message: Option<String>,
    pub kittens: KittensState,
}

impl AppState {
    /// Check if the error dialog is open
    pub fn has_errors(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_types() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Types);
        assert!(state.form.is_none());
        assert!(state.citation.is_none());
    }

    #[test]
    fn test_error_dialog_lifecycle() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.set_error("year: Not a positive number: 0");
        assert!(state.has_errors());
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
