//! Application state and event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::TuiConfig;
use crate::kittens::{CatImageSource, TheCatApiClient};
use crate::model::{Catalog, ReferenceSession};
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, CitationForm, FormValues, View};

/// Main application: state, the reference catalog and the cat image source
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Immutable reference catalog
    pub catalog: Catalog,
    /// Cat image API client
    cats: Box<dyn CatImageSource>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = match TuiConfig::load() {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!("failed to load config: {error:#}");
                TuiConfig::default()
            }
        };

        let catalog = Catalog::new();
        let mut state = AppState::default();
        if let Some(style) = &config.default_style {
            if let Some(index) = catalog
                .style_labels()
                .iter()
                .position(|label| *label == style.as_str())
            {
                state.selected_style_index = index;
            }
        }

        let cats: Box<dyn CatImageSource> = Box::new(TheCatApiClient::new(
            config.cat_api_url.clone(),
            config.cat_api_token.clone(),
        ));

        Ok(Self {
            state,
            catalog,
            cats,
            quit: false,
            status_message: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event, dispatched by the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Types => self.handle_types_key(key)?,
            View::CitationForm => self.handle_form_key(key)?,
            View::Citation => self.handle_citation_key(key)?,
            View::Kittens => self.handle_kittens_key(key).await?,
        }

        Ok(())
    }

    /// Handle keys in the type/style selection view
    fn handle_types_key(&mut self, key: KeyEvent) -> Result<()> {
        let type_count = self.catalog.type_names().len();
        let style_count = self.catalog.style_labels().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.selected_type_index =
                    (self.state.selected_type_index + 1) % type_count;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.selected_type_index = if self.state.selected_type_index == 0 {
                    type_count - 1
                } else {
                    self.state.selected_type_index - 1
                };
            }
            KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Left | KeyCode::Right
            | KeyCode::Tab => {
                self.state.selected_style_index =
                    (self.state.selected_style_index + 1) % style_count;
            }
            KeyCode::Enter => self.open_form()?,
            KeyCode::Char('g') => self.state.current_view = View::Kittens,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Build a fresh form for the selected type and style and switch to it
    fn open_form(&mut self) -> Result<()> {
        let type_names = self.catalog.type_names();
        let Some(type_name) = type_names.get(self.state.selected_type_index).copied() else {
            return Ok(());
        };
        let style_count = self.catalog.style_labels().len();
        let style_label = self.catalog.style_labels()[self.state.selected_style_index % style_count];

        let reference = self.catalog.create(type_name)?;
        self.state.form = Some(CitationForm::new(&reference, style_label));
        self.state.current_view = View::CitationForm;
        tracing::info!(type_name, style_label, "opened citation form");
        Ok(())
    }

    /// Handle keys in the citation form view
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+S formats from anywhere in the form
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.submit_form();
        }

        let Some(form) = self.state.form.as_mut() else {
            self.state.current_view = View::Types;
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => self.state.current_view = View::Types,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter => {
                if form.is_buttons_row_active() {
                    if form.selected_button == 0 {
                        self.state.current_view = View::Types;
                    } else {
                        return self.submit_form();
                    }
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.active_field_mut() {
                    field.clear();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the form's buffers through the reference session.
    ///
    /// A validation failure opens the error dialog and keeps the form
    /// intact, so the user can correct the offending field and resubmit.
    fn submit_form(&mut self) -> Result<()> {
        let Some(form) = &self.state.form else {
            return Ok(());
        };
        let session = ReferenceSession::new(&self.catalog);
        let mut values = FormValues::new(form);
        match session.process(form.type_name, form.style_label, &mut values) {
            Ok(citation) => {
                tracing::info!(type_name = form.type_name, "citation rendered");
                self.state.citation = Some(citation);
                self.state.current_view = View::Citation;
            }
            Err(error) => {
                tracing::warn!("citation rejected: {error}");
                self.state.set_error(error.to_string());
            }
        }
        Ok(())
    }

    /// Handle keys in the rendered citation view
    fn handle_citation_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c')
                if key.modifiers.is_empty() || key.modifiers.contains(COPY_MODIFIER) =>
            {
                if let Some(citation) = self.state.citation.clone() {
                    self.copy_to_clipboard(&citation)?;
                    self.status_message = Some("Ссылка скопирована".to_string());
                }
            }
            KeyCode::Char('e') | KeyCode::Esc => self.state.current_view = View::CitationForm,
            KeyCode::Char('n') => {
                self.state.form = None;
                self.state.citation = None;
                self.state.current_view = View::Types;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the kittens view
    async fn handle_kittens_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => self.fetch_cat(false).await,
            KeyCode::Char('g') => self.fetch_cat(true).await,
            KeyCode::Char('c') => {
                if let Some(url) = self.state.kittens.last_url.clone() {
                    self.copy_to_clipboard(&url)?;
                    self.status_message = Some("URL скопирован".to_string());
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => self.state.current_view = View::Types,
            _ => {}
        }
        Ok(())
    }

    /// Fetch one cat image (or gif) URL and record it
    async fn fetch_cat(&mut self, gif: bool) {
        let result = if gif {
            self.cats.random_gif().await
        } else {
            self.cats.random_image().await
        };
        match result {
            Ok(url) => {
                self.state.kittens.last_url = Some(url);
                self.state.kittens.fetched_count += 1;
            }
            Err(error) => {
                tracing::warn!("cat fetch failed: {error:#}");
                self.state
                    .set_error(format!("Не удалось получить котика: {error:#}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
