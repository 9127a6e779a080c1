//! UI module for rendering the TUI

mod citation;
mod components;
mod forms;
mod kittens;
mod layout;
mod types;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Types => types::draw(frame, main_area, app),
        View::CitationForm => forms::draw_citation_form(frame, main_area, app),
        View::Citation => citation::draw(frame, main_area, app),
        View::Kittens => kittens::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modal error dialog overlays everything
    if let Some(message) = &app.state.error_message {
        components::render_error_dialog(frame, message);
    }
}
