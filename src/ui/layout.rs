//! Layout components (sidebar, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::FORMAT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Sidebar items
const SIDEBAR_ITEMS: &[&str] = &["Ссылки", "Котики"];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(BUTTON_HEIGHT), // Ссылки
            Constraint::Length(BUTTON_HEIGHT), // Котики
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    for (idx, label) in SIDEBAR_ITEMS.iter().enumerate() {
        let is_selected = match idx {
            0 => matches!(
                app.state.current_view,
                View::Types | View::CitationForm | View::Citation
            ),
            _ => matches!(app.state.current_view, View::Kittens),
        };
        render_button(frame, chunks[idx + 1], label, is_selected, true);
    }
}

/// Draw the status bar with per-view key hints
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hint = match app.state.current_view {
        View::Types => {
            "j/k — тип • h/l — вид ссылки • Enter — заполнить • g — котики • q — выход"
                .to_string()
        }
        View::CitationForm => format!(
            "Tab/↓/↑ — поля • Enter — далее • {FORMAT_SHORTCUT} — оформить • Esc — назад"
        ),
        View::Citation => {
            "c — копировать • e — изменить • n — новая ссылка • q — выход".to_string()
        }
        View::Kittens => {
            "Enter — хочу котика! • g — хочу гифку! • c — копировать URL • Esc — назад"
                .to_string()
        }
    };

    let message = app.status_message.clone().unwrap_or(hint);
    let paragraph =
        Paragraph::new(Line::from(message)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, status_area);
}
