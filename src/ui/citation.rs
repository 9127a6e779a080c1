//! Rendered citation view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the formatted citation
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Min(0),    // Citation text
        ])
        .margin(1)
        .split(area);

    let heading = match &app.state.form {
        Some(form) => format!("{} — {}", form.type_name, form.style_label),
        None => String::new(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            heading,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    let citation = app.state.citation.as_deref().unwrap_or("");
    let paragraph = Paragraph::new(citation)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Ссылка готова ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, chunks[1]);
}
