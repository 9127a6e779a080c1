//! Reference type and citation style selection view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the type list with the style selector above it
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Style selector
            Constraint::Min(0),    // Type list
        ])
        .split(area);

    draw_style_selector(frame, chunks[0], app);
    draw_type_list(frame, chunks[1], app);
}

fn draw_style_selector(frame: &mut Frame, area: Rect, app: &App) {
    let labels = app.catalog.style_labels();
    let mut spans = Vec::new();
    for (idx, label) in labels.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  •  ", Style::default().fg(Color::DarkGray)));
        }
        let style = if idx == app.state.selected_style_index {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*label, style));
    }

    let block = Block::default()
        .title(" Выберите вид ссылки ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_type_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .catalog
        .type_names()
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Выберите тип ссылки ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = ListState::default();
    state.select(Some(app.state.selected_type_index));
    frame.render_stateful_widget(list, area, &mut state);
}
