//! Kittens view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the kittens page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let kittens = &app.state.kittens;

    let mut lines = vec![Line::from("")];
    match &kittens.last_url {
        Some(url) => {
            lines.push(Line::from("Вот ваш котик:"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                url.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }
        None => {
            lines.push(Line::from("Нажмите Enter, чтобы получить котика!"));
        }
    }
    if kittens.fetched_count > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Котиков получено: {}", kittens.fetched_count),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Котики 😺 ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
