//! Citation form rendering with action sidebar

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{CitationForm, FORM_BUTTONS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one field box in rows
const FIELD_HEIGHT: u16 = 3;

/// Draw the citation form with the action panel on the right
pub fn draw_citation_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = &app.state.form else {
        return;
    };

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], form);
    draw_action_panel(frame, main_chunks[1], form);
}

/// Draw the form fields, windowed around the active field
fn draw_form(frame: &mut Frame, area: Rect, form: &CitationForm) {
    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} — {} ", form.type_name, form.style_label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = (inner.height / FIELD_HEIGHT).max(1) as usize;
    // Keep the active field inside the window; the buttons row anchors to
    // the last field
    let anchor = form
        .active_field_index
        .min(form.field_count().saturating_sub(1));
    let first = anchor.saturating_sub(visible.saturating_sub(1));

    for (slot, index) in (first..form.field_count()).take(visible).enumerate() {
        let field_area = Rect {
            x: inner.x,
            y: inner.y + (slot as u16) * FIELD_HEIGHT,
            width: inner.width,
            height: FIELD_HEIGHT,
        };
        if let Some(field) = form.get_field(index) {
            draw_field(frame, field_area, field, index == form.active_field_index);
        }
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, form: &CitationForm) {
    let is_focused = form.is_buttons_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Действия ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (idx, label) in FORM_BUTTONS.iter().enumerate() {
        let button_area = Rect {
            x: inner.x,
            y: inner.y + (idx as u16) * BUTTON_HEIGHT,
            width: inner.width,
            height: BUTTON_HEIGHT,
        };
        if button_area.y + button_area.height > inner.y + inner.height {
            break;
        }
        let is_selected = is_focused && form.selected_button == idx;
        render_button(frame, button_area, label, is_selected, true);
    }
}
