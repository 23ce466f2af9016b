//! Call-request form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, BUTTON_CLEAR, BUTTON_SUBMIT, FIELD_BUTTONS, FIELD_CREDIT, FIELD_NAME, FIELD_PHONE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the call-request form with the action panel on the right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Credit type
            Constraint::Min(0),    // remaining space
        ])
        .margin(1)
        .split(area);

    // Form is focused when not on the action panel
    let form_focused = app.form.active_field() < FIELD_BUTTONS;
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Request a Call ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    draw_field(
        frame,
        chunks[0],
        &app.form.name,
        app.form.active_field() == FIELD_NAME,
    );
    draw_field(
        frame,
        chunks[1],
        &app.form.phone,
        app.form.active_field() == FIELD_PHONE,
    );
    draw_field(
        frame,
        chunks[2],
        &app.form.credit,
        app.form.active_field() == FIELD_CREDIT,
    );
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.form.is_buttons_row_active();
    let selected_button = app.form.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    let submit_label = if app.form.is_submitting {
        "Submitting…"
    } else {
        "Submit"
    };
    render_button(
        frame,
        button_chunks[0],
        submit_label,
        is_focused && selected_button == BUTTON_SUBMIT,
        !app.form.is_submitting,
        Some(Color::Green),
    );

    render_button(
        frame,
        button_chunks[1],
        "Clear",
        is_focused && selected_button == BUTTON_CLEAR,
        true,
        Some(Color::Gray),
    );
}
