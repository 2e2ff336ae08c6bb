use super::{attachment, footer, log, modal, page, sidebar, workflow, Frame};
use crate::state::State;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    // Paint the themed background before anything else so the palette
    // applies to the whole document scope.
    let background =
        Block::default().style(Style::default().bg(state.get_theme().background.to_color()));
    frame.render_widget(background, size);

    let rows = if state.is_log_visible() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .split(size)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(size)
    };
    let body = rows[0];
    let footer_row = rows[rows.len() - 1];

    // Collapse the sidebar a little on narrow terminals.
    let sidebar_width = if state.get_terminal_size().width < 80 {
        24
    } else {
        34
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(body);

    sidebar(frame, columns[0], state);

    let main_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(8),
        ])
        .split(columns[1]);

    page::header(frame, main_rows[0], state);
    match state.selected_page().map(|p| p.is_diagram_page) {
        Some(true) => workflow::workflow(frame, main_rows[1], state),
        Some(false) => page::page(frame, main_rows[1], state),
        None => page::no_results(frame, main_rows[1], state),
    }
    attachment(frame, main_rows[2], state);

    if state.is_log_visible() {
        log(frame, rows[1], state);
    }

    footer(frame, footer_row, state);

    // The modal renders on top of everything.
    if state.is_modal_open() {
        modal::modal(frame, size, state);
    } else {
        state.set_modal_area(None);
    }
}
