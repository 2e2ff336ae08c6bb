use super::Frame;
use crate::state::State;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the footer bar: current input mode, key hints, and the active
/// query or version on the right.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let (mode, hints, bg) = if state.is_modal_open() {
        (
            "MODAL:",
            " Esc: close  click outside: close",
            theme.footer_modal.to_color(),
        )
    } else if state.is_search_mode() {
        (
            "SEARCH:",
            " type to filter  Enter/Esc: done  Backspace: erase",
            theme.footer_search.to_color(),
        )
    } else if state.is_upload_input_active() {
        (
            "UPLOAD:",
            " type a file path  Enter: upload  Esc: cancel",
            theme.footer_upload.to_color(),
        )
    } else {
        (
            "NORMAL:",
            " h/l: pages  1-6: jump  /: search  c: clear  u: upload  o: preview  t: theme  r: logs  q: quit",
            theme.footer_normal.to_color(),
        )
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(24)])
        .split(size);

    let style = Style::default().fg(theme.text.to_color()).bg(bg);
    let left = Paragraph::new(Line::from(vec![
        Span::styled(mode, style.add_modifier(ratatui::style::Modifier::BOLD)),
        Span::styled(hints, style),
    ]))
    .style(style);
    frame.render_widget(left, columns[0]);

    let right_text = if state.get_search_query().is_empty() {
        format!("v{} ", env!("CARGO_PKG_VERSION"))
    } else {
        format!("/{} ", state.get_search_query())
    };
    let right = Paragraph::new(Line::from(Span::styled(right_text, style)))
        .style(style)
        .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(right, columns[1]);
}
