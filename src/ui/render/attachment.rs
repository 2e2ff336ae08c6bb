use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the visual reference panel: attachment status, upload input,
/// rejection messages, and key hints.
///
pub fn attachment(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let current = state.get_attachment();

    let mut lines = vec![Line::from(vec![
        Span::styled("Current image: ", styling::secondary_text_style(theme)),
        Span::styled(current.displayed_name(), styling::normal_text_style(theme)),
    ])];

    if let Some(uploaded_at) = &current.uploaded_at {
        lines.push(Line::from(Span::styled(
            format!("Uploaded {}", uploaded_at.format("%Y-%m-%d %H:%M")),
            styling::success_text_style(theme),
        )));
    }

    if state.is_upload_input_active() {
        lines.push(Line::from(vec![
            Span::styled("Path: ", styling::secondary_text_style(theme)),
            Span::styled(
                format!("{}▏", state.get_upload_input().unwrap_or_default()),
                styling::normal_text_style(theme),
            ),
        ]));
    } else if let Some(error) = state.get_upload_error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            styling::error_text_style(theme),
        )));
    }

    lines.push(Line::from(""));
    let hints = if state.is_upload_input_active() {
        "Enter: upload  Esc: cancel"
    } else if current.is_custom() {
        "u: upload image  o: open preview  d: restore default"
    } else {
        "u: upload image  o: open preview"
    };
    lines.push(Line::from(Span::styled(
        hints,
        styling::muted_text_style(theme),
    )));

    let border_style = if state.is_upload_input_active() {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Visual Reference")
            .border_style(border_style),
    );
    frame.render_widget(widget, size);
}
