use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use ratatui_image::StatefulImage;

/// Render the image preview modal centered over the rest of the screen.
///
pub fn modal(frame: &mut Frame, size: Rect, state: &mut State) {
    let area = centered_rect(70, 80, size);
    state.set_modal_area(Some(area));

    frame.render_widget(Clear, area);

    let theme = state.get_theme();
    let title = state.get_attachment().displayed_name();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(styling::active_block_border_style(theme))
        .style(Style::default().bg(theme.surface.to_color()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    // A decoded custom image renders through the terminal graphics protocol.
    // The default attachment has no pixel data, so it gets a text stand-in.
    let hint_style = styling::muted_text_style(theme);
    let placeholder = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No preview available for this image.".to_string(),
            styling::secondary_text_style(theme),
        )),
        Line::from(Span::styled(
            state.get_attachment().displayed_name(),
            styling::muted_text_style(theme),
        )),
    ])
    .alignment(Alignment::Center);
    match state.attachment_protocol_mut() {
        Some(protocol) => {
            let image = StatefulImage::new(None);
            frame.render_stateful_widget(image, rows[0], protocol);
        }
        None => frame.render_widget(placeholder, rows[0]),
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        "Esc or click outside to close",
        hint_style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, rows[1]);
}

/// A rectangle taking the given percentages of the outer area, centered.
///
fn centered_rect(percent_x: u16, percent_y: u16, size: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(size);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
