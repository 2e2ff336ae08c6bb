use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the header card: title, subtitle, and cursor position.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (title, subtitle) = match state.selected_page() {
        Some(page) => (page.title, page.subtitle),
        None => ("No matching topics", "Adjust the search to continue"),
    };

    let arrows = format!(
        "{} {}",
        if state.can_go_previous() { "◀" } else { " " },
        if state.can_go_next() { "▶" } else { " " }
    );
    let position = match state.current_page_index() {
        Some(index) => format!(
            "{}  Page {} of {} · {} mode",
            arrows,
            index + 1,
            state.filtered_pages().len(),
            if state.is_dark_mode() { "dark" } else { "light" }
        ),
        None => format!(
            "0 results · {} mode",
            if state.is_dark_mode() { "dark" } else { "light" }
        ),
    };

    let text = vec![
        Line::from(vec![
            Span::styled(title, styling::emphasized_heading_style(theme)),
            Span::styled(
                format!("  {}", position),
                styling::muted_text_style(theme),
            ),
        ]),
        Line::from(Span::styled(subtitle, styling::secondary_text_style(theme))),
    ];

    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme)),
    );
    frame.render_widget(widget, size);
}

/// Render the content sections of the selected page.
///
pub fn page(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let current = match state.selected_page() {
        Some(page) => page,
        None => return,
    };

    let mut lines: Vec<Line> = vec![];
    for section in current.sections {
        let heading_style = if section.emphasized {
            styling::emphasized_heading_style(theme)
        } else {
            styling::heading_style(theme)
        };
        let marker = if section.emphasized { "▌ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, styling::emphasized_heading_style(theme)),
            Span::styled(section.heading, heading_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", section.body),
            styling::normal_text_style(theme),
        )));
        lines.push(Line::from(""));
    }

    // The user guide page appends its quickstart walkthrough cards.
    if !current.quickstart.is_empty() {
        lines.push(Line::from(Span::styled(
            "Quickstart Visual Guide",
            styling::heading_style(theme),
        )));
        lines.push(Line::from(Span::styled(
            "  Follow these annotated steps for a rapid walkthrough.",
            styling::secondary_text_style(theme),
        )));
        lines.push(Line::from(""));
        for (index, step) in current.quickstart.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}. ", index + 1),
                    styling::emphasized_heading_style(theme),
                ),
                Span::styled(step.title, styling::heading_style(theme)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", step.description),
                styling::normal_text_style(theme),
            )));
            lines.push(Line::from(Span::styled(
                format!("     {} · {}", step.image, step.note),
                styling::accent_text_style(theme),
            )));
            lines.push(Line::from(""));
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(current.id)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(widget, size);
}

/// Render the distinct no-results display state.
///
pub fn no_results(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No topics match the current search.",
            styling::secondary_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press c to clear the search and restore all pages.",
            styling::muted_text_style(theme),
        )),
    ];
    let widget = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(widget, size);
}
