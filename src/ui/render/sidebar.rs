use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the sidebar: search box, result count, and the filtered page list.
///
pub fn sidebar(frame: &mut Frame, size: Rect, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(size);

    search_box(frame, rows[0], state);

    if state.filtered_pages().is_empty() {
        no_results_hint(frame, rows[1], state);
    } else {
        page_list(frame, rows[1], state);
    }
}

fn search_box(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let border_style = if state.is_search_mode() {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };

    // Show the match count next to the title once a query is active.
    let title = if state.get_search_query().is_empty() {
        "Search".to_string()
    } else {
        let count = state.filtered_pages().len();
        format!(
            "Search ({} {})",
            count,
            if count == 1 { "result" } else { "results" }
        )
    };

    let query_text = if state.is_search_mode() {
        format!("/{}▏", state.get_search_query())
    } else if state.get_search_query().is_empty() {
        "Press / to search...".to_string()
    } else {
        format!("/{}", state.get_search_query())
    };
    let query_style = if state.get_search_query().is_empty() && !state.is_search_mode() {
        styling::muted_text_style(theme)
    } else {
        styling::normal_text_style(theme)
    };

    let search = Paragraph::new(Line::from(Span::styled(query_text, query_style))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(search, size);
}

fn page_list(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let items: Vec<ListItem> = state
        .filtered_pages()
        .iter()
        .map(|page| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", page.icon),
                    styling::emphasized_heading_style(theme),
                ),
                Span::styled(page.title, styling::normal_text_style(theme)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Topics")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::current_list_item_style(theme));

    let mut list_state = ListState::default();
    list_state.select(state.current_page_index());
    frame.render_stateful_widget(list, size, &mut list_state);
}

fn no_results_hint(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No results found",
            styling::secondary_text_style(theme),
        )),
        Line::from(Span::styled(
            "Try a different search term",
            styling::muted_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "c: clear search",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Topics")
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(paragraph, size);
}
