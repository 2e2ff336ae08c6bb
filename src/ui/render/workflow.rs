use super::Frame;
use crate::content::DIAGRAM_DEFINITION;
use crate::state::{DiagramStatus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Process flow stage summaries shown above the diagram.
///
const STAGES: [(&str, &str); 6] = [
    ("1. User Input", "Form validation and email submission"),
    ("2. Email Dispatch", "Outlook integration and confirmation"),
    ("3. Script Trigger", "Scheduled Python automation"),
    ("4. Data Processing", "Parse and validate vendor data"),
    ("5. Esker Update", "System synchronization"),
    ("6. Completion", "Success logging and archival"),
];

/// Render the workflow page: stage summaries plus the diagram area.
///
pub fn workflow(frame: &mut Frame, size: Rect, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(size);

    stages(frame, rows[0], state);
    diagram(frame, rows[1], state);
}

fn stages(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let lines: Vec<Line> = STAGES
        .iter()
        .map(|(stage, summary)| {
            Line::from(vec![
                Span::styled(format!(" {}", stage), styling::heading_style(theme)),
                Span::styled(
                    format!(": {}", summary),
                    styling::secondary_text_style(theme),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Process Flow Stages")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(widget, size);
}

fn diagram(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (title, lines): (&str, Vec<Line>) = match state.diagram_status() {
        DiagramStatus::Rendered(output) => (
            "Detailed Workflow Diagram",
            output
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), styling::normal_text_style(theme))))
                .collect(),
        ),
        DiagramStatus::Pending => (
            "Detailed Workflow Diagram",
            vec![Line::from(Span::styled(
                "Rendering workflow diagram...",
                styling::muted_text_style(theme),
            ))],
        ),
        DiagramStatus::NotRequested => (
            "Detailed Workflow Diagram",
            vec![Line::from(Span::styled(
                "The diagram will render shortly.",
                styling::muted_text_style(theme),
            ))],
        ),
        DiagramStatus::Unavailable => {
            // No external renderer: show the raw definition instead.
            let mut lines = vec![
                Line::from(Span::styled(
                    "Diagram renderer unavailable; showing mermaid definition.",
                    styling::muted_text_style(theme),
                )),
                Line::from(""),
            ];
            lines.extend(DIAGRAM_DEFINITION.lines().map(|l| {
                Line::from(Span::styled(
                    l.to_string(),
                    styling::secondary_text_style(theme),
                ))
            }));
            ("Workflow Definition", lines)
        }
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(widget, size);
}
