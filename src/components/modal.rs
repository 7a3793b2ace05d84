// ABOUTME: Informational dialog rendered over the wizard; dismissed with Esc

use ratatui::{
    prelude::*,
    widgets::{
        block::{Position, Title},
        Block, BorderType, Borders, Clear, Paragraph, Wrap,
    },
};

use crate::components::theme::{CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE};

/// Content of an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub title: String,
    pub lines: Vec<String>,
}

impl ModalState {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    /// Keyboard reference
    pub fn help() -> Self {
        let lines = [
            "Step screen:",
            "  c / Space    Toggle \"I have completed this step\"",
            "  s            Toggle \"I want to skip this step\"",
            "  r            Confirm the risks of skipping",
            "  i            Expand / collapse detailed instructions",
            "  Enter / n    Next (when the step is completed or skip is confirmed)",
            "  b / ←        Back",
            "  ↑ ↓ PgUp PgDn  Scroll",
            "",
            "Sidebar:",
            "  Tab          Focus the step list",
            "  ↑ ↓ / j k    Move the cursor",
            "  Enter        Jump to the selected step",
            "  Click        Jump to a step",
            "",
            "  ?            Toggle this help",
            "  q / Ctrl+C   Quit (progress is saved)",
        ];
        Self::new("Keyboard Help", lines.iter().map(|s| (*s).to_string()).collect())
    }
}

pub struct ModalComponent;

impl ModalComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, modal: &ModalState) {
        let popup_area = centered_rect(70, 70, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", modal.title))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            .title(
                Title::from(Span::styled(" Esc to close ", Style::default().fg(MUTED_GRAY)))
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let body: Vec<Line> = modal
            .lines
            .iter()
            .map(|line| Line::from(Span::styled(line.as_str(), Style::default().fg(SOFT_WHITE))))
            .collect();

        let paragraph = Paragraph::new(body).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }
}

impl Default for ModalComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
