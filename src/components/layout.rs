// ABOUTME: Top-level layout - sidebar on the left, step or summary screen on the right,
// key-hint footer at the bottom, and the informational dialog on top when open

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{
    theme::{DARK_BG, ERROR_RED, GOLD, MUTED_GRAY, SUBDUED_BORDER},
    ModalComponent, StepScreenComponent, StepSidebarComponent, SummaryComponent, SummaryReport,
};
use crate::app::state::{AppState, Focus};

pub struct LayoutComponent {
    sidebar: StepSidebarComponent,
    step_screen: StepScreenComponent,
    summary: SummaryComponent,
    modal: ModalComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            sidebar: StepSidebarComponent::new(),
            step_screen: StepScreenComponent::new(),
            summary: SummaryComponent::new(),
            modal: ModalComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(state.ui.sidebar_width),
                Constraint::Min(40),
            ])
            .split(rows[0]);

        self.sidebar.render(frame, columns[0], state);

        let main = Rect {
            x: columns[1].x + 1,
            width: columns[1].width.saturating_sub(2),
            ..columns[1]
        };
        let scroll_limit = if state.on_summary_step() {
            let report = SummaryReport::build(state.wizard.catalog(), state.wizard.state());
            self.summary.render(frame, main, &report, state.step_view.scroll())
        } else {
            self.step_screen.render(frame, main, state)
        };
        state.step_view.set_scroll_limit(scroll_limit);

        self.render_footer(frame, rows[1], state);

        if let Some(modal) = &state.modal {
            self.modal.render(frame, area, modal);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let line = if let Some(error) = state.wizard.last_persist_error() {
            Line::from(Span::styled(
                format!(" Progress not saved: {error}"),
                Style::default().fg(ERROR_RED),
            ))
        } else {
            let hints: &[(&str, &str)] = match state.focus {
                Focus::Content => &[("Tab", "Steps"), ("?", "Help"), ("q", "Quit")],
                Focus::Sidebar => &[("Enter", "Jump"), ("Tab", "Back to step"), ("q", "Quit")],
            };
            let mut spans = vec![Span::raw(" ")];
            for (idx, (key, label)) in hints.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
                }
                spans.push(Span::styled(*key, Style::default().fg(GOLD)));
                spans.push(Span::styled(format!(" {label}"), Style::default().fg(MUTED_GRAY)));
            }
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line).style(Style::default().bg(DARK_BG)), area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
