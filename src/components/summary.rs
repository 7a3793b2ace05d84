// ABOUTME: Completion summary - a pure report over wizard state plus its TUI rendering
// The same report backs the `summary` CLI command

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::components::scroll::scroll_limit;
use crate::components::step_screen::progress_text;
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    WARNING_YELLOW,
};
use crate::wizard::{StepStatus, WizardState};

/// One row of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub number: usize,
    pub id: String,
    pub title: String,
    pub status: StepStatus,
    /// Present only for skipped steps that have a recorded reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
    /// The step's configured skip condition, only for skipped steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_when: Option<String>,
}

impl SummaryEntry {
    /// "Skipped - Not a Dell machine (Not a Dell machine)"
    pub fn detail(&self) -> String {
        let mut detail = self.status.label().to_string();
        if let Some(reason) = &self.skip_reason {
            detail.push_str(" - ");
            detail.push_str(reason);
        }
        if let Some(skip_when) = &self.skip_when {
            detail.push_str(" (");
            detail.push_str(skip_when);
            detail.push(')');
        }
        detail
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub total: usize,
    pub completed: usize,
    pub skipped: usize,
    pub entries: Vec<SummaryEntry>,
}

impl SummaryReport {
    pub fn build(catalog: &Catalog, state: &WizardState) -> Self {
        let entries = catalog
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let status = state.step_statuses.get(index).copied().unwrap_or_default();
                let (skip_reason, skip_when) = match status {
                    StepStatus::Skipped => (
                        state.skip_reasons.get(&index).cloned(),
                        step.skip_when.clone(),
                    ),
                    StepStatus::Completed | StepStatus::NotStarted => (None, None),
                };
                SummaryEntry {
                    number: index + 1,
                    id: step.id.clone(),
                    title: step.title.clone(),
                    status,
                    skip_reason,
                    skip_when,
                }
            })
            .collect();

        Self {
            total: catalog.len(),
            completed: state.count(StepStatus::Completed),
            skipped: state.count(StepStatus::Skipped),
            entries,
        }
    }

    pub fn headline(&self) -> String {
        let mut text = format!(
            "You have completed {} out of {} steps.",
            self.completed, self.total
        );
        if self.skipped > 0 {
            text.push_str(&format!(" {} steps were skipped.", self.skipped));
        }
        text
    }

    /// Plain-text rendering used by the CLI
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Setup Summary\n");
        out.push_str(&self.headline());
        out.push_str("\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "{} {}. {}\n     {}\n",
                entry.status.icon(),
                entry.number,
                entry.title,
                entry.detail()
            ));
        }
        out
    }
}

pub struct SummaryComponent;

impl SummaryComponent {
    pub fn new() -> Self {
        Self
    }

    /// Draws the entries from `scroll` rows down and returns the largest useful offset
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &SummaryReport,
        scroll: u16,
    ) -> u16 {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Progress indicator
                Constraint::Min(6),    // Summary list
                Constraint::Length(4), // Completion message
            ])
            .split(area);

        let progress = Paragraph::new(Span::styled(
            progress_text(report.total, report.total, "Completion Summary"),
            Style::default().fg(MUTED_GRAY),
        ))
        .style(Style::default().bg(DARK_BG));
        frame.render_widget(progress, layout[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Setup Summary ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(layout[1]);
        frame.render_widget(block, layout[1]);

        let list_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        let headline = Paragraph::new(Span::styled(report.headline(), Style::default().fg(MUTED_GRAY)))
            .wrap(Wrap { trim: true });
        frame.render_widget(headline, list_layout[0]);

        let lines: Vec<Line> = report
            .entries
            .iter()
            .flat_map(|entry| {
                let detail_color = match entry.status {
                    StepStatus::Completed => SELECTION_GREEN,
                    StepStatus::Skipped => WARNING_YELLOW,
                    StepStatus::NotStarted => MUTED_GRAY,
                };
                [
                    Line::from(vec![
                        Span::raw(format!("{} ", entry.status.icon())),
                        Span::styled(
                            format!("{}. {}", entry.number, entry.title),
                            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", entry.detail()),
                        Style::default().fg(detail_color),
                    )),
                ]
            })
            .collect();
        let limit = scroll_limit(&lines, list_layout[1]);
        let entries = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll.min(limit), 0));
        frame.render_widget(entries, list_layout[1]);

        let completion = Paragraph::new(vec![
            Line::from(Span::styled(
                "Setup Complete!",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "You have finished the setup wizard. Review the summary above to ensure all critical steps were completed.",
                Style::default().fg(SOFT_WHITE),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(DARK_BG));
        frame.render_widget(completion, layout[2]);

        limit
    }
}

impl Default for SummaryComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StepDefinition;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            StepDefinition::new("a", "Alpha"),
            StepDefinition::new("b", "Bravo").skippable(Some("Not a Dell machine")),
            StepDefinition::new("c", "Charlie").skippable(None),
        ])
        .unwrap()
    }

    #[test]
    fn test_counts_and_headline() {
        let mut state = WizardState::fresh(3);
        state.step_statuses = vec![StepStatus::Completed, StepStatus::Skipped, StepStatus::NotStarted];
        state.skip_reasons.insert(1, "Not a Dell machine".to_string());

        let report = SummaryReport::build(&catalog(), &state);
        assert_eq!(report.completed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            report.headline(),
            "You have completed 1 out of 3 steps. 1 steps were skipped."
        );
    }

    #[test]
    fn test_headline_without_skips() {
        let report = SummaryReport::build(&catalog(), &WizardState::fresh(3));
        assert_eq!(report.headline(), "You have completed 0 out of 3 steps.");
    }

    #[test]
    fn test_skip_details_only_for_skipped_steps() {
        let mut state = WizardState::fresh(3);
        // Step 1 was skipped earlier and later completed: its reason is stale
        state.step_statuses = vec![StepStatus::NotStarted, StepStatus::Completed, StepStatus::Skipped];
        state.skip_reasons.insert(1, "Not a Dell machine".to_string());
        state.skip_reasons.insert(2, "User chose to skip".to_string());

        let report = SummaryReport::build(&catalog(), &state);
        assert_eq!(report.entries[0].detail(), "Not Started");
        assert_eq!(report.entries[1].detail(), "Completed");
        assert_eq!(report.entries[2].detail(), "Skipped - User chose to skip");
    }

    #[test]
    fn test_skip_detail_with_reason_and_condition() {
        let mut state = WizardState::fresh(3);
        state.step_statuses[1] = StepStatus::Skipped;
        state.skip_reasons.insert(1, "Not a Dell machine".to_string());

        let report = SummaryReport::build(&catalog(), &state);
        assert_eq!(
            report.entries[1].detail(),
            "Skipped - Not a Dell machine (Not a Dell machine)"
        );
    }

    #[test]
    fn test_text_rendering() {
        let mut state = WizardState::fresh(3);
        state.step_statuses[0] = StepStatus::Completed;
        let text = SummaryReport::build(&catalog(), &state).to_text();
        assert!(text.starts_with("Setup Summary\nYou have completed 1 out of 3 steps.\n"));
        assert!(text.contains("🟢 1. Alpha\n     Completed\n"));
        assert!(text.contains("⭕ 3. Charlie\n     Not Started\n"));
    }

    #[test]
    fn test_json_shape() {
        let mut state = WizardState::fresh(3);
        state.step_statuses[2] = StepStatus::Skipped;
        state.skip_reasons.insert(2, "User chose to skip".to_string());

        let json = serde_json::to_value(SummaryReport::build(&catalog(), &state)).unwrap();
        assert_eq!(json["skipped"], 1);
        assert_eq!(json["entries"][2]["status"], "skipped");
        assert_eq!(json["entries"][2]["skip_reason"], "User chose to skip");
        assert!(json["entries"][0].get("skip_reason").is_none());
    }
}
