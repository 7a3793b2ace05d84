// ABOUTME: Step screen component - renders one step's content, its checkboxes, and the nav footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::state::StepViewState;
use crate::app::AppState;
use crate::catalog::StepDefinition;
use crate::components::scroll::scroll_limit;
use crate::components::theme::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER, WARNING_YELLOW,
};

pub struct StepScreenComponent;

impl StepScreenComponent {
    pub fn new() -> Self {
        Self
    }

    /// Returns the scroll limit of the step body
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) -> u16 {
        let wizard = &state.wizard;
        let step = wizard.current_step();
        let view = &state.step_view;

        let controls = Self::control_lines(step, view);
        let controls_height = u16::try_from(controls.len()).unwrap_or(u16::MAX).saturating_add(2);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),               // Progress indicator
                Constraint::Min(6),                  // Step body
                Constraint::Length(controls_height), // Checkboxes
                Constraint::Length(2),               // Back / Next
            ])
            .split(area);

        let progress = Paragraph::new(Line::from(Span::styled(
            progress_text(wizard.current_index() + 1, wizard.step_count(), &step.title),
            Style::default().fg(MUTED_GRAY),
        )))
        .style(Style::default().bg(DARK_BG));
        frame.render_widget(progress, layout[0]);

        let body_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.title))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let body_lines = Self::body_lines(step, view, state.ui.show_estimated_time);
        let limit = scroll_limit(&body_lines, body_block.inner(layout[1]));
        let body = Paragraph::new(body_lines)
            .block(body_block)
            .wrap(Wrap { trim: false })
            .scroll((view.scroll().min(limit), 0));
        frame.render_widget(body, layout[1]);

        let controls_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let controls_widget = Paragraph::new(controls)
            .block(controls_block)
            .wrap(Wrap { trim: true });
        frame.render_widget(controls_widget, layout[2]);

        let buttons = Paragraph::new(Self::button_line(wizard.is_first_step(), view.can_proceed()))
            .alignment(Alignment::Center)
            .style(Style::default().bg(DARK_BG));
        frame.render_widget(buttons, layout[3]);

        limit
    }

    /// Header, warning, and instructions for one step
    pub fn body_lines<'a>(
        step: &'a StepDefinition,
        view: &StepViewState,
        show_estimated_time: bool,
    ) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(
                step.short_description.as_str(),
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(""),
            Line::from(Span::styled(
                step.why_it_matters.as_str(),
                Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
            )),
        ];

        if show_estimated_time {
            if let Some(time) = &step.estimated_time {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("Estimated time: ", Style::default().fg(MUTED_GRAY)),
                    Span::styled(time.as_str(), Style::default().fg(SOFT_WHITE)),
                ]));
            }
        }

        if let Some(warning) = &step.warning_text {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(" ⚠ ", Style::default().fg(DARK_BG).bg(WARNING_YELLOW)),
                Span::styled(
                    format!(" {warning} "),
                    Style::default()
                        .fg(DARK_BG)
                        .bg(WARNING_YELLOW)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        lines.push(Line::from(""));
        let arrow = if view.instructions_expanded() { "▼" } else { "▶" };
        lines.push(Line::from(vec![
            Span::styled(format!("{arrow} "), Style::default().fg(GOLD)),
            Span::styled(
                "Detailed Instructions",
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [i]", Style::default().fg(MUTED_GRAY)),
        ]));

        if view.instructions_expanded() {
            lines.push(Line::from(""));
            for text in step.detailed_instructions.lines() {
                let style = if is_section_heading(text) {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
        }

        lines
    }

    /// Checkbox rows reflecting the gate state
    pub fn control_lines(step: &StepDefinition, view: &StepViewState) -> Vec<Line<'static>> {
        let mut lines = vec![checkbox_line(
            view.completed_checked(),
            view.completed_enabled(),
            "c",
            "I have completed this step",
        )];

        if view.skip_allowed() {
            lines.push(checkbox_line(
                view.skip_checked(),
                view.skip_enabled(),
                "s",
                "I want to skip this step",
            ));

            if view.skip_checked() {
                lines.push(checkbox_line(
                    view.skip_risk_confirmed(),
                    true,
                    "r",
                    "  I understand the risks of skipping this step",
                ));
                if let Some(skip_when) = &step.skip_when {
                    lines.push(Line::from(Span::styled(
                        format!("      Skip when: {skip_when}"),
                        Style::default().fg(MUTED_GRAY),
                    )));
                }
            }
        } else {
            lines.push(Line::from(Span::styled(
                "This step is required and cannot be skipped.",
                Style::default().fg(WARNING_YELLOW),
            )));
        }

        lines
    }

    fn button_line(is_first: bool, can_proceed: bool) -> Line<'static> {
        let mut spans = vec![];

        if !is_first {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled("b/←", Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(" Back", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        }

        let (key_style, label_style) = if can_proceed {
            (Style::default().fg(GOLD), Style::default().fg(SOFT_WHITE))
        } else {
            (Style::default().fg(MUTED_GRAY), Style::default().fg(MUTED_GRAY))
        };
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Enter", key_style));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Next", label_style));

        Line::from(spans)
    }
}

impl Default for StepScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// "Step 3 of 18 – Dell Updates & Firmware"
pub fn progress_text(number: usize, total: usize, title: &str) -> String {
    format!("Step {number} of {total} – {title}")
}

fn checkbox_line(checked: bool, enabled: bool, key: &str, label: &str) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let (mark_style, label_style) = if !enabled {
        (Style::default().fg(SUBDUED_BORDER), Style::default().fg(SUBDUED_BORDER))
    } else if checked {
        (Style::default().fg(SELECTION_GREEN), Style::default().fg(SOFT_WHITE))
    } else {
        (Style::default().fg(MUTED_GRAY), Style::default().fg(SOFT_WHITE))
    };

    Line::from(vec![
        Span::styled(format!("{mark} "), mark_style),
        Span::styled(label.to_string(), label_style),
        Span::styled(format!("  ({key})"), Style::default().fg(MUTED_GRAY)),
    ])
}

/// Instruction sections are written as "ALL CAPS HEADING:"
fn is_section_heading(text: &str) -> bool {
    text.ends_with(':')
        && text.chars().any(char::is_alphabetic)
        && !text.chars().any(char::is_lowercase)
}
