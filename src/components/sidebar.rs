// ABOUTME: Step sidebar - numbered list of all steps with status icons
// Highlights the current step; when focused, a cursor selects a step to jump to

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::app::state::{AppState, Focus};
use crate::components::theme::{
    CORNFLOWER_BLUE, GOLD, LIST_HIGHLIGHT_BG, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER,
};

pub struct StepSidebarComponent;

impl StepSidebarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut AppState) {
        let focused = state.focus == Focus::Sidebar;
        let current = state.wizard.current_index();

        let items: Vec<ListItem> = state
            .wizard
            .catalog()
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let is_current = index == current;
                let title_style = if is_current {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2} ", index + 1), Style::default().fg(MUTED_GRAY)),
                    Span::styled(step.title.clone(), title_style),
                    Span::raw(" "),
                    Span::raw(state.wizard.status(index).icon()),
                ]))
            })
            .collect();

        let border_color = if focused { CORNFLOWER_BLUE } else { SUBDUED_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(PANEL_BG))
            .title(" Setup Steps ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(LIST_HIGHLIGHT_BG))
            .highlight_symbol(if focused { "▶" } else { " " });

        let selected = if focused { state.sidebar_cursor } else { current };
        state.sidebar_list.select(Some(selected));
        state.sidebar_area = area;

        frame.render_stateful_widget(list, area, &mut state.sidebar_list);
    }

    /// Map a terminal row inside the sidebar to a step index.
    /// The result may exceed the catalog length; callers pass it to `go_to`, which ignores it.
    pub fn row_to_index(area: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
        let inside_x = column > area.x && column < area.x + area.width.saturating_sub(1);
        let inside_y = row > area.y && row < area.y + area.height.saturating_sub(1);
        if !inside_x || !inside_y {
            return None;
        }
        Some(offset + usize::from(row - area.y - 1))
    }
}

impl Default for StepSidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}
