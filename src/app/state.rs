// ABOUTME: Application state for the TUI - owns the wizard controller and all view state
// Views read from here; only the event handler mutates it

use ratatui::{layout::Rect, widgets::ListState};
use tracing::debug;

use crate::components::{ModalState, StepViewState};
use crate::config::UiPreferences;
use crate::wizard::WizardController;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Content,
    Sidebar,
}

#[derive(Debug)]
pub struct AppState {
    pub wizard: WizardController,
    pub step_view: StepViewState,
    pub ui: UiPreferences,
    pub focus: Focus,
    /// Highlighted row while the sidebar has focus
    pub sidebar_cursor: usize,
    /// Scroll offset of the sidebar list, updated during render
    pub sidebar_list: ListState,
    /// Where the sidebar was last drawn, for mouse hit-testing
    pub sidebar_area: Rect,
    /// Open informational dialog
    pub modal: Option<ModalState>,
    /// Set when the current step changed; consumed right after the next draw
    pub scroll_reset_pending: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(wizard: WizardController, ui: UiPreferences) -> Self {
        let mut state = Self {
            sidebar_cursor: wizard.current_index(),
            wizard,
            step_view: StepViewState::new(),
            ui,
            focus: Focus::Content,
            sidebar_list: ListState::default(),
            sidebar_area: Rect::default(),
            modal: None,
            scroll_reset_pending: false,
            should_quit: false,
        };
        state.sync_step_view();
        state
    }

    /// Bring the step view in line with the controller after any transition
    pub fn sync_step_view(&mut self) {
        let previous = self.step_view.synced_index();
        if self
            .step_view
            .sync(&self.wizard, self.ui.expand_instructions_by_default)
        {
            let current = self.wizard.current_index();
            if previous != Some(current) {
                debug!("Entered step {}", current + 1);
                self.sidebar_cursor = current;
                self.scroll_reset_pending = true;
            }
        }
    }

    /// Post-render hook: returns true once after each step change
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset_pending)
    }

    pub fn on_summary_step(&self) -> bool {
        self.wizard.catalog().is_summary(self.wizard.current_index())
    }

    pub fn open_help(&mut self) {
        self.modal = Some(ModalState::help());
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn sidebar_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_cursor + 1 < self.wizard.step_count() {
            self.sidebar_cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, StepDefinition};
    use crate::storage::WizardStorage;

    fn state(len: usize) -> AppState {
        let steps = (0..len)
            .map(|i| StepDefinition::new(format!("s{i}"), format!("Step {i}")))
            .collect();
        let wizard = WizardController::new(Catalog::new(steps).unwrap(), WizardStorage::in_memory());
        AppState::new(wizard, UiPreferences::default())
    }

    #[test]
    fn test_new_syncs_view() {
        let mut state = state(3);
        assert_eq!(state.step_view.synced_index(), Some(0));
        assert!(state.take_scroll_reset());
        assert!(!state.take_scroll_reset());
    }

    #[test]
    fn test_navigation_requests_scroll_reset() {
        let mut state = state(3);
        state.take_scroll_reset();

        state.wizard.advance();
        state.sync_step_view();
        assert_eq!(state.sidebar_cursor, 1);
        assert!(state.take_scroll_reset());

        // Status change on the same step re-syncs without scrolling
        state.wizard.mark_current_completed();
        state.sync_step_view();
        assert!(state.step_view.completed_checked());
        assert!(!state.take_scroll_reset());
    }

    #[test]
    fn test_sidebar_cursor_bounds() {
        let mut state = state(2);
        state.sidebar_up();
        assert_eq!(state.sidebar_cursor, 0);
        state.sidebar_down();
        state.sidebar_down();
        assert_eq!(state.sidebar_cursor, 1);
    }
}
