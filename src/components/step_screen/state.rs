// ABOUTME: Per-visit interaction state for the step screen and its forward-navigation gate
// Rebuilt from the persisted status every time the current step or its status changes

use crate::catalog::StepDefinition;
use crate::wizard::{StepStatus, WizardController};

/// What a confirmed "Next" will record before advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Complete,
    Skip,
    /// Gate closed; Next is not offered
    Blocked,
}

/// Checkbox state for the step currently on screen. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct StepViewState {
    /// (index, status) the view was last initialised from
    synced: Option<(usize, StepStatus)>,
    skip_allowed: bool,
    completed_checked: bool,
    skip_checked: bool,
    skip_risk_confirmed: bool,
    instructions_expanded: bool,
    scroll: u16,
    scroll_limit: Option<u16>,
}

impl StepViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialise for a step visit. Risk confirmation always starts unchecked,
    /// even when the step was skipped before.
    pub fn enter(
        &mut self,
        index: usize,
        step: &StepDefinition,
        status: StepStatus,
        expand_instructions: bool,
    ) {
        self.synced = Some((index, status));
        self.skip_allowed = step.skip_allowed;
        self.completed_checked = status == StepStatus::Completed;
        self.skip_checked = status == StepStatus::Skipped && step.skip_allowed;
        self.skip_risk_confirmed = false;
        self.instructions_expanded = expand_instructions;
    }

    /// Re-enter if the wizard moved or the current status changed.
    /// Returns true when the view was re-initialised.
    pub fn sync(&mut self, wizard: &WizardController, expand_instructions: bool) -> bool {
        let key = (wizard.current_index(), wizard.current_status());
        if self.synced == Some(key) {
            return false;
        }
        self.enter(key.0, wizard.current_step(), key.1, expand_instructions);
        true
    }

    pub fn synced_index(&self) -> Option<usize> {
        self.synced.map(|(index, _)| index)
    }

    pub const fn skip_allowed(&self) -> bool {
        self.skip_allowed
    }

    pub const fn completed_checked(&self) -> bool {
        self.completed_checked
    }

    pub const fn skip_checked(&self) -> bool {
        self.skip_checked
    }

    pub const fn skip_risk_confirmed(&self) -> bool {
        self.skip_risk_confirmed
    }

    pub const fn instructions_expanded(&self) -> bool {
        self.instructions_expanded
    }

    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Checking "completed" clears the skip box and its confirmation
    pub fn set_completed(&mut self, checked: bool) {
        self.completed_checked = checked;
        if checked {
            self.skip_checked = false;
            self.skip_risk_confirmed = false;
        }
    }

    /// Checking "skip" clears "completed"; unchecking it clears the confirmation.
    /// Ignored on steps that cannot be skipped.
    pub fn set_skip(&mut self, checked: bool) {
        if !self.skip_allowed {
            return;
        }
        self.skip_checked = checked;
        if checked {
            self.completed_checked = false;
        } else {
            self.skip_risk_confirmed = false;
        }
    }

    /// Only meaningful while the skip box is checked
    pub fn set_skip_confirmed(&mut self, confirmed: bool) {
        if self.skip_checked {
            self.skip_risk_confirmed = confirmed;
        }
    }

    /// The completed box is disabled while skip is checked
    pub const fn completed_enabled(&self) -> bool {
        !self.skip_checked
    }

    /// The skip box is disabled while completed is checked
    pub const fn skip_enabled(&self) -> bool {
        self.skip_allowed && !self.completed_checked
    }

    pub fn toggle_completed(&mut self) {
        if self.completed_enabled() {
            self.set_completed(!self.completed_checked);
        }
    }

    pub fn toggle_skip(&mut self) {
        if self.skip_enabled() {
            self.set_skip(!self.skip_checked);
        }
    }

    pub fn toggle_skip_confirmed(&mut self) {
        self.set_skip_confirmed(!self.skip_risk_confirmed);
    }

    pub fn toggle_instructions(&mut self) {
        self.instructions_expanded = !self.instructions_expanded;
    }

    pub fn can_proceed(&self) -> bool {
        self.completed_checked
            || (self.skip_allowed && self.skip_checked && self.skip_risk_confirmed)
    }

    pub fn decision(&self) -> GateDecision {
        if self.completed_checked {
            GateDecision::Complete
        } else if self.skip_allowed && self.skip_checked && self.skip_risk_confirmed {
            GateDecision::Skip
        } else {
            GateDecision::Blocked
        }
    }

    /// Record the decision and advance. The advance happens whatever the
    /// decision was; callers check `can_proceed` before offering Next.
    pub fn confirm_next(&self, wizard: &mut WizardController) {
        match self.decision() {
            GateDecision::Complete => wizard.mark_current_completed(),
            GateDecision::Skip => wizard.mark_current_skipped(),
            GateDecision::Blocked => {}
        }
        wizard.advance();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Stops once the last content line reaches the top of the pane
    pub fn scroll_down(&mut self, lines: u16) {
        let target = self.scroll.saturating_add(lines);
        self.scroll = self.scroll_limit.map_or(target, |limit| target.min(limit));
    }

    /// Largest useful offset for the content last rendered; unknown until the first draw
    pub const fn scroll_limit(&self) -> Option<u16> {
        self.scroll_limit
    }

    /// Called after each draw with the limit for what is now on screen
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = Some(limit);
        self.scroll = self.scroll.min(limit);
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }
}
