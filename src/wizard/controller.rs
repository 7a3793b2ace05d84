// ABOUTME: Wizard state controller - sole owner and mutator of the wizard state
// Every accepted transition is written through to storage before returning

use super::state::{WizardState, DEFAULT_SKIP_REASON};
use super::status::StepStatus;
use crate::catalog::{Catalog, StepDefinition};
use crate::storage::WizardStorage;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct WizardController {
    catalog: Catalog,
    state: WizardState,
    storage: WizardStorage,
    /// Message from the most recent failed write, cleared by the next successful one
    last_persist_error: Option<String>,
}

impl WizardController {
    /// Create a controller, hydrating from whatever the storage holds
    pub fn new(catalog: Catalog, storage: WizardStorage) -> Self {
        let raw = storage.load();
        let state = WizardState::hydrate(raw.as_deref(), catalog.len());
        info!(
            "Wizard ready at step {}/{} ({} completed, {} skipped)",
            state.current_step_index + 1,
            catalog.len(),
            state.count(StepStatus::Completed),
            state.count(StepStatus::Skipped)
        );

        Self {
            catalog,
            state,
            storage,
            last_persist_error: None,
        }
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step_count(&self) -> usize {
        self.catalog.len()
    }

    pub const fn current_index(&self) -> usize {
        self.state.current_step_index
    }

    pub fn current_step(&self) -> &StepDefinition {
        // Index is kept in bounds by every mutator and by hydration
        &self.catalog.steps()[self.state.current_step_index]
    }

    pub fn current_status(&self) -> StepStatus {
        self.status(self.state.current_step_index)
    }

    pub fn status(&self, index: usize) -> StepStatus {
        self.state.step_statuses.get(index).copied().unwrap_or_default()
    }

    pub fn skip_reason(&self, index: usize) -> Option<&str> {
        self.state.skip_reasons.get(&index).map(String::as_str)
    }

    pub fn is_first_step(&self) -> bool {
        self.state.current_step_index == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step_index + 1 >= self.catalog.len()
    }

    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Jump to a step. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.catalog.len() {
            debug!("Ignoring go_to({}) with {} steps", index, self.catalog.len());
            return;
        }
        self.set_index(index);
    }

    /// Record the current step as completed. An earlier skip reason is left in place.
    pub fn mark_current_completed(&mut self) {
        let index = self.state.current_step_index;
        self.state.step_statuses[index] = StepStatus::Completed;
        debug!("Step {} ({}) completed", index, self.current_step().id);
        self.persist();
    }

    /// Record the current step as skipped, with the step's `skip_when` as the reason
    pub fn mark_current_skipped(&mut self) {
        let index = self.state.current_step_index;
        let reason = self
            .current_step()
            .skip_when
            .clone()
            .unwrap_or_else(|| DEFAULT_SKIP_REASON.to_string());

        self.state.step_statuses[index] = StepStatus::Skipped;
        debug!("Step {} ({}) skipped: {}", index, self.current_step().id, reason);
        self.state.skip_reasons.insert(index, reason);
        self.persist();
    }

    /// Move forward one step; no-op on the last step
    pub fn advance(&mut self) {
        if self.state.current_step_index + 1 < self.catalog.len() {
            self.set_index(self.state.current_step_index + 1);
        }
    }

    /// Move back one step; no-op on the first step
    pub fn retreat(&mut self) {
        if self.state.current_step_index > 0 {
            self.set_index(self.state.current_step_index - 1);
        }
    }

    fn set_index(&mut self, index: usize) {
        if index == self.state.current_step_index {
            return;
        }
        debug!("Current step {} -> {}", self.state.current_step_index, index);
        self.state.current_step_index = index;
        self.persist();
    }

    fn persist(&mut self) {
        match self.storage.save(&self.state) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!("Failed to persist wizard state: {}", e);
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}
