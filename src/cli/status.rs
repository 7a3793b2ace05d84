// ABOUTME: CLI status and goto commands for saved progress
//
// status: Show the current step and per-status counts (text/JSON output)
// goto: Move the current step, validating the 1-based step number

use anyhow::{bail, Result};
use serde::Serialize;

use super::{util::WizardSource, GotoArgs, OutputFormat};
use crate::components::step_screen::progress_text;
use crate::wizard::{StepStatus, WizardController};

/// JSON output structure for status command
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusOutput {
    pub current_step: usize,
    pub total_steps: usize,
    pub step_id: String,
    pub step_title: String,
    pub current_status: StepStatus,
    pub completed: usize,
    pub skipped: usize,
    pub not_started: usize,
}

impl StatusOutput {
    pub fn from_wizard(wizard: &WizardController) -> Self {
        let state = wizard.state();
        let step = wizard.current_step();
        Self {
            current_step: wizard.current_index() + 1,
            total_steps: wizard.step_count(),
            step_id: step.id.clone(),
            step_title: step.title.clone(),
            current_status: wizard.current_status(),
            completed: state.count(StepStatus::Completed),
            skipped: state.count(StepStatus::Skipped),
            not_started: state.count(StepStatus::NotStarted),
        }
    }

    fn to_text(&self) -> String {
        format!(
            "{}\nStatus: {}\nCompleted: {}  Skipped: {}  Not started: {}\n",
            progress_text(self.current_step, self.total_steps, &self.step_title),
            self.current_status.label(),
            self.completed,
            self.skipped,
            self.not_started
        )
    }
}

/// Execute the status command
pub fn execute(source: &WizardSource, format: OutputFormat) -> Result<()> {
    let wizard = source.open_wizard()?;
    output(&StatusOutput::from_wizard(&wizard), format)
}

/// Execute the goto command
pub fn execute_goto(args: &GotoArgs, source: &WizardSource, format: OutputFormat) -> Result<()> {
    let mut wizard = source.open_wizard()?;
    goto(&mut wizard, args.step)?;
    output(&StatusOutput::from_wizard(&wizard), format)
}

/// Move to a 1-based step number. Out-of-range numbers leave the state untouched.
pub fn goto(wizard: &mut WizardController, step: usize) -> Result<()> {
    let total = wizard.step_count();
    if step == 0 || step > total {
        bail!("Step {step} is out of range (1-{total})");
    }

    wizard.go_to(step - 1);
    if let Some(error) = wizard.last_persist_error() {
        bail!("Moved to step {step} but progress was not saved: {error}");
    }
    Ok(())
}

fn output(status: &StatusOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(status)?),
        OutputFormat::Text => print!("{}", status.to_text()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::WizardStorage;

    fn wizard() -> WizardController {
        WizardController::new(Catalog::builtin().unwrap(), WizardStorage::in_memory())
    }

    #[test]
    fn test_status_counts() {
        let mut wizard = wizard();
        wizard.mark_current_completed();
        wizard.go_to(2);
        wizard.mark_current_skipped();

        let status = StatusOutput::from_wizard(&wizard);
        assert_eq!(status.current_step, 3);
        assert_eq!(status.step_id, "dell-updates-firmware");
        assert_eq!(status.total_steps, 18);
        assert_eq!(status.current_status, StepStatus::Skipped);
        assert_eq!(status.completed, 1);
        assert_eq!(status.skipped, 1);
        assert_eq!(status.not_started, 16);
    }

    #[test]
    fn test_status_text() {
        let text = StatusOutput::from_wizard(&wizard()).to_text();
        assert!(text.starts_with("Step 1 of 18 – "));
        assert!(text.contains("Status: Not Started"));
    }

    #[test]
    fn test_goto_bounds() {
        let mut wizard = wizard();
        goto(&mut wizard, 5).unwrap();
        assert_eq!(wizard.current_index(), 4);

        assert!(goto(&mut wizard, 0).is_err());
        assert!(goto(&mut wizard, 19).is_err());
        assert_eq!(wizard.current_index(), 4);

        goto(&mut wizard, 18).unwrap();
        assert!(wizard.is_last_step());
    }
}
