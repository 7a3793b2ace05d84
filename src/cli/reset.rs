// ABOUTME: CLI reset command - removes saved progress so the next run starts at step 1

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use super::{util::WizardSource, OutputFormat};

/// Execute the reset command
pub fn execute(source: &WizardSource, format: OutputFormat) -> Result<()> {
    source
        .storage()
        .clear()
        .context("Failed to remove saved progress")?;
    info!("Saved progress cleared");

    match format {
        OutputFormat::Json => println!("{}", json!({ "reset": true })),
        OutputFormat::Text => println!("Saved progress cleared."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reset_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let source = WizardSource {
            catalog_path: None,
            state_dir: Some(dir.path().to_path_buf()),
        };

        let mut wizard = source.open_wizard().unwrap();
        wizard.mark_current_completed();
        wizard.advance();

        execute(&source, OutputFormat::Json).unwrap();
        let reopened = source.open_wizard().unwrap();
        assert_eq!(reopened.current_index(), 0);
        assert_eq!(reopened.state().count(crate::wizard::StepStatus::Completed), 0);

        // Nothing to remove is still fine
        execute(&source, OutputFormat::Text).unwrap();
    }
}
