// ABOUTME: CLI summary command - prints the completion summary for saved progress

use anyhow::Result;

use super::{util::WizardSource, OutputFormat};
use crate::components::SummaryReport;

/// Execute the summary command
pub fn execute(source: &WizardSource, format: OutputFormat) -> Result<()> {
    let wizard = source.open_wizard()?;
    let report = SummaryReport::build(wizard.catalog(), wizard.state());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.to_text()),
    }

    Ok(())
}
