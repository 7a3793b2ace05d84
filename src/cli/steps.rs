// ABOUTME: CLI steps command - lists the step catalog with each step's saved status

use anyhow::Result;
use serde::Serialize;

use super::{util::WizardSource, OutputFormat};
use crate::wizard::{StepStatus, WizardController};

/// A catalog entry as listed by the steps command
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepRow {
    pub number: usize,
    pub id: String,
    pub title: String,
    pub skip_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    pub status: StepStatus,
    pub current: bool,
}

pub fn rows(wizard: &WizardController) -> Vec<StepRow> {
    wizard
        .catalog()
        .iter()
        .enumerate()
        .map(|(index, step)| StepRow {
            number: index + 1,
            id: step.id.clone(),
            title: step.title.clone(),
            skip_allowed: step.skip_allowed,
            estimated_time: step.estimated_time.clone(),
            status: wizard.status(index),
            current: index == wizard.current_index(),
        })
        .collect()
}

/// Execute the steps command
pub fn execute(source: &WizardSource, format: OutputFormat) -> Result<()> {
    let wizard = source.open_wizard()?;
    let rows = rows(&wizard);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => output_text(&rows),
    }

    Ok(())
}

fn output_text(rows: &[StepRow]) {
    println!("{:<4} {:<3} {:<32} {:<10} {:<14} ID", "", "#", "TITLE", "SKIPPABLE", "TIME");
    println!("{}", "-".repeat(90));

    for row in rows {
        println!(
            "{:<4} {:<3} {:<32} {:<10} {:<14} {}",
            if row.current { "▶ " } else { "" },
            row.number,
            truncate(&row.title, 32),
            if row.skip_allowed { "yes" } else { "no" },
            row.estimated_time.as_deref().unwrap_or("-"),
            row.id
        );
    }
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
