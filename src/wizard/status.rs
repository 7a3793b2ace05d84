// ABOUTME: Per-step status enum shared by the controller, views, and persisted snapshot

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recorded outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    NotStarted,
    Completed,
    Skipped,
}

impl StepStatus {
    /// Status icon used by the sidebar and summary
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Completed => "🟢",
            Self::Skipped => "🟡",
            Self::NotStarted => "⭕",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Skipped => "Skipped",
            Self::NotStarted => "Not Started",
        }
    }

    /// Wire name, as written to the persisted record
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
