// ABOUTME: Wizard state record and its hydration from a persisted blob
// Missing or malformed fields fall back to defaults one field at a time

use super::status::StepStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Default skip reason when the step has no `skip_when` text
pub const DEFAULT_SKIP_REASON: &str = "User chose to skip";

/// The mutable wizard record. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_step_index: usize,
    /// Index-aligned with the catalog
    pub step_statuses: Vec<StepStatus>,
    /// Keyed by step index; serialized with decimal string keys
    pub skip_reasons: BTreeMap<usize, String>,
}

impl WizardState {
    /// All steps not started, positioned at the first step
    pub fn fresh(step_count: usize) -> Self {
        Self {
            current_step_index: 0,
            step_statuses: vec![StepStatus::NotStarted; step_count],
            skip_reasons: BTreeMap::new(),
        }
    }

    /// Overlay a persisted blob onto fresh defaults.
    ///
    /// An unparseable blob is discarded wholesale. Otherwise each of the three
    /// fields is taken from the blob when structurally valid. Two hardenings
    /// apply on top: an out-of-range index is clamped to the last step, and a
    /// status list of the wrong length is truncated or padded so it stays
    /// aligned with the catalog.
    pub fn hydrate(raw: Option<&str>, step_count: usize) -> Self {
        let mut state = Self::fresh(step_count);
        let Some(raw) = raw else {
            debug!("No saved wizard state, starting fresh");
            return state;
        };

        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to load saved state: {}", e);
                return state;
            }
        };

        let Some(fields) = value.as_object() else {
            warn!("Failed to load saved state: record is not a JSON object");
            return state;
        };

        if let Some(index) = fields.get("currentStepIndex").and_then(step_index) {
            state.current_step_index = clamp_index(index, step_count);
        }

        if let Some(raw_statuses) = fields.get("stepStatuses").filter(|v| !v.is_null()) {
            match serde_json::from_value::<Vec<StepStatus>>(raw_statuses.clone()) {
                Ok(statuses) => state.step_statuses = align_statuses(statuses, step_count),
                Err(e) => warn!("Ignoring saved step statuses: {}", e),
            }
        }

        if let Some(Value::Object(reasons)) = fields.get("skipReasons") {
            for (key, reason) in reasons {
                match (key.parse::<usize>(), reason.as_str()) {
                    (Ok(index), Some(reason)) if index < step_count => {
                        state.skip_reasons.insert(index, reason.to_string());
                    }
                    _ => debug!("Dropping saved skip reason under key {:?}", key),
                }
            }
        }

        state
    }

    pub fn count(&self, status: StepStatus) -> usize {
        self.step_statuses.iter().filter(|s| **s == status).count()
    }
}

/// Non-negative whole number, written either as `3` or `3.0`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_index(value: &Value) -> Option<u64> {
    // Float to int casts saturate, and clamp_index caps the result anyway
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    })
}

fn clamp_index(index: u64, step_count: usize) -> usize {
    let last = step_count.saturating_sub(1);
    match usize::try_from(index) {
        Ok(index) if index <= last => index,
        _ => {
            warn!(
                "Saved step index {} is out of range for {} steps, clamping to {}",
                index, step_count, last
            );
            last
        }
    }
}

fn align_statuses(mut statuses: Vec<StepStatus>, step_count: usize) -> Vec<StepStatus> {
    if statuses.len() != step_count {
        warn!(
            "Saved step statuses have length {}, catalog has {} steps",
            statuses.len(),
            step_count
        );
        statuses.resize(step_count, StepStatus::NotStarted);
    }
    statuses
}
