// ABOUTME: Step catalog - the fixed, ordered list of setup steps the wizard walks through
// Loaded from TOML (builtin asset or a user-supplied file) and validated once at startup

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Id of the final step that renders the completion summary instead of a step screen
pub const SUMMARY_STEP_ID: &str = "completion-summary";

const BUILTIN_CATALOG: &str = include_str!("../../assets/steps.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog contains no steps")]
    Empty,

    #[error("Step at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate step id: {0}")]
    DuplicateId(String),
}

/// One unit of the guided checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Stable, unique identifier
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub why_it_matters: String,
    /// Whether the operator may skip this step
    #[serde(default)]
    pub skip_allowed: bool,
    /// Condition under which skipping is appropriate; doubles as the recorded skip reason
    #[serde(default)]
    pub skip_when: Option<String>,
    #[serde(default)]
    pub detailed_instructions: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub warning_text: Option<String>,
}

impl StepDefinition {
    /// Minimal definition, handy for building catalogs in code
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_description: String::new(),
            why_it_matters: String::new(),
            skip_allowed: false,
            skip_when: None,
            detailed_instructions: String::new(),
            estimated_time: None,
            warning_text: None,
        }
    }

    /// Allow skipping, optionally with a "skip when" condition
    #[must_use]
    pub fn skippable(mut self, skip_when: Option<&str>) -> Self {
        self.skip_allowed = true;
        self.skip_when = skip_when.map(str::to_string);
        self
    }

    pub fn is_summary(&self) -> bool {
        self.id == SUMMARY_STEP_ID
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    steps: Vec<StepDefinition>,
}

/// Ordered, immutable list of steps. Position in the list is the step index.
#[derive(Debug, Clone)]
pub struct Catalog {
    steps: Vec<StepDefinition>,
}

impl Catalog {
    /// Build a catalog from definitions, validating ids
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, CatalogError> {
        if steps.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (idx, step) in steps.iter().enumerate() {
            if step.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(idx));
            }
            if !seen.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateId(step.id.clone()));
            }
        }

        Ok(Self { steps })
    }

    /// The embedded laptop setup checklist
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.steps)
    }

    /// Load a catalog from a TOML file containing `[[steps]]` tables
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a validated catalog; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Index of the step with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    pub fn is_summary(&self, index: usize) -> bool {
        self.get(index).is_some_and(StepDefinition::is_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.get(0).unwrap().id, "initial-system-checks");
        assert!(catalog.is_summary(catalog.len() - 1));
    }

    #[test]
    fn test_builtin_skip_rules() {
        let catalog = Catalog::builtin().unwrap();

        let update = catalog.get(1).unwrap();
        assert_eq!(update.id, "windows-update");
        assert!(!update.skip_allowed);
        assert!(update.skip_when.is_none());

        let dell = catalog.get(2).unwrap();
        assert!(dell.skip_allowed);
        assert_eq!(dell.skip_when.as_deref(), Some("Not a Dell machine"));
        assert_eq!(
            dell.warning_text.as_deref(),
            Some("Do not interrupt firmware updates once started.")
        );
    }

    #[test]
    fn test_builtin_instructions_are_multiline() {
        let catalog = Catalog::builtin().unwrap();
        let first = catalog.get(0).unwrap();
        assert!(first.detailed_instructions.starts_with("VERIFY WINDOWS ACTIVATION:"));
        assert!(first.detailed_instructions.lines().count() > 10);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_toml_str(""), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let steps = vec![StepDefinition::new("a", "A"), StepDefinition::new("a", "Again")];
        match Catalog::new(steps) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_id_rejected() {
        let steps = vec![StepDefinition::new("a", "A"), StepDefinition::new("  ", "Blank")];
        assert!(matches!(Catalog::new(steps), Err(CatalogError::EmptyId(1))));
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[steps]]
            id = "only"
            title = "Only step"
            "#,
        )
        .unwrap();
        let step = catalog.get(0).unwrap();
        assert!(!step.skip_allowed);
        assert!(step.estimated_time.is_none());
        assert_eq!(catalog.position("only"), Some(0));
        assert_eq!(catalog.position("missing"), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
