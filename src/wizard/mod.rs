// ABOUTME: Wizard core - step status, the persisted state record, and its controller

pub mod controller;
pub mod state;
pub mod status;

pub use controller::WizardController;
pub use state::{WizardState, DEFAULT_SKIP_REASON};
pub use status::StepStatus;
