// ABOUTME: Step screen module - one step's instructions plus the completed/skip gate

pub mod component;
pub mod state;

pub use component::{progress_text, StepScreenComponent};
pub use state::{GateDecision, StepViewState};
