// ABOUTME: UI components for the setup wizard

pub mod layout;
pub mod modal;
pub mod scroll;
pub mod sidebar;
pub mod step_screen;
pub mod summary;
pub mod theme;

pub use layout::LayoutComponent;
pub use modal::{ModalComponent, ModalState};
pub use sidebar::StepSidebarComponent;
pub use step_screen::{GateDecision, StepScreenComponent, StepViewState};
pub use summary::{SummaryComponent, SummaryEntry, SummaryReport};
