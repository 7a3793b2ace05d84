// ABOUTME: Application state and event handling for the TUI

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, Focus};
