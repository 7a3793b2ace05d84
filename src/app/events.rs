// ABOUTME: Event handling system for keyboard and mouse input and wizard actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::app::state::{AppState, Focus};
use crate::components::StepSidebarComponent;

/// Lines moved by a PageUp/PageDown
const PAGE_SCROLL_LINES: u16 = 10;
/// Lines moved by one mouse wheel notch
const WHEEL_SCROLL_LINES: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    CloseModal,
    // Step controls
    ToggleCompleted,
    ToggleSkip,
    ToggleSkipConfirmed,
    ToggleInstructions,
    Next,
    Back,
    // Content scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    // Sidebar
    ToggleFocus,
    FocusContent,
    SidebarUp,
    SidebarDown,
    SidebarSelect,
    JumpTo(usize),
    // Mouse events
    MouseClick { x: u16, y: u16 },
    MouseScrollUp,
    MouseScrollDown,
}

pub struct EventHandler;

impl EventHandler {
    /// Convert raw mouse events to wizard events
    pub fn handle_mouse_event(event: AppEvent, state: &AppState) -> Option<AppEvent> {
        if state.modal.is_some() {
            return None;
        }

        match event {
            AppEvent::MouseClick { x, y } => StepSidebarComponent::row_to_index(
                state.sidebar_area,
                state.sidebar_list.offset(),
                x,
                y,
            )
            .map(AppEvent::JumpTo),
            AppEvent::MouseScrollUp | AppEvent::MouseScrollDown => Some(event),
            _ => None,
        }
    }

    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // Open dialog swallows everything except its close keys
        if state.modal.is_some() {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => Some(AppEvent::CloseModal),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') => return Some(AppEvent::Quit),
            KeyCode::Char('?') => return Some(AppEvent::ToggleHelp),
            KeyCode::Tab => return Some(AppEvent::ToggleFocus),
            _ => {}
        }

        match state.focus {
            Focus::Sidebar => Self::handle_sidebar_keys(key_event),
            Focus::Content => Self::handle_content_keys(key_event, state),
        }
    }

    fn handle_sidebar_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::SidebarUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::SidebarDown),
            KeyCode::Enter => Some(AppEvent::SidebarSelect),
            KeyCode::Esc => Some(AppEvent::FocusContent),
            _ => None,
        }
    }

    fn handle_content_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Up => return Some(AppEvent::ScrollUp),
            KeyCode::Down => return Some(AppEvent::ScrollDown),
            KeyCode::PageUp => return Some(AppEvent::PageUp),
            KeyCode::PageDown => return Some(AppEvent::PageDown),
            KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Left => {
                return if state.wizard.is_first_step() {
                    None
                } else {
                    Some(AppEvent::Back)
                };
            }
            _ => {}
        }

        // The summary screen has no step controls
        if state.on_summary_step() {
            return None;
        }

        match key_event.code {
            KeyCode::Char('c') | KeyCode::Char(' ') => Some(AppEvent::ToggleCompleted),
            KeyCode::Char('s') => Some(AppEvent::ToggleSkip),
            KeyCode::Char('r') => Some(AppEvent::ToggleSkipConfirmed),
            KeyCode::Char('i') => Some(AppEvent::ToggleInstructions),
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right => {
                if state.step_view.can_proceed() {
                    Some(AppEvent::Next)
                } else {
                    debug!("Next ignored: step not completed or skip not confirmed");
                    None
                }
            }
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.should_quit = true;
            }
            AppEvent::ToggleHelp => {
                if state.modal.is_some() {
                    state.close_modal();
                } else {
                    state.open_help();
                }
            }
            AppEvent::CloseModal => state.close_modal(),
            AppEvent::ToggleCompleted => state.step_view.toggle_completed(),
            AppEvent::ToggleSkip => state.step_view.toggle_skip(),
            AppEvent::ToggleSkipConfirmed => state.step_view.toggle_skip_confirmed(),
            AppEvent::ToggleInstructions => state.step_view.toggle_instructions(),
            AppEvent::Next => {
                if state.step_view.can_proceed() {
                    state.step_view.confirm_next(&mut state.wizard);
                }
            }
            AppEvent::Back => state.wizard.retreat(),
            AppEvent::ScrollUp => state.step_view.scroll_up(1),
            AppEvent::ScrollDown => state.step_view.scroll_down(1),
            AppEvent::PageUp => state.step_view.scroll_up(PAGE_SCROLL_LINES),
            AppEvent::PageDown => state.step_view.scroll_down(PAGE_SCROLL_LINES),
            AppEvent::MouseScrollUp => state.step_view.scroll_up(WHEEL_SCROLL_LINES),
            AppEvent::MouseScrollDown => state.step_view.scroll_down(WHEEL_SCROLL_LINES),
            AppEvent::ToggleFocus => {
                state.focus = match state.focus {
                    Focus::Content => {
                        state.sidebar_cursor = state.wizard.current_index();
                        Focus::Sidebar
                    }
                    Focus::Sidebar => Focus::Content,
                };
            }
            AppEvent::FocusContent => state.focus = Focus::Content,
            AppEvent::SidebarUp => state.sidebar_up(),
            AppEvent::SidebarDown => state.sidebar_down(),
            AppEvent::SidebarSelect => {
                state.wizard.go_to(state.sidebar_cursor);
                state.focus = Focus::Content;
            }
            AppEvent::JumpTo(index) => state.wizard.go_to(index),
            AppEvent::MouseClick { .. } => {}
        }

        state.sync_step_view();
    }
}
