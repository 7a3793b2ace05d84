// ABOUTME: Tests for event handling to ensure keyboard and mouse inputs map to the right wizard actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use setupwiz::app::{AppEvent, AppState, EventHandler, Focus};
use setupwiz::catalog::Catalog;
use setupwiz::config::UiPreferences;
use setupwiz::storage::WizardStorage;
use setupwiz::wizard::{StepStatus, WizardController};

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn create_state() -> AppState {
    let wizard = WizardController::new(Catalog::builtin().unwrap(), WizardStorage::in_memory());
    AppState::new(wizard, UiPreferences::default())
}

/// Map a key and apply it, the way the run loop does
fn press(state: &mut AppState, code: KeyCode) -> Option<AppEvent> {
    let event = EventHandler::handle_key_event(create_key_event(code), state);
    if let Some(event) = event.clone() {
        EventHandler::process_event(event, state);
    }
    event
}

#[test]
fn test_quit_key_events() {
    let mut state = create_state();

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(
            create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &state,
        ),
        Some(AppEvent::Quit)
    );

    press(&mut state, KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_next_is_ignored_while_gate_closed() {
    let mut state = create_state();

    assert_eq!(press(&mut state, KeyCode::Enter), None);
    assert_eq!(press(&mut state, KeyCode::Char('n')), None);
    assert_eq!(state.wizard.current_index(), 0);
    assert_eq!(state.wizard.status(0), StepStatus::NotStarted);
}

#[test]
fn test_complete_and_next() {
    let mut state = create_state();

    press(&mut state, KeyCode::Char(' '));
    assert!(state.step_view.completed_checked());
    assert_eq!(press(&mut state, KeyCode::Enter), Some(AppEvent::Next));

    assert_eq!(state.wizard.status(0), StepStatus::Completed);
    assert_eq!(state.wizard.current_index(), 1);
    // Fresh view for the new step
    assert!(!state.step_view.completed_checked());
}

#[test]
fn test_skip_needs_risk_confirmation() {
    let mut state = create_state();
    state.wizard.go_to(2);
    state.sync_step_view();

    press(&mut state, KeyCode::Char('s'));
    assert!(state.step_view.skip_checked());
    assert_eq!(press(&mut state, KeyCode::Enter), None);

    press(&mut state, KeyCode::Char('r'));
    assert_eq!(press(&mut state, KeyCode::Right), Some(AppEvent::Next));

    assert_eq!(state.wizard.status(2), StepStatus::Skipped);
    assert_eq!(state.wizard.skip_reason(2), Some("Not a Dell machine"));
    assert_eq!(state.wizard.current_index(), 3);
}

#[test]
fn test_skip_keys_do_nothing_on_required_step() {
    let mut state = create_state();
    state.wizard.go_to(1);
    state.sync_step_view();

    press(&mut state, KeyCode::Char('s'));
    press(&mut state, KeyCode::Char('r'));
    assert!(!state.step_view.skip_checked());
    assert_eq!(press(&mut state, KeyCode::Enter), None);
    assert_eq!(state.wizard.current_index(), 1);
}

#[test]
fn test_revisiting_skipped_step_requires_reconfirmation() {
    let mut state = create_state();
    state.wizard.go_to(2);
    state.wizard.mark_current_skipped();
    state.wizard.go_to(3);
    state.sync_step_view();

    press(&mut state, KeyCode::Char('b'));
    assert_eq!(state.wizard.current_index(), 2);
    assert!(state.step_view.skip_checked());
    assert!(!state.step_view.skip_risk_confirmed());
    assert_eq!(press(&mut state, KeyCode::Enter), None);
}

#[test]
fn test_back_keys() {
    let mut state = create_state();
    assert_eq!(press(&mut state, KeyCode::Backspace), None);

    state.wizard.go_to(5);
    state.sync_step_view();
    assert_eq!(press(&mut state, KeyCode::Left), Some(AppEvent::Back));
    assert_eq!(state.wizard.current_index(), 4);
    // Back never records anything
    assert_eq!(state.wizard.status(5), StepStatus::NotStarted);
}

#[test]
fn test_summary_step_ignores_step_controls() {
    let mut state = create_state();
    let last = state.wizard.step_count() - 1;
    state.wizard.go_to(last);
    state.sync_step_view();
    assert!(state.on_summary_step());

    assert_eq!(press(&mut state, KeyCode::Char('c')), None);
    assert_eq!(press(&mut state, KeyCode::Enter), None);
    assert_eq!(press(&mut state, KeyCode::Char('b')), Some(AppEvent::Back));
    assert_eq!(state.wizard.current_index(), last - 1);
}

#[test]
fn test_help_modal_swallows_keys() {
    let mut state = create_state();

    press(&mut state, KeyCode::Char('?'));
    assert!(state.modal.is_some());

    assert_eq!(press(&mut state, KeyCode::Char('c')), None);
    assert_eq!(press(&mut state, KeyCode::Char('q')), None);
    assert!(!state.step_view.completed_checked());
    assert!(!state.should_quit);

    assert_eq!(press(&mut state, KeyCode::Esc), Some(AppEvent::CloseModal));
    assert!(state.modal.is_none());
}

#[test]
fn test_sidebar_jump() {
    let mut state = create_state();

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.focus, Focus::Sidebar);

    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Char('k'));
    assert_eq!(state.sidebar_cursor, 2);
    // Navigation keys move the cursor, not the wizard
    assert_eq!(state.wizard.current_index(), 0);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.current_index(), 2);
    assert_eq!(state.focus, Focus::Content);
}

#[test]
fn test_mouse_click_outside_sidebar_is_ignored() {
    let state = create_state();
    // Sidebar has not been drawn yet, so its area is empty
    assert_eq!(
        EventHandler::handle_mouse_event(AppEvent::MouseClick { x: 5, y: 5 }, &state),
        None
    );
}

#[test]
fn test_jump_out_of_range_is_ignored() {
    let mut state = create_state();
    EventHandler::process_event(AppEvent::JumpTo(99), &mut state);
    assert_eq!(state.wizard.current_index(), 0);
}

#[test]
fn test_scroll_events() {
    let mut state = create_state();
    press(&mut state, KeyCode::PageDown);
    press(&mut state, KeyCode::Down);
    assert_eq!(state.step_view.scroll(), 11);
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::PageUp);
    assert_eq!(state.step_view.scroll(), 0);
}
