// ABOUTME: Main entry point for setupwiz with TUI and CLI support
//
// Binary: setupwiz
// Usage: setupwiz [COMMAND]
// - No command: launches TUI
// - summary: print the completion summary
// - status: current step and counts
// - steps: list the step catalog
// - reset: forget saved progress
// - goto: jump to a step

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};
use tracing::{info, warn};

use setupwiz::app::{AppEvent, AppState, EventHandler};
use setupwiz::cli::{self, util::WizardSource, Cli, Commands};
use setupwiz::components::LayoutComponent;
use setupwiz::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logging needs the config, so a bad config is reported once logging is up
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    setup_logging(&config);
    setup_panic_handler();

    if let Some(e) = config_error {
        warn!("Using default configuration: {:#}", e);
    }

    let source = WizardSource::resolve(&args, &config)?;

    let result = match args.command {
        Some(Commands::Summary) => cli::summary::execute(&source, args.format),
        Some(Commands::Status) => cli::status::execute(&source, args.format),
        Some(Commands::Steps) => cli::steps::execute(&source, args.format),
        Some(Commands::Reset) => cli::reset::execute(&source, args.format),
        Some(Commands::Goto(ref goto_args)) => {
            cli::status::execute_goto(goto_args, &source, args.format)
        }

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            let wizard = source.open_wizard()?;
            let mut state = AppState::new(wizard, config.ui.clone());
            let layout = LayoutComponent::new();

            info!("Starting TUI");
            run_tui(&mut state, &layout)
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(state: &mut AppState, layout: &LayoutComponent) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Use `setupwiz summary` or `setupwiz status` for non-interactive output."
        ));
    }

    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Flush any pending terminal events so stray keypresses don't toggle a checkbox
    while event::poll(Duration::from_millis(10)).unwrap_or(false) {
        let _ = event::read();
    }

    let result = run_tui_loop(state, layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop<B: Backend>(
    state: &mut AppState,
    layout: &LayoutComponent,
    terminal: &mut Terminal<B>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    // Startup guard: ignore key events for the first 100ms
    let startup_time = Instant::now();
    const STARTUP_GUARD_MS: u64 = 100;

    loop {
        terminal.draw(|frame| {
            layout.render(frame, state);
        })?;

        // Post-render hook: a new step starts scrolled to the top
        if state.take_scroll_reset() {
            state.step_view.reset_scroll();
            continue;
        }

        if !event::poll(tick_rate)? {
            continue;
        }

        let app_event = match event::read()? {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                    tracing::debug!(
                        "Ignoring key event {:?} during startup guard period",
                        key_event.code
                    );
                    continue;
                }
                EventHandler::handle_key_event(key_event, state)
            }
            Event::Mouse(mouse_event) => {
                let raw = match mouse_event.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::MouseClick {
                        x: mouse_event.column,
                        y: mouse_event.row,
                    }),
                    MouseEventKind::ScrollUp => Some(AppEvent::MouseScrollUp),
                    MouseEventKind::ScrollDown => Some(AppEvent::MouseScrollDown),
                    _ => None,
                };
                raw.and_then(|event| EventHandler::handle_mouse_event(event, state))
            }
            _ => None,
        };

        if let Some(app_event) = app_event {
            EventHandler::process_event(app_event, state);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging(config: &AppConfig) {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "setupwiz-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; without a writable file the wizard still runs
    let file_layer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .ok()
        .map(|file| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false)
        });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Your progress up to the last step change has been saved.");
    }));
}
