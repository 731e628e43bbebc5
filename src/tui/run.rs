//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! The loop is single-threaded and synchronous: draw, block on one input
//! event, apply one transition, repeat. There is no background work, so
//! there are no channels and no worker threads.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, App, Effect};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Number keys for Home navigation
        KeyCode::Char(c @ '1'..='3') => Some(Action::NumberKey(c as u8 - b'0')),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive menu flow until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// starts at the Home screen, and runs the draw/input/update loop.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on the next input event
        let Event::Key(key) = event::read()? else {
            continue; // ignore mouse, resize, etc.
        };

        if let Some(action) = map_key(key) {
            let transition = update(app.nav.current(), app.cursor, &action, app.catalog);
            if let Some(effect) = app.apply(transition) {
                handle_effect(effect);
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect) {
    match effect {
        Effect::PlaceOrder { item_index: _ } => {
            // Order submission is not part of this demo. A real checkout
            // pipeline would be invoked from here.
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
