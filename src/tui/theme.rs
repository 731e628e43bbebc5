//! TUI style constants.
//!
//! Centralized so the rendering layer stays visually consistent.
//! Pure data, consumed by `view`.
//!
//! Color semantics:
//! - Bold white: titles
//! - Bold: item names
//! - Green: prices
//! - Dim: de-emphasized (image identifiers, key hints)
//! - Reversed: the focused action row

use ratatui::style::{Color, Modifier, Style};

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Focused action row.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Item names.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

/// Prices.
pub const STYLE_PRICE: Style = Style::new().fg(Color::Green);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
