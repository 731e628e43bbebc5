//! Domain types for menu-order.

use serde::Serialize;

// ============================================================================
// STRUCTS
// ============================================================================

/// A single entry on the menu.
///
/// All fields are borrowed from the hard-coded catalog table and live for
/// the whole program. The price is a pre-formatted display string, not a
/// number — this app does no arithmetic on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display name, e.g. "Burger".
    pub name: &'static str,
    /// Opaque asset identifier. Resolved by whatever embeds this core;
    /// never interpreted here.
    pub image: &'static str,
    /// Formatted price, e.g. "$5.99".
    pub price: &'static str,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Output format for the non-interactive `menu` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
