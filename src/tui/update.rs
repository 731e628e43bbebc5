//! Pure state transitions: (ScreenId, cursor, Action) → Transition.
//!
//! This is the core logic of the menu flow. Fully testable without a
//! terminal. Focus movement, back and quit behave the same on every
//! screen; activation is dispatched per screen. Unhandled actions leave
//! the focus where it is (no-op). Transitions are total over the
//! four-screen domain — there is no error path.

use crate::types::MenuItem;

use super::state::{Action, Effect, ScreenId, Transition};

/// Pure state transition function.
///
/// Given the current screen, the focused action index, an action, and a
/// read-only view of the catalog, produces the next transition. The shell
/// interprets the result.
pub fn update(
    screen: ScreenId,
    cursor: usize,
    action: &Action,
    catalog: &[MenuItem],
) -> Transition {
    // Focus movement is uniform: clamp to the screen's action rows.
    let count = action_count(screen, catalog);
    match action {
        Action::MoveUp => return stay(cursor.saturating_sub(1)),
        Action::MoveDown => return stay((cursor + 1).min(count - 1)),
        Action::Back => return Transition::Back,
        Action::Quit => return Transition::Quit,
        _ => {}
    }

    match screen {
        ScreenId::Home => update_home(cursor, action),
        ScreenId::MenuList => update_menu_list(cursor, action),
        ScreenId::MenuApplication => update_menu_application(cursor, action, catalog),
        ScreenId::Payment => update_payment(cursor, action),
    }
}

/// Number of activatable action rows on a screen.
///
/// The focus index is always clamped to `0..action_count(..)`.
pub fn action_count(screen: ScreenId, catalog: &[MenuItem]) -> usize {
    match screen {
        // "Menu List", "Menu Application", "Payment"
        ScreenId::Home => HOME_TARGETS.len(),
        // "Go Back" only — the item rows are not activatable
        ScreenId::MenuList => 1,
        // one order row per item, plus "Go Back"
        ScreenId::MenuApplication => catalog.len() + 1,
        // one row per payment method, plus "Go Back"
        ScreenId::Payment => crate::catalog::PAYMENT_METHODS.len() + 1,
    }
}

/// Home destinations, in button order.
const HOME_TARGETS: [ScreenId; 3] = [
    ScreenId::MenuList,
    ScreenId::MenuApplication,
    ScreenId::Payment,
];

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Home: three destination buttons; number keys jump directly.
fn update_home(cursor: usize, action: &Action) -> Transition {
    match action {
        Action::Enter => match HOME_TARGETS.get(cursor) {
            Some(&target) => Transition::Navigate(target),
            None => stay(cursor),
        },
        Action::NumberKey(n @ 1..=3) => Transition::Navigate(HOME_TARGETS[(n - 1) as usize]),
        _ => stay(cursor),
    }
}

/// MenuList: read-only rows, a single "Go Back" action.
fn update_menu_list(cursor: usize, action: &Action) -> Transition {
    match action {
        Action::Enter => Transition::Back,
        _ => stay(cursor),
    }
}

/// MenuApplication: one order row per item, then "Go Back".
fn update_menu_application(cursor: usize, action: &Action, catalog: &[MenuItem]) -> Transition {
    match action {
        Action::Enter => {
            if cursor < catalog.len() {
                Transition::Effect(Effect::PlaceOrder { item_index: cursor })
            } else {
                Transition::Back
            }
        }
        _ => stay(cursor),
    }
}

/// Payment: one row per method, then "Go Back".
///
/// Activating a method re-navigates to the Payment screen, duplicating it
/// on the back-stack — the original app's behavior, kept as-is.
fn update_payment(cursor: usize, action: &Action) -> Transition {
    let methods = crate::catalog::PAYMENT_METHODS.len();
    match action {
        Action::Enter => {
            if cursor < methods {
                Transition::Navigate(ScreenId::Payment)
            } else {
                Transition::Back
            }
        }
        _ => stay(cursor),
    }
}

fn stay(cursor: usize) -> Transition {
    Transition::Stay { cursor }
}

// ============================================================================
// TESTS
// ============================================================================
