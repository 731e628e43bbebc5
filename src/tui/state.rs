//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire state space of the menu flow. Screen
//! identity is a closed enum; the back-stack lives in [`Navigator`]; the
//! only per-screen transient state is the focused action index, which the
//! shell resets on every navigation. The transition function (`update`) and
//! rendering layer (`view`) both program against these types.

use crate::catalog::catalog;
use crate::types::MenuItem;

// ============================================================================
// SCREENS
// ============================================================================

/// Identity of a screen in the menu flow.
///
/// A closed enumeration: there are exactly four screens and no dynamic
/// ones. Navigation state is always one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Landing screen with one button per destination.
    Home,
    /// Read-only menu listing with image, name and price per item.
    MenuList,
    /// Order screen: one order row per item.
    MenuApplication,
    /// Payment-method selection.
    Payment,
}

// ============================================================================
// NAVIGATOR
// ============================================================================

/// Owns the current screen and the back-stack of previously visited screens.
///
/// All screen transitions go through here. `navigate` pushes, `go_back`
/// pops; popping an empty stack is a no-op, so `current` is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: ScreenId,
    history: Vec<ScreenId>,
}

impl Navigator {
    /// A fresh navigator: current = Home, empty history.
    pub fn new() -> Self {
        Self {
            current: ScreenId::Home,
            history: Vec::new(),
        }
    }

    /// The currently displayed screen.
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Push the current screen onto the history and switch to `target`.
    ///
    /// Any screen is a valid target, including the current one — navigating
    /// to the displayed screen duplicates it onto the stack.
    pub fn navigate(&mut self, target: ScreenId) {
        self.history.push(self.current);
        self.current = target;
    }

    /// Pop the most recent history entry into the current screen.
    ///
    /// No-op on an empty history: at the root screen "back" has no effect.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    /// Number of entries on the back-stack.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// The back-stack, most-recent-last.
    pub fn history(&self) -> &[ScreenId] {
        &self.history
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each Action means per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move focus up one action row.
    MoveUp,
    /// Move focus down one action row.
    MoveDown,
    /// Activate the focused action row.
    Enter,
    /// Navigate back to the previous screen.
    Back,
    /// Jump to a Home destination by number (1-3).
    NumberKey(u8),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; [`App::apply`] interprets it. Pure
/// code describes WHAT should happen, the shell decides HOW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Remain on the current screen with the given focus index.
    Stay { cursor: usize },
    /// Push a new screen onto the navigator.
    Navigate(ScreenId),
    /// Pop back to the previous screen.
    Back,
    /// Execute a side effect. The effects layer interprets it.
    Effect(Effect),
    /// Quit the application.
    Quit,
}

/// Side effect requested by a pure transition.
///
/// Pure code never executes these — it only describes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The order button on the order screen. Order submission is not part
    /// of this demo; the effects boundary leaves this unhandled. Wiring a
    /// real order pipeline means implementing its `handle_effect` arm.
    PlaceOrder {
        /// Index into the catalog.
        item_index: usize,
    },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// The single mutable value of the program, exclusively owned by the event
/// loop. Holds the navigator, the focused action index for the current
/// screen, and the static catalog.
#[derive(Debug)]
pub struct App {
    /// Screen identity and back-stack.
    pub nav: Navigator,
    /// Focused action row on the current screen. Reset on navigation.
    pub cursor: usize,
    /// The static menu catalog, bound once at startup.
    pub catalog: &'static [MenuItem],
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// A fresh app: navigator at Home, focus on the first action.
    pub fn new() -> Self {
        Self {
            nav: Navigator::new(),
            cursor: 0,
            catalog: catalog(),
            should_quit: false,
        }
    }

    /// Apply a transition to the model.
    ///
    /// The one place navigator mutations happen. Returns the requested
    /// side effect, if any, for the effects boundary to interpret.
    pub fn apply(&mut self, transition: Transition) -> Option<Effect> {
        match transition {
            Transition::Stay { cursor } => {
                self.cursor = cursor;
                None
            }
            Transition::Navigate(target) => {
                self.nav.navigate(target);
                self.cursor = 0;
                None
            }
            Transition::Back => {
                self.nav.go_back();
                self.cursor = 0;
                None
            }
            Transition::Effect(effect) => Some(effect),
            Transition::Quit => {
                self.should_quit = true;
                None
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Navigator --

    #[test]
    fn navigator_starts_at_home_with_empty_history() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), ScreenId::Home);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn go_back_on_empty_history_is_noop() {
        let mut nav = Navigator::new();
        nav.go_back();
        assert_eq!(nav.current(), ScreenId::Home);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn navigate_then_back_round_trips() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::MenuList);
        assert_eq!(nav.current(), ScreenId::MenuList);
        nav.go_back();
        assert_eq!(nav.current(), ScreenId::Home);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn navigation_walks_the_back_stack() {
        let mut nav = Navigator::new();

        nav.navigate(ScreenId::MenuList);
        assert_eq!(nav.current(), ScreenId::MenuList);
        assert_eq!(nav.history(), &[ScreenId::Home]);

        nav.navigate(ScreenId::MenuApplication);
        assert_eq!(nav.current(), ScreenId::MenuApplication);
        assert_eq!(nav.history(), &[ScreenId::Home, ScreenId::MenuList]);

        nav.go_back();
        assert_eq!(nav.current(), ScreenId::MenuList);
        assert_eq!(nav.history(), &[ScreenId::Home]);

        nav.go_back();
        assert_eq!(nav.current(), ScreenId::Home);
        assert_eq!(nav.history(), &[] as &[ScreenId]);
    }

    #[test]
    fn navigate_to_current_screen_duplicates_it_on_the_stack() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Payment);
        nav.navigate(ScreenId::Payment);
        assert_eq!(nav.current(), ScreenId::Payment);
        assert_eq!(nav.history(), &[ScreenId::Home, ScreenId::Payment]);

        nav.go_back();
        assert_eq!(nav.current(), ScreenId::Payment);
        nav.go_back();
        assert_eq!(nav.current(), ScreenId::Home);
    }

    // -- App --

    #[test]
    fn app_starts_at_home_with_the_catalog() {
        let app = App::new();
        assert_eq!(app.nav.current(), ScreenId::Home);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.catalog.len(), 5);
        assert!(!app.should_quit);
    }

    #[test]
    fn apply_stay_moves_the_cursor() {
        let mut app = App::new();
        let effect = app.apply(Transition::Stay { cursor: 2 });
        assert_eq!(effect, None);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.nav.current(), ScreenId::Home);
    }

    #[test]
    fn apply_navigate_pushes_and_resets_cursor() {
        let mut app = App::new();
        app.cursor = 2;
        app.apply(Transition::Navigate(ScreenId::Payment));
        assert_eq!(app.nav.current(), ScreenId::Payment);
        assert_eq!(app.nav.depth(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn apply_back_pops_and_resets_cursor() {
        let mut app = App::new();
        app.apply(Transition::Navigate(ScreenId::MenuApplication));
        app.apply(Transition::Stay { cursor: 3 });
        app.apply(Transition::Back);
        assert_eq!(app.nav.current(), ScreenId::Home);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn apply_back_at_home_leaves_state_unchanged() {
        let mut app = App::new();
        app.apply(Transition::Back);
        assert_eq!(app.nav.current(), ScreenId::Home);
        assert_eq!(app.nav.depth(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn apply_quit_sets_the_flag() {
        let mut app = App::new();
        app.apply(Transition::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn apply_effect_hands_it_to_the_caller() {
        let mut app = App::new();
        let effect = app.apply(Transition::Effect(Effect::PlaceOrder { item_index: 2 }));
        assert_eq!(effect, Some(Effect::PlaceOrder { item_index: 2 }));
        // No state change: the effects boundary decides what happens.
        assert_eq!(app.nav.current(), ScreenId::Home);
        assert_eq!(app.cursor, 0);
    }
}
