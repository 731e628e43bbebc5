//! Pure rendering: map App state to ratatui widget trees.
//!
//! Every screen is one instance of the same page shape — informational
//! rows, then a trailing list of action rows with a focus marker — under a
//! one-line title and above a one-line key-hint footer. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::catalog::PAYMENT_METHODS;
use crate::types::MenuItem;

use super::state::{App, ScreenId};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let screen = app.nav.current();
    frame.render_widget(render_title(screen), chunks[0]);
    frame.render_widget(render_help(screen), chunks[2]);

    let content_area = chunks[1];

    match screen {
        ScreenId::Home => {
            render_page(Vec::new(), &home_actions(), app.cursor, frame, content_area);
        }
        ScreenId::MenuList => {
            render_page(
                menu_rows(app.catalog),
                &menu_list_actions(),
                app.cursor,
                frame,
                content_area,
            );
        }
        ScreenId::MenuApplication => {
            render_page(
                Vec::new(),
                &order_actions(app.catalog),
                app.cursor,
                frame,
                content_area,
            );
        }
        ScreenId::Payment => {
            render_page(Vec::new(), &payment_actions(), app.cursor, frame, content_area);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar — the original application's screen titles.
fn render_title(screen: ScreenId) -> Paragraph<'static> {
    let title_text = match screen {
        ScreenId::Home => "Home Page",
        ScreenId::MenuList => "Menu List",
        ScreenId::MenuApplication => "Order Menu",
        ScreenId::Payment => "Payment Methods",
    };

    Paragraph::new(Line::from(vec![Span::styled(
        format!("  {}", title_text),
        theme::STYLE_TITLE,
    )]))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: ScreenId) -> Paragraph<'static> {
    let help_text = match screen {
        ScreenId::Home => "[j/k] move  [Enter] open  [1-3] jump  [q] quit",
        ScreenId::MenuList => "[Enter] go back  [Esc] back  [q] quit",
        ScreenId::MenuApplication => "[j/k] move  [Enter] order  [Esc] back  [q] quit",
        ScreenId::Payment => "[j/k] move  [Enter] select  [Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// PAGE TEMPLATE
// ============================================================================

/// The one page shape every screen instantiates: optional informational
/// rows, a separating blank, then action rows with the focus marker on
/// `cursor`.
fn render_page(
    rows: Vec<Line<'static>>,
    actions: &[String],
    cursor: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let row_count = rows.len();

    let mut lines = vec![Line::from("")];
    lines.extend(rows);
    if row_count > 0 {
        lines.push(Line::from(""));
    }

    // Line index of the first action row, for scroll-into-view below.
    let actions_start = lines.len();

    for (i, label) in actions.iter().enumerate() {
        let line = if i == cursor {
            Line::from(format!("  > {}", label)).style(theme::STYLE_CURSOR)
        } else {
            Line::from(format!("    {}", label))
        };
        lines.push(line);
    }

    // Scroll: if the focused action is beyond the visible area, offset the view
    let focused_line = actions_start + cursor;
    let visible_height = area.height as usize;
    let scroll_offset = if visible_height > 0 && focused_line >= visible_height {
        focused_line - visible_height + 1
    } else {
        0
    };

    let paragraph = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN CONTENT
// ============================================================================

/// Home destinations, in button order. Must line up with the update
/// layer's Enter dispatch.
fn home_actions() -> Vec<String> {
    vec![
        "Menu List".to_string(),
        "Menu Application".to_string(),
        "Payment".to_string(),
    ]
}

/// One informational row per catalog entry: image identifier, name, price.
fn menu_rows(catalog: &[MenuItem]) -> Vec<Line<'static>> {
    catalog
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("[{}]", item.image), theme::STYLE_DIM),
                Span::raw("  "),
                Span::styled(format!("{:<8}", item.name), theme::STYLE_IMPORTANT),
                Span::styled(item.price, theme::STYLE_PRICE),
            ])
        })
        .collect()
}

fn menu_list_actions() -> Vec<String> {
    vec!["Go Back".to_string()]
}

/// One order row per catalog entry, then "Go Back".
fn order_actions(catalog: &[MenuItem]) -> Vec<String> {
    let mut actions: Vec<String> = catalog
        .iter()
        .map(|item| format!("{:<10}[Order]", item.name))
        .collect();
    actions.push("Go Back".to_string());
    actions
}

/// One row per payment method, then "Go Back".
fn payment_actions() -> Vec<String> {
    let mut actions: Vec<String> = PAYMENT_METHODS.iter().map(|m| m.to_string()).collect();
    actions.push("Go Back".to_string());
    actions
}

// ============================================================================
// TESTS
// ============================================================================
