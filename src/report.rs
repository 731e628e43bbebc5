//! Menu listing output for the non-interactive `menu` command.
//!
//! Pure functions — (catalog, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::catalog::payment_methods;
use crate::types::{MenuItem, OutputFormat};

/// Format the menu catalog for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_menu(items: &[MenuItem], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(items),
        OutputFormat::Json => format_json(items),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(items: &[MenuItem]) -> String {
    let mut out = String::new();

    out.push_str("=== Menu ===\n");
    for item in items {
        out.push_str(&format!("{:<12}{}\n", item.name, item.price));
    }
    out.push('\n');

    out.push_str("=== Payment Methods ===\n");
    for method in payment_methods() {
        out.push_str(&format!("{}\n", method));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

/// Wire shape of the JSON listing: the catalog plus the payment table.
#[derive(Serialize)]
struct MenuDocument<'a> {
    items: &'a [MenuItem],
    payment_methods: &'static [&'static str],
}

fn format_json(items: &[MenuItem]) -> String {
    let doc = MenuDocument {
        items,
        payment_methods: payment_methods(),
    };
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize menu to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    // --- Human format tests ---

    #[test]
    fn human_format_lists_every_item_with_price() {
        let output = format_menu(catalog(), OutputFormat::Human);

        assert!(output.contains("=== Menu ==="));
        for item in catalog() {
            assert!(output.contains(item.name), "missing {}", item.name);
            assert!(output.contains(item.price), "missing {}", item.price);
        }
    }

    #[test]
    fn human_format_lists_items_in_catalog_order() {
        let output = format_menu(catalog(), OutputFormat::Human);

        let positions: Vec<usize> = catalog()
            .iter()
            .map(|i| output.find(i.name).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn human_format_includes_payment_methods() {
        let output = format_menu(catalog(), OutputFormat::Human);

        assert!(output.contains("=== Payment Methods ==="));
        assert!(output.contains("Credit Card"));
        assert!(output.contains("PayPal"));
        assert!(output.contains("Cash"));
    }

    // --- JSON format tests ---

    #[test]
    fn json_format_is_valid_json() {
        let output = format_menu(catalog(), OutputFormat::Json);

        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");
        assert!(parsed.is_object());
    }

    #[test]
    fn json_format_has_expected_fields() {
        let output = format_menu(catalog(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["items"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["payment_methods"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["items"][0]["name"], "Burger");
        assert_eq!(parsed["items"][0]["price"], "$5.99");
        assert_eq!(parsed["items"][4]["name"], "Salad");
    }
}
