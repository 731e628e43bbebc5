//! The static menu catalog and payment-method table.
//!
//! Pure data, no effects. Both tables are fixed at compile time: every
//! caller sees the same entries in the same order, every time.

use crate::types::MenuItem;

// ============================================================================
// TABLES
// ============================================================================

/// The five sample items shown on the menu screens, in display order.
pub const CATALOG: [MenuItem; 5] = [
    MenuItem { name: "Burger", image: "burger", price: "$5.99" },
    MenuItem { name: "Pizza", image: "pizza", price: "$6.99" },
    MenuItem { name: "Pasta", image: "pasta", price: "$7.99" },
    MenuItem { name: "Sushi", image: "sushi", price: "$8.99" },
    MenuItem { name: "Salad", image: "salad", price: "$9.99" },
];

/// Payment methods offered on the Payment screen. Display strings only —
/// selecting one carries no state.
pub const PAYMENT_METHODS: [&str; 3] = ["Credit Card", "PayPal", "Cash"];

// ============================================================================
// ACCESSORS
// ============================================================================

/// The menu catalog in display order.
pub fn catalog() -> &'static [MenuItem] {
    &CATALOG
}

/// The payment-method table in display order.
pub fn payment_methods() -> &'static [&'static str] {
    &PAYMENT_METHODS
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_entries_in_fixed_order() {
        let items = catalog();
        let pairs: Vec<(&str, &str)> = items.iter().map(|i| (i.name, i.price)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Burger", "$5.99"),
                ("Pizza", "$6.99"),
                ("Pasta", "$7.99"),
                ("Sushi", "$8.99"),
                ("Salad", "$9.99"),
            ]
        );
    }

    #[test]
    fn catalog_is_idempotent() {
        assert_eq!(catalog(), catalog());
        assert_eq!(catalog().len(), 5);
    }

    #[test]
    fn image_identifiers_are_lowercase_names() {
        for item in catalog() {
            assert_eq!(item.image, item.name.to_lowercase());
        }
    }

    #[test]
    fn payment_methods_are_fixed() {
        assert_eq!(payment_methods(), &["Credit Card", "PayPal", "Cash"]);
    }
}
