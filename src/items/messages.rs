// src/items/messages.rs

use crate::validation::InMemoryCatalog;

pub const LOCALE_EN: &str = "en";

/// English message catalog for the item domain.
///
/// Specific keys override the generic per-code fallbacks; the resolver's
/// most-specific-first code order picks the override when one exists.
pub fn default_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();

    catalog.add(LOCALE_EN, "required.item.itemName", "Item name is required.");
    catalog.add(
        LOCALE_EN,
        "range.item.price",
        "Price must be between {0} and {1}.",
    );
    catalog.add(
        LOCALE_EN,
        "max.item.quantity",
        "Quantity must be at most {0}.",
    );
    catalog.add(
        LOCALE_EN,
        "totalPriceMin",
        "Total price must be at least {0}; current total is {1}.",
    );

    // Generic fallbacks, any object/field.
    catalog.add(LOCALE_EN, "required", "This field is required.");
    catalog.add(LOCALE_EN, "range", "Value must be between {0} and {1}.");
    catalog.add(LOCALE_EN, "max", "Value must be at most {0}.");
    catalog.add(LOCALE_EN, "typeMismatch.i64", "Please enter a number.");
    catalog.add(LOCALE_EN, "typeMismatch", "Invalid value.");

    catalog
}
