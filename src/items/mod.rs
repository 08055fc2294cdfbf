// src/items/mod.rs

pub mod binder;
pub mod messages;
pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use binder::{bind_and_validate, bind_item_form, BoundItemForm, TYPE_MISMATCH};
pub use messages::default_catalog;
pub use models::ItemForm;
pub use validators::ItemValidator;
