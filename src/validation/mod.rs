// src/validation/mod.rs

pub mod codes;
pub mod collector;
pub mod messages;
pub mod validator;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use codes::MessageCodeResolver;
pub use collector::{ErrorCollector, FieldError, ObjectError, ValidationReport};
pub use messages::{
    field_error_message, object_error_message, resolve_message, InMemoryCatalog, MessageCatalog,
};
pub use validator::{ValidationTarget, Validator, ValidatorRegistry};
