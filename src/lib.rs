// src/lib.rs

//! Form-validation core: per-field and per-object error accumulation,
//! message-code resolution, and a pluggable validator registry.
//!
//! Validation failures are data, not control flow: rules record
//! [`FieldError`]s and [`ObjectError`]s on an [`ErrorCollector`], each
//! carrying an ordered list of message lookup keys expanded from a short
//! reason code. The caller resolves those keys against a
//! [`MessageCatalog`] at render time, so message text stays out of the
//! rules entirely.
//!
//! The `items` module is a complete sample domain: a bound form, its
//! binder, and its rule set.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod common;
pub mod items;
pub mod validation;

// ============================================================================
// COMMON RE-EXPORTS
// ============================================================================

pub use common::ValidatorError;
pub use validation::{
    field_error_message, object_error_message, resolve_message, ErrorCollector, FieldError,
    InMemoryCatalog, MessageCatalog, MessageCodeResolver, ObjectError, ValidationReport,
    ValidationTarget, Validator, ValidatorRegistry,
};
