// src/items/binder.rs

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::models::ItemForm;
use crate::common::ValidatorError;
use crate::validation::{ErrorCollector, ValidationReport, ValidatorRegistry};

/// Reason code recorded when raw input cannot be coerced to the field's
/// declared type. Expanded through the same field-level resolver as any
/// other code, so a catalog can override it per object+field.
pub const TYPE_MISMATCH: &str = "typeMismatch";

// ============================================================================
// Form Binding
// ============================================================================

/// Outcome of binding one raw key/value submission onto an [`ItemForm`].
///
/// Fields whose input could not be coerced stay `None` on the form; the
/// raw text is kept here so it can be recorded as a binding failure (and
/// redisplayed to the user) once a collector exists.
#[derive(Debug, Clone, Default)]
pub struct BoundItemForm {
    pub form: ItemForm,
    failures: Vec<(&'static str, String)>,
}

impl BoundItemForm {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Records every coercion failure on the collector as a
    /// `typeMismatch` field error carrying the raw input.
    pub fn record_failures(&self, errors: &mut ErrorCollector<'_>) -> Result<(), ValidatorError> {
        for (field, raw) in &self.failures {
            errors.reject_binding_failure(
                field,
                Value::from(raw.clone()),
                TYPE_MISMATCH,
                Vec::new(),
            )?;
        }
        Ok(())
    }
}

/// Binds an already-materialized key/value submission onto an `ItemForm`.
///
/// Text input binds as-is, blanks included, so a failed `required` rule
/// can still redisplay exactly what the user typed. Blank numeric input
/// binds like absent input (field stays `None`, no failure); non-numeric
/// text for a numeric field is a coercion failure. This is not an HTTP
/// parser; the map is whatever the transport layer already decoded.
pub fn bind_item_form(params: &HashMap<String, String>) -> BoundItemForm {
    let mut bound = BoundItemForm::default();

    if let Some(raw) = params.get(ItemForm::FIELD_ITEM_NAME) {
        bound.form.item_name = Some(raw.clone());
    }
    bound.form.price = bind_number(params, ItemForm::FIELD_PRICE, &mut bound.failures);
    bound.form.quantity = bind_number(params, ItemForm::FIELD_QUANTITY, &mut bound.failures);

    if bound.has_failures() {
        debug!(
            object = ItemForm::OBJECT_NAME,
            failures = bound.failures.len(),
            "form binding recorded coercion failures"
        );
    }
    bound
}

/// Binds and validates in one step: coercion failures are seeded into the
/// collector first, then every supporting validator in `registry` runs, so
/// the report shows binding and rule problems together.
pub fn bind_and_validate(
    params: &HashMap<String, String>,
    registry: &ValidatorRegistry,
) -> Result<(ItemForm, ValidationReport), ValidatorError> {
    let bound = bind_item_form(params);

    let mut errors = ErrorCollector::new(&bound.form);
    bound.record_failures(&mut errors)?;
    registry.validate_into(&bound.form, &mut errors)?;
    let report = errors.into_report();

    Ok((bound.form, report))
}

fn present<'p>(params: &'p HashMap<String, String>, field: &str) -> Option<&'p str> {
    params
        .get(field)
        .map(String::as_str)
        .filter(|raw| !raw.trim().is_empty())
}

fn bind_number(
    params: &HashMap<String, String>,
    field: &'static str,
    failures: &mut Vec<(&'static str, String)>,
) -> Option<i64> {
    let raw = present(params, field)?;
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            failures.push((field, raw.to_string()));
            None
        }
    }
}
