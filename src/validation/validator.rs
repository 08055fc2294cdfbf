// src/validation/validator.rs

use std::any::Any;

use serde_json::Value;
use tracing::debug;

use super::collector::{ErrorCollector, ValidationReport};
use crate::common::ValidatorError;

// ============================================================================
// Validation Target
// ============================================================================

/// Field-addressable view over one bound form object.
///
/// This is what the collector needs from a target: a stable object name
/// for error scoping, per-field current values for redisplay, and per-field
/// declared type names for message-key expansion. Implementations
/// enumerate their fields explicitly; unknown fields return `None`.
///
/// `as_any` is the capability check at the validator boundary: a concrete
/// validator downcasts to its supported type instead of walking any kind
/// of type hierarchy.
pub trait ValidationTarget: Any {
    /// Name under which errors for this object are recorded, e.g. `"item"`.
    fn object_name(&self) -> &str;

    /// Current value of a named field, if the field exists and is set.
    fn field_value(&self, field: &str) -> Option<Value>;

    /// Canonical type name of the field's declared value type.
    fn field_type(&self, field: &str) -> Option<&'static str>;

    fn as_any(&self) -> &dyn Any;
}

// ============================================================================
// Validator
// ============================================================================

/// One pluggable rule set.
///
/// `validate` records failures on the collector and returns `Ok` whether
/// or not rules failed; an `Err` means the validator was driven wrong
/// (e.g. handed a target it does not support).
pub trait Validator {
    fn supports(&self, target: &dyn ValidationTarget) -> bool;

    fn validate(
        &self,
        target: &dyn ValidationTarget,
        errors: &mut ErrorCollector<'_>,
    ) -> Result<(), ValidatorError>;
}

// ============================================================================
// Validator Registry
// ============================================================================

/// Dispatcher over registered validators.
///
/// Every validator whose `supports` accepts the target runs, in
/// registration order, into the same collector. A target no validator
/// supports is a programming error.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, validator: impl Validator + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Runs a full validation pass over `target` and returns the report.
    pub fn validate(
        &self,
        target: &dyn ValidationTarget,
    ) -> Result<ValidationReport, ValidatorError> {
        let mut errors = ErrorCollector::new(target);
        self.validate_into(target, &mut errors)?;
        Ok(errors.into_report())
    }

    /// Runs all supporting validators into an existing collector, so a
    /// caller can pre-seed it (e.g. with binding failures) before the
    /// rules run.
    pub fn validate_into(
        &self,
        target: &dyn ValidationTarget,
        errors: &mut ErrorCollector<'_>,
    ) -> Result<(), ValidatorError> {
        let mut matched = false;
        for validator in &self.validators {
            if validator.supports(target) {
                matched = true;
                validator.validate(target, errors)?;
            }
        }

        if !matched {
            return Err(ValidatorError::NoValidator {
                object_name: target.object_name().to_string(),
            });
        }

        debug!(
            object = %target.object_name(),
            errors = errors.error_count(),
            "validation pass complete"
        );
        Ok(())
    }
}
