// src/validation/collector.rs

use serde::Serialize;
use serde_json::Value;

use super::codes::MessageCodeResolver;
use super::validator::ValidationTarget;
use crate::common::ValidatorError;

// ============================================================================
// Error Entries
// ============================================================================

/// One failed rule scoped to a single field of the target object.
///
/// `rejected_value` keeps the user's original input around so a renderer
/// can redisplay it, even when the input never made it onto the target
/// (`binding_failure == true` means type coercion itself failed and
/// `rejected_value` holds the raw, un-coerced text).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub object_name: String,
    pub field: String,
    pub rejected_value: Option<Value>,
    pub binding_failure: bool,
    /// Message lookup keys, most specific first.
    pub codes: Vec<String>,
    pub arguments: Vec<Value>,
    pub default_message: Option<String>,
}

/// One failed cross-field rule scoped to the whole target object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectError {
    pub object_name: String,
    /// Message lookup keys, most specific first.
    pub codes: Vec<String>,
    pub arguments: Vec<Value>,
    pub default_message: Option<String>,
}

// ============================================================================
// Error Collector
// ============================================================================

/// Accumulates validation errors for exactly one target object during one
/// validation pass.
///
/// The collector borrows the target so `reject_field` can read the field's
/// current value and declared type at rejection time. It is created fresh
/// per pass, mutated only through the `reject_*` operations, and consumed
/// once via [`into_report`](Self::into_report); nothing here does I/O or
/// message formatting.
pub struct ErrorCollector<'t> {
    target: &'t dyn ValidationTarget,
    object_name: String,
    resolver: MessageCodeResolver,
    field_errors: Vec<FieldError>,
    object_errors: Vec<ObjectError>,
}

impl<'t> ErrorCollector<'t> {
    pub fn new(target: &'t dyn ValidationTarget) -> Self {
        Self {
            object_name: target.object_name().to_string(),
            target,
            resolver: MessageCodeResolver,
            field_errors: Vec::new(),
            object_errors: Vec::new(),
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Rejects `field` with a bare reason code, no arguments and no
    /// default message. Shorthand for the common `required`-style rules.
    pub fn reject_field(&mut self, field: &str, code: &str) -> Result<(), ValidatorError> {
        self.reject_field_with(field, code, Vec::new(), None)
    }

    /// Rejects `field`, expanding `code` into field-level message keys.
    ///
    /// The recorded `rejected_value` is the target's current value for the
    /// field. If an earlier binding failure was recorded for the same
    /// field the target holds nothing useful, so that failure's raw input
    /// is reused instead.
    pub fn reject_field_with(
        &mut self,
        field: &str,
        code: &str,
        arguments: Vec<Value>,
        default_message: Option<String>,
    ) -> Result<(), ValidatorError> {
        let codes = self.resolver.resolve_field_codes(
            code,
            &self.object_name,
            field,
            self.target.field_type(field),
        )?;

        let rejected_value = self
            .binding_failure_value(field)
            .or_else(|| self.target.field_value(field));

        self.field_errors.push(FieldError {
            object_name: self.object_name.clone(),
            field: field.to_string(),
            rejected_value,
            binding_failure: false,
            codes,
            arguments,
            default_message,
        });
        Ok(())
    }

    /// Records a type-coercion failure for `field`.
    ///
    /// The target has no valid value to read, so the raw un-coerced input
    /// is carried through explicitly and the entry is flagged as a binding
    /// failure. The reason code goes through the same field-level resolver
    /// as any other rejection.
    pub fn reject_binding_failure(
        &mut self,
        field: &str,
        raw_value: Value,
        code: &str,
        arguments: Vec<Value>,
    ) -> Result<(), ValidatorError> {
        let codes = self.resolver.resolve_field_codes(
            code,
            &self.object_name,
            field,
            self.target.field_type(field),
        )?;

        self.field_errors.push(FieldError {
            object_name: self.object_name.clone(),
            field: field.to_string(),
            rejected_value: Some(raw_value),
            binding_failure: true,
            codes,
            arguments,
            default_message: None,
        });
        Ok(())
    }

    /// Rejects the whole object with a bare reason code.
    pub fn reject_object(&mut self, code: &str) -> Result<(), ValidatorError> {
        self.reject_object_with(code, Vec::new(), None)
    }

    /// Rejects the whole object, expanding `code` into object-level
    /// message keys.
    pub fn reject_object_with(
        &mut self,
        code: &str,
        arguments: Vec<Value>,
        default_message: Option<String>,
    ) -> Result<(), ValidatorError> {
        let codes = self
            .resolver
            .resolve_object_codes(code, &self.object_name)?;

        self.object_errors.push(ObjectError {
            object_name: self.object_name.clone(),
            codes,
            arguments,
            default_message,
        });
        Ok(())
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.object_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len() + self.object_errors.len()
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn object_errors(&self) -> &[ObjectError] {
        &self.object_errors
    }

    pub fn field_errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.field_errors.iter().filter(move |e| e.field == field)
    }

    /// Releases the target borrow and returns an owned snapshot for the
    /// caller to thread into rendering.
    pub fn into_report(self) -> ValidationReport {
        ValidationReport {
            object_name: self.object_name,
            field_errors: self.field_errors,
            object_errors: self.object_errors,
        }
    }

    fn binding_failure_value(&self, field: &str) -> Option<Value> {
        self.field_errors
            .iter()
            .find(|e| e.binding_failure && e.field == field)
            .and_then(|e| e.rejected_value.clone())
    }
}

impl std::fmt::Debug for ErrorCollector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorCollector")
            .field("object_name", &self.object_name)
            .field("field_errors", &self.field_errors)
            .field("object_errors", &self.object_errors)
            .finish()
    }
}

// ============================================================================
// Validation Report
// ============================================================================

/// Owned snapshot of one completed validation pass.
///
/// Field errors and object errors stay separately addressable; a renderer
/// iterates both, field errors first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub object_name: String,
    pub field_errors: Vec<FieldError>,
    pub object_errors: Vec<ObjectError>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.object_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len() + self.object_errors.len()
    }

    pub fn field_errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.field_errors.iter().filter(move |e| e.field == field)
    }
}
