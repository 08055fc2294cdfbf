// src/validation/codes.rs

use crate::common::ValidatorError;

/// Expands a reason code into an ordered list of message lookup keys,
/// most specific first.
///
/// The resolver never touches a message catalog; it only builds keys. That
/// keeps it a pure function: identical inputs always produce the same
/// ordered list, and it can be shared across threads without
/// synchronization.
///
/// A catalog can therefore override the generic message for a reason code
/// ("required") at any level of specificity, down to one object+field
/// combination, while the rules themselves stay message-agnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCodeResolver;

impl MessageCodeResolver {
    /// Keys for an object-level (cross-field) failure, exactly two:
    ///
    /// 1. `{code}.{object_name}`
    /// 2. `{code}`
    pub fn resolve_object_codes(
        &self,
        code: &str,
        object_name: &str,
    ) -> Result<Vec<String>, ValidatorError> {
        if code.is_empty() {
            return Err(ValidatorError::EmptyCode);
        }
        if object_name.is_empty() {
            return Err(ValidatorError::EmptyObjectName);
        }

        Ok(vec![format!("{}.{}", code, object_name), code.to_string()])
    }

    /// Keys for a field-level failure, up to four, duplicates skipped:
    ///
    /// 1. `{code}.{object_name}.{field}`
    /// 2. `{code}.{field}`
    /// 3. `{code}.{field_type}` (canonical type name of the field's
    ///    declared value type, e.g. `alloc::string::String` or `i64`;
    ///    omitted when the type is unknown)
    /// 4. `{code}`
    pub fn resolve_field_codes(
        &self,
        code: &str,
        object_name: &str,
        field: &str,
        field_type: Option<&str>,
    ) -> Result<Vec<String>, ValidatorError> {
        if code.is_empty() {
            return Err(ValidatorError::EmptyCode);
        }
        if object_name.is_empty() {
            return Err(ValidatorError::EmptyObjectName);
        }
        if field.is_empty() {
            return Err(ValidatorError::EmptyField);
        }

        let mut codes: Vec<String> = Vec::with_capacity(4);

        let mut candidates = vec![
            format!("{}.{}.{}", code, object_name, field),
            format!("{}.{}", code, field),
        ];
        if let Some(type_name) = field_type.filter(|name| !name.is_empty()) {
            candidates.push(format!("{}.{}", code, type_name));
        }
        candidates.push(code.to_string());

        for candidate in candidates {
            if !codes.contains(&candidate) {
                codes.push(candidate);
            }
        }

        Ok(codes)
    }
}
