// src/common/error.rs

use thiserror::Error;

/// Errors in how the validation API is driven.
///
/// These are programming errors, not validation failures: a user typing a
/// bad price never produces one of these. Validation failures are
/// accumulated as data on the `ErrorCollector`; a `ValidatorError` means
/// the calling code itself is wrong and should fail fast rather than emit
/// a malformed message key or silently skip a rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    #[error("reason code must not be empty")]
    EmptyCode,

    #[error("object name must not be empty")]
    EmptyObjectName,

    #[error("field name must not be empty")]
    EmptyField,

    #[error("validator does not support target object '{object_name}'")]
    UnsupportedTarget { object_name: String },

    #[error("no registered validator supports target object '{object_name}'")]
    NoValidator { object_name: String },
}
