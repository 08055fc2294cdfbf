// src/validation/messages.rs

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use super::collector::{FieldError, ObjectError};

// ============================================================================
// Message Catalog
// ============================================================================

/// Localized message lookup, supplied by the embedding application.
///
/// How templates are stored (properties files, gettext, a database) is the
/// embedder's business; the core only ever asks for one key at a time.
pub trait MessageCatalog {
    fn lookup(&self, key: &str, arguments: &[Value], locale: &str) -> Option<String>;
}

/// Catalog backed by an in-memory `(locale, key) -> template` map.
///
/// Templates use positional placeholders `{0}`, `{1}`, ... filled from the
/// error's arguments. Mainly for tests and small embedders.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    templates: HashMap<String, HashMap<String, String>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, locale: &str, key: &str, template: &str) {
        self.templates
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
    }
}

impl MessageCatalog for InMemoryCatalog {
    fn lookup(&self, key: &str, arguments: &[Value], locale: &str) -> Option<String> {
        let template = self.templates.get(locale)?.get(key)?;
        Some(fill_arguments(template, arguments))
    }
}

// Single pass over the template: substituted argument text is emitted
// verbatim, never rescanned for placeholders. Braces that do not form a
// known `{index}` placeholder are kept literally.
fn fill_arguments(template: &str, arguments: &[Value]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        message.push_str(head);

        let Some(end) = tail.find('}') else {
            message.push_str(tail);
            return message;
        };

        let argument = tail[1..end]
            .parse::<usize>()
            .ok()
            .and_then(|index| arguments.get(index));
        match argument {
            Some(argument) => {
                message.push_str(&argument_text(argument));
                rest = &tail[end + 1..];
            }
            None => {
                message.push('{');
                rest = &tail[1..];
            }
        }
    }

    message.push_str(rest);
    message
}

fn argument_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Message Resolution
// ============================================================================

/// Resolves an error's code list to display text.
///
/// The first key the catalog knows wins (codes are ordered most specific
/// first). With no hit, the error's default message is used; with no
/// default either, an unresolved-key placeholder is returned so the gap is
/// visible instead of rendering an empty string.
pub fn resolve_message(
    catalog: &dyn MessageCatalog,
    locale: &str,
    codes: &[String],
    arguments: &[Value],
    default_message: Option<&str>,
) -> String {
    for code in codes {
        if let Some(message) = catalog.lookup(code, arguments, locale) {
            return message;
        }
    }

    if let Some(message) = default_message {
        return message.to_string();
    }

    let code = codes.first().map(String::as_str).unwrap_or("unknown");
    warn!(code, locale, "no message found for any resolved code");
    format!("??{}??", code)
}

pub fn field_error_message(
    catalog: &dyn MessageCatalog,
    locale: &str,
    error: &FieldError,
) -> String {
    resolve_message(
        catalog,
        locale,
        &error.codes,
        &error.arguments,
        error.default_message.as_deref(),
    )
}

pub fn object_error_message(
    catalog: &dyn MessageCatalog,
    locale: &str,
    error: &ObjectError,
) -> String {
    resolve_message(
        catalog,
        locale,
        &error.codes,
        &error.arguments,
        error.default_message.as_deref(),
    )
}
