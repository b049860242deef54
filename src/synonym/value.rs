//! Validation of untyped JSON values at the API boundary.
//!
//! The typed API cannot receive a non-string term, but callers that build
//! groups from configuration or wire data hand over a [`serde_json::Value`]
//! whose shape is only known at runtime. These helpers check that shape up
//! front and report [`SynspaceError::TypeKind`] naming what was found.

use serde_json::Value;

use crate::error::{Result, SynspaceError};

/// Name of the JSON kind of `value`, used in error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow `value` as a string term.
pub fn as_term(value: &Value) -> Result<&str> {
    value.as_str().ok_or_else(|| {
        SynspaceError::type_kind(format!(
            "expected a string term, found {} ({})",
            kind_name(value),
            value
        ))
    })
}

/// Borrow `value` as a sequence of values.
pub fn as_sequence(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(SynspaceError::type_kind(format!(
            "expected an array, found {}",
            kind_name(other)
        ))),
    }
}

/// Collect a JSON array of strings into owned terms.
///
/// Every element is checked before anything is returned, so a caller that
/// mutates on success never applies a partial input.
pub fn as_terms(value: &Value) -> Result<Vec<String>> {
    as_sequence(value)?
        .iter()
        .map(|item| as_term(item).map(str::to_owned))
        .collect()
}
