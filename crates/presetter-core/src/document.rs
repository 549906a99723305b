//! Lint-configuration document model
//!
//! A configuration document is an untyped, order-preserving JSON object as
//! parsed by the collaborator I/O layer. This module provides the `Document`
//! alias plus the narrow set of shape checks the reducers rely on, so that
//! hand-authored documents with wrong-typed fields fail fast instead of
//! being silently transformed.
//!
//! Recognized top-level fields: `extends`, `plugins`, `parser`,
//! `parserOptions`, `rules`, `env`, `settings`, `overrides`. Everything else
//! passes through the migration untouched.

use serde_json::{Map, Value};

use crate::error::PresetterError;
use crate::result::Result;

/// An order-preserving lint-configuration document.
///
/// Field order matters for hand-authored configs: serde_json is built with
/// `preserve_order` so the document survives a read/transform/write cycle
/// without shuffling keys.
pub type Document = Map<String, Value>;

/// Human-readable JSON type name, used in shape-error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow `document[field]` as an object, failing fast when the field is
/// present but not an object. Absent and `null` fields yield `None`.
pub fn as_object_field<'a>(document: &'a Document, field: &str) -> Result<Option<&'a Document>> {
    match document.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(PresetterError::invalid_shape(
            field,
            "object",
            json_type_name(other),
        )),
    }
}

/// Mutably borrow `document[field]` as an object, with the same shape rules
/// as [`as_object_field`].
pub fn as_object_field_mut<'a>(
    document: &'a mut Document,
    field: &str,
) -> Result<Option<&'a mut Document>> {
    // Shape check first; the match below cannot report the field name once
    // the value is mutably borrowed.
    if let Some(value) = document.get(field) {
        if !matches!(value, Value::Null | Value::Object(_)) {
            return Err(PresetterError::invalid_shape(
                field,
                "object",
                json_type_name(value),
            ));
        }
    }
    match document.get_mut(field) {
        Some(Value::Object(map)) => Ok(Some(map)),
        _ => Ok(None),
    }
}

/// Borrow `document[field]` as an array of objects (the shape of
/// `overrides`), failing fast on a non-array field or a non-object entry.
/// Absent and `null` fields yield `None`.
pub fn as_object_array_field<'a>(
    document: &'a Document,
    field: &str,
) -> Result<Option<&'a Vec<Value>>> {
    match document.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(entries)) => {
            for entry in entries {
                if !entry.is_object() {
                    return Err(PresetterError::invalid_shape(
                        field,
                        "array of objects",
                        format!("array containing {}", json_type_name(entry)),
                    ));
                }
            }
            Ok(Some(entries))
        }
        Some(other) => Err(PresetterError::invalid_shape(
            field,
            "array of objects",
            json_type_name(other),
        )),
    }
}
