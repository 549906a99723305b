//! List-field reducer for `extends` and `plugins`

use serde_json::Value;

use crate::document::{Document, json_type_name};
use crate::error::PresetterError;
use crate::result::Result;

/// Coerce a scalar-or-list field into canonical list form.
///
/// Lint configs accept `"extends": "eslint:recommended"` and
/// `"extends": ["eslint:recommended"]` interchangeably; everything
/// downstream works on the list form. Absent and `null` yield an empty
/// list. Callers are expected to have validated the shape first (see
/// [`check_list_shape`]); anything else coerces to empty.
pub fn normalize_to_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(entry)) => vec![entry.clone()],
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_owned))
            .collect(),
        Some(_) => Vec::new(),
    }
}

/// Validate that `document[field]` is a string, an array of strings,
/// `null`, or absent.
fn check_list_shape(document: &Document, field: &str) -> Result<()> {
    match document.get(field) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(Value::Array(entries)) => {
            for entry in entries {
                if !entry.is_string() {
                    return Err(PresetterError::invalid_shape(
                        field,
                        "string or array of strings",
                        format!("array containing {}", json_type_name(entry)),
                    ));
                }
            }
            Ok(())
        }
        Some(other) => Err(PresetterError::invalid_shape(
            field,
            "string or array of strings",
            json_type_name(other),
        )),
    }
}

/// Merge an injected identifier into a list field and strip entries the
/// reference preset already supplies.
///
/// Steps, in order:
/// 1. normalize both sides to list form (the reference is normalized into
///    a local, the passed-in reference document is never mutated)
/// 2. prepend `insert_id` when given and not already present
/// 3. drop entries that also appear in the reference list
/// 4. stable first-occurrence de-duplication
/// 5. delete the field when `delete_if_empty` and nothing remains
///
/// Insertion happens before the reference filter, so an injected identifier
/// that also appears in the reference list gets stripped again. That
/// ordering is long-standing behavior and is kept as-is.
///
/// An absent field with no `insert_id` is left absent.
pub fn reduce_list_field(
    target: &mut Document,
    reference: &Document,
    field: &str,
    delete_if_empty: bool,
    insert_id: Option<&str>,
) -> Result<()> {
    check_list_shape(target, field)?;
    check_list_shape(reference, field)?;

    if !target.contains_key(field) && insert_id.is_none() {
        return Ok(());
    }

    let reference_entries = normalize_to_list(reference.get(field));
    let mut entries = normalize_to_list(target.get(field));

    if let Some(id) = insert_id {
        if !entries.iter().any(|entry| entry == id) {
            entries.insert(0, id.to_owned());
        }
    }

    entries.retain(|entry| !reference_entries.contains(entry));

    let mut seen = Vec::with_capacity(entries.len());
    entries.retain(|entry| {
        if seen.contains(entry) {
            false
        } else {
            seen.push(entry.clone());
            true
        }
    });

    if delete_if_empty && entries.is_empty() {
        tracing::debug!(field, "list field emptied by baseline, removing");
        target.remove(field);
    } else {
        target.insert(
            field.to_owned(),
            Value::Array(entries.into_iter().map(Value::String).collect()),
        );
    }

    Ok(())
}
