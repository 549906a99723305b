//! Keyed-object-field reducer for `rules`, `env`, `settings`, and
//! `parserOptions`

use serde_json::Value;

use crate::compare::deep_equal;
use crate::document::{Document, as_object_field, as_object_field_mut};
use crate::result::Result;

/// `parserOptions.ecmaVersion` values at or matching this sentinel predate
/// the shared baselines and are always safe to drop.
const LEGACY_ECMA_VERSION: f64 = 2018.0;

const PARSER_OPTIONS_FIELD: &str = "parserOptions";
const ECMA_VERSION_KEY: &str = "ecmaVersion";

/// Numeric view of a value that may be stored as a number or a numeric
/// string, as `ecmaVersion` is in older hand-written configs.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Remove keys from `target[field]` whose values are structurally identical
/// to the reference's value under the same key.
///
/// Comparison is per-key and all-or-nothing: a rule configured as
/// `["error", options]` where only the severity matches the baseline is kept
/// whole. When `field` is `parserOptions`, the `ecmaVersion` key is removed
/// by numeric comparison first (legacy sentinel or reference match), since it
/// may be stored as either a number or a numeric string.
///
/// When `delete_if_empty` is set and the field ends up empty, the field
/// itself is removed. An absent field leaves the target untouched.
pub fn reduce_object_field(
    target: &mut Document,
    reference: &Document,
    field: &str,
    delete_if_empty: bool,
) -> Result<()> {
    // Validates both shapes up front; the reference borrow must end before
    // the target is borrowed mutably.
    let reference_entries = as_object_field(reference, field)?.cloned().unwrap_or_default();
    let reference_ecma_version = reference_entries
        .get(ECMA_VERSION_KEY)
        .and_then(numeric_value);

    let Some(entries) = as_object_field_mut(target, field)? else {
        return Ok(());
    };

    if field == PARSER_OPTIONS_FIELD {
        if let Some(version) = entries.get(ECMA_VERSION_KEY).and_then(numeric_value) {
            if version == LEGACY_ECMA_VERSION || Some(version) == reference_ecma_version {
                entries.remove(ECMA_VERSION_KEY);
            }
        }
    }

    let mut redundant = Vec::new();
    for (key, value) in entries.iter() {
        if let Some(reference_value) = reference_entries.get(key) {
            if deep_equal(value, reference_value) {
                redundant.push(key.clone());
            }
        }
    }

    for key in &redundant {
        entries.remove(key);
    }
    if !redundant.is_empty() {
        tracing::debug!(field, removed = redundant.len(), "removed keys covered by baseline");
    }

    if delete_if_empty && entries.is_empty() {
        target.remove(field);
    }

    Ok(())
}
