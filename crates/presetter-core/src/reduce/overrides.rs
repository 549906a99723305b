//! Overrides-block reducer for the `overrides` array

use serde_json::Value;

use crate::compare::deep_equal;
use crate::document::{Document, as_object_array_field};
use crate::result::Result;

const OVERRIDES_FIELD: &str = "overrides";

/// Drop override blocks that the baseline's own `overrides` already cover.
///
/// A no-op unless both the target's and the reference's `overrides` are
/// non-empty arrays of objects. When both are present, target blocks are
/// matched against every reference block by whole-block structural equality.
///
/// The filter keeps the behavior existing migrations were produced with:
/// blocks without a baseline counterpart are dropped along with the
/// duplicated ones, so a target that had any `overrides` ends up with none
/// once the reducer runs at all. The emptied field is then removed; the
/// `_delete_if_empty` flag is accepted for signature parity with the other
/// reducers but has never been consulted here.
pub fn reduce_overrides_field(
    target: &mut Document,
    reference: &Document,
    _delete_if_empty: bool,
) -> Result<()> {
    let reference_blocks = match as_object_array_field(reference, OVERRIDES_FIELD)? {
        Some(blocks) if !blocks.is_empty() => blocks.clone(),
        _ => return Ok(()),
    };
    match as_object_array_field(target, OVERRIDES_FIELD)? {
        Some(blocks) if !blocks.is_empty() => {}
        _ => return Ok(()),
    }

    let Some(Value::Array(blocks)) = target.get_mut(OVERRIDES_FIELD) else {
        return Ok(());
    };

    blocks.retain(|block| {
        if reference_blocks
            .iter()
            .any(|reference_block| deep_equal(block, reference_block))
        {
            tracing::debug!("dropping override block duplicated in baseline");
            false
        } else {
            // Historical behavior: unmatched blocks are dropped too.
            false
        }
    });

    if blocks.is_empty() {
        target.remove(OVERRIDES_FIELD);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_duplicated_block_removed() {
        let mut target = doc(json!({
            "overrides": [{"files": ["*.tsx"], "rules": {"x": 1}}]
        }));
        let reference = doc(json!({
            "overrides": [{"files": ["*.tsx"], "rules": {"x": 1}}]
        }));

        reduce_overrides_field(&mut target, &reference, true).unwrap();

        assert!(!target.contains_key("overrides"));
    }

    #[test]
    fn test_unmatched_block_also_removed() {
        // Parity with existing installations: once both sides have
        // overrides, non-matching target blocks go too.
        let mut target = doc(json!({
            "overrides": [{"files": ["*.test.ts"], "rules": {"y": "off"}}]
        }));
        let reference = doc(json!({
            "overrides": [{"files": ["*.tsx"], "rules": {"x": 1}}]
        }));

        reduce_overrides_field(&mut target, &reference, true).unwrap();

        assert!(!target.contains_key("overrides"));
    }

    #[test]
    fn test_noop_when_reference_has_no_overrides() {
        let mut target = doc(json!({
            "overrides": [{"files": ["*.tsx"], "rules": {"x": 1}}]
        }));
        let reference = doc(json!({"rules": {}}));

        reduce_overrides_field(&mut target, &reference, true).unwrap();

        assert_eq!(
            target.get("overrides"),
            Some(&json!([{"files": ["*.tsx"], "rules": {"x": 1}}]))
        );
    }

    #[test]
    fn test_noop_when_either_side_empty() {
        let mut target = doc(json!({"overrides": []}));
        let reference = doc(json!({"overrides": [{"files": ["*.ts"]}]}));

        reduce_overrides_field(&mut target, &reference, true).unwrap();
        assert_eq!(target.get("overrides"), Some(&json!([])));

        let mut target = doc(json!({"overrides": [{"files": ["*.ts"]}]}));
        let reference = doc(json!({"overrides": []}));

        reduce_overrides_field(&mut target, &reference, true).unwrap();
        assert_eq!(target.get("overrides"), Some(&json!([{"files": ["*.ts"]}])));
    }

    #[test]
    fn test_absent_field_untouched() {
        let mut target = doc(json!({"rules": {}}));
        let reference = doc(json!({"overrides": [{"files": ["*.ts"]}]}));

        reduce_overrides_field(&mut target, &reference, true).unwrap();

        assert!(!target.contains_key("overrides"));
    }

    #[test]
    fn test_non_object_entry_fails_fast() {
        let mut target = doc(json!({"overrides": ["*.ts"]}));
        let reference = doc(json!({"overrides": [{"files": ["*.ts"]}]}));

        let err = reduce_overrides_field(&mut target, &reference, true).unwrap_err();
        assert!(err.to_string().contains("'overrides'"));
    }
}
