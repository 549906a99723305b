//! Migration profiles and the orchestrator
//!
//! A profile pairs a canonical baseline document with the identifiers to
//! inject into `extends` and `plugins`. Profiles are plain immutable data:
//! they are passed into [`apply_profile`] by reference, never held as
//! process-wide state, so tests and parallel callers can each carry their
//! own without interference.

use serde::{Deserialize, Serialize};

use crate::compare::deep_equal;
use crate::document::Document;
use crate::reduce::{reduce_list_field, reduce_object_field, reduce_overrides_field};
use crate::result::Result;

/// One baseline style the migration can align a document to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Human-readable profile name, used in logs and error context
    pub name: String,

    /// The canonical baseline configuration targets are compared against
    pub reference: Document,

    /// Identifier to inject into the target's `extends` list
    pub extends_id: String,

    /// Identifier to inject into the target's `plugins` list
    pub plugins_id: String,

    /// Whether the baseline also covers `env` and `settings`, so those
    /// fields should be deduplicated as well
    pub reduce_env_and_settings: bool,
}

/// Align a document to a profile's baseline.
///
/// Runs the reducers in a fixed order — `extends`, `plugins`,
/// `parserOptions`, `overrides`, `rules`, then `env` and `settings` for
/// profiles that cover them — and finally drops the `parser` field when it
/// matches the baseline's parser. The order is load-bearing: later steps
/// read field shapes the earlier ones normalized.
///
/// The transform is idempotent: re-applying the same profile to an
/// already-migrated document changes nothing.
pub fn apply_profile(mut target: Document, profile: &Profile) -> Result<Document> {
    tracing::debug!(profile = %profile.name, "applying baseline profile");

    reduce_list_field(
        &mut target,
        &profile.reference,
        "extends",
        true,
        Some(&profile.extends_id),
    )?;
    reduce_list_field(
        &mut target,
        &profile.reference,
        "plugins",
        true,
        Some(&profile.plugins_id),
    )?;
    reduce_object_field(&mut target, &profile.reference, "parserOptions", true)?;
    reduce_overrides_field(&mut target, &profile.reference, true)?;
    reduce_object_field(&mut target, &profile.reference, "rules", true)?;

    if profile.reduce_env_and_settings {
        reduce_object_field(&mut target, &profile.reference, "env", true)?;
        reduce_object_field(&mut target, &profile.reference, "settings", true)?;
    }

    if let (Some(parser), Some(reference_parser)) =
        (target.get("parser"), profile.reference.get("parser"))
    {
        if deep_equal(parser, reference_parser) {
            target.remove("parser");
        }
    }

    Ok(target)
}
