//! Presetter Core
//!
//! Core engine for migrating lint-configuration documents onto shared
//! baseline presets. Given a user-owned configuration document and a
//! canonical baseline, it injects the preset references (`extends` /
//! `plugins` identifiers) and strips every field, list entry, or nested key
//! that the baseline already supplies verbatim.
//!
//! The crate is deliberately filesystem-free: callers parse documents,
//! decide which ones to migrate, and write the results back. Each call to
//! [`apply_profile`] transforms exactly one document against one
//! [`Profile`], holds no state across calls, and is safe to run from any
//! number of threads on disjoint documents.
//!
//! ```
//! use presetter_core::{apply_profile, presets};
//! use serde_json::json;
//!
//! let document = json!({
//!     "extends": ["eslint:recommended"],
//!     "rules": {"no-console": "warn", "eqeqeq": "error"}
//! });
//! let migrated = apply_profile(
//!     document.as_object().unwrap().clone(),
//!     &presets::typescript_baseline(),
//! )
//! .unwrap();
//!
//! // The baseline supplies both, so only the unmatched rule survives.
//! assert_eq!(
//!     migrated.get("extends").unwrap(),
//!     &json!(["plugin:@presetter/typescript"])
//! );
//! assert_eq!(migrated.get("rules").unwrap(), &json!({"eqeqeq": "error"}));
//! ```

pub mod compare;
pub mod document;
pub mod error;
pub mod presets;
pub mod profile;
pub mod reduce;
pub mod result;

// Re-export commonly used types
pub use compare::deep_equal;
pub use document::Document;
pub use error::{ErrorKind, PresetterError};
pub use profile::{Profile, apply_profile};
pub use reduce::{
    normalize_to_list, reduce_list_field, reduce_object_field, reduce_overrides_field,
};
pub use result::Result;
