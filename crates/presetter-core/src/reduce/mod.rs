//! Field-level reducers
//!
//! Each reducer is an independent in-place transform of one recognized
//! field on a (target, reference) document pair. There is no shared engine
//! state; any order-sensitivity lives inside a single reducer, and the
//! orchestrator in [`crate::profile`] fixes the sequence in which they run.

mod list;
mod object;
mod overrides;

pub use list::{normalize_to_list, reduce_list_field};
pub use object::reduce_object_field;
pub use overrides::reduce_overrides_field;
