//! Result type alias for preset migration operations

use crate::error::PresetterError;

/// Standard Result type for preset migration operations
pub type Result<T> = std::result::Result<T, PresetterError>;
