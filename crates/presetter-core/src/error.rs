//! Error types and handling for preset migration operations

use thiserror::Error;

/// Main error type for preset migration operations
#[derive(Debug, Error)]
pub enum PresetterError {
    /// A recognized field is present but has the wrong shape
    /// (e.g. `rules` is not an object, `overrides` contains a non-object entry)
    #[error("Invalid document shape: field '{field}' expected {expected}, found {found}")]
    InvalidDocumentShape {
        field: String,
        expected: String,
        found: String,
    },

    /// Profile definition errors (missing reference fields, bad identifiers)
    #[error("Profile error in '{profile}': {message}")]
    ProfileError { profile: String, message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DocumentShape,
    Profile,
    Internal,
}

impl PresetterError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PresetterError::InvalidDocumentShape { .. } => ErrorKind::DocumentShape,
            PresetterError::ProfileError { .. } => ErrorKind::Profile,
            PresetterError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Check if this error is recoverable (the caller can continue with other documents)
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::DocumentShape)
    }

    /// Create an invalid-shape error for a document field
    pub fn invalid_shape(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidDocumentShape {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a profile error
    pub fn profile_error(profile: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProfileError {
            profile: profile.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
