//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::EntityKind;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Entity not found in the persistence collaborator or the in-memory store
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Storage layer error (rejected write, connectivity)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An expiry or purchase date that cannot be parsed
    #[error("Malformed date in {field}: {value:?}")]
    MalformedDate { field: String, value: String },

    /// No active session
    #[error("Not authenticated")]
    Unauthenticated,
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. }
            | Self::ValidationError(_)
            | Self::MalformedDate { .. }
            | Self::Unauthenticated => true,
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// Whether the error came out of a persistence round-trip.
    ///
    /// These are surfaced to the user as a non-fatal notification and never retried.
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::StorageError(_)
                | Self::ValidationError(_)
                | Self::SerializationError(_)
        )
    }

    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
