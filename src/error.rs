//! Error types for the projection engine.
//!
//! All errors surfaced by this crate are represented by the `PetError`
//! enum. Absence of a regression model is normally signaled with `None`;
//! `PetError::NoModelAvailable` exists for callers that want a `Result`.

use crate::entity_id::EntityId;
use crate::stat::StatKind;
use thiserror::Error;

/// Errors that can occur while building, querying or importing pet data.
///
/// # Examples
///
/// ```rust
/// use petstat::{EntityId, PetError, StatKind};
///
/// let err = PetError::NoModelAvailable {
///     entity: EntityId::from_str("Slime"),
///     stat: StatKind::Damage,
/// };
/// assert_eq!(err.to_string(), "No model available for Slime (damage)");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PetError {
    /// An entity name was empty or only whitespace.
    #[error("Entity name must not be empty")]
    EmptyName,

    /// A level was not a positive integer.
    ///
    /// Contains the offending input as text.
    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    /// A stat value was not a finite number.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The entity has neither a formula nor enough distinct samples
    /// to fit a model for the requested stat.
    #[error("No model available for {entity} ({stat})")]
    NoModelAvailable { entity: EntityId, stat: StatKind },

    /// An import payload did not match the expected shape.
    #[error("Malformed import: {0}")]
    MalformedImport(String),

    /// Data could not be serialized for export.
    #[error("Export failed: {0}")]
    Export(String),
}

impl PetError {
    /// Whether this error is one of the input validation kinds.
    ///
    /// Input errors are meant to be discarded or rejected by the caller
    /// before reaching the engine.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PetError::EmptyName | PetError::InvalidLevel(_) | PetError::InvalidValue(_)
        )
    }
}
