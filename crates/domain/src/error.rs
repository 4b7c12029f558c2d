//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`NotekeepError`] via `#[from]`. Error messages double as the
//! user-facing strings in JSON error bodies, so their wording is part of
//! the API contract.

use crate::id::NoteId;

/// Top-level error enum shared by all layers.
#[derive(Debug, thiserror::Error)]
pub enum NotekeepError {
    /// A domain invariant was violated by client input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested note does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed unexpectedly.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Client-input validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `title` field was missing, null, or empty on creation.
    #[error("Title is required")]
    MissingTitle,
}

/// Lookup failure for a note identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Note not found")]
pub struct NotFoundError {
    /// The identifier that had no matching row.
    pub id: NoteId,
}
