//! Note — the sole entity exposed by the API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{NotekeepError, ValidationError};
use crate::id::NoteId;
use crate::time::Timestamp;

/// A persisted note.
///
/// `id`, `created_at`, and `updated_at` are assigned and maintained by the
/// store; the handler never sets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for creating a note.
///
/// Carries everything the client provides on creation; the store supplies
/// the identifier and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: Option<String>,
}

impl NoteDraft {
    /// Create a builder for constructing a [`NoteDraft`].
    #[must_use]
    pub fn builder() -> NoteDraftBuilder {
        NoteDraftBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Validation`] when `title` is empty.
    pub fn validate(&self) -> Result<(), NotekeepError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NoteDraft`].
#[derive(Debug, Default)]
pub struct NoteDraftBuilder {
    title: Option<String>,
    content: Option<String>,
}

impl NoteDraftBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Consume the builder, validate, and return a [`NoteDraft`].
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Validation`] if `title` is missing or empty.
    pub fn build(self) -> Result<NoteDraft, NotekeepError> {
        let draft = NoteDraft {
            title: self.title.unwrap_or_default(),
            content: self.content,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Presence-aware request body for create and update operations.
///
/// The update contract distinguishes three states per field: key absent,
/// key present with a value, and (for `content`) key present with an
/// explicit null. `title` uses plain [`Option`] — a null title counts as
/// absent — while `content` keeps the outer [`Option`] for key presence
/// and the inner one for the value.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NotePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "presence")]
    pub content: Option<Option<String>>,
}

impl NotePatch {
    /// Whether the patch carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Marks a field as present even when its value is null.
fn presence<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
