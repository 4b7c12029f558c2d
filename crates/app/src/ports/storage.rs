//! Storage port — repository trait for note persistence.

use std::future::Future;

use notekeep_domain::error::NotekeepError;
use notekeep_domain::id::NoteId;
use notekeep_domain::note::{Note, NoteDraft, NotePatch};

/// Persistence operations for notes.
///
/// The store owns identifier assignment and timestamp maintenance; callers
/// only supply validated input. Implementations must keep
/// [`get_all`](NoteRepository::get_all) ordered by creation time, most
/// recent first.
pub trait NoteRepository {
    /// Insert a new note and return the store-assigned identifier.
    fn insert(&self, draft: NoteDraft) -> impl Future<Output = Result<NoteId, NotekeepError>> + Send;

    /// Fetch a single note by identifier.
    fn get_by_id(
        &self,
        id: NoteId,
    ) -> impl Future<Output = Result<Option<Note>, NotekeepError>> + Send;

    /// Fetch all notes, newest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Note>, NotekeepError>> + Send;

    /// Whether a note with the given identifier exists.
    fn exists(&self, id: NoteId) -> impl Future<Output = Result<bool, NotekeepError>> + Send;

    /// Apply the present fields of `patch` to an existing note.
    ///
    /// Callers must ensure the patch is non-empty and the note exists.
    fn apply_patch(
        &self,
        id: NoteId,
        patch: NotePatch,
    ) -> impl Future<Output = Result<(), NotekeepError>> + Send;

    /// Delete a note, returning the number of rows affected.
    fn delete(&self, id: NoteId) -> impl Future<Output = Result<u64, NotekeepError>> + Send;
}
