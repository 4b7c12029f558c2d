//! Note service — use-cases for the notes resource.

use notekeep_domain::error::{NotFoundError, NotekeepError};
use notekeep_domain::id::NoteId;
use notekeep_domain::note::{Note, NoteDraft, NotePatch};

use crate::ports::NoteRepository;

/// Result of an update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// At least one field was applied to the stored row.
    Updated,
    /// The patch carried no fields; the store was not touched.
    NothingToUpdate,
}

/// Application service for note CRUD operations.
pub struct NoteService<R> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all notes, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_notes(&self) -> Result<Vec<Note>, NotekeepError> {
        self.repo.get_all().await
    }

    /// Look up a note by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::NotFound`] when no note with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_note(&self, id: NoteId) -> Result<Note, NotekeepError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Create a note from a request body, returning the assigned id.
    ///
    /// A null title counts as missing, matching the presence semantics of
    /// [`NotePatch`].
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Validation`] when the title is missing or
    /// empty, or a storage error from the repository.
    pub async fn create_note(&self, body: NotePatch) -> Result<NoteId, NotekeepError> {
        let mut builder = NoteDraft::builder().title(body.title.unwrap_or_default());
        if let Some(content) = body.content.flatten() {
            builder = builder.content(content);
        }
        let draft = builder.build()?;
        self.repo.insert(draft).await
    }

    /// Apply the present fields of `patch` to an existing note.
    ///
    /// Fields absent from the patch are left untouched; an explicit null
    /// `content` clears the column. An empty patch returns
    /// [`UpdateOutcome::NothingToUpdate`] without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::NotFound`] when no note with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_note(
        &self,
        id: NoteId,
        patch: NotePatch,
    ) -> Result<UpdateOutcome, NotekeepError> {
        if !self.repo.exists(id).await? {
            return Err(NotFoundError { id }.into());
        }
        if patch.is_empty() {
            return Ok(UpdateOutcome::NothingToUpdate);
        }
        self.repo.apply_patch(id, patch).await?;
        Ok(UpdateOutcome::Updated)
    }

    /// Delete a note by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::NotFound`] when the delete affected zero
    /// rows, or a storage error from the repository.
    pub async fn delete_note(&self, id: NoteId) -> Result<(), NotekeepError> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(NotFoundError { id }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notekeep_domain::error::ValidationError;
    use notekeep_domain::time;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryNoteRepo {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        next_id: i64,
        store: BTreeMap<i64, Note>,
    }

    impl NoteRepository for InMemoryNoteRepo {
        fn insert(
            &self,
            draft: NoteDraft,
        ) -> impl Future<Output = Result<NoteId, NotekeepError>> + Send {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            let id = NoteId::new(inner.next_id);
            let now = time::now();
            inner.store.insert(
                id.as_i64(),
                Note {
                    id,
                    title: draft.title,
                    content: draft.content,
                    created_at: now,
                    updated_at: now,
                },
            );
            async move { Ok(id) }
        }

        fn get_by_id(
            &self,
            id: NoteId,
        ) -> impl Future<Output = Result<Option<Note>, NotekeepError>> + Send {
            let inner = self.inner.lock().unwrap();
            let result = inner.store.get(&id.as_i64()).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Note>, NotekeepError>> + Send {
            let inner = self.inner.lock().unwrap();
            let mut result: Vec<Note> = inner.store.values().cloned().collect();
            result.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then(b.id.as_i64().cmp(&a.id.as_i64()))
            });
            async { Ok(result) }
        }

        fn exists(&self, id: NoteId) -> impl Future<Output = Result<bool, NotekeepError>> + Send {
            let inner = self.inner.lock().unwrap();
            let result = inner.store.contains_key(&id.as_i64());
            async move { Ok(result) }
        }

        fn apply_patch(
            &self,
            id: NoteId,
            patch: NotePatch,
        ) -> impl Future<Output = Result<(), NotekeepError>> + Send {
            let mut inner = self.inner.lock().unwrap();
            if let Some(note) = inner.store.get_mut(&id.as_i64()) {
                if let Some(title) = patch.title {
                    note.title = title;
                }
                if let Some(content) = patch.content {
                    note.content = content;
                }
                note.updated_at = time::now();
            }
            async { Ok(()) }
        }

        fn delete(&self, id: NoteId) -> impl Future<Output = Result<u64, NotekeepError>> + Send {
            let mut inner = self.inner.lock().unwrap();
            let affected = u64::from(inner.store.remove(&id.as_i64()).is_some());
            async move { Ok(affected) }
        }
    }

    fn make_service() -> NoteService<InMemoryNoteRepo> {
        NoteService::new(InMemoryNoteRepo::default())
    }

    fn body(json: &str) -> NotePatch {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn should_create_note_and_get_it_back() {
        let svc = make_service();
        let id = svc.create_note(body(r#"{"title": "Hi"}"#)).await.unwrap();

        let note = svc.get_note(id).await.unwrap();
        assert_eq!(note.title, "Hi");
        assert!(note.content.is_none());
    }

    #[tokio::test]
    async fn should_reject_create_when_title_missing() {
        let svc = make_service();
        let result = svc.create_note(body("{}")).await;
        assert!(matches!(
            result,
            Err(NotekeepError::Validation(ValidationError::MissingTitle))
        ));

        let all = svc.list_notes().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_when_title_empty() {
        let svc = make_service();
        let result = svc.create_note(body(r#"{"title": ""}"#)).await;
        assert!(matches!(
            result,
            Err(NotekeepError::Validation(ValidationError::MissingTitle))
        ));
    }

    #[tokio::test]
    async fn should_reject_create_when_title_null() {
        let svc = make_service();
        let result = svc.create_note(body(r#"{"title": null}"#)).await;
        assert!(matches!(
            result,
            Err(NotekeepError::Validation(ValidationError::MissingTitle))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_note_missing() {
        let svc = make_service();
        let result = svc.get_note(NoteId::new(99)).await;
        assert!(matches!(result, Err(NotekeepError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_notes_newest_first() {
        let svc = make_service();
        let first = svc.create_note(body(r#"{"title": "first"}"#)).await.unwrap();
        let second = svc
            .create_note(body(r#"{"title": "second"}"#))
            .await
            .unwrap();

        let all = svc.list_notes().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second);
        assert_eq!(all[1].id, first);
    }

    #[tokio::test]
    async fn should_report_nothing_to_update_for_empty_patch() {
        let svc = make_service();
        let id = svc.create_note(body(r#"{"title": "Hi"}"#)).await.unwrap();

        let outcome = svc.update_note(id, body("{}")).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::NothingToUpdate);

        let note = svc.get_note(id).await.unwrap();
        assert_eq!(note.title, "Hi");
    }

    #[tokio::test]
    async fn should_update_only_present_fields() {
        let svc = make_service();
        let id = svc
            .create_note(body(r#"{"title": "Hi", "content": "body"}"#))
            .await
            .unwrap();

        let outcome = svc
            .update_note(id, body(r#"{"title": "Hello"}"#))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let note = svc.get_note(id).await.unwrap();
        assert_eq!(note.title, "Hello");
        assert_eq!(note.content.as_deref(), Some("body"));
    }

    #[tokio::test]
    async fn should_clear_content_when_patch_has_explicit_null() {
        let svc = make_service();
        let id = svc
            .create_note(body(r#"{"title": "Hi", "content": "body"}"#))
            .await
            .unwrap();

        svc.update_note(id, body(r#"{"content": null}"#))
            .await
            .unwrap();

        let note = svc.get_note(id).await.unwrap();
        assert!(note.content.is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_note() {
        let svc = make_service();
        let result = svc
            .update_note(NoteId::new(42), body(r#"{"title": "x"}"#))
            .await;
        assert!(matches!(result, Err(NotekeepError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_once_then_report_not_found() {
        let svc = make_service();
        let id = svc.create_note(body(r#"{"title": "Hi"}"#)).await.unwrap();

        svc.delete_note(id).await.unwrap();

        let result = svc.delete_note(id).await;
        assert!(matches!(result, Err(NotekeepError::NotFound(_))));
    }
}
