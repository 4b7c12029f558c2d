//! `SQLite` implementation of [`NoteRepository`].

use std::future::Future;

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, SqlitePool};

use notekeep_app::ports::NoteRepository;
use notekeep_domain::error::NotekeepError;
use notekeep_domain::id::NoteId;
use notekeep_domain::note::{Note, NoteDraft, NotePatch};
use notekeep_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Note`].
struct Wrapper(Note);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Note> {
        value.map(|w| w.0)
    }
}

/// Timestamps are stored in the format `CURRENT_TIMESTAMP` produces.
fn parse_timestamp(value: &str) -> Result<Timestamp, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").map(|dt| dt.and_utc())
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let content: Option<String> = row.try_get("content")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let created_at =
            parse_timestamp(&created_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let updated_at =
            parse_timestamp(&updated_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Note {
            id: NoteId::new(id),
            title,
            content,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO notes (title, content) VALUES (?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, title, content, created_at, updated_at FROM notes WHERE id = ?";
// The id tiebreak keeps newest-first deterministic for rows created within
// the same CURRENT_TIMESTAMP second.
const SELECT_ALL: &str = "SELECT id, title, content, created_at, updated_at FROM notes ORDER BY created_at DESC, id DESC";
const EXISTS: &str = "SELECT COUNT(*) FROM notes WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM notes WHERE id = ?";

/// `SQLite`-backed note repository.
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn insert(&self, draft: NoteDraft) -> impl Future<Output = Result<NoteId, NotekeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&draft.title)
                .bind(&draft.content)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(NoteId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: NoteId,
    ) -> impl Future<Output = Result<Option<Note>, NotekeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Note>, NotekeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn exists(&self, id: NoteId) -> impl Future<Output = Result<bool, NotekeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(EXISTS)
                .bind(id.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(count > 0)
        }
    }

    fn apply_patch(
        &self,
        id: NoteId,
        patch: NotePatch,
    ) -> impl Future<Output = Result<(), NotekeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut builder = QueryBuilder::new("UPDATE notes SET ");
            let mut fields = builder.separated(", ");
            if let Some(title) = patch.title {
                fields.push("title = ");
                fields.push_bind_unseparated(title);
            }
            if let Some(content) = patch.content {
                fields.push("content = ");
                fields.push_bind_unseparated(content);
            }
            fields.push("updated_at = CURRENT_TIMESTAMP");
            builder.push(" WHERE id = ");
            builder.push_bind(id.as_i64());

            builder
                .build()
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(&self, id: NoteId) -> impl Future<Output = Result<u64, NotekeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteNoteRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteNoteRepository::new(db.pool().clone())
    }

    fn draft(title: &str, content: Option<&str>) -> NoteDraft {
        let mut builder = NoteDraft::builder().title(title);
        if let Some(content) = content {
            builder = builder.content(content);
        }
        builder.build().unwrap()
    }

    fn patch(json: &str) -> NotePatch {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_note() {
        let repo = setup().await;

        let id = repo.insert(draft("Groceries", Some("milk"))).await.unwrap();

        let note = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(note.id, id);
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content.as_deref(), Some("milk"));
    }

    #[tokio::test]
    async fn should_assign_sequential_ids() {
        let repo = setup().await;

        let first = repo.insert(draft("a", None)).await.unwrap();
        let second = repo.insert(draft("b", None)).await.unwrap();

        assert!(second.as_i64() > first.as_i64());
    }

    #[tokio::test]
    async fn should_store_null_content_when_absent() {
        let repo = setup().await;
        let id = repo.insert(draft("Hi", None)).await.unwrap();

        let note = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(note.content.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_note_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(NoteId::new(123)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_notes_newest_first() {
        let repo = setup().await;
        let first = repo.insert(draft("first", None)).await.unwrap();
        let second = repo.insert(draft("second", None)).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second);
        assert_eq!(all[1].id, first);
    }

    #[tokio::test]
    async fn should_report_existence() {
        let repo = setup().await;
        let id = repo.insert(draft("Hi", None)).await.unwrap();

        assert!(repo.exists(id).await.unwrap());
        assert!(!repo.exists(NoteId::new(999)).await.unwrap());
    }

    #[tokio::test]
    async fn should_apply_title_only_patch() {
        let repo = setup().await;
        let id = repo.insert(draft("Hi", Some("body"))).await.unwrap();

        repo.apply_patch(id, patch(r#"{"title": "Hello"}"#))
            .await
            .unwrap();

        let note = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(note.title, "Hello");
        assert_eq!(note.content.as_deref(), Some("body"));
    }

    #[tokio::test]
    async fn should_apply_content_only_patch() {
        let repo = setup().await;
        let id = repo.insert(draft("Hi", None)).await.unwrap();

        repo.apply_patch(id, patch(r#"{"content": "body"}"#))
            .await
            .unwrap();

        let note = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(note.title, "Hi");
        assert_eq!(note.content.as_deref(), Some("body"));
    }

    #[tokio::test]
    async fn should_clear_content_with_explicit_null() {
        let repo = setup().await;
        let id = repo.insert(draft("Hi", Some("body"))).await.unwrap();

        repo.apply_patch(id, patch(r#"{"content": null}"#))
            .await
            .unwrap();

        let note = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(note.content.is_none());
    }

    #[tokio::test]
    async fn should_apply_both_fields() {
        let repo = setup().await;
        let id = repo.insert(draft("Hi", None)).await.unwrap();

        repo.apply_patch(id, patch(r#"{"title": "Hello", "content": "body"}"#))
            .await
            .unwrap();

        let note = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(note.title, "Hello");
        assert_eq!(note.content.as_deref(), Some("body"));
    }

    #[tokio::test]
    async fn should_count_deleted_rows() {
        let repo = setup().await;
        let id = repo.insert(draft("Hi", None)).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }
}
