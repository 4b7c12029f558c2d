//! # notekeep-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`NoteRepository`](notekeep_app::ports::NoteRepository)
//!   port trait defined in `notekeep-app`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `notekeep-app` (for the port trait) and `notekeep-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod note_repo;
pub mod pool;

pub use error::StorageError;
pub use note_repo::SqliteNoteRepository;
pub use pool::{Config, Database};
