//! Shared application state for axum handlers.

use std::sync::Arc;

use notekeep_app::ports::NoteRepository;
use notekeep_app::services::note_service::NoteService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying type itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<NR> {
    /// Note CRUD service.
    pub note_service: Arc<NoteService<NR>>,
}

impl<NR> Clone for AppState<NR> {
    fn clone(&self) -> Self {
        Self {
            note_service: Arc::clone(&self.note_service),
        }
    }
}

impl<NR> AppState<NR>
where
    NR: NoteRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(note_service: NoteService<NR>) -> Self {
        Self {
            note_service: Arc::new(note_service),
        }
    }
}
