//! # notekeep-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement:
//!   [`ports::NoteRepository`] — persistence for notes
//! - Provide the **use-case service**:
//!   [`services::note_service::NoteService`] — list, get, create, update,
//!   delete, including the decision logic around each operation (existence
//!   checks, empty-patch short-circuit, rows-affected semantics)
//!
//! ## Dependency rule
//! Depends on `notekeep-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
