//! # notekeep-domain
//!
//! Pure domain model for the notekeep notes API.
//!
//! ## Responsibilities
//! - Foundational types: the [`NoteId`](id::NoteId) identifier, error
//!   conventions, timestamps
//! - Define the **Note** entity and its creation/update input models
//! - Contain all invariant enforcement (a note is never created without a
//!   non-empty title)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod note;
pub mod time;
