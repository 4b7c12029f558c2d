//! # notekeep-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for the notes resource
//!   (`/notes`, `/notes/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON)
//!
//! ## Dependency rule
//! Depends on `notekeep-app` (for the port trait and service) and
//! `notekeep-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
