//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod notes;
