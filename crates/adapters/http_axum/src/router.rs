//! Axum router assembly.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use notekeep_app::ports::NoteRepository;

use crate::api::notes;
use crate::api::notes::MessageBody;
use crate::error::ErrorBody;
use crate::state::AppState;

/// Methods accepted on the notes resource, advertised in the `Allow`
/// header of 405 responses.
const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, PATCH";

const INDEX_MESSAGE: &str = "Notes API - available endpoints: GET /notes, GET /notes/{id}, POST /notes, PUT /notes/{id}, DELETE /notes/{id}";

/// Build the top-level axum [`Router`].
///
/// Dispatches method + path pairs to the note handlers, answers unknown
/// resources with a JSON 404 and unsupported methods with a JSON 405.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<NR>(state: AppState<NR>) -> Router
where
    NR: NoteRepository + Send + Sync + 'static,
{
    Router::new()
        // The root answers every method with the info message, so the
        // MethodRouter falls back to the same handler.
        .route("/", get(index).fallback(index))
        .route("/health", get(health_check))
        .route(
            "/notes",
            get(notes::list::<NR>)
                .post(notes::create::<NR>)
                .put(notes::update_missing_id)
                .patch(notes::update_missing_id)
                .delete(notes::delete_missing_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/notes/{id}",
            get(notes::get::<NR>)
                .post(notes::create_with_id::<NR>)
                .put(notes::update::<NR>)
                .patch(notes::update::<NR>)
                .delete(notes::delete::<NR>)
                .fallback(method_not_allowed),
        )
        .fallback(resource_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Json<MessageBody> {
    Json(MessageBody {
        message: INDEX_MESSAGE,
    })
}

async fn health_check() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
        }),
    )
        .into_response()
}

async fn resource_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Resource not found".to_string(),
        }),
    )
        .into_response()
}
