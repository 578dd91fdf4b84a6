//! Route definitions for admin-only resources under `/admin`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{messages, overview, users};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET               /messages        -> list (?status=)
/// GET, PUT, DELETE  /messages/{id}   -> get_by_id, update_status, delete
/// GET               /overview        -> get
/// GET, POST         /users           -> list, create
/// DELETE            /users/{id}      -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::list))
        .route(
            "/messages/{id}",
            get(messages::get_by_id)
                .put(messages::update_status)
                .delete(messages::delete),
        )
        .route("/overview", get(overview::get))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", delete(users::deactivate))
}
