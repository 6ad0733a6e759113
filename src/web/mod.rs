//! # Web Layer
//!
//! Router construction and request handlers for the three task operations.

pub mod handlers;
pub mod state;

use axum::routing::{any, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the service router.
///
/// The delete route is method-agnostic, and the bare `/tasks/delete` and
/// `/tasks/delete/` paths are registered explicitly so a request with no id
/// segment gets the missing-id 400 rather than the router's 404 fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(handlers::list_tasks))
        .route("/task/create", post(handlers::create_task))
        .route("/tasks/delete/{id}", any(handlers::delete_task))
        .route("/tasks/delete", any(handlers::delete_task_missing_id))
        .route("/tasks/delete/", any(handlers::delete_task_missing_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
