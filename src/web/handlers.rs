//! # Request Handlers
//!
//! One handler per operation. Each performs a single statement through the
//! [`TaskStore`](crate::store::TaskStore) and translates the outcome into an
//! HTTP response; there is no state carried between requests.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::state::AppState;
use crate::errors::{ApiError, ApiResult};
use crate::models::NewTask;

/// `GET /tasks`: all tasks as a JSON array (empty table yields `[]`)
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let tasks = state.store.list().await?;
    Ok(Json(tasks))
}

/// `POST /task/create`: insert one task from a JSON body.
///
/// The rejection is handled explicitly so an unparseable body maps to 400
/// with the rejection message (axum's default for deserialization failures
/// is 422).
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(new_task) = payload.map_err(|rejection| ApiError::malformed(rejection.body_text()))?;

    state.store.create(&new_task).await?;
    Ok(StatusCode::CREATED)
}

/// `/tasks/delete/{id}` (any method): delete by id, respond with the id as
/// text.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_task_id(&segment)?;

    let rows_affected = state.store.delete(id).await?;
    if rows_affected == 0 {
        return Err(ApiError::NotFound { id });
    }

    Ok((StatusCode::OK, id.to_string()))
}

/// `/tasks/delete` and `/tasks/delete/`: the id segment is absent entirely
pub async fn delete_task_missing_id() -> ApiError {
    ApiError::malformed("id parameter is missing")
}

/// Parse the final path segment of a delete request into a task id.
///
/// An empty segment is reported as missing; anything that is not a plain
/// decimal integer (optionally signed) is invalid. Whitespace is not
/// trimmed.
pub fn parse_task_id(segment: &str) -> Result<i32, ApiError> {
    if segment.is_empty() {
        return Err(ApiError::malformed("id parameter is missing"));
    }

    segment
        .parse::<i32>()
        .map_err(|_| ApiError::malformed("invalid id parameter"))
}
