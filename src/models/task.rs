//! # Task Model
//!
//! The persisted entity representing one to-do item, plus the create
//! payload. Tasks have no in-memory life between requests; every row is
//! rehydrated from storage via `sqlx::FromRow`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row as served to clients.
///
/// `id` is assigned by PostgreSQL (`serial`) on insert, is immutable, and is
/// never reused after deletion. `created_at` and `updated_at` are written
/// once at creation with the same instant; no operation modifies them
/// afterward. The list projection loads only `id`, `title`, and
/// `description`, so the timestamp fields stay `None` on that path and
/// serialize as `null`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[sqlx(default)]
    pub created_at: Option<NaiveDateTime>,
    #[sqlx(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create-operation payload.
///
/// Both fields default to the empty string when absent, and unknown fields
/// (`id`, timestamps) are ignored. Field validation beyond type coercion is
/// out of scope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
