//! # Task Store
//!
//! Storage-access object for the `tasks` table. Constructed once at startup
//! around the shared [`PgPool`] and handed to the web layer through
//! application state, so there is no ambient global connection handle.
//!
//! Each operation is a single SQL statement. The pool is safe for concurrent
//! use; concurrent operations on the same row are serialized only to the
//! extent PostgreSQL serializes them. No retries, no explicit timeouts.

use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;

use crate::models::{NewTask, Task};

/// Handle to the `tasks` table
#[derive(Debug, Clone)]
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    /// Create a store around an open connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fetch all tasks.
    ///
    /// Projects `id, title, description` only; no filter, no ordering
    /// guarantee. An empty table yields an empty vec, not an error.
    pub async fn list(&self) -> Result<Vec<Task>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>("SELECT id, title, description FROM tasks")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Insert a new task.
    ///
    /// One creation instant (UTC) is computed per call and used for both
    /// `created_at` and `updated_at`; the service never touches either
    /// column again.
    pub async fn create(&self, new_task: &NewTask) -> Result<(), sqlx::Error> {
        let now = Utc::now().naive_utc();

        sqlx::query(
            "INSERT INTO tasks (title, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&new_task.title)
        .bind(&new_task.description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(title = %new_task.title, "created task");
        Ok(())
    }

    /// Delete the task with the given id, returning how many rows matched
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, rows_affected = result.rows_affected(), "deleted task");
        Ok(result.rows_affected())
    }
}
