//! # Taskboard
//!
//! Minimal task-management HTTP service backed by a PostgreSQL `tasks` table.
//!
//! Three operations, each a single SQL statement translated into an HTTP
//! response: list all tasks, create a task, delete a task by id. The server
//! binary lives in `src/bin/server.rs`; everything else is library code so
//! the router can be exercised directly in tests.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod web;

pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use errors::{ApiError, ApiResult};
pub use models::{NewTask, Task};
pub use store::TaskStore;
