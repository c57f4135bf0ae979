//! PostgreSQL storage for tasks, users and labels.

pub mod config;
mod error;
pub mod models;
pub mod repository;

// Re-exports
pub use config::DbConfig;
pub use models::TaskRecord;
pub use repository::Storage;
pub use tasktrack_core::{Error, Label, Result, Task, TaskLabel, TaskStore, User};
