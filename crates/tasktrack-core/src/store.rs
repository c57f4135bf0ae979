//! Storage trait shared by the PostgreSQL and in-memory backends.

use async_trait::async_trait;

use crate::{Label, Result, Task, User};

/// CRUD access to tasks, users, labels and task-label associations.
///
/// Every call is independent; implementations never hold a transaction open
/// across calls.
#[async_trait]
pub trait TaskStore: Send + Sync {
    // =========================================================================
    // Task operations
    // =========================================================================

    /// Lists tasks ordered by id. A filter value of 0 matches any row; both
    /// filters combine with AND.
    async fn list_tasks(&self, task_id: i32, author_id: i32) -> Result<Vec<Task>>;

    /// Inserts a task and returns its generated id. Only the author, assignee,
    /// title and content are written; `opened` and `closed` are left to the
    /// store's defaults.
    async fn create_task(&self, task: &Task) -> Result<i32>;

    /// Overwrites every writable column of the task with `task.id`.
    /// Fails with [`crate::Error::NotFound`] when no such task exists.
    async fn update_task(&self, task: &Task) -> Result<()>;

    /// Fails with [`crate::Error::NotFound`] when no such task exists.
    async fn delete_task(&self, id: i32) -> Result<()>;

    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: &User) -> Result<i32>;

    // =========================================================================
    // Label operations
    // =========================================================================

    async fn create_label(&self, label: &Label) -> Result<i32>;

    /// Links an existing task to an existing label.
    async fn create_task_label(&self, task_id: i32, label_id: i32) -> Result<()>;

    /// Lists tasks carrying the label named exactly `label`, ordered by id.
    async fn list_tasks_by_label(&self, label: &str) -> Result<Vec<Task>>;
}
