use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasktrack_core::Task;

/// Row shape of the `tasks` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskRecord {
    pub id: i32,
    pub opened: i64,
    pub closed: i64,
    pub author_id: i32,
    pub assigned_id: i32,
    pub title: String,
    pub content: String,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task {
            id: record.id,
            opened: record.opened,
            closed: record.closed,
            author_id: record.author_id,
            assigned_id: record.assigned_id,
            title: record.title,
            content: record.content,
        }
    }
}
