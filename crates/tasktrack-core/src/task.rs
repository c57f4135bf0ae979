use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work. `opened` and `closed` are epoch seconds where 0 means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub opened: i64,
    pub closed: i64,
    pub author_id: i32,
    pub assigned_id: i32,
    pub title: String,
    pub content: String,
}

impl Task {
    /// Builds a task that has not been stored yet. The id and timestamps are
    /// left at 0 for the store to fill in.
    pub fn new(
        author_id: i32,
        assigned_id: i32,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            opened: 0,
            closed: 0,
            author_id,
            assigned_id,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed != 0
    }

    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.opened)
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.closed)
    }

    /// Compares everything a caller writes on insert, ignoring the id and the
    /// server-assigned timestamps.
    pub fn same_content(&self, other: &Task) -> bool {
        self.author_id == other.author_id
            && self.assigned_id == other.assigned_id
            && self.title == other.title
            && self.content == other.content
    }
}

fn epoch_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    Utc.timestamp_opt(secs, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_unstored() {
        let task = Task::new(1, 2, "task", "complete task");

        assert_eq!(task.id, 0);
        assert_eq!(task.opened, 0);
        assert!(!task.is_closed());
        assert!(task.opened_at().is_none());
        assert!(task.closed_at().is_none());
    }

    #[test]
    fn test_timestamps() {
        let mut task = Task::new(1, 2, "task", "complete task");
        task.opened = 1_700_000_000;
        task.closed = 1_700_003_600;

        assert!(task.is_closed());
        assert_eq!(task.opened_at().map(|t| t.timestamp()), Some(1_700_000_000));
        assert_eq!(
            task.closed_at().unwrap() - task.opened_at().unwrap(),
            chrono::Duration::hours(1)
        );
    }

    #[test]
    fn test_same_content_ignores_server_fields() {
        let written = Task::new(1, 2, "task", "complete task");
        let mut stored = written.clone().with_id(10);
        stored.opened = 1_700_000_000;

        assert!(written.same_content(&stored));

        stored.title = "other".to_string();
        assert!(!written.same_content(&stored));
    }

    #[test]
    fn test_json_field_names() {
        let task = Task::new(1, 2, "task", "complete task").with_id(3);
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["author_id"], 1);
        assert_eq!(value["assigned_id"], 2);
        assert_eq!(value["closed"], 0);
    }
}
