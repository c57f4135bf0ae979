//! In-memory task store, used by tests and by callers that run without a
//! database.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{Error, Label, Result, Task, TaskLabel, TaskStore, User};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    labels: BTreeMap<i32, Label>,
    tasks: BTreeMap<i32, Task>,
    task_labels: BTreeSet<TaskLabel>,
    user_seq: i32,
    label_seq: i32,
    task_seq: i32,
}

impl Tables {
    fn check_user(&self, id: i32, column: &str) -> Result<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(Error::ForeignKeyViolation(format!(
                "tasks.{} = {} does not reference an existing user",
                column, id
            )))
        }
    }
}

/// Mirrors the PostgreSQL store: sequences are never reused, `opened` is
/// stamped on insert and foreign keys are checked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self, task_id: i32, author_id: i32) -> Result<Vec<Task>> {
        let tables = self.tables.read().await;
        let tasks = tables
            .tasks
            .values()
            .filter(|t| task_id == 0 || t.id == task_id)
            .filter(|t| author_id == 0 || t.author_id == author_id)
            .cloned()
            .collect();

        Ok(tasks)
    }

    async fn create_task(&self, task: &Task) -> Result<i32> {
        let mut tables = self.tables.write().await;
        tables.check_user(task.author_id, "author_id")?;
        tables.check_user(task.assigned_id, "assigned_id")?;

        let id = next_id(&mut tables.task_seq);
        let stored = Task {
            id,
            opened: Utc::now().timestamp(),
            closed: 0,
            ..task.clone()
        };
        tables.tasks.insert(id, stored);

        tracing::debug!("Created task {} in memory store", id);
        Ok(id)
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.tasks.contains_key(&task.id) {
            return Err(Error::not_found("Task", task.id));
        }
        tables.check_user(task.author_id, "author_id")?;
        tables.check_user(task.assigned_id, "assigned_id")?;

        tables.tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn delete_task(&self, id: i32) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.tasks.remove(&id).is_none() {
            return Err(Error::not_found("Task", id));
        }
        tables.task_labels.retain(|tl| tl.task_id != id);
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<i32> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.user_seq);
        tables.users.insert(
            id,
            User {
                id,
                name: user.name.clone(),
            },
        );
        Ok(id)
    }

    async fn create_label(&self, label: &Label) -> Result<i32> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.label_seq);
        tables.labels.insert(
            id,
            Label {
                id,
                name: label.name.clone(),
            },
        );
        Ok(id)
    }

    async fn create_task_label(&self, task_id: i32, label_id: i32) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.tasks.contains_key(&task_id) {
            return Err(Error::ForeignKeyViolation(format!(
                "tasks_labels.task_id = {} does not reference an existing task",
                task_id
            )));
        }
        if !tables.labels.contains_key(&label_id) {
            return Err(Error::ForeignKeyViolation(format!(
                "tasks_labels.label_id = {} does not reference an existing label",
                label_id
            )));
        }

        if !tables.task_labels.insert(TaskLabel::new(task_id, label_id)) {
            return Err(Error::UniqueViolation(format!(
                "task {} already has label {}",
                task_id, label_id
            )));
        }
        Ok(())
    }

    async fn list_tasks_by_label(&self, label: &str) -> Result<Vec<Task>> {
        let tables = self.tables.read().await;
        let label_ids: HashSet<i32> = tables
            .labels
            .values()
            .filter(|l| l.name == label)
            .map(|l| l.id)
            .collect();

        // Associations are ordered by task id first.
        let tasks = tables
            .task_labels
            .iter()
            .filter(|tl| label_ids.contains(&tl.label_id))
            .filter_map(|tl| tables.tasks.get(&tl.task_id))
            .cloned()
            .collect();

        Ok(tasks)
    }
}
