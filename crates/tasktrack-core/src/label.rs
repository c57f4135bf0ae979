use serde::{Deserialize, Serialize};

/// A named tag attachable to tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: i32,
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

/// Association row linking a task to a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskLabel {
    pub task_id: i32,
    pub label_id: i32,
}

impl TaskLabel {
    pub fn new(task_id: i32, label_id: i32) -> Self {
        Self { task_id, label_id }
    }
}
