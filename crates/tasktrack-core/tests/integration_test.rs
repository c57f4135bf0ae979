use std::sync::Arc;

use tasktrack_core::{Label, MemoryStore, Task, TaskStore, User};

async fn seeded_store() -> Arc<dyn TaskStore> {
    let store: Arc<dyn TaskStore> = Arc::new(MemoryStore::new());
    store.create_user(&User::new("user1")).await.unwrap();
    store.create_user(&User::new("user2")).await.unwrap();
    store
}

#[tokio::test]
async fn test_label_scenario() {
    let store = seeded_store().await;

    let task = Task::new(1, 2, "task", "complete task");
    let task_id = store.create_task(&task).await.unwrap();

    let label = Label::new("task-label");
    let label_id = store.create_label(&label).await.unwrap();

    store.create_task_label(task_id, label_id).await.unwrap();

    let tasks = store.list_tasks_by_label(&label.name).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, task_id);
    assert!(tasks[0].same_content(&task));

    assert!(store
        .list_tasks_by_label("no-such-label")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_task_lifecycle() {
    let store = seeded_store().await;

    let task_id = store
        .create_task(&Task::new(1, 2, "task", "complete task"))
        .await
        .unwrap();

    let mut task = store.list_tasks(task_id, 0).await.unwrap().remove(0);
    task.author_id = 2;
    task.assigned_id = 1;
    task.title = "new-task".to_string();
    task.content = "update task".to_string();
    task.closed = task.opened + 60;
    store.update_task(&task).await.unwrap();

    let stored = store.list_tasks(task_id, 0).await.unwrap();
    assert_eq!(stored, vec![task.clone()]);
    assert!(stored[0].is_closed());
    assert_eq!(store.list_tasks(0, 2).await.unwrap(), vec![task]);

    store.delete_task(task_id).await.unwrap();
    assert!(store.list_tasks(task_id, 0).await.unwrap().is_empty());
    assert!(store.delete_task(task_id).await.unwrap_err().is_query());
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let store = seeded_store().await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .create_task(&Task::new(1, 2, format!("task {}", i), ""))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let tasks = store.list_tasks(0, 0).await.unwrap();
    assert_eq!(tasks.len(), 16);
    assert!(tasks.windows(2).all(|w| w[0].id < w[1].id));
}
