use crate::{
    config::DbConfig,
    error::{connection_error, query_error},
    models::TaskRecord,
};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tasktrack_core::{Error, Label, Result, Task, TaskStore, User};

/// PostgreSQL-backed store. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct Storage {
    pool: PgPool,
}

impl Storage {
    /// Connect to the database at `database_url` with default pool settings.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .connect(database_url)
            .await
            .map_err(connection_error)?;

        tracing::info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    pub async fn from_config(config: &DbConfig) -> Result<Self> {
        let options = config.connect_options()?;
        let pool = PgPoolOptions::new()
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        tracing::info!("Connected to PostgreSQL at {}:{}", config.host, config.port);
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ========================================================================
    // Task Operations
    // ========================================================================

    /// List tasks ordered by id; 0 disables a filter
    pub async fn list_tasks(&self, task_id: i32, author_id: i32) -> Result<Vec<Task>> {
        tracing::debug!("Listing tasks (task_id={}, author_id={})", task_id, author_id);

        let records = sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT id, opened, closed, author_id, assigned_id, title, content
            FROM tasks
            WHERE
                ($1 = 0 OR id = $1) AND
                ($2 = 0 OR author_id = $2)
            ORDER BY id
            "#,
        )
        .bind(task_id)
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(records.into_iter().map(Task::from).collect())
    }

    /// Create task and return its id
    pub async fn create_task(&self, task: &Task) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO tasks (author_id, assigned_id, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(task.author_id)
        .bind(task.assigned_id)
        .bind(&task.title)
        .bind(&task.content)
        .fetch_one(&self.pool)
        .await
        .map_err(query_error)?;

        tracing::debug!("Created task {}", id);
        Ok(id)
    }

    /// Overwrite all writable columns of an existing task
    pub async fn update_task(&self, task: &Task) -> Result<()> {
        sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE tasks
            SET opened = $1, closed = $2, author_id = $3, assigned_id = $4, title = $5, content = $6
            WHERE id = $7
            RETURNING id
            "#,
        )
        .bind(task.opened)
        .bind(task.closed)
        .bind(task.author_id)
        .bind(task.assigned_id)
        .bind(&task.title)
        .bind(&task.content)
        .bind(task.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?
        .ok_or_else(|| Error::not_found("Task", task.id))?;

        tracing::debug!("Updated task {}", task.id);
        Ok(())
    }

    /// Delete task by id
    pub async fn delete_task(&self, id: i32) -> Result<()> {
        sqlx::query_scalar::<_, i32>("DELETE FROM tasks WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?
            .ok_or_else(|| Error::not_found("Task", id))?;

        tracing::debug!("Deleted task {}", id);
        Ok(())
    }

    // ========================================================================
    // User Operations
    // ========================================================================

    pub async fn create_user(&self, user: &User) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>("INSERT INTO users (name) VALUES ($1) RETURNING id")
            .bind(&user.name)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        tracing::debug!("Created user {}", id);
        Ok(id)
    }

    // ========================================================================
    // Label Operations
    // ========================================================================

    pub async fn create_label(&self, label: &Label) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>("INSERT INTO labels (name) VALUES ($1) RETURNING id")
            .bind(&label.name)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        tracing::debug!("Created label {} ({})", id, label.name);
        Ok(id)
    }

    /// Attach a label to a task
    pub async fn create_task_label(&self, task_id: i32, label_id: i32) -> Result<()> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO tasks_labels (task_id, label_id)
            VALUES ($1, $2)
            RETURNING task_id
            "#,
        )
        .bind(task_id)
        .bind(label_id)
        .fetch_one(&self.pool)
        .await
        .map_err(query_error)?;

        tracing::debug!("Attached label {} to task {}", label_id, task_id);
        Ok(())
    }

    /// List tasks carrying the label with exactly this name
    pub async fn list_tasks_by_label(&self, label: &str) -> Result<Vec<Task>> {
        tracing::debug!("Listing tasks with label {}", label);

        let records = sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT t.id, t.opened, t.closed, t.author_id, t.assigned_id, t.title, t.content
            FROM labels l
            INNER JOIN tasks_labels tl ON tl.label_id = l.id
            INNER JOIN tasks t ON t.id = tl.task_id
            WHERE l.name = $1
            ORDER BY t.id
            "#,
        )
        .bind(label)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(records.into_iter().map(Task::from).collect())
    }
}

#[async_trait]
impl TaskStore for Storage {
    async fn list_tasks(&self, task_id: i32, author_id: i32) -> Result<Vec<Task>> {
        Storage::list_tasks(self, task_id, author_id).await
    }

    async fn create_task(&self, task: &Task) -> Result<i32> {
        Storage::create_task(self, task).await
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        Storage::update_task(self, task).await
    }

    async fn delete_task(&self, id: i32) -> Result<()> {
        Storage::delete_task(self, id).await
    }

    async fn create_user(&self, user: &User) -> Result<i32> {
        Storage::create_user(self, user).await
    }

    async fn create_label(&self, label: &Label) -> Result<i32> {
        Storage::create_label(self, label).await
    }

    async fn create_task_label(&self, task_id: i32, label_id: i32) -> Result<()> {
        Storage::create_task_label(self, task_id, label_id).await
    }

    async fn list_tasks_by_label(&self, label: &str) -> Result<Vec<Task>> {
        Storage::list_tasks_by_label(self, label).await
    }
}
