use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{StoreError, TodoStore};
use crate::config::DatabaseConfig;
use crate::model::{NewTodo, Todo, TodoPatch};

const MAX_CONNECTIONS: u32 = 10;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id BIGSERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const SELECT_ALL: &str = "SELECT id, title, completed, created_at, updated_at \
     FROM todos ORDER BY created_at DESC, id DESC";

const INSERT: &str = "INSERT INTO todos (title) VALUES ($1) \
     RETURNING id, title, completed, created_at, updated_at";

// NULL parameters keep the stored value, so one statement covers every
// combination of supplied fields.
const UPDATE: &str = "UPDATE todos SET \
         title = COALESCE($1, title), \
         completed = COALESCE($2, completed), \
         updated_at = NOW() \
     WHERE id = $3 \
     RETURNING id, title, completed, created_at, updated_at";

const DELETE: &str = "DELETE FROM todos WHERE id = $1";

/// PostgreSQL-backed store. Each call borrows one pooled connection for a
/// single statement.
#[derive(Clone, Debug)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a lazily-connecting pool; no connection is attempted until the
    /// first query.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy_with(config.connect_options());
        Self::new(pool)
    }

    /// Create the `todos` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn create(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(INSERT)
            .bind(todo.title)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<Todo>, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(UPDATE)
            .bind(patch.title)
            .bind(patch.completed)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
