//! Storage seam for todo records.
//!
//! Handlers only ever see `Arc<dyn TodoStore>`; the binary injects a
//! `PgTodoStore`, tests inject a `MemoryTodoStore` or their own double.

mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{NewTodo, Todo, TodoPatch};

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, newest `created_at` first, ties broken by higher id first.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Insert a todo; id and both timestamps are assigned by the store.
    async fn create(&self, todo: NewTodo) -> Result<Todo, StoreError>;

    /// Apply `patch` and refresh `updated_at`. `Ok(None)` if `id` is unknown.
    async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<Todo>, StoreError>;

    /// Remove a todo. Returns whether a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
