use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::model::{NewTodo, Todo, TodoPatch};

/// In-process store with the same ordering, id and timestamp rules as the
/// PostgreSQL table. Used where a database is not available, chiefly tests.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        let mut todos: Vec<Todo> = inner.todos.values().cloned().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(todos)
    }

    async fn create(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: inner.last_id,
            title: todo.title,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<Todo>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(todo) = inner.todos.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now().max(todo.created_at);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.todos.remove(&id).is_some())
    }
}
