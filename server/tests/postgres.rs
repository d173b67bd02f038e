//! Round trips against a real PostgreSQL instance.
//!
//! Ignored by default. Run with a reachable database configured through the
//! usual `DB_*` variables:
//!
//! ```text
//! cargo test -p todo-server --test postgres -- --ignored --test-threads=1
//! ```

use todo_server::{Config, NewTodo, PgTodoStore, TodoPatch, TodoStore};

async fn store() -> PgTodoStore {
    let config = Config::from_env().unwrap();
    let store = PgTodoStore::connect_lazy(&config.db);
    store.init_schema().await.unwrap();
    sqlx::query("TRUNCATE todos RESTART IDENTITY")
        .execute(store.pool())
        .await
        .unwrap();
    store
}

fn new_todo(title: &str) -> NewTodo {
    NewTodo {
        title: title.to_string(),
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn init_schema_is_idempotent() {
    let store = store().await;
    store.init_schema().await.unwrap();
    store.init_schema().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn create_list_update_delete() {
    let store = store().await;

    let first = store.create(new_todo("first")).await.unwrap();
    let second = store.create(new_todo("second")).await.unwrap();
    assert!(second.id > first.id);
    assert!(!first.completed);
    assert_eq!(first.created_at, first.updated_at);

    let ids: Vec<i64> = store.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let patch = TodoPatch {
        title: None,
        completed: Some(true),
    };
    let updated = store.update(first.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.title, "first");
    assert!(updated.completed);
    assert_eq!(updated.created_at, first.created_at);
    assert!(updated.updated_at >= updated.created_at);

    let renamed = store
        .update(
            first.id,
            TodoPatch {
                title: Some("renamed".to_string()),
                completed: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.title, "renamed");
    assert!(renamed.completed);

    assert!(store.delete(first.id).await.unwrap());
    assert!(!store.delete(first.id).await.unwrap());
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn update_unknown_id_creates_nothing() {
    let store = store().await;
    let result = store.update(12345, TodoPatch::default()).await.unwrap();
    assert!(result.is_none());
    assert!(store.list().await.unwrap().is_empty());
}
