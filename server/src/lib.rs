//! HTTP resource service for todos.
//!
//! # Overview
//! Five routes under `/api` expose list/create/update/delete over a single
//! `todos` table plus a liveness probe. Handlers hold no state of their own;
//! every request goes straight to the injected `TodoStore`.
//!
//! # Design
//! - `app` takes the store as an argument, so the binary wires in
//!   `PgTodoStore` and tests wire in `MemoryTodoStore` without a database.
//! - Request bodies are validated into typed values (`NewTodo`, `TodoPatch`)
//!   before they reach storage.
//! - Errors collapse to three responses: 400, 404 and a generic 500 whose
//!   cause is only logged.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{Config, ConfigError, DatabaseConfig};
pub use error::AppError;
pub use model::{Health, NewTodo, Todo, TodoPatch};
pub use store::{MemoryTodoStore, PgTodoStore, StoreError, TodoStore};

pub fn app(store: Arc<dyn TodoStore>) -> Router {
    Router::new()
        .route("/api/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/api/todos/{id}",
            put(routes::update_todo).delete(routes::delete_todo),
        )
        .route("/api/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: Arc<dyn TodoStore>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

pub async fn run_until<F>(
    listener: TcpListener,
    store: Arc<dyn TodoStore>,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}
