use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{Config, PgTodoStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let store = PgTodoStore::connect_lazy(&config.db);
    // The service still starts if the table cannot be created; requests that
    // need it will fail with 500 until the database is reachable.
    match store.init_schema().await {
        Ok(()) => tracing::info!("database initialized"),
        Err(err) => tracing::error!(error = %err, "failed to initialize database"),
    }

    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on {addr}");

    todo_server::run_until(listener, Arc::new(store), shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
