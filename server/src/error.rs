//! Errors surfaced by the HTTP layer and their mapping to responses.
//!
//! Only three kinds reach a caller: validation (400), not found (404) and
//! storage (500). Storage failures carry a fixed per-operation message; the
//! underlying cause is logged and never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn storage(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Storage { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage { context, source } = &self {
            tracing::error!(error = %source, "{context}");
        }
        let body = json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            AppError::Validation("Title is required".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        let storage = AppError::storage("Failed to fetch todos")(StoreError::Database(
            sqlx::Error::PoolTimedOut,
        ));
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_message_hides_cause() {
        let err = AppError::storage("Failed to create todo")(StoreError::Database(
            sqlx::Error::Protocol("password authentication failed for user \"postgres\"".to_string()),
        ));
        assert_eq!(err.to_string(), "Failed to create todo");
    }
}
