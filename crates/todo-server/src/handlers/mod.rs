//! HTTP handlers

pub mod health;
pub mod todos;

pub use health::health;

use axum::http::StatusCode;
use todo_core::TodoError;

/// Map a store error to the bare status code returned to the client.
pub(crate) fn error_status(err: TodoError) -> StatusCode {
    match err {
        TodoError::Validation(e) => {
            tracing::debug!("Rejected input: {}", e);
            StatusCode::BAD_REQUEST
        }
        TodoError::NotFound(_) => StatusCode::NOT_FOUND,
        TodoError::StorageUnavailable(e) => {
            tracing::error!("Storage error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
