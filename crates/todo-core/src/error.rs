//! Error types for the todo service

use thiserror::Error;
use todo_types::ValidationError;

pub type Result<T> = std::result::Result<T, TodoError>;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Todo not found: {0}")]
    NotFound(i64),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl TodoError {
    pub fn storage(e: impl std::fmt::Display) -> Self {
        TodoError::StorageUnavailable(e.to_string())
    }
}
