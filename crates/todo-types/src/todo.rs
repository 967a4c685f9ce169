//! Todo types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length, counted in characters
pub const MAX_TITLE_CHARS: usize = 500;

/// A stored todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Rejected client input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title is {len} characters, maximum is {max}")]
    TitleTooLong { len: usize, max: usize },

    #[error("title must not contain NUL characters")]
    NulInTitle,

    #[error("isCompleted is required")]
    MissingCompletion,
}

/// A todo title: 1..=500 characters, no NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = value.chars().count();
        if len == 0 {
            return Err(ValidationError::EmptyTitle);
        }
        if len > MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong {
                len,
                max: MAX_TITLE_CHARS,
            });
        }
        if value.contains('\0') {
            return Err(ValidationError::NulInTitle);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated write model for insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoInput {
    pub title: Title,
    pub is_completed: bool,
}

impl TodoInput {
    pub fn new(title: Title) -> Self {
        Self {
            title,
            is_completed: false,
        }
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

/// Raw request body for create and update.
///
/// Only `title` and `isCompleted` are read. Any other field a client sends,
/// `id` and `createdAt` included, is dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
}

impl TodoPayload {
    /// Create input: `isCompleted` falls back to `false` when absent.
    pub fn into_create_input(self) -> Result<TodoInput, ValidationError> {
        let title = Title::new(self.title.ok_or(ValidationError::MissingTitle)?)?;
        Ok(TodoInput::new(title).completed(self.is_completed.unwrap_or(false)))
    }

    /// Update input: a full replacement, so both fields must be present.
    pub fn into_update_input(self) -> Result<TodoInput, ValidationError> {
        let title = Title::new(self.title.ok_or(ValidationError::MissingTitle)?)?;
        let is_completed = self
            .is_completed
            .ok_or(ValidationError::MissingCompletion)?;
        Ok(TodoInput::new(title).completed(is_completed))
    }
}
