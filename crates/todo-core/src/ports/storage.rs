//! Storage trait for todo persistence

use crate::Result;
use async_trait::async_trait;
use todo_types::{Todo, TodoInput};

/// Todo store.
///
/// Every method is a single atomic operation on at most one record. Errors
/// are returned as-is; implementations never retry or swallow them.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, oldest first. Ties on `created_at` keep insertion order.
    async fn list_all(&self) -> Result<Vec<Todo>>;

    async fn get_by_id(&self, id: i64) -> Result<Todo>;

    /// Store a new todo, assigning its id and creation time.
    async fn insert(&self, input: &TodoInput) -> Result<Todo>;

    /// Overwrite `title` and `is_completed`. `id` and `created_at` are kept.
    async fn update(&self, id: i64, input: &TodoInput) -> Result<Todo>;

    async fn delete(&self, id: i64) -> Result<()>;

    /// Round-trip to the storage engine, for health checks.
    async fn ping(&self) -> Result<()>;
}
