//! Todo Core Library
//!
//! Domain error type and the storage port for the todo service.

// Re-export pure types from todo-types
pub use todo_types::*;

pub mod error;
pub mod ports;

pub use error::{Result, TodoError};
pub use ports::TodoStore;
