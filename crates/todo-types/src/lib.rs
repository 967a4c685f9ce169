//! Todo Types - Pure type definitions for the todo service
//!
//! This crate contains only data types and their validation rules, with no
//! async runtime or storage dependencies.

pub mod todo;

pub use todo::*;
