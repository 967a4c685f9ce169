//! Storage layer
//!
//! Uses SQLite (embedded) through sqlx.

pub mod db;

pub use db::Database;
