//! Ports (traits) implemented by adapters

pub mod storage;

pub use storage::TodoStore;
