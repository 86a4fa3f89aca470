//! Storage abstraction and implementations for Pagegate.
//!
//! This crate provides a trait-based key-value interface mirroring browser
//! local storage, with an in-memory backend and a JSON file reference
//! implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory;
pub mod json_storage;

pub use trait_::{KeyValueStore, StorageError, Result};
pub use memory::MemoryStore;
pub use json_storage::JsonFileStore;
