//! `atelier-storage` — synchronous key/value persistence substrate.
//!
//! Backends report failures honestly through [`StorageError`]; deciding what
//! a failure *means* (and whether it may surface) belongs to the adapter
//! sitting on top, not to the substrate.

pub mod file;
pub mod in_memory;
pub mod kv;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use kv::{KeyValueStore, StorageError};
