//! Key/value port shared by all storage backends.

use thiserror::Error;

/// Failure reported by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No persistence substrate is present in this execution context.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The underlying substrate failed (quota, permissions, disk).
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    /// A shared backend lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Synchronous key/value backend.
///
/// The contract is deliberately narrow: string keys, string values, no
/// iteration, no transactions. Writes are last-write-wins; concurrent owners
/// of the same key are not coordinated.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn erase(&self, key: &str) -> Result<(), StorageError>;
}

// A shared handle to a backend is itself a backend; the cart adapter takes
// ownership of its store, so sharing one substrate across owners goes
// through Arc.
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn erase(&self, key: &str) -> Result<(), StorageError> {
        (**self).erase(key)
    }
}
