//! Error types for the persistence layer.
//!
//! The cart surface itself has no error path: absent entries degrade to
//! no-ops or zero-returns. These types cover the only fallible edge, the
//! backing key-value store, and stay behind the bridge wherever possible.

use thiserror::Error;

/// Errors raised by a [`crate::persist::KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the backing key-value map failed.
    #[error("store encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised by [`crate::persist::PersistenceBridge::save`].
#[derive(Debug, Error)]
pub enum PersistError {
    /// The backing store rejected the write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Encoding the entry collection failed.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
