// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key/value storage backends.
//!
//! Two scopes are used by the client:
//! - durable storage holds the auth token and cached profile
//! - session storage holds the in-progress schedule draft

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key names as constants.
pub mod keys {
    /// Bearer token (durable)
    pub const TOKEN: &str = "token";
    /// Cached user profile JSON (durable)
    pub const USER: &str = "user";
    /// Schedule draft handed between the form and activity search (session)
    pub const SCHEDULE_FORM_DATA: &str = "scheduleFormData";
}

/// Synchronous string key/value store.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key in this store.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Errors from storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read storage file: {0}")]
    Read(String),

    #[error("Failed to write storage file: {0}")]
    Write(String),

    #[error("Storage file is not a JSON object: {0}")]
    Corrupt(String),
}
