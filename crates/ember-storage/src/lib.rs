//! # ember-storage
//!
//! SQLite persistence for the Ember engine: intake events, streak state,
//! and achievement unlock records. A single mutex-serialized write
//! connection (WAL mode) carries all statements, which also serializes
//! concurrent same-user read-modify-write cycles.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StorageEngine;

use ember_core::errors::{EmberError, StorageError};

/// Map a low-level SQLite failure into the storage error taxonomy.
pub(crate) fn to_storage_err(message: impl Into<String>) -> EmberError {
    EmberError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}

/// Map a malformed persisted row into the storage error taxonomy.
pub(crate) fn corrupt_row(table: &str, details: impl Into<String>) -> EmberError {
    EmberError::Storage(StorageError::CorruptRow {
        table: table.to_string(),
        details: details.into(),
    })
}
