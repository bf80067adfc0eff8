//! Error taxonomy for the Ember engine.
//!
//! Insufficient history is never an error: the prediction and trend paths
//! signal it through their result types. Duplicate achievement unlocks are
//! a no-op `false` return, not an error.

mod storage_error;
mod validation_error;

pub use storage_error::StorageError;
pub use validation_error::ValidationError;

/// Top-level error composing all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmberError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("event not found: {id}")]
    EventNotFound { id: String },

    #[error("config error: {reason}")]
    Config { reason: String },
}

/// Convenience result alias used across the workspace.
pub type EmberResult<T> = Result<T, EmberError>;
