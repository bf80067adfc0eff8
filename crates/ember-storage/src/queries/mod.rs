//! Query modules, one per table family.

pub mod event_ops;
pub mod progress_ops;
