//! # ember-core
//!
//! Foundation crate for the Ember tracking engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod models;
pub mod progress;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EmberConfig;
pub use errors::{EmberError, EmberResult};
pub use event::{EventDraft, IntakeContext, IntakeEvent, Intensity};
pub use progress::StreakState;
