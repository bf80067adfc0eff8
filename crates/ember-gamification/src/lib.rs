//! # ember-gamification
//!
//! Streak continuity, XP/levels, and the achievement engine. Streak
//! transitions are keyed by calendar date from the injected clock;
//! achievement unlocks are conditional inserts, idempotent under races.

pub mod achievements;
pub mod catalog;
pub mod streak;
pub mod tracker;

pub use achievements::AchievementEngine;
pub use tracker::{LogOutcome, StreakTracker};
