//! # ember-coaching
//!
//! Turns a week of analytics (plus an optional craving prediction) into
//! a short daily coaching plan. The external text generator is best
//! effort: any failure falls back to a deterministic local template, so
//! `daily_plan` degrades but never errors on the generator's account.

pub mod client;
pub mod fallback;
pub mod planner;
pub mod prompts;

pub use client::HttpTextGenerator;
pub use planner::CoachingPlanner;
