//! # ember-prediction
//!
//! Craving probability estimation over the trailing 14 days of events.
//!
//! ## 5 Weighted Factors
//!
//! | Factor | Weight | Signal |
//! |--------|--------|--------|
//! | Hour of day | 0.40 | Hourly puff totals, normalized by the max bucket |
//! | Day of week | 0.15 | Same over 7 weekday buckets |
//! | Time since last | 0.25 | Hours since last intake vs. average gap |
//! | Context predictability | 0.10 | Inverted normalized Shannon entropy |
//! | Recent trend | 0.10 | Last-3-days vs. prior-3-days puff ratio |
//!
//! The weighted sum is squashed through `sigmoid(6 × (base − 0.5))` and
//! clamped to [0.05, 0.95] — the model never claims near-certainty.

pub mod engine;
pub mod factors;
pub mod recommendations;

pub use engine::PredictionEngine;
