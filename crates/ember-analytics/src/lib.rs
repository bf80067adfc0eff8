//! # ember-analytics
//!
//! Turns a raw sequence of intake events into windowed statistics:
//! hourly/daily/weekly buckets, context and intensity breakdowns, and an
//! ordinary-least-squares trend over equally spaced sub-buckets. Pure
//! reads — the aggregator never writes.

pub mod aggregator;
pub mod buckets;
pub mod trend;

pub use aggregator::AnalyticsAggregator;
