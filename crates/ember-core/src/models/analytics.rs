use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sign classification of a window's linear trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Ordinary-least-squares slope over equally spaced sub-buckets,
/// plus its classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Puffs per sub-bucket (days for a week, weeks for a month).
    pub slope: f64,
    pub direction: TrendDirection,
}

/// Windowed statistics for a single calendar day.
///
/// Bucket arrays are indexed by hour of day, [`crate::event::IntakeContext::index`],
/// and [`crate::event::Intensity::index`]. Empty buckets hold zero, never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub event_count: u64,
    pub total_puffs: u64,
    pub hourly_puffs: [u64; 24],
    pub context_counts: [u64; 5],
    pub intensity_puffs: [u64; 3],
    pub first_event: Option<DateTime<Utc>>,
    pub last_event: Option<DateTime<Utc>>,
}

/// Windowed statistics for a 7-day week starting at `week_start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub event_count: u64,
    pub total_puffs: u64,
    /// Per-day puff totals, index 0 = `week_start`.
    pub daily_puffs: [u64; 7],
    pub hourly_puffs: [u64; 24],
    pub context_counts: [u64; 5],
    pub intensity_puffs: [u64; 3],
    pub first_event: Option<DateTime<Utc>>,
    pub last_event: Option<DateTime<Utc>>,
    /// OLS over `daily_puffs`, in puffs per day.
    pub trend: Trend,
}

/// Windowed statistics for a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub event_count: u64,
    pub total_puffs: u64,
    /// Puff totals per 7-day chunk from day 1 (last chunk may be short).
    pub weekly_puffs: Vec<u64>,
    /// Day-of-week (Monday = 0) × hour-of-day puff totals, for visualization.
    pub heatmap: [[u64; 24]; 7],
    pub context_counts: [u64; 5],
    pub intensity_puffs: [u64; 3],
    pub first_event: Option<DateTime<Utc>>,
    pub last_event: Option<DateTime<Utc>>,
    /// OLS over `weekly_puffs`, in puffs per week.
    pub trend: Trend,
}
