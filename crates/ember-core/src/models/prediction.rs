use serde::{Deserialize, Serialize};

use crate::event::IntakeContext;

/// Risk classification of the squashed probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// How much history backs the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// Per-factor values, each normalized to [0, 1], plus the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub hour_of_day: f64,
    pub day_of_week: f64,
    pub time_since_last: f64,
    pub context_predictability: f64,
    pub recent_trend: f64,
    /// Weighted sum before the sigmoid squash.
    pub base_score: f64,
}

/// The most frequent context label and its share of total events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContextShare {
    pub context: IntakeContext,
    pub share: f64,
}

/// Output of the prediction engine.
///
/// `probability` is `None` on the not-enough-data path — the sentinel
/// low-confidence result, not an error — and otherwise always lies in
/// [0.05, 0.95]: the model never claims near-certainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CravingPrediction {
    pub probability: Option<f64>,
    pub risk: RiskLevel,
    pub confidence: ConfidenceLevel,
    pub factors: Option<FactorBreakdown>,
    /// Most probable upcoming hour among the next 8, by hourly weight.
    pub peak_hour: Option<u32>,
    pub top_context: Option<ContextShare>,
    pub recommendations: Vec<String>,
    pub events_analyzed: usize,
}

impl CravingPrediction {
    /// The sentinel result for fewer than the minimum events.
    pub fn insufficient(events_analyzed: usize) -> Self {
        Self {
            probability: None,
            risk: RiskLevel::Low,
            confidence: ConfidenceLevel::Low,
            factors: None,
            peak_hour: None,
            top_context: None,
            recommendations: Vec::new(),
            events_analyzed,
        }
    }
}
