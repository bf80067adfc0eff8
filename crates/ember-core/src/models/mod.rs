//! Derived-output models shared across the workspace.

mod achievement;
mod analytics;
mod coaching;
mod prediction;

pub use achievement::{
    AchievementCategory, AchievementDef, AchievementUnlock, UnlockCondition,
};
pub use analytics::{DailySummary, MonthlySummary, Trend, TrendDirection, WeeklySummary};
pub use coaching::{CoachingPlan, GenerationOptions, GenerationOutcome, Provenance};
pub use prediction::{
    ConfidenceLevel, ContextShare, CravingPrediction, FactorBreakdown, RiskLevel,
};
