//! Deterministic plan templates, one per trend direction.
//!
//! Used verbatim whenever the text-generation service is unreachable or
//! returns an unusable completion. Templates use `{puffs}`, `{days}`,
//! and `{trigger}` as placeholders.

use ember_core::models::{CravingPrediction, RiskLevel, TrendDirection, WeeklySummary};

use crate::prompts;

/// Get the plan template for a trend direction.
pub fn template_for(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Decreasing => "Your intake is trending down: {puffs} puffs \
            over the last 7 days across {days} active days. Keep the same routine \
            today, and when a craving hits, delay it by five minutes before deciding.",
        TrendDirection::Increasing => "Your intake rose this week to {puffs} puffs \
            across {days} active days. Pick one trigger to interrupt today: when it \
            comes, step away for two minutes and take ten slow breaths first.",
        TrendDirection::Stable => "You held steady this week at {puffs} puffs across \
            {days} active days. Today, try trimming one session you would not miss, \
            and note how you feel afterwards.",
    }
}

/// Extra sentence appended when the prediction flags elevated risk.
pub fn risk_addendum(risk: RiskLevel) -> Option<&'static str> {
    match risk {
        RiskLevel::High => Some(
            "Your craving risk is high right now. Have a replacement ready: water, \
             gum, or a short walk.",
        ),
        RiskLevel::Moderate => Some(
            "Your craving risk is moderate. A brief change of scenery now can keep \
             it from peaking.",
        ),
        RiskLevel::Low => None,
    }
}

/// Render the local plan from the weekly summary and optional prediction.
pub fn render(summary: &WeeklySummary, prediction: Option<&CravingPrediction>) -> String {
    let active_days = summary.daily_puffs.iter().filter(|&&p| p > 0).count();

    let mut plan = template_for(summary.trend.direction)
        .replace("{puffs}", &summary.total_puffs.to_string())
        .replace("{days}", &active_days.to_string());

    if let Some((context, _)) = prompts::busiest_context(&summary.context_counts) {
        plan.push_str(&format!(
            " Your most frequent trigger this week was {context}; plan for it before it arrives."
        ));
    }

    if let Some(addendum) = prediction
        .filter(|p| p.probability.is_some())
        .and_then(|p| risk_addendum(p.risk))
    {
        plan.push(' ');
        plan.push_str(addendum);
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ember_core::models::Trend;

    fn week(daily_puffs: [u64; 7], direction: TrendDirection) -> WeeklySummary {
        WeeklySummary {
            week_start: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            event_count: daily_puffs.iter().filter(|&&p| p > 0).count() as u64,
            total_puffs: daily_puffs.iter().sum(),
            daily_puffs,
            hourly_puffs: [0; 24],
            context_counts: [0; 5],
            intensity_puffs: [0; 3],
            first_event: None,
            last_event: None,
            trend: Trend {
                slope: 0.0,
                direction,
            },
        }
    }

    #[test]
    fn placeholders_are_filled() {
        let plan = render(&week([10, 8, 6, 4, 2, 0, 0], TrendDirection::Decreasing), None);
        assert!(plan.contains("30 puffs"));
        assert!(plan.contains("5 active days"));
        assert!(!plan.contains('{'));
    }

    #[test]
    fn same_inputs_render_identically() {
        let summary = week([3, 3, 3, 3, 3, 3, 3], TrendDirection::Stable);
        assert_eq!(render(&summary, None), render(&summary, None));
    }

    #[test]
    fn high_risk_prediction_appends_a_warning() {
        let mut prediction = CravingPrediction::insufficient(20);
        prediction.probability = Some(0.85);
        prediction.risk = RiskLevel::High;
        let plan = render(
            &week([2, 2, 2, 2, 2, 2, 2], TrendDirection::Stable),
            Some(&prediction),
        );
        assert!(plan.contains("craving risk is high"));
    }

    #[test]
    fn sentinel_prediction_adds_nothing() {
        let prediction = CravingPrediction::insufficient(2);
        let with = render(
            &week([1, 0, 0, 0, 0, 0, 0], TrendDirection::Stable),
            Some(&prediction),
        );
        let without = render(&week([1, 0, 0, 0, 0, 0, 0], TrendDirection::Stable), None);
        assert_eq!(with, without);
    }
}
