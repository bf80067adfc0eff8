//! Prompt assembly for the text-generation service.

use std::fmt::Write as _;

use ember_core::event::IntakeContext;
use ember_core::models::{CravingPrediction, RiskLevel, TrendDirection, WeeklySummary};

pub const SYSTEM_PROMPT: &str = "You are a supportive vaping-cessation coach. \
Write a short daily plan (3-5 sentences) grounded strictly in the data given. \
Be concrete and encouraging; never moralize, never invent numbers.";

/// Render the user's trailing week (and prediction, when one exists)
/// as the data block the model is asked to coach from.
pub fn user_prompt(summary: &WeeklySummary, prediction: Option<&CravingPrediction>) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Week starting {}: {} logs, {} puffs total.",
        summary.week_start, summary.event_count, summary.total_puffs
    );
    let _ = writeln!(
        prompt,
        "Daily puffs: {:?}. Trend: {} ({:+.1} puffs/day).",
        summary.daily_puffs,
        direction_label(summary.trend.direction),
        summary.trend.slope
    );

    if let Some((context, count)) = busiest_context(&summary.context_counts) {
        let _ = writeln!(prompt, "Most common trigger: {context} ({count} logs).");
    }

    if let Some(prediction) = prediction {
        if let Some(probability) = prediction.probability {
            let _ = writeln!(
                prompt,
                "Craving risk right now: {} ({:.0}% probability).",
                risk_label(prediction.risk),
                probability * 100.0
            );
        }
        if let Some(hour) = prediction.peak_hour {
            let _ = writeln!(prompt, "Highest-risk hour ahead: {hour:02}:00 UTC.");
        }
    }

    prompt.push_str("Write today's coaching plan.");
    prompt
}

pub fn direction_label(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Increasing => "increasing",
        TrendDirection::Decreasing => "decreasing",
        TrendDirection::Stable => "stable",
    }
}

pub fn risk_label(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "low",
        RiskLevel::Moderate => "moderate",
        RiskLevel::High => "high",
    }
}

/// The most logged context and its count, if any context was logged.
pub fn busiest_context(counts: &[u64; 5]) -> Option<(IntakeContext, u64)> {
    let (index, &count) = counts
        .iter()
        .enumerate()
        .max_by_key(|(_, &count)| count)?;
    if count == 0 {
        return None;
    }
    Some((IntakeContext::ALL[index], count))
}
