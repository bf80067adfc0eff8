//! PredictionEngine — computes the weighted factors, squashes, and
//! classifies risk and confidence.

use chrono::{Datelike, Duration, Timelike};

use ember_core::config::PredictionConfig;
use ember_core::errors::EmberResult;
use ember_core::event::IntakeContext;
use ember_core::models::{
    ConfidenceLevel, ContextShare, CravingPrediction, FactorBreakdown, RiskLevel,
};
use ember_core::traits::{Clock, IEventStore};

use crate::factors::{
    self, context_entropy, day_of_week, hour_of_day, recency, recent_trend,
};
use crate::recommendations;

/// Event count at or above which confidence can be high.
const HIGH_CONFIDENCE_EVENTS: usize = 50;
/// Qualifying gap count required alongside the event threshold.
const HIGH_CONFIDENCE_GAPS: usize = 20;
/// Below this many events confidence is low.
const LOW_CONFIDENCE_EVENTS: usize = 15;

/// How many upcoming hours to scan for the peak-hour report.
const PEAK_LOOKAHEAD_HOURS: u32 = 8;

/// Craving prediction over the trailing window. Pure read plus
/// deterministic derivation; store failures propagate to the caller.
pub struct PredictionEngine<S: IEventStore, C: Clock> {
    store: S,
    clock: C,
    config: PredictionConfig,
}

impl<S: IEventStore, C: Clock> PredictionEngine<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self::with_config(store, clock, PredictionConfig::default())
    }

    pub fn with_config(store: S, clock: C, config: PredictionConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Estimate the probability of a craving in the near term.
    ///
    /// Fewer than `min_events` events in the window produce the sentinel
    /// not-enough-data result — a low-confidence output, not an error.
    pub fn predict(&self, user_id: &str) -> EmberResult<CravingPrediction> {
        let now = self.clock.now();
        let from = now - Duration::days(self.config.window_days);
        let events = self.store.find(user_id, Some(from), Some(now))?;

        if events.len() < self.config.min_events {
            tracing::debug!(user_id, count = events.len(), "not enough data to predict");
            return Ok(CravingPrediction::insufficient(events.len()));
        }

        let hourly = hour_of_day::hourly_puffs(&events);
        let daily = day_of_week::daily_puffs(&events);
        let contexts = context_entropy::context_counts(&events);
        let gaps = recency::qualifying_gaps(&events);
        let avg_gap = recency::average_gap(&gaps);
        // Window is non-empty here; events are ordered ascending.
        let hours_since_last = events
            .last()
            .map(|e| recency::hours_between(e.occurred_at, now))
            .unwrap_or(0.0);

        let f_hour = hour_of_day::calculate(&hourly, now.hour() as usize);
        let f_day = day_of_week::calculate(
            &daily,
            now.weekday().num_days_from_monday() as usize,
        );
        let f_gap = recency::calculate(hours_since_last, avg_gap);
        let f_context = context_entropy::calculate(&contexts);
        let f_trend = recent_trend::calculate(&events, now);

        let base = factors::weighted_sum(f_hour, f_day, f_gap, f_context, f_trend);
        let probability = factors::squash(base);

        let risk = classify_risk(probability);
        let confidence = classify_confidence(events.len(), gaps.len());

        Ok(CravingPrediction {
            probability: Some(probability),
            risk,
            confidence,
            factors: Some(FactorBreakdown {
                hour_of_day: f_hour,
                day_of_week: f_day,
                time_since_last: f_gap,
                context_predictability: f_context,
                recent_trend: f_trend,
                base_score: base,
            }),
            peak_hour: peak_upcoming_hour(&hourly, now.hour()),
            top_context: top_context(&contexts, events.len()),
            recommendations: recommendations::for_risk(risk)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            events_analyzed: events.len(),
        })
    }
}

fn classify_risk(probability: f64) -> RiskLevel {
    if probability > 0.7 {
        RiskLevel::High
    } else if probability > 0.4 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

fn classify_confidence(events: usize, qualifying_gaps: usize) -> ConfidenceLevel {
    if events >= HIGH_CONFIDENCE_EVENTS && qualifying_gaps >= HIGH_CONFIDENCE_GAPS {
        ConfidenceLevel::High
    } else if events < LOW_CONFIDENCE_EVENTS {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::Medium
    }
}

/// Most probable hour among the next 8, by hourly weight. Ties go to the
/// earliest hour; all-zero lookahead reports nothing.
fn peak_upcoming_hour(hourly: &[u64; 24], current_hour: u32) -> Option<u32> {
    let mut best: Option<(u32, u64)> = None;
    for offset in 1..=PEAK_LOOKAHEAD_HOURS {
        let hour = (current_hour + offset) % 24;
        let weight = hourly[hour as usize];
        if weight > 0 && best.map_or(true, |(_, w)| weight > w) {
            best = Some((hour, weight));
        }
    }
    best.map(|(hour, _)| hour)
}

/// The most frequent context label with its share of total events.
fn top_context(counts: &[u64; 5], total_events: usize) -> Option<ContextShare> {
    if total_events == 0 {
        return None;
    }
    let (index, &count) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, &count)| count)?;
    if count == 0 {
        return None;
    }
    Some(ContextShare {
        context: IntakeContext::ALL[index],
        share: count as f64 / total_events as f64,
    })
}
