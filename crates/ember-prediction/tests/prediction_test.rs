use chrono::{DateTime, Duration, TimeZone, Utc};
use ember_core::event::{IntakeContext, Intensity};
use ember_core::models::{ConfidenceLevel, RiskLevel};
use ember_core::traits::FixedClock;
use ember_prediction::PredictionEngine;
use test_fixtures::{event, event_with, MemEventStore};

fn now() -> DateTime<Utc> {
    // A Friday, 14:00 UTC.
    Utc.with_ymd_and_hms(2024, 5, 10, 14, 0, 0).unwrap()
}

fn engine(store: MemEventStore) -> PredictionEngine<MemEventStore, FixedClock> {
    PredictionEngine::new(store, FixedClock::new(now()))
}

#[test]
fn below_five_events_is_the_sentinel_result() {
    let store = MemEventStore::new();
    for i in 0..4 {
        store.push(event("u", 2, now() - Duration::days(i)));
    }

    let prediction = engine(store).predict("u").unwrap();
    assert_eq!(prediction.probability, None);
    assert_eq!(prediction.confidence, ConfidenceLevel::Low);
    assert!(prediction.factors.is_none());
    assert!(prediction.peak_hour.is_none());
    assert!(prediction.top_context.is_none());
    assert_eq!(prediction.events_analyzed, 4);
}

#[test]
fn events_outside_the_window_do_not_count() {
    let store = MemEventStore::new();
    // 5 events, but only 3 inside the trailing 14 days.
    for days in [1i64, 2, 3, 20, 25] {
        store.push(event("u", 2, now() - Duration::days(days)));
    }

    let prediction = engine(store).predict("u").unwrap();
    assert_eq!(prediction.probability, None);
    assert_eq!(prediction.events_analyzed, 3);
}

#[test]
fn five_events_produce_a_full_result() {
    let store = MemEventStore::new();
    for i in 0..5 {
        store.push(event("u", 3, now() - Duration::hours(3 * (i + 1))));
    }

    let prediction = engine(store).predict("u").unwrap();
    let p = prediction.probability.expect("probability present");
    assert!((0.05..=0.95).contains(&p));
    let factors = prediction.factors.expect("breakdown present");
    for value in [
        factors.hour_of_day,
        factors.day_of_week,
        factors.time_since_last,
        factors.context_predictability,
        factors.recent_trend,
    ] {
        assert!((0.0..=1.0).contains(&value), "factor {value} out of range");
    }
    assert!(!prediction.recommendations.is_empty());
    assert_eq!(prediction.events_analyzed, 5);
}

#[test]
fn heavy_current_hour_pushes_risk_up() {
    let store = MemEventStore::new();
    // Two weeks of intakes at 14:00 with one dominant context and a
    // last intake well past the usual gap.
    for day in 1..=14i64 {
        store.push(event_with(
            "u",
            8,
            Intensity::High,
            IntakeContext::Stress,
            now() - Duration::days(day) + Duration::minutes(10),
        ));
        store.push(event_with(
            "u",
            8,
            Intensity::High,
            IntakeContext::Stress,
            now() - Duration::days(day) + Duration::minutes(40),
        ));
    }

    let prediction = engine(store).predict("u").unwrap();
    let p = prediction.probability.unwrap();
    assert!(p > 0.7, "expected high probability, got {p}");
    assert_eq!(prediction.risk, RiskLevel::High);

    let top = prediction.top_context.unwrap();
    assert_eq!(top.context, IntakeContext::Stress);
    assert!((top.share - 1.0).abs() < 1e-12);
}

#[test]
fn quiet_hour_scores_low_risk() {
    let store = MemEventStore::new();
    // All intake happens at 22:00; now is 14:00 and the last intake
    // was minutes ago.
    for day in 0..14i64 {
        store.push(event(
            "u",
            5,
            now() - Duration::days(day) + Duration::hours(8),
        ));
    }
    store.push(event("u", 1, now() - Duration::minutes(5)));

    let prediction = engine(store).predict("u").unwrap();
    let p = prediction.probability.unwrap();
    assert!(p < 0.4, "expected low probability, got {p}");
    assert_eq!(prediction.risk, RiskLevel::Low);
}

#[test]
fn confidence_scales_with_history() {
    let sparse = MemEventStore::new();
    for i in 0..6 {
        sparse.push(event("u", 2, now() - Duration::days(i * 2)));
    }
    let prediction = engine(sparse).predict("u").unwrap();
    assert_eq!(prediction.confidence, ConfidenceLevel::Low);

    let dense = MemEventStore::new();
    // 56 events over 14 days, 4 per day 3 hours apart → plenty of
    // qualifying gaps.
    for day in 0..14i64 {
        for slot in 0..4i64 {
            dense.push(event(
                "u",
                2,
                now() - Duration::days(day) - Duration::hours(3 * slot),
            ));
        }
    }
    let prediction = engine(dense).predict("u").unwrap();
    assert_eq!(prediction.confidence, ConfidenceLevel::High);
}

#[test]
fn peak_hour_reports_the_heaviest_upcoming_bucket() {
    let store = MemEventStore::new();
    // Heavy usage at 20:00 every day; now is 14:00 → 20:00 is within
    // the next 8 hours.
    for day in 1..=7i64 {
        store.push(event("u", 9, now() - Duration::days(day) + Duration::hours(6)));
        store.push(event("u", 1, now() - Duration::days(day)));
    }

    let prediction = engine(store).predict("u").unwrap();
    assert_eq!(prediction.peak_hour, Some(20));
}

#[test]
fn store_failure_propagates() {
    use ember_core::errors::{EmberResult, StorageError};
    use ember_core::event::IntakeEvent;
    use ember_core::traits::IEventStore;

    struct FailingStore;

    impl IEventStore for FailingStore {
        fn insert(&self, _: &IntakeEvent) -> EmberResult<()> {
            unreachable!()
        }
        fn find(
            &self,
            _: &str,
            _: Option<DateTime<Utc>>,
            _: Option<DateTime<Utc>>,
        ) -> EmberResult<Vec<IntakeEvent>> {
            Err(StorageError::SqliteError {
                message: "database is locked".into(),
            }
            .into())
        }
        fn count(&self, _: &str) -> EmberResult<u64> {
            unreachable!()
        }
        fn delete(&self, _: &str, _: &str) -> EmberResult<()> {
            unreachable!()
        }
    }

    let engine = PredictionEngine::new(FailingStore, FixedClock::new(now()));
    let err = engine.predict("u").unwrap_err();
    assert!(err.to_string().contains("database is locked"));
}
