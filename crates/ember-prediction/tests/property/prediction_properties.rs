use chrono::{DateTime, Duration, TimeZone, Utc};
use ember_core::event::{IntakeContext, Intensity};
use ember_core::traits::FixedClock;
use ember_prediction::factors;
use ember_prediction::PredictionEngine;
use proptest::prelude::*;
use test_fixtures::{event_with, MemEventStore};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 14, 0, 0).unwrap()
}

fn arb_intensity() -> impl Strategy<Value = Intensity> {
    prop_oneof![
        Just(Intensity::Low),
        Just(Intensity::Medium),
        Just(Intensity::High),
    ]
}

fn arb_context() -> impl Strategy<Value = IntakeContext> {
    prop_oneof![
        Just(IntakeContext::Stress),
        Just(IntakeContext::Bored),
        Just(IntakeContext::Habit),
        Just(IntakeContext::Social),
        Just(IntakeContext::Other),
    ]
}

proptest! {
    // Any finite event history keeps the probability inside [0.05, 0.95].
    #[test]
    fn probability_always_within_bounds(
        events in prop::collection::vec(
            (1u32..=100, arb_intensity(), arb_context(), 0i64..20_000),
            5..120,
        )
    ) {
        let store = MemEventStore::new();
        for (puffs, intensity, context, minutes_ago) in events {
            store.push(event_with(
                "u",
                puffs,
                intensity,
                context,
                now() - Duration::minutes(minutes_ago),
            ));
        }

        let engine = PredictionEngine::new(store, FixedClock::new(now()));
        let prediction = engine.predict("u").unwrap();

        if let Some(p) = prediction.probability {
            prop_assert!((0.05..=0.95).contains(&p), "probability {p} out of bounds");
            let factors = prediction.factors.unwrap();
            for value in [
                factors.hour_of_day,
                factors.day_of_week,
                factors.time_since_last,
                factors.context_predictability,
                factors.recent_trend,
            ] {
                prop_assert!((0.0..=1.0).contains(&value));
            }
            prop_assert!((0.0..=1.0).contains(&factors.base_score));
        }
    }

    // The squash is monotone and bounded for any base score.
    #[test]
    fn squash_is_monotone_and_bounded(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = factors::squash(lo);
        let p_hi = factors::squash(hi);
        prop_assert!(p_lo <= p_hi);
        prop_assert!((0.05..=0.95).contains(&p_lo));
        prop_assert!((0.05..=0.95).contains(&p_hi));
    }
}
