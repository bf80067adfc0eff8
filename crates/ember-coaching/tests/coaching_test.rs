use std::sync::{Arc, Mutex};

use chrono::Duration;

use ember_coaching::CoachingPlanner;
use ember_core::config::CoachingConfig;
use ember_core::models::{CravingPrediction, GenerationOptions, GenerationOutcome, Provenance, RiskLevel};
use ember_core::traits::{FixedClock, ITextGenerator};
use test_fixtures::{anchor, event, MemEventStore};

struct StubGenerator {
    outcome: GenerationOutcome,
    last_user_prompt: Arc<Mutex<Option<String>>>,
}

impl StubGenerator {
    fn returning(outcome: GenerationOutcome) -> Self {
        Self {
            outcome,
            last_user_prompt: Arc::new(Mutex::new(None)),
        }
    }

    fn prompt_handle(&self) -> Arc<Mutex<Option<String>>> {
        Arc::clone(&self.last_user_prompt)
    }
}

impl ITextGenerator for StubGenerator {
    fn generate(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        _options: &GenerationOptions,
    ) -> GenerationOutcome {
        *self.last_user_prompt.lock().unwrap() = Some(user_prompt.to_string());
        self.outcome.clone()
    }
}

fn seeded_store() -> MemEventStore {
    let store = MemEventStore::new();
    for day in 0..5 {
        store.push(event("u1", 6, anchor() - Duration::days(day)));
    }
    store
}

#[test]
fn successful_generation_is_marked_ai() {
    let generator = StubGenerator::returning(GenerationOutcome::ok("Take a walk at 3pm.".into()));
    let clock = FixedClock::new(anchor());
    let planner = CoachingPlanner::new(seeded_store(), generator, clock, CoachingConfig::default());

    let plan = planner.daily_plan("u1", None).unwrap();
    assert_eq!(plan.provenance, Provenance::Ai);
    assert_eq!(plan.content, "Take a walk at 3pm.");
    assert_eq!(plan.user_id, "u1");
    assert_eq!(plan.generated_at, anchor());
}

#[test]
fn transport_failure_falls_back_to_local_template() {
    let generator = StubGenerator::returning(GenerationOutcome::failed("connect refused".into()));
    let clock = FixedClock::new(anchor());
    let planner = CoachingPlanner::new(seeded_store(), generator, clock, CoachingConfig::default());

    let plan = planner.daily_plan("u1", None).unwrap();
    assert_eq!(plan.provenance, Provenance::Fallback);
    assert!(plan.content.contains("30 puffs"), "renders real weekly totals");
}

#[test]
fn blank_completion_counts_as_failure() {
    let generator = StubGenerator::returning(GenerationOutcome::ok("   \n".into()));
    let clock = FixedClock::new(anchor());
    let planner = CoachingPlanner::new(seeded_store(), generator, clock, CoachingConfig::default());

    let plan = planner.daily_plan("u1", None).unwrap();
    assert_eq!(plan.provenance, Provenance::Fallback);
    assert!(!plan.content.trim().is_empty());
}

#[test]
fn prompt_reflects_the_trailing_week() {
    let generator = StubGenerator::returning(GenerationOutcome::ok("plan".into()));
    let prompt = generator.prompt_handle();
    let clock = FixedClock::new(anchor());
    let store = seeded_store();
    // Outside the trailing week, must not appear in totals.
    store.push(event("u1", 50, anchor() - Duration::days(10)));
    let planner = CoachingPlanner::new(store, generator, clock, CoachingConfig::default());

    let mut prediction = CravingPrediction::insufficient(25);
    prediction.probability = Some(0.72);
    prediction.risk = RiskLevel::High;
    planner.daily_plan("u1", Some(&prediction)).unwrap();

    let prompt = prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("5 logs, 30 puffs"), "prompt was: {prompt}");
    assert!(prompt.contains("high (72% probability)"));
}

#[test]
fn empty_week_still_produces_a_fallback_plan() {
    let generator = StubGenerator::returning(GenerationOutcome::failed("down".into()));
    let clock = FixedClock::new(anchor());
    let planner = CoachingPlanner::new(
        MemEventStore::new(),
        generator,
        clock,
        CoachingConfig::default(),
    );

    let plan = planner.daily_plan("u1", None).unwrap();
    assert_eq!(plan.provenance, Provenance::Fallback);
    assert!(plan.content.contains("0 puffs"));
}

#[test]
fn store_failures_still_propagate() {
    struct FailingStore;
    impl ember_core::traits::IEventStore for FailingStore {
        fn insert(&self, _: &ember_core::event::IntakeEvent) -> ember_core::EmberResult<()> {
            unreachable!()
        }
        fn find(
            &self,
            _: &str,
            _: Option<chrono::DateTime<chrono::Utc>>,
            _: Option<chrono::DateTime<chrono::Utc>>,
        ) -> ember_core::EmberResult<Vec<ember_core::event::IntakeEvent>> {
            Err(ember_core::errors::StorageError::SqliteError {
                message: "disk gone".into(),
            }
            .into())
        }
        fn count(&self, _: &str) -> ember_core::EmberResult<u64> {
            unreachable!()
        }
        fn delete(&self, _: &str, _: &str) -> ember_core::EmberResult<()> {
            unreachable!()
        }
    }

    let generator = StubGenerator::returning(GenerationOutcome::ok("plan".into()));
    let planner = CoachingPlanner::new(
        FailingStore,
        generator,
        FixedClock::new(anchor()),
        CoachingConfig::default(),
    );
    assert!(planner.daily_plan("u1", None).is_err());
}
