use chrono::{Duration, NaiveDate};
use ember_core::traits::{IEventStore, IProgressStore};
use ember_core::StreakState;
use ember_storage::StorageEngine;
use test_fixtures::{anchor, event};

#[test]
fn insert_and_find_round_trips() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let e = event("user-1", 5, anchor());
    engine.insert(&e).unwrap();

    let found = engine.find("user-1", None, None).unwrap();
    assert_eq!(found, vec![e]);
}

#[test]
fn find_orders_by_occurrence_time() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let late = event("user-1", 1, anchor() + Duration::hours(3));
    let early = event("user-1", 2, anchor());
    engine.insert(&late).unwrap();
    engine.insert(&early).unwrap();

    let found = engine.find("user-1", None, None).unwrap();
    assert_eq!(found[0].id, early.id);
    assert_eq!(found[1].id, late.id);
}

#[test]
fn find_window_is_half_open() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let at_start = event("user-1", 1, anchor());
    let at_end = event("user-1", 2, anchor() + Duration::hours(1));
    engine.insert(&at_start).unwrap();
    engine.insert(&at_end).unwrap();

    let found = engine
        .find(
            "user-1",
            Some(anchor()),
            Some(anchor() + Duration::hours(1)),
        )
        .unwrap();
    assert_eq!(found, vec![at_start], "from inclusive, to exclusive");
}

#[test]
fn find_scopes_to_user() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert(&event("user-1", 1, anchor())).unwrap();
    engine.insert(&event("user-2", 2, anchor())).unwrap();

    assert_eq!(engine.find("user-1", None, None).unwrap().len(), 1);
    assert_eq!(engine.count("user-1").unwrap(), 1);
    assert_eq!(engine.count("user-3").unwrap(), 0);
}

#[test]
fn delete_removes_only_named_event() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let keep = event("user-1", 1, anchor());
    let drop = event("user-1", 2, anchor() + Duration::minutes(5));
    engine.insert(&keep).unwrap();
    engine.insert(&drop).unwrap();

    engine.delete("user-1", &drop.id).unwrap();
    let found = engine.find("user-1", None, None).unwrap();
    assert_eq!(found, vec![keep]);
}

#[test]
fn delete_missing_event_is_not_found() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let err = engine.delete("user-1", "no-such-id").unwrap_err();
    assert!(matches!(
        err,
        ember_core::EmberError::EventNotFound { .. }
    ));
}

#[test]
fn streak_state_round_trips() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.get_streak("user-1").unwrap().is_none());

    let mut state = StreakState::new("user-1");
    state.current_streak = 4;
    state.longest_streak = 9;
    state.last_active_date = NaiveDate::from_ymd_opt(2024, 5, 10);
    state.add_xp(430);
    state.total_logs_count = 41;
    state.total_money_saved = 12.75;
    state.set_baseline(30.0, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());

    engine.upsert_streak(&state).unwrap();
    let loaded = engine.get_streak("user-1").unwrap().unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn upsert_overwrites_existing_row() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let mut state = StreakState::new("user-1");
    engine.upsert_streak(&state).unwrap();

    state.current_streak = 2;
    state.longest_streak = 2;
    engine.upsert_streak(&state).unwrap();

    let loaded = engine.get_streak("user-1").unwrap().unwrap();
    assert_eq!(loaded.current_streak, 2);
}

#[test]
fn file_backed_engine_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ember.db");

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine.insert(&event("user-1", 3, anchor())).unwrap();
    }

    let reopened = StorageEngine::open(&path).unwrap();
    assert_eq!(reopened.count("user-1").unwrap(), 1);
}
