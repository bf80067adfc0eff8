//! The streak state machine, pure over `StreakState` + a calendar date.

use chrono::NaiveDate;

use ember_core::progress::StreakState;

/// Apply one daily transition.
///
/// - first-ever log starts the streak at 1;
/// - a same-day repeat is a no-op (idempotent re-log);
/// - a log exactly one day after the last active date increments;
/// - anything else resets: to 1 when logging now, to 0 otherwise.
///
/// `longest_streak` is a high-water mark and `last_active_date` always
/// lands on `today` afterwards.
pub fn apply(state: &mut StreakState, did_log_today: bool, today: NaiveDate) {
    match state.last_active_date {
        // Same-day re-log (or re-check): nothing moves.
        Some(last) if last == today => return,
        Some(last) if did_log_today && is_next_day(last, today) => {
            state.current_streak += 1;
        }
        _ => {
            state.current_streak = if did_log_today { 1 } else { 0 };
        }
    }

    state.longest_streak = state.longest_streak.max(state.current_streak);
    state.last_active_date = Some(today);
}

fn is_next_day(last: NaiveDate, today: NaiveDate) -> bool {
    (today - last).num_days() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn first_log_starts_at_one() {
        let mut state = StreakState::new("u");
        apply(&mut state, true, date(1));
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 1);
        assert_eq!(state.last_active_date, Some(date(1)));
    }

    #[test]
    fn consecutive_days_increment() {
        let mut state = StreakState::new("u");
        for d in 1..=5 {
            apply(&mut state, true, date(d));
            assert_eq!(state.current_streak, d);
        }
        assert_eq!(state.longest_streak, 5);
    }

    #[test]
    fn same_day_relog_is_idempotent() {
        let mut state = StreakState::new("u");
        apply(&mut state, true, date(1));
        apply(&mut state, true, date(1));
        assert_eq!(state.current_streak, 1);
    }

    #[test]
    fn skipped_day_resets_to_one_when_logging() {
        let mut state = StreakState::new("u");
        apply(&mut state, true, date(1));
        apply(&mut state, true, date(2));
        apply(&mut state, true, date(5));
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 2, "high-water mark survives the reset");
    }

    #[test]
    fn missed_day_without_log_resets_to_zero() {
        let mut state = StreakState::new("u");
        apply(&mut state, true, date(1));
        apply(&mut state, false, date(3));
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.last_active_date, Some(date(3)));
    }

    #[test]
    fn longest_never_decreases() {
        let mut state = StreakState::new("u");
        for d in 1..=4 {
            apply(&mut state, true, date(d));
        }
        apply(&mut state, false, date(10));
        apply(&mut state, true, date(12));
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 4);
    }
}
