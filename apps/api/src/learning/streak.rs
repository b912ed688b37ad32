use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::learning::LearningStatsRow;

/// Consecutive-day activity counter as stored for a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub current: i64,
    pub longest: i64,
    pub last_activity_on: Option<NaiveDate>,
}

impl From<&LearningStatsRow> for StreakState {
    fn from(row: &LearningStatsRow) -> Self {
        Self {
            current: row.streak_count,
            longest: row.longest_streak,
            last_activity_on: row.last_activity_on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// First ever activity.
    Started,
    /// Activity on the day after the previous one.
    Continued,
    /// Already active today.
    Unchanged,
    /// A day or more was skipped.
    Reset,
}

/// Applies one learning activity on `today` (UTC) to the streak.
pub fn record_activity(state: StreakState, today: NaiveDate) -> (StreakState, StreakChange) {
    let current = state.current.max(0);
    let longest = state.longest.max(current);

    let (current, change) = match state.last_activity_on {
        None => (1, StreakChange::Started),
        Some(last) if last >= today => (current.max(1), StreakChange::Unchanged),
        Some(last) if last.succ_opt() == Some(today) => (current + 1, StreakChange::Continued),
        Some(_) => (1, StreakChange::Reset),
    };

    let last_activity_on = match state.last_activity_on {
        Some(last) if last > today => Some(last),
        _ => Some(today),
    };

    (
        StreakState {
            current,
            longest: longest.max(current),
            last_activity_on,
        },
        change,
    )
}

/// Streak as of `today`: a run whose last activity is older than yesterday is broken.
pub fn effective_streak(state: &StreakState, today: NaiveDate) -> i64 {
    match state.last_activity_on {
        Some(last) if Some(last) >= today.pred_opt() => state.current.max(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn state(current: i64, longest: i64, last: Option<NaiveDate>) -> StreakState {
        StreakState {
            current,
            longest,
            last_activity_on: last,
        }
    }

    #[test]
    fn test_first_activity_starts_streak() {
        let (next, change) = record_activity(StreakState::default(), day(10));
        assert_eq!(change, StreakChange::Started);
        assert_eq!(next, state(1, 1, Some(day(10))));
    }

    #[test]
    fn test_same_day_is_unchanged() {
        let (next, change) = record_activity(state(4, 6, Some(day(10))), day(10));
        assert_eq!(change, StreakChange::Unchanged);
        assert_eq!(next, state(4, 6, Some(day(10))));
    }

    #[test]
    fn test_next_day_continues() {
        let (next, change) = record_activity(state(6, 6, Some(day(10))), day(11));
        assert_eq!(change, StreakChange::Continued);
        assert_eq!(next, state(7, 7, Some(day(11))));
    }

    #[test]
    fn test_gap_resets_but_keeps_longest() {
        let (next, change) = record_activity(state(9, 12, Some(day(10))), day(13));
        assert_eq!(change, StreakChange::Reset);
        assert_eq!(next, state(1, 12, Some(day(13))));
    }

    #[test]
    fn test_continues_across_month_boundary() {
        let feb_end = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let (next, change) = record_activity(state(2, 2, Some(feb_end)), day(1));
        assert_eq!(change, StreakChange::Continued);
        assert_eq!(next.current, 3);
    }

    #[test]
    fn test_corrupted_negative_counter_is_sanitised() {
        let (next, _) = record_activity(state(-4, -1, Some(day(9))), day(10));
        assert_eq!(next.current, 1);
        assert_eq!(next.longest, 1);
    }

    #[test]
    fn test_future_last_activity_is_not_rewound() {
        let (next, change) = record_activity(state(3, 3, Some(day(12))), day(10));
        assert_eq!(change, StreakChange::Unchanged);
        assert_eq!(next.last_activity_on, Some(day(12)));
    }

    #[test]
    fn test_effective_streak_live_today_and_yesterday() {
        assert_eq!(effective_streak(&state(5, 5, Some(day(10))), day(10)), 5);
        assert_eq!(effective_streak(&state(5, 5, Some(day(9))), day(10)), 5);
    }

    #[test]
    fn test_effective_streak_broken_after_gap() {
        assert_eq!(effective_streak(&state(30, 30, Some(day(8))), day(10)), 0);
        let long_ago = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(effective_streak(&state(30, 30, Some(long_ago)), day(10)), 0);
    }

    #[test]
    fn test_effective_streak_without_activity() {
        assert_eq!(effective_streak(&StreakState::default(), day(10)), 0);
        assert_eq!(effective_streak(&state(-3, 0, Some(day(10))), day(10)), 0);
    }
}
