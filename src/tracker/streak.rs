use chrono::{Duration, NaiveDateTime};

use crate::utils::time::whole_days_between;

use super::entities::TrackerState;

/// Display state of the post-relapse waiting period. Derived from wall-clock
/// time on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownStatus {
    Unset,
    Active(Duration),
    Cleared,
}

/// Whole days since the most recent relapse, 0 when none was ever logged.
pub fn current_streak(state: &TrackerState, now: NaiveDateTime) -> i64 {
    match state.last_relapse {
        Some(last) => whole_days_between(last, now),
        None => 0,
    }
}

/// Longest run of days between relapses, with the streak still running as a
/// candidate. Gaps are taken in insertion order without sorting, so imported
/// or out-of-order logs can produce negative candidates. That quirk is kept
/// as-is: sorting would silently change reported history.
pub fn max_streak(state: &TrackerState, now: NaiveDateTime) -> i64 {
    let relapses: Vec<_> = state.relapse_times().collect();
    if relapses.is_empty() {
        return current_streak(state, now);
    }

    let mut candidates: Vec<i64> = relapses
        .windows(2)
        .map(|pair| whole_days_between(pair[0], pair[1]))
        .collect();

    if state.last_relapse.is_some() {
        candidates.push(current_streak(state, now));
    }

    candidates.into_iter().max().unwrap_or(0)
}

/// Cooldown state at `now`.
pub fn cooldown(state: &TrackerState, now: NaiveDateTime) -> CooldownStatus {
    match state.next_allowed_date {
        None => CooldownStatus::Unset,
        Some(next) if now >= next => CooldownStatus::Cleared,
        Some(next) => CooldownStatus::Active(next - now),
    }
}

/// Streak history for the trend graph: gaps between successive relapses, then
/// the streak still running. `None` when no relapse was ever logged, there is
/// nothing to draw yet.
pub fn streak_series(state: &TrackerState, now: NaiveDateTime) -> Option<Vec<i64>> {
    let relapses: Vec<_> = state.relapse_times().collect();
    let last = *relapses.last()?;

    let mut series: Vec<i64> = relapses
        .windows(2)
        .map(|pair| whole_days_between(pair[0], pair[1]))
        .collect();

    if series.is_empty() {
        series.push(whole_days_between(last, now));
    }

    series.push(current_streak(state, now));
    Some(series)
}
