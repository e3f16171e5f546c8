//! Consecutive-day streaks over logged workout dates.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use itertools::Itertools;
use serde::Serialize;

use crate::window::local_day;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current: u32,
    pub best: u32,
}

/// Distinct local calendar days, ascending.
pub fn distinct_days<'a, I>(dates: I, offset: &FixedOffset) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = &'a DateTime<Utc>>,
{
    dates
        .into_iter()
        .map(|d| local_day(d, offset))
        .sorted()
        .dedup()
        .collect()
}

/// Longest run of consecutive days in an ascending day list.
pub fn best_streak(days: &[NaiveDate]) -> u32 {
    if days.is_empty() {
        return 0;
    }

    let (best, run) = days.iter().tuple_windows().fold((1u32, 1u32), |(best, run), (prev, next)| {
        match (*next - *prev).num_days() {
            0 => (best, run),
            1 => (best, run + 1),
            _ => (best.max(run), 1),
        }
    });

    best.max(run)
}

/// Walks backwards from `today`: the i-th most recent day counts only while its
/// distance from today equals the number of days already counted.
///
/// A missing entry for today therefore ends the streak at 0, and any gap ends it
/// immediately. Future-dated days have negative distance and stop the walk.
pub fn current_streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut count = 0u32;
    for day in days.iter().rev() {
        let offset = (today - *day).num_days();
        if offset != count as i64 {
            break;
        }
        count += 1;
    }
    count
}

pub fn streak_summary<'a, I>(dates: I, now: &DateTime<FixedOffset>) -> StreakSummary
where
    I: IntoIterator<Item = &'a DateTime<Utc>>,
{
    let days = distinct_days(dates, now.offset());

    StreakSummary {
        current: current_streak(&days, now.date_naive()),
        best: best_streak(&days),
    }
}
