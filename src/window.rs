//! Calendar helpers: range lower bounds, local calendar days and bucket keys.
//!
//! "Local" always means the offset carried by `now`.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

use crate::{models::ProgressEntry, types::TimeRange};

/// Midnight at the start of `date` in `offset`.
pub fn midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<FixedOffset> {
    let local = date.and_time(NaiveTime::MIN);
    let utc = local - Duration::seconds(offset.local_minus_utc() as i64);
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Calendar day of an instant as seen from `offset`.
pub fn local_day(instant: &DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    instant.with_timezone(offset).date_naive()
}

/// Sunday of the week containing `date`.
pub fn week_start_day(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Inclusive lower bound for `range`, or `None` for `All`.
pub fn start_date(range: TimeRange, now: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let today = now.date_naive();
    let offset = *now.offset();

    let day = match range {
        TimeRange::Today => today,
        TimeRange::Week => week_start_day(today),
        TimeRange::Month => today.with_day(1)?,
        TimeRange::Quarter => {
            let first_month = (today.month0() / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(today.year(), first_month, 1)?
        }
        TimeRange::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
        TimeRange::All => return None,
    };

    Some(midnight(day, offset))
}

/// Entries inside the window, in their original order.
pub fn filter_entries(
    entries: &[ProgressEntry],
    range: TimeRange,
    now: &DateTime<FixedOffset>,
) -> Vec<ProgressEntry> {
    match start_date(range, now) {
        Some(start) => entries
            .iter()
            .filter(|e| e.workout_date >= start)
            .cloned()
            .collect(),
        None => entries.to_vec(),
    }
}

/// ISO-8601 week bucket, e.g. `2024-W03`. Weeks belong to the year of their Thursday.
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}

/// Short chart label such as `Jan 15`.
pub fn short_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
