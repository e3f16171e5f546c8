//! Turns a snapshot into the full analytics report.
//!
//! The engine keeps no state between calls; the only ambient input is the
//! clock, which is injected.

use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    charts::{self, Bucket, ChartData},
    goals::{GoalProgress, track_goals},
    models::Snapshot,
    streak::{StreakSummary, streak_summary},
    summary::{AnalyticsSummary, summarize},
    types::TimeRange,
    window::filter_entries,
};

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSet {
    pub weight_progression: Option<ChartData>,
    pub reps_progression: Option<ChartData>,
    pub duration: Option<ChartData>,
    pub rating_distribution: Option<ChartData>,
    pub program_usage: Option<ChartData>,
    pub completion_rate: Option<ChartData>,
    pub weekly_frequency: Option<ChartData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub range: TimeRange,
    pub generated_at: DateTime<FixedOffset>,
    pub summary: Option<AnalyticsSummary>,
    pub charts: ChartSet,
    pub goal_progress: Vec<GoalProgress>,
    pub streak: StreakSummary,
}

/// Computes every output for `snapshot` as of `now`.
///
/// Summary and charts use the window selected by `snapshot.time_range`;
/// goals and streaks always see the whole history.
pub fn compute_report(snapshot: &Snapshot, now: DateTime<FixedOffset>) -> AnalyticsReport {
    let window = filter_entries(&snapshot.progress_entries, snapshot.time_range, &now);
    debug!(
        range = %snapshot.time_range,
        total = snapshot.progress_entries.len(),
        in_window = window.len(),
        "filtered entries"
    );

    let unknown = window
        .iter()
        .filter(|e| !snapshot.programs.iter().any(|p| p.id == e.program_id))
        .count();
    if unknown > 0 {
        warn!(entries = unknown, "entries reference unknown programs");
    }

    let tz = *now.offset();
    let charts = ChartSet {
        weight_progression: charts::weight_progression(&window, &tz),
        reps_progression: charts::reps_progression(&window, &tz),
        duration: charts::duration_chart(&window, &tz),
        rating_distribution: charts::rating_distribution(&window),
        program_usage: charts::program_usage(&window, &snapshot.programs),
        completion_rate: charts::completion_rate_chart(&window, &tz),
        weekly_frequency: charts::frequency_chart(&window, Bucket::IsoWeek, &tz),
    };

    AnalyticsReport {
        range: snapshot.time_range,
        generated_at: now,
        summary: summarize(&window, &snapshot.programs),
        charts,
        goal_progress: track_goals(&snapshot.goals, &snapshot.progress_entries, &now),
        streak: streak_summary(snapshot.progress_entries.iter().map(|e| &e.workout_date), &now),
    }
}

/// Report builder bound to a clock.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> AnalyticsEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    pub fn compute(&self, snapshot: &Snapshot) -> AnalyticsReport {
        compute_report(snapshot, self.clock.now())
    }
}
