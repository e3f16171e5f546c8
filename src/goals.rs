//! Per-goal progress against the full entry history.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;
use tracing::{trace, warn};

use crate::{
    models::{Goal, ProgressEntry},
    streak::streak_summary,
    types::GoalType,
    utils::{max, percentage, sum},
    window::{midnight, week_start_day},
};

const DAY_MS: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub title: String,
    pub goal_type: GoalType,
    pub unit: String,
    pub current_value: f64,
    pub target_value: f64,
    /// 0-100.
    pub percentage: u32,
    pub is_completed: bool,
    pub remaining_days: i64,
}

/// Current value of a goal. Only `Custom` trusts the stored `current` field.
pub fn current_value(goal: &Goal, entries: &[ProgressEntry], now: &DateTime<FixedOffset>) -> f64 {
    match goal.goal_type {
        GoalType::WorkoutsPerWeek => {
            let start = midnight(week_start_day(now.date_naive()), *now.offset());
            let end = start + Duration::days(7);
            entries
                .iter()
                .filter(|e| e.workout_date >= start && e.workout_date < end)
                .count() as f64
        }
        GoalType::TotalWorkouts => entries.len() as f64,
        GoalType::TotalDuration => sum(entries.iter().map(|e| e.total_duration as f64)),
        GoalType::WeightGoal => max(entries.iter().flat_map(|e| e.weights())),
        GoalType::RepsGoal => max(entries.iter().flat_map(|e| e.reps())),
        GoalType::StreakGoal => streak_summary(entries.iter().map(|e| &e.workout_date), now).current as f64,
        GoalType::Custom => goal.current,
    }
}

/// Whole days until `target`, rounded up, never negative.
pub fn remaining_days(target: &DateTime<Utc>, now: &DateTime<FixedOffset>) -> i64 {
    let ms = (*target - now.with_timezone(&Utc)).num_milliseconds() as f64;
    (ms / DAY_MS).ceil().max(0.0) as i64
}

pub fn goal_progress(goal: &Goal, entries: &[ProgressEntry], now: &DateTime<FixedOffset>) -> GoalProgress {
    if goal.target == 0.0 {
        warn!(goal = %goal.id, "goal has zero target");
    }

    let current = current_value(goal, entries, now);
    trace!(goal = %goal.id, kind = %goal.goal_type, current, "goal current value");

    GoalProgress {
        goal_id: goal.id.clone(),
        title: goal.title.clone(),
        goal_type: goal.goal_type,
        unit: goal.unit.clone(),
        current_value: current,
        target_value: goal.target,
        percentage: percentage(current, goal.target),
        is_completed: current >= goal.target,
        remaining_days: remaining_days(&goal.target_date, now),
    }
}

pub fn track_goals(goals: &[Goal], entries: &[ProgressEntry], now: &DateTime<FixedOffset>) -> Vec<GoalProgress> {
    goals.iter().map(|g| goal_progress(g, entries, now)).collect()
}
