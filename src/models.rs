use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{GoalType, TimeRange};

/// Represents a single logged training session.
/// Entries are read-only for analytics: nothing in the engine mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: String,
    pub program_id: String,
    #[serde(default)]
    pub user_id: String,
    pub workout_date: DateTime<Utc>,
    /// Minutes.
    #[serde(default)]
    pub total_duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// 1-5 when present. Out-of-range values are kept as-is and ignored by the histogram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub exercises: Vec<ExerciseProgress>,
}

/// One exercise performed within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgress {
    pub exercise_id: String,
    pub exercise_name: String,
    #[serde(default)]
    pub sets: Vec<SetProgress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Individual set record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetProgress {
    pub set_number: u32,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub reps: u32,
    /// Seconds.
    #[serde(default)]
    pub rest_time: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProgressEntry {
    /// Every set of every exercise, in logging order.
    pub fn sets(&self) -> impl Iterator<Item = &SetProgress> {
        self.exercises.iter().flat_map(|e| e.sets.iter())
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.sets().map(|s| s.weight)
    }

    pub fn reps(&self) -> impl Iterator<Item = f64> + '_ {
        self.sets().map(|s| s.reps as f64)
    }

    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    pub fn completed_set_count(&self) -> usize {
        self.sets().filter(|s| s.completed).count()
    }
}

/// Workout template. Only the name is used, for resolving `ProgressEntry::program_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub difficulty: String,
}

/// A target the user works towards, defined independently of sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub target: f64,
    /// Authoritative only for `GoalType::Custom`.
    #[serde(default)]
    pub current: f64,
    #[serde(default)]
    pub unit: String,
    pub start_date: DateTime<Utc>,
    pub target_date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

/// Everything the engine needs for one computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub progress_entries: Vec<ProgressEntry>,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub time_range: TimeRange,
}

pub const UNKNOWN_PROGRAM: &str = "Unknown Program";

/// Resolves a program id to its display name.
pub fn program_name<'a>(programs: &'a [Program], program_id: &str) -> &'a str {
    programs
        .iter()
        .find(|p| p.id == program_id)
        .map(|p| p.name.as_str())
        .unwrap_or(UNKNOWN_PROGRAM)
}
