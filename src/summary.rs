//! Point-in-time summary over a window of progress entries.

use serde::Serialize;
use tracing::debug;

use crate::{
    models::{Program, ProgressEntry, program_name},
    trend::weight_trend,
    types::Trend,
    utils::{average, percentage, round_to},
};

pub const NO_PROGRAM: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_workouts: usize,
    /// Minutes.
    pub total_duration: u64,
    pub average_rating: f64,
    pub total_sets: usize,
    pub completed_sets: usize,
    pub completion_rate: u32,
    pub total_exercises: usize,
    pub average_weight: f64,
    pub average_reps: f64,
    pub most_used_program: String,
    pub best_rated_workout: ProgressEntry,
    pub longest_workout: ProgressEntry,
    pub recent_trend: Trend,
}

/// Builds the summary for already-filtered entries. `None` for an empty window.
pub fn summarize(entries: &[ProgressEntry], programs: &[Program]) -> Option<AnalyticsSummary> {
    let first = entries.first()?;

    let total_sets: usize = entries.iter().map(|e| e.set_count()).sum();
    let completed_sets: usize = entries.iter().map(|e| e.completed_set_count()).sum();

    // Missing ratings count as zero but stay in the denominator.
    let average_rating = round_to(
        average(entries.iter().map(|e| e.rating.unwrap_or(0) as f64)),
        1,
    );

    let best_rated_workout = entries.iter().skip(1).fold(first, |best, e| {
        if e.rating.unwrap_or(0) > best.rating.unwrap_or(0) { e } else { best }
    });
    let longest_workout = entries.iter().skip(1).fold(first, |best, e| {
        if e.total_duration > best.total_duration { e } else { best }
    });

    let summary = AnalyticsSummary {
        total_workouts: entries.len(),
        total_duration: entries.iter().map(|e| e.total_duration as u64).sum(),
        average_rating,
        total_sets,
        completed_sets,
        completion_rate: percentage(completed_sets as f64, total_sets as f64),
        total_exercises: entries.iter().map(|e| e.exercises.len()).sum(),
        average_weight: average(entries.iter().flat_map(|e| e.weights())).round(),
        average_reps: average(entries.iter().flat_map(|e| e.reps())).round(),
        most_used_program: most_used_program(entries, programs),
        best_rated_workout: best_rated_workout.clone(),
        longest_workout: longest_workout.clone(),
        recent_trend: weight_trend(entries),
    };

    debug!(
        workouts = summary.total_workouts,
        sets = summary.total_sets,
        completion = summary.completion_rate,
        trend = %summary.recent_trend,
        "summarized window"
    );

    Some(summary)
}

/// Program id with the most entries; ties go to the program seen first.
pub fn most_used_program(entries: &[ProgressEntry], programs: &[Program]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(id, _)| *id == entry.program_id) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.program_id.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (id, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((id, n));
        }
    }

    match best {
        Some((id, _)) => program_name(programs, id).to_string(),
        None => NO_PROGRAM.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseProgress, SetProgress};
    use chrono::{DateTime, Utc};

    fn set(n: u32, weight: f64, reps: u32, completed: bool) -> SetProgress {
        SetProgress { set_number: n, weight, reps, rest_time: 60, completed, notes: None }
    }

    fn entry(id: &str, program: &str, date: &str, duration: u32, rating: Option<u8>, sets: Vec<SetProgress>) -> ProgressEntry {
        ProgressEntry {
            id: id.into(),
            program_id: program.into(),
            user_id: "u1".into(),
            workout_date: date.parse::<DateTime<Utc>>().unwrap(),
            total_duration: duration,
            notes: None,
            rating,
            completed: true,
            exercises: vec![ExerciseProgress {
                exercise_id: format!("{id}-x"),
                exercise_name: "Bench Press".into(),
                sets,
                notes: None,
            }],
        }
    }

    fn programs() -> Vec<Program> {
        vec![
            Program { id: "a".into(), name: "Upper".into(), difficulty: "medium".into() },
            Program { id: "b".into(), name: "Lower".into(), difficulty: "hard".into() },
        ]
    }

    fn fixture() -> Vec<ProgressEntry> {
        vec![
            entry("e1", "a", "2024-01-10T10:00:00Z", 60, Some(4), vec![
                set(1, 100.0, 8, true),
                set(2, 100.0, 8, true),
                set(3, 95.0, 6, false),
                set(4, 105.0, 8, true),
            ]),
            entry("e2", "b", "2024-01-12T10:00:00Z", 45, Some(5), vec![
                set(1, 105.0, 8, true),
                set(2, 100.0, 7, true),
                set(3, 0.0, 20, true),
                set(4, 0.0, 18, true),
            ]),
        ]
    }

    #[test]
    fn empty_window_has_no_summary() {
        assert!(summarize(&[], &programs()).is_none());
    }

    #[test]
    fn pinned_fixture_values() {
        let s = summarize(&fixture(), &programs()).unwrap();

        assert_eq!(s.total_workouts, 2);
        assert_eq!(s.total_duration, 105);
        assert_eq!(s.average_rating, 4.5);
        assert_eq!(s.total_sets, 8);
        assert_eq!(s.completed_sets, 7);
        assert_eq!(s.completion_rate, 88);
        assert_eq!(s.total_exercises, 2);
        assert_eq!(s.average_weight, 76.0);
        assert_eq!(s.average_reps, 10.0);
        assert_eq!(s.best_rated_workout.id, "e2");
        assert_eq!(s.longest_workout.id, "e1");
        // 100 avg then 51.25 avg.
        assert_eq!(s.recent_trend, Trend::Declining);
    }

    #[test]
    fn missing_rating_counts_as_zero() {
        let mut entries = fixture();
        entries[1].rating = None;
        let s = summarize(&entries, &programs()).unwrap();
        assert_eq!(s.average_rating, 2.0);
        assert_eq!(s.best_rated_workout.id, "e1");
    }

    #[test]
    fn ties_keep_earliest_entry() {
        let mut entries = fixture();
        entries[1].rating = Some(4);
        entries[1].total_duration = 60;
        let s = summarize(&entries, &programs()).unwrap();
        assert_eq!(s.best_rated_workout.id, "e1");
        assert_eq!(s.longest_workout.id, "e1");
    }

    #[test]
    fn most_used_program_tie_breaks_on_first_seen() {
        let mut entries = fixture();
        assert_eq!(most_used_program(&entries, &programs()), "Upper");

        entries.push(entry("e3", "b", "2024-01-13T10:00:00Z", 30, None, vec![]));
        assert_eq!(most_used_program(&entries, &programs()), "Lower");

        assert_eq!(most_used_program(&[], &programs()), NO_PROGRAM);
    }

    #[test]
    fn unknown_program_name() {
        let entries = vec![entry("e1", "zzz", "2024-01-10T10:00:00Z", 30, None, vec![])];
        let s = summarize(&entries, &programs()).unwrap();
        assert_eq!(s.most_used_program, "Unknown Program");
        assert_eq!(s.completion_rate, 0);
        assert_eq!(s.average_weight, 0.0);
    }
}
