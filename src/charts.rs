//! Chart datasets for the dashboard. Every builder returns `None` on an empty window.
//!
//! Styling keys are opaque to the engine; they are passed through to whatever draws the chart.

use chrono::FixedOffset;
use itertools::Itertools;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::{
    models::{Program, ProgressEntry, program_name},
    utils::{average, percentage},
    window::{iso_week_key, local_day, month_key, short_label},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(flatten)]
    pub style: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    IsoWeek,
    Month,
}

const RATING_LABELS: [&str; 5] = ["1 Star", "2 Stars", "3 Stars", "4 Stars", "5 Stars"];

fn line_style(color: &str) -> Map<String, Value> {
    let mut style = Map::new();
    style.insert("borderColor".into(), json!(color));
    style.insert("backgroundColor".into(), json!(format!("{color}33")));
    style.insert("tension".into(), json!(0.1));
    style
}

fn bar_style(colors: &[&str]) -> Map<String, Value> {
    let mut style = Map::new();
    style.insert("backgroundColor".into(), json!(colors));
    style.insert("borderWidth".into(), json!(1));
    style
}

/// One point per entry, oldest first, labelled with the local calendar date.
fn per_entry_series(
    entries: &[ProgressEntry],
    tz: &FixedOffset,
    label: &str,
    color: &str,
    value: impl Fn(&ProgressEntry) -> f64,
) -> Option<ChartData> {
    if entries.is_empty() {
        return None;
    }

    let ordered = entries.iter().sorted_by_key(|e| e.workout_date).collect::<Vec<_>>();

    Some(ChartData {
        labels: ordered.iter().map(|e| short_label(local_day(&e.workout_date, tz))).collect(),
        datasets: vec![Dataset {
            label: label.to_string(),
            data: ordered.iter().map(|e| value(*e)).collect(),
            style: line_style(color),
        }],
    })
}

pub fn weight_progression(entries: &[ProgressEntry], tz: &FixedOffset) -> Option<ChartData> {
    per_entry_series(entries, tz, "Average Weight (kg)", "#3b82f6", |e| average(e.weights()).round())
}

pub fn reps_progression(entries: &[ProgressEntry], tz: &FixedOffset) -> Option<ChartData> {
    per_entry_series(entries, tz, "Average Reps", "#10b981", |e| average(e.reps()).round())
}

pub fn duration_chart(entries: &[ProgressEntry], tz: &FixedOffset) -> Option<ChartData> {
    per_entry_series(entries, tz, "Duration (minutes)", "#f59e0b", |e| e.total_duration as f64)
}

pub fn completion_rate_chart(entries: &[ProgressEntry], tz: &FixedOffset) -> Option<ChartData> {
    per_entry_series(entries, tz, "Completion Rate (%)", "#8b5cf6", |e| {
        percentage(e.completed_set_count() as f64, e.set_count() as f64) as f64
    })
}

/// Five fixed buckets. Missing or out-of-range ratings land in none of them.
pub fn rating_distribution(entries: &[ProgressEntry]) -> Option<ChartData> {
    if entries.is_empty() {
        return None;
    }

    let counts = entries
        .iter()
        .filter_map(|e| e.rating)
        .filter(|r| (1..=5).contains(r))
        .fold([0.0f64; 5], |mut acc, r| {
            acc[(r - 1) as usize] += 1.0;
            acc
        });

    Some(ChartData {
        labels: RATING_LABELS.iter().map(|s| s.to_string()).collect(),
        datasets: vec![Dataset {
            label: "Number of Workouts".into(),
            data: counts.to_vec(),
            style: bar_style(&["#ef4444", "#f97316", "#eab308", "#22c55e", "#10b981"]),
        }],
    })
}

/// Entries per program name, most used first. Equal counts keep first-seen order.
pub fn program_usage(entries: &[ProgressEntry], programs: &[Program]) -> Option<ChartData> {
    if entries.is_empty() {
        return None;
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        let name = program_name(programs, &entry.program_id);
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, c)) => *c += 1,
            None => counts.push((name, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Some(ChartData {
        labels: counts.iter().map(|(n, _)| n.to_string()).collect(),
        datasets: vec![Dataset {
            label: "Workouts per Program".into(),
            data: counts.iter().map(|(_, c)| *c as f64).collect(),
            style: bar_style(&["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4"]),
        }],
    })
}

/// Workouts per ISO week or calendar month, ascending, empty buckets omitted.
pub fn frequency_chart(entries: &[ProgressEntry], bucket: Bucket, tz: &FixedOffset) -> Option<ChartData> {
    if entries.is_empty() {
        return None;
    }

    let keyed = entries
        .iter()
        .map(|e| {
            let day = local_day(&e.workout_date, tz);
            match bucket {
                Bucket::IsoWeek => iso_week_key(day),
                Bucket::Month => month_key(day),
            }
        })
        .sorted()
        .dedup_with_count()
        .collect::<Vec<_>>();

    let label = match bucket {
        Bucket::IsoWeek => "Workouts per Week",
        Bucket::Month => "Workouts per Month",
    };

    Some(ChartData {
        labels: keyed.iter().map(|(_, k)| k.clone()).collect(),
        datasets: vec![Dataset {
            label: label.into(),
            data: keyed.iter().map(|(n, _)| *n as f64).collect(),
            style: bar_style(&["#06b6d4"]),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseProgress, SetProgress};
    use chrono::{DateTime, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn entry(id: &str, program: &str, date: &str, rating: Option<u8>, sets: &[(f64, u32, bool)]) -> ProgressEntry {
        ProgressEntry {
            id: id.into(),
            program_id: program.into(),
            user_id: "u1".into(),
            workout_date: date.parse::<DateTime<Utc>>().unwrap(),
            total_duration: 30 + sets.len() as u32 * 5,
            notes: None,
            rating,
            completed: true,
            exercises: vec![ExerciseProgress {
                exercise_id: "squat".into(),
                exercise_name: "Squat".into(),
                sets: sets
                    .iter()
                    .enumerate()
                    .map(|(i, (w, r, c))| SetProgress {
                        set_number: i as u32 + 1,
                        weight: *w,
                        reps: *r,
                        rest_time: 120,
                        completed: *c,
                        notes: None,
                    })
                    .collect(),
                notes: None,
            }],
        }
    }

    fn programs() -> Vec<Program> {
        vec![
            Program { id: "a".into(), name: "A".into(), difficulty: String::new() },
            Program { id: "b".into(), name: "B".into(), difficulty: String::new() },
        ]
    }

    #[test]
    fn every_builder_is_none_on_empty_window() {
        let tz = utc();
        assert!(weight_progression(&[], &tz).is_none());
        assert!(reps_progression(&[], &tz).is_none());
        assert!(duration_chart(&[], &tz).is_none());
        assert!(completion_rate_chart(&[], &tz).is_none());
        assert!(rating_distribution(&[]).is_none());
        assert!(program_usage(&[], &programs()).is_none());
        assert!(frequency_chart(&[], Bucket::IsoWeek, &tz).is_none());
    }

    #[test]
    fn series_are_sorted_chronologically() {
        let entries = vec![
            entry("late", "a", "2024-01-20T10:00:00Z", None, &[(120.0, 5, true), (110.0, 5, false)]),
            entry("early", "a", "2024-01-15T10:00:00Z", None, &[(100.0, 8, true)]),
        ];

        let weight = weight_progression(&entries, &utc()).unwrap();
        assert_eq!(weight.labels, vec!["Jan 15", "Jan 20"]);
        assert_eq!(weight.datasets[0].data, vec![100.0, 115.0]);

        let reps = reps_progression(&entries, &utc()).unwrap();
        assert_eq!(reps.datasets[0].data, vec![8.0, 5.0]);

        let duration = duration_chart(&entries, &utc()).unwrap();
        assert_eq!(duration.datasets[0].data, vec![35.0, 40.0]);

        let completion = completion_rate_chart(&entries, &utc()).unwrap();
        assert_eq!(completion.datasets[0].data, vec![100.0, 50.0]);
    }

    #[test]
    fn entry_without_sets_plots_zero() {
        let entries = vec![entry("e", "a", "2024-01-15T10:00:00Z", None, &[])];
        let completion = completion_rate_chart(&entries, &utc()).unwrap();
        assert_eq!(completion.datasets[0].data, vec![0.0]);
        let weight = weight_progression(&entries, &utc()).unwrap();
        assert_eq!(weight.datasets[0].data, vec![0.0]);
    }

    #[test]
    fn rating_histogram_skips_missing_and_out_of_range() {
        let entries = vec![
            entry("e1", "a", "2024-01-15T10:00:00Z", Some(5), &[]),
            entry("e2", "a", "2024-01-16T10:00:00Z", Some(3), &[]),
            entry("e3", "a", "2024-01-17T10:00:00Z", Some(5), &[]),
            entry("e4", "a", "2024-01-18T10:00:00Z", None, &[]),
            entry("e5", "a", "2024-01-19T10:00:00Z", Some(6), &[]),
            entry("e6", "a", "2024-01-19T10:00:00Z", Some(0), &[]),
        ];

        let chart = rating_distribution(&entries).unwrap();
        assert_eq!(chart.labels, vec!["1 Star", "2 Stars", "3 Stars", "4 Stars", "5 Stars"]);
        assert_eq!(chart.datasets[0].data, vec![0.0, 0.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn program_usage_sorted_by_count() {
        let entries = vec![
            entry("e1", "b", "2024-01-15T10:00:00Z", None, &[]),
            entry("e2", "a", "2024-01-16T10:00:00Z", None, &[]),
            entry("e3", "a", "2024-01-17T10:00:00Z", None, &[]),
            entry("e4", "gone", "2024-01-18T10:00:00Z", None, &[]),
        ];

        let chart = program_usage(&entries, &programs()).unwrap();
        assert_eq!(chart.labels, vec!["A", "B", "Unknown Program"]);
        assert_eq!(chart.datasets[0].data, vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn frequency_buckets() {
        let entries = vec![
            entry("e1", "a", "2024-01-15T10:00:00Z", None, &[]),
            entry("e2", "a", "2024-01-17T10:00:00Z", None, &[]),
            entry("e3", "a", "2024-02-02T10:00:00Z", None, &[]),
        ];

        let weekly = frequency_chart(&entries, Bucket::IsoWeek, &utc()).unwrap();
        assert_eq!(weekly.labels, vec!["2024-W03", "2024-W05"]);
        assert_eq!(weekly.datasets[0].data, vec![2.0, 1.0]);

        let monthly = frequency_chart(&entries, Bucket::Month, &utc()).unwrap();
        assert_eq!(monthly.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(monthly.datasets[0].data, vec![2.0, 1.0]);
    }

    #[test]
    fn style_is_flattened_into_dataset_json() {
        let entries = vec![entry("e1", "a", "2024-01-15T10:00:00Z", Some(4), &[])];
        let chart = rating_distribution(&entries).unwrap();
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["datasets"][0]["label"], "Number of Workouts");
        assert!(json["datasets"][0]["backgroundColor"].is_array());
    }
}
