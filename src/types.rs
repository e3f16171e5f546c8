use once_cell::sync::Lazy;
use std::fmt::Display;
use strsim::jaro_winkler;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Named window used to filter entries before aggregation.
/// Anything unrecognised deserializes to `All`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum TimeRange {
    Today,
    Week,
    Month,
    Quarter,
    Year,
    #[default]
    All,
}

impl TimeRange {
    /// Case-insensitive parse that never fails: unknown input means no filtering.
    pub fn parse_lenient<S: AsRef<str>>(s: S) -> Self {
        match s.as_ref().trim().to_ascii_lowercase().as_str() {
            "today" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            "quarter" => Self::Quarter,
            "year" => Self::Year,
            _ => Self::All,
        }
    }

    pub fn is_known<S: AsRef<str>>(s: S) -> bool {
        ALLOWED_RANGES.contains(&s.as_ref().trim().to_ascii_lowercase().as_str())
    }
}

impl From<String> for TimeRange {
    fn from(s: String) -> Self {
        Self::parse_lenient(s)
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::All => "all",
        };

        write!(f, "{}", s)
    }
}

pub static ALLOWED_RANGES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["today", "week", "month", "quarter", "year", "all"]);

/// Return the closest known range name for a typo such as `"mnth"`,
/// if similarity is high *and* clearly better than the runner-up.
pub fn suggest_range(input: &str) -> Option<&'static str> {
    let inp = input.trim().to_ascii_lowercase();
    if inp.is_empty() {
        return None;
    }

    let mut scores: Vec<(&'static str, f64)> = ALLOWED_RANGES
        .iter()
        .copied()
        .map(|r| (r, jaro_winkler(&inp, r)))
        .collect();

    // Highest score first.
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (best, best_score) = scores[0];
    let second_score = scores.get(1).map(|(_, s)| *s).unwrap_or(0.0);

    const MIN_SCORE: f64 = 0.80;
    const GAP: f64 = 0.02;

    if best_score >= MIN_SCORE && best_score - second_score >= GAP {
        Some(best)
    } else {
        None
    }
}

/// Goal kinds. Every dispatch site matches exhaustively on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    WorkoutsPerWeek,
    TotalWorkouts,
    TotalDuration,
    WeightGoal,
    RepsGoal,
    StreakGoal,
    Custom,
}

impl Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::WorkoutsPerWeek => "workouts per week",
            Self::TotalWorkouts => "total workouts",
            Self::TotalDuration => "total duration",
            Self::WeightGoal => "weight",
            Self::RepsGoal => "reps",
            Self::StreakGoal => "streak",
            Self::Custom => "custom",
        };

        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        };

        write!(f, "{}", s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFmt {
    Text,
    Json,
}

impl OutputFmt {
    pub fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Print `value` as pretty JSON, or run the human-readable printer.
pub fn emit<T: Serialize + ?Sized>(fmt: OutputFmt, value: &T, text: impl FnOnce()) -> anyhow::Result<()> {
    match fmt {
        OutputFmt::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFmt::Text => text(),
    }
    Ok(())
}
