use crate::{models::ProgressEntry, types::Trend, utils::average};

/// Relative change the late half must exceed to count as a trend.
pub const TREND_THRESHOLD: f64 = 0.05;

/// Classifies a series of per-session scalars, oldest first.
pub fn classify(series: &[f64]) -> Trend {
    if series.len() < 2 {
        return Trend::Stable;
    }

    let (first, second) = series.split_at(series.len() / 2);
    let first_avg = average(first.iter().copied());
    let second_avg = average(second.iter().copied());

    let difference = second_avg - first_avg;
    let threshold = first_avg * TREND_THRESHOLD;

    if difference > threshold {
        Trend::Improving
    } else if difference < -threshold {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Average set weight per session, sorted chronologically, then classified.
pub fn weight_trend(entries: &[ProgressEntry]) -> Trend {
    let mut ordered: Vec<&ProgressEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.workout_date);

    let series: Vec<f64> = ordered.iter().map(|e| average(e.weights())).collect();
    classify(&series)
}
