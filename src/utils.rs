//! Aggregation primitives shared by the summary, chart and goal code.
//!
//! All of them are total: empty input yields `0`, never `NaN` or a panic.
//! Rounding is half-away-from-zero everywhere (`f64::round`).

pub fn sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

pub fn average<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(total, count), v| (total + v, count + 1));

    if count == 0 { 0.0 } else { total / count as f64 }
}

pub fn max<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values
        .into_iter()
        .fold(None, |best: Option<f64>, v| match best {
            Some(b) if b >= v => Some(b),
            _ => Some(v),
        })
        .unwrap_or(0.0)
}

/// `round(100 * numerator / denominator)` clamped to `[0, 100]`; `0` when the denominator is zero.
pub fn percentage(numerator: f64, denominator: f64) -> u32 {
    if denominator == 0.0 {
        return 0;
    }

    let pct = (100.0 * numerator / denominator).round();
    if pct.is_nan() { 0 } else { pct.clamp(0.0, 100.0) as u32 }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats a minute count as `1h 05m` / `45m`.
pub fn format_minutes(minutes: u64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, rest)
    } else {
        format!("{}m", rest)
    }
}
