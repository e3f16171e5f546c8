use anyhow::Result;
use colored::Colorize;

use crate::{
    charts::{self, Bucket, ChartData},
    cli::ChartKind,
    commands::Ctx,
    types::emit,
};

/// Line graph of `(label, value)` points, drawn with `●` and `·`.
pub fn create_ascii_graph(data: &[(String, f64)], width: usize, height: usize, title: &str) -> Vec<String> {
    if data.is_empty() {
        return vec!["No data available".to_string()];
    }

    let min_value = data.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max_value = data.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;

    if range == 0.0 || data.len() < 2 {
        return vec![format!("No variation in data ({:.0})", max_value)];
    }

    let width = width.max(2);
    let height = height.max(2);
    let mut grid = vec![vec![' '; width]; height];

    let point = |i: usize| -> (usize, usize) {
        let x = (i as f64 / (data.len() - 1) as f64 * (width - 1) as f64) as usize;
        let y = ((data[i].1 - min_value) / range * (height - 1) as f64) as usize;
        (x, height - 1 - y)
    };

    for i in 0..data.len() {
        let (x, y) = point(i);
        grid[y][x] = '●';

        // Connect to the previous point.
        if i > 0 {
            let (prev_x, prev_y) = point(i - 1);
            let dx = x as isize - prev_x as isize;
            let dy = y as isize - prev_y as isize;
            let steps = dx.abs().max(dy.abs());

            for step in 1..steps {
                let px = (prev_x as isize + dx * step / steps) as usize;
                let py = (prev_y as isize + dy * step / steps) as usize;
                if grid[py][px] == ' ' {
                    grid[py][px] = '·';
                }
            }
        }
    }

    let mut result = Vec::new();
    let step = range / (height - 1) as f64;

    result.push(format!("\n{}", title.bold()));
    result.push("─".repeat(width + 7));

    for (i, row) in grid.iter().enumerate() {
        let value = min_value + step * (height - 1 - i) as f64;
        result.push(format!("{:5.0} │{}", value, row.iter().collect::<String>()));
    }

    result.push(format!("      └{}", "─".repeat(width)));

    let first = &data[0].0;
    let last = &data[data.len() - 1].0;
    let gap = width.saturating_sub(first.chars().count() + last.chars().count());
    result.push(format!("       {}{}{}", first, " ".repeat(gap), last));

    result
}

/// Horizontal bars scaled to the largest bucket.
fn print_bars(chart: &ChartData, width: usize) {
    let Some(dataset) = chart.datasets.first() else {
        return;
    };

    let label_w = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let top = dataset.data.iter().copied().fold(0.0, f64::max);

    for (label, value) in chart.labels.iter().zip(&dataset.data) {
        let len = if top > 0.0 { (value / top * width as f64).round() as usize } else { 0 };
        println!(
            "  {:<label_w$} {} {}",
            label,
            "█".repeat(len).green(),
            value,
            label_w = label_w
        );
    }
}

fn is_series(kind: ChartKind) -> bool {
    matches!(
        kind,
        ChartKind::Weight | ChartKind::Reps | ChartKind::Duration | ChartKind::Completion
    )
}

pub fn handle(ctx: &Ctx, kind: ChartKind, monthly: bool) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let window = ctx.window(&snapshot);
    let tz = *ctx.now.offset();

    let chart = match kind {
        ChartKind::Weight => charts::weight_progression(&window, &tz),
        ChartKind::Reps => charts::reps_progression(&window, &tz),
        ChartKind::Duration => charts::duration_chart(&window, &tz),
        ChartKind::Rating => charts::rating_distribution(&window),
        ChartKind::Programs => charts::program_usage(&window, &snapshot.programs),
        ChartKind::Completion => charts::completion_rate_chart(&window, &tz),
        ChartKind::Frequency => {
            let bucket = if monthly { Bucket::Month } else { Bucket::IsoWeek };
            charts::frequency_chart(&window, bucket, &tz)
        }
    };

    emit(ctx.fmt, &chart, || {
        let Some(chart) = &chart else {
            println!("{}", format!("(no workouts in range `{}`)", snapshot.time_range).dimmed());
            return;
        };
        let Some(dataset) = chart.datasets.first() else {
            return;
        };

        let (term_width, term_height) = term_size::dimensions().unwrap_or((80, 24));
        let width = (term_width / 2).min(ctx.config.graph_width());
        let height = (term_height / 2).min(15);

        if is_series(kind) {
            let points: Vec<(String, f64)> = chart.labels.iter().cloned().zip(dataset.data.iter().copied()).collect();
            for line in create_ascii_graph(&points, width, height, &dataset.label) {
                println!("{}", line);
            }
        } else {
            println!("{}", dataset.label.cyan().bold());
            print_bars(chart, width);
        }
    })
}
