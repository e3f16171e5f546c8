use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::{
    commands::Ctx,
    summary::summarize,
    types::{Trend, emit},
    utils::format_minutes,
};

fn trend_marker(trend: Trend) -> ColoredString {
    match trend {
        Trend::Improving => "▲ improving".green(),
        Trend::Declining => "▼ declining".red(),
        Trend::Stable => "● stable".yellow(),
    }
}

pub fn handle(ctx: &Ctx) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let window = ctx.window(&snapshot);
    let summary = summarize(&window, &snapshot.programs);

    emit(ctx.fmt, &summary, || {
        let Some(s) = &summary else {
            println!("{}", format!("(no workouts in range `{}`)", snapshot.time_range).dimmed());
            return;
        };

        println!("{} ({})", "Training Summary".cyan().bold(), snapshot.time_range);
        println!();
        println!("{}: {} sessions", "Workouts".cyan().bold(), s.total_workouts);
        println!("{}: {}", "Total time".cyan().bold(), format_minutes(s.total_duration));
        println!("{}: {:.1} / 5", "Average rating".cyan().bold(), s.average_rating);
        println!("{}: {} exercises", "Exercises logged".cyan().bold(), s.total_exercises);
        println!(
            "{}: {}/{} sets ({}%)",
            "Completed".cyan().bold(),
            s.completed_sets,
            s.total_sets,
            s.completion_rate
        );
        println!("{}: {:.0} kg", "Average weight".cyan().bold(), s.average_weight);
        println!("{}: {:.0}", "Average reps".cyan().bold(), s.average_reps);
        println!("{}: {}", "Most used program".cyan().bold(), s.most_used_program.bold());
        println!("{}: {}", "Trend".cyan().bold(), trend_marker(s.recent_trend));

        println!();
        println!(
            "  {} {} ({} stars)",
            "Best rated:".dimmed(),
            s.best_rated_workout.workout_date.with_timezone(ctx.now.offset()).format("%a %b %d"),
            s.best_rated_workout.rating.unwrap_or(0)
        );
        println!(
            "  {} {} ({})",
            "Longest:".dimmed(),
            s.longest_workout.workout_date.with_timezone(ctx.now.offset()).format("%a %b %d"),
            format_minutes(s.longest_workout.total_duration as u64)
        );
    })
}
