use anyhow::Result;
use colored::Colorize;

use crate::{commands::Ctx, streak::streak_summary, types::emit};

pub fn handle(ctx: &Ctx) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let streak = streak_summary(snapshot.progress_entries.iter().map(|e| &e.workout_date), &ctx.now);

    emit(ctx.fmt, &streak, || {
        let current = if streak.current > 0 {
            format!("{} days", streak.current).green().bold()
        } else {
            "0 days".dimmed()
        };
        println!("{}: {}", "Current streak".cyan().bold(), current);
        println!("{}: {} days", "Best streak".cyan().bold(), streak.best);
    })
}
