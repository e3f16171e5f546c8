use anyhow::Result;
use colored::Colorize;

use crate::{
    commands::Ctx,
    goals::{GoalProgress, track_goals},
    types::{GoalType, emit},
};

const BAR_WIDTH: usize = 20;

fn progress_bar(pct: u32) -> String {
    let filled = (pct as usize * BAR_WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn print_goal(p: &GoalProgress) {
    let status = if p.is_completed {
        "done".green().bold()
    } else if p.remaining_days == 0 {
        "overdue".red().bold()
    } else {
        format!("{}d left", p.remaining_days).yellow()
    };

    let bar = if p.is_completed {
        progress_bar(p.percentage).green()
    } else {
        progress_bar(p.percentage).cyan()
    };

    println!("  {} {} ({})", "•".blue(), p.title.bold(), p.goal_type.to_string().dimmed());
    println!(
        "    {} {:>3}%  {} / {} {}  {}",
        bar,
        p.percentage,
        p.current_value,
        p.target_value,
        p.unit,
        status
    );
}

pub fn handle(ctx: &Ctx, kind: Option<GoalType>) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let goals: Vec<_> = snapshot
        .goals
        .iter()
        .filter(|g| kind.is_none_or(|k| g.goal_type == k))
        .cloned()
        .collect();

    let progress = track_goals(&goals, &snapshot.progress_entries, &ctx.now);

    emit(ctx.fmt, &progress, || {
        if progress.is_empty() {
            println!("{}", "  (no goals found)".dimmed());
            return;
        }

        println!("{}", "Goals:".cyan().bold());
        for p in &progress {
            print_goal(p);
        }
    })
}
