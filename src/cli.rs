use clap::{Parser, Subcommand, ValueEnum};

use crate::types::GoalType;

#[derive(Parser)]
#[command(name = "fitstats", version, about = "Training progress and goal analytics")]
#[command(arg_required_else_help = true, args_override_self = true)]
pub struct Cli {
    /// Emit machine-readable JSON instead of colorful text.
    #[arg(global = true, long)]
    pub json: bool,

    /// Snapshot file (defaults to the `snapshot` config key, then ./progress.json)
    #[arg(global = true, short, long, env = "FITSTATS_SNAPSHOT")]
    pub file: Option<String>,

    /// Pin "now" to an RFC 3339 timestamp instead of the local clock
    #[arg(global = true, long)]
    pub now: Option<String>,

    /// Time range: today, week, month, quarter, year or all
    #[arg(global = true, short, long)]
    pub range: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the analytics summary for the selected range
    #[command(visible_alias = "s")]
    Summary,

    /// Show one chart dataset
    #[command(visible_alias = "c")]
    Chart {
        /// Which chart to build
        #[arg(value_enum)]
        kind: ChartKind,

        /// Bucket the frequency chart by month instead of ISO week
        #[arg(short, long)]
        monthly: bool,
    },

    /// Show progress towards every goal
    #[command(visible_alias = "g")]
    Goals {
        /// Only show goals of this type
        #[arg(short, long, value_enum)]
        kind: Option<GoalType>,
    },

    /// Show the current and best day streak
    Streak,

    /// Print the complete report as JSON
    Report,

    /// View or edit fitstats config
    #[command(subcommand)]
    Config(ConfigCmd),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Weight,
    Reps,
    Duration,
    Rating,
    Programs,
    Completion,
    Frequency,
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Show all config keys
    List,

    /// Get the value of a key
    Get { key: String },

    /// Set or override a key
    Set { key: String, val: String },

    /// Remove a key
    Unset { key: String },
}
