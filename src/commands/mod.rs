pub mod chart;
pub mod config;
pub mod goals;
pub mod report;
pub mod streak;
pub mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use colored::Colorize;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    config::{Config, config_path},
    engine::{AnalyticsEngine, Clock, FixedClock, SystemClock},
    error::Error,
    models::{ProgressEntry, Snapshot},
    storage::load_snapshot,
    types::{OutputFmt, TimeRange, suggest_range},
    window::filter_entries,
};

/// Everything a command handler needs, resolved once from flags and config.
pub struct Ctx {
    pub fmt: OutputFmt,
    pub config: Config,
    pub now: DateTime<FixedOffset>,
    range: Option<TimeRange>,
    snapshot_path: PathBuf,
}

impl Ctx {
    pub fn from_cli(cli: &Cli, config: Config) -> Result<Self> {
        let now = match &cli.now {
            Some(raw) => DateTime::parse_from_rfc3339(raw).map_err(|_| Error::InvalidNow(raw.clone()))?,
            None => SystemClock.now(),
        };

        let range = match &cli.range {
            Some(raw) => Some(resolve_range(raw)),
            None => config.map.contains_key("range").then(|| config.range()),
        };

        let snapshot_path = cli
            .file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| config.snapshot_path());

        Ok(Self {
            fmt: OutputFmt::from_flag(cli.json),
            config,
            now,
            range,
            snapshot_path,
        })
    }

    /// Loads the snapshot, applying any range override from flags or config.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let mut snapshot = load_snapshot(&self.snapshot_path)
            .with_context(|| format!("Could not load snapshot {}", self.snapshot_path.display()))?;

        if let Some(range) = self.range {
            snapshot.time_range = range;
        }
        Ok(snapshot)
    }

    pub fn engine(&self) -> AnalyticsEngine<FixedClock> {
        AnalyticsEngine::new(FixedClock(self.now))
    }

    pub fn window(&self, snapshot: &Snapshot) -> Vec<ProgressEntry> {
        filter_entries(&snapshot.progress_entries, snapshot.time_range, &self.now)
    }
}

/// Unknown ranges fall back to `all`, with a hint when the input looks like a typo.
fn resolve_range(raw: &str) -> TimeRange {
    if !TimeRange::is_known(raw) {
        match suggest_range(raw) {
            Some(s) => eprintln!(
                "{} unknown range `{}`, showing all entries (did you mean `{}`?)",
                "warning:".yellow().bold(),
                raw,
                s.green()
            ),
            None => eprintln!(
                "{} unknown range `{}`, showing all entries",
                "warning:".yellow().bold(),
                raw
            ),
        }
    }
    TimeRange::parse_lenient(raw)
}

pub fn run(cli: Cli) -> Result<()> {
    let cfg_path = config_path()?;
    let config = Config::load(&cfg_path)?;
    debug!(path = %cfg_path.display(), keys = config.map.len(), "loaded config");

    if let Commands::Config(cmd) = cli.cmd {
        return config::handle(cmd, config, &cfg_path);
    }

    let ctx = Ctx::from_cli(&cli, config)?;

    match cli.cmd {
        Commands::Summary => summary::handle(&ctx),
        Commands::Chart { kind, monthly } => chart::handle(&ctx, kind, monthly),
        Commands::Goals { kind } => goals::handle(&ctx, kind),
        Commands::Streak => streak::handle(&ctx),
        Commands::Report => report::handle(&ctx),
        Commands::Config(_) => Ok(()),
    }
}
