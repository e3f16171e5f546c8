use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{cli::ConfigCmd, config::Config, types::TimeRange};

pub fn handle(cmd: ConfigCmd, mut cfg: Config, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCmd::List => {
            if cfg.map.is_empty() {
                println!("{}", "(no config set)".dimmed());
            } else {
                println!("{}", "Config:".cyan().bold());
                for (k, v) in &cfg.map {
                    println!("  {} = {}", k.green(), v);
                }
            }
        }

        ConfigCmd::Get { key } => match cfg.map.get(&key) {
            Some(val) => println!("{}", val),
            None => println!("{} key `{}` not found", "warning:".yellow().bold(), key),
        },

        ConfigCmd::Set { key, val } => {
            if key == "range" && !TimeRange::is_known(&val) {
                println!(
                    "{} `{}` is not a known range, it will behave like `all`",
                    "warning:".yellow().bold(),
                    val
                );
            }
            if key == "graph_width" && val.parse::<usize>().is_err() {
                println!("{} graph_width must be a positive number", "error:".red().bold());
                return Ok(());
            }

            cfg.map.insert(key.clone(), val.clone());
            cfg.save(config_path)
                .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
            println!("{} set `{}` = `{}`", "info:".blue().bold(), key.green(), val);
        }

        ConfigCmd::Unset { key } => {
            if cfg.map.remove(&key).is_some() {
                cfg.save(config_path)
                    .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
                println!("{} removed `{}`", "info:".blue().bold(), key.green());
            } else {
                println!("{} key `{}` not found", "warning:".yellow().bold(), key);
            }
        }
    }

    Ok(())
}
