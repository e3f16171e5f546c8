//! Progress and goal analytics over logged training sessions.
//!
//! The engine modules (`window`, `utils`, `streak`, `trend`, `summary`,
//! `charts`, `goals`, `engine`) are pure: they take an in-memory snapshot
//! plus an explicit "now" and never touch the filesystem or the clock.

pub mod charts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod goals;
pub mod models;
pub mod storage;
pub mod streak;
pub mod summary;
pub mod trend;
pub mod types;
pub mod utils;
pub mod window;

pub use engine::{AnalyticsEngine, AnalyticsReport, Clock, FixedClock, SystemClock, compute_report};
pub use error::{Error, Result};
pub use models::{ExerciseProgress, Goal, Program, ProgressEntry, SetProgress, Snapshot};
pub use types::{GoalType, TimeRange, Trend};
