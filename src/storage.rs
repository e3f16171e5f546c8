use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{
    error::{Error, Result},
    models::Snapshot,
};

/// Reads a snapshot JSON file (`progressEntries`, `programs`, `goals`, optional `timeRange`).
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: Snapshot = serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        entries = snapshot.progress_entries.len(),
        programs = snapshot.programs.len(),
        goals = snapshot.goals.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let content = serde_json::to_string_pretty(snapshot).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
