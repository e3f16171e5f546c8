use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::TimeRange,
};

pub const CONFIG_DIR_ENV: &str = "FITSTATS_CONFIG_DIR";
pub const DEFAULT_SNAPSHOT: &str = "./progress.json";
pub const DEFAULT_GRAPH_WIDTH: usize = 60;

/// Flat key/value settings persisted as TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub map: BTreeMap<String, String>,
}

/// `$FITSTATS_CONFIG_DIR/config.toml`, else `<config dir>/fitstats/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir).join("config.toml"));
    }

    dirs::config_dir()
        .map(|d| d.join("fitstats").join("config.toml"))
        .ok_or(Error::NoConfigDir)
}

impl Config {
    /// A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, toml::to_string(self)?).map_err(io_err)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(self.map.get("snapshot").map(String::as_str).unwrap_or(DEFAULT_SNAPSHOT))
    }

    pub fn range(&self) -> TimeRange {
        self.map
            .get("range")
            .map(TimeRange::parse_lenient)
            .unwrap_or_default()
    }

    pub fn graph_width(&self) -> usize {
        self.map
            .get("graph_width")
            .and_then(|w| w.parse().ok())
            .unwrap_or(DEFAULT_GRAPH_WIDTH)
    }
}
