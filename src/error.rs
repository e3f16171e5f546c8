use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config file")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not serialize config")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("invalid --now value `{0}`, expected RFC 3339 (e.g. 2024-05-15T12:00:00+02:00)")]
    InvalidNow(String),

    #[error("could not determine config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, Error>;
