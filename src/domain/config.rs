use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The name of the optional configuration file in the working directory.
pub const FILENAME: &str = "shard.toml";

/// Configuration for a sharding run.
///
/// Every path is relative to the directory the tool is run in, unless it is
/// absolute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// The document to split.
    pub source: PathBuf,

    /// The directory section documents and the index are written to.
    ///
    /// Created if it does not exist. Existing files with the same names are
    /// overwritten.
    pub output_dir: PathBuf,

    /// The level-one title of the index document.
    pub index_title: String,

    /// The paragraph beneath the index title.
    pub index_description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output_dir: default_output_dir(),
            index_title: default_index_title(),
            index_description: default_index_description(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `shard.toml` from `root`, falling back to the defaults if it is
    /// missing or unreadable.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join(FILENAME);
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("docs/architecture.md")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs/architecture")
}

fn default_index_title() -> String {
    "Architecture Document".to_string()
}

fn default_index_description() -> String {
    "This document has been sharded into separate files for easier navigation and maintenance."
        .to_string()
}

/// Errors loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// The config file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// The config file path.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_source")]
        source: PathBuf,

        #[serde(default = "default_output_dir")]
        output_dir: PathBuf,

        #[serde(default = "default_index_title")]
        index_title: String,

        #[serde(default = "default_index_description")]
        index_description: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                source,
                output_dir,
                index_title,
                index_description,
            } => Self {
                source,
                output_dir,
                index_title,
                index_description,
            },
        }
    }
}
