//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// dtcq configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data directory holding the JSON tables
    pub data_dir: Option<PathBuf>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/dtcq/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(data) = std::env::var("DTCQ_DATA") {
            if !data.is_empty() {
                config.data_dir = Some(PathBuf::from(data));
            }
        }
        if let Ok(format) = std::env::var("DTCQ_FORMAT") {
            if !format.is_empty() {
                config.default_format = Some(format);
            }
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dtcq")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }
}
