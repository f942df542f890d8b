//! Data directory discovery and file layout

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::Config;

/// Subdirectory holding per-make code dictionaries
pub const MAKE_DICT_DIR: &str = "ManufacturerSpecificCodes";

/// Represents a resolved dataset directory.
///
/// The catalog knows where the table files live; it does not read
/// them. Resolution order: explicit flag, then config/environment,
/// then `./data`.
#[derive(Debug)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Resolve the data directory from CLI flag, config, or the
    /// `./data` default.
    pub fn resolve(flag: Option<&Path>, config: &Config) -> Result<Self, CatalogError> {
        let candidate = flag
            .map(Path::to_path_buf)
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("data"));

        Self::open(&candidate)
    }

    /// Open an explicit data directory.
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        if !path.is_dir() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        Ok(Self {
            root: path.to_path_buf(),
        })
    }

    /// The data directory root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a table file within the data directory
    pub fn table_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Path of the make table, accepting both observed spellings
    /// (`CarMake.json` and `CarMakes.json`).
    pub fn make_table_path(&self) -> PathBuf {
        let singular = self.root.join("CarMake.json");
        if singular.exists() {
            return singular;
        }
        let plural = self.root.join("CarMakes.json");
        if plural.exists() {
            return plural;
        }
        singular
    }

    /// Path of the per-make dictionary for the given make key
    pub fn make_dictionary_path(&self, make_key: &str) -> PathBuf {
        self.root
            .join(MAKE_DICT_DIR)
            .join(format!("{}.json", make_key))
    }

    /// Make keys for which a per-make dictionary file exists
    pub fn available_make_dictionaries(&self) -> Vec<String> {
        let dir = self.root.join(MAKE_DICT_DIR);
        let mut keys: Vec<String> = walkdir::WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(str::to_string)
            })
            .collect();
        keys.sort();
        keys
    }
}

/// Errors that can occur resolving the data directory
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("data directory not found at {0:?}. Pass --data or set DTCQ_DATA.")]
    NotFound(PathBuf),
}
