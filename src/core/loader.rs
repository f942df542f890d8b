//! Table file loading
//!
//! Reads the static JSON tables from the data directory. Dimension and
//! fact tables are hard failures when unreadable; the per-make
//! dictionaries degrade to an empty dictionary with a warning, the only
//! soft-failure path in the tool.

use console::style;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::catalog::Catalog;
use crate::model::{MakeCodeDictionary, SiteInfo};

/// Errors that can occur loading a table file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON table file into rows of type T
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the optional `site.json` build metadata.
///
/// A missing file is `Ok(None)`; a present but malformed file is a
/// parse error for the caller to report.
pub fn load_site(catalog: &Catalog) -> Result<Option<SiteInfo>, LoadError> {
    let path = catalog.table_path("site.json");
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| LoadError::Parse { path, source })
}

/// Load the per-make code dictionary for a make key.
///
/// A missing or malformed file yields an empty dictionary and a styled
/// warning on stderr; subsequent lookups proceed against the empty
/// dictionary.
pub fn load_make_dictionary(catalog: &Catalog, make_key: &str) -> MakeCodeDictionary {
    let path = catalog.make_dictionary_path(make_key);

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            warn_dictionary_fallback(&path, &err.to_string());
            return MakeCodeDictionary::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(dict) => dict,
        Err(err) => {
            warn_dictionary_fallback(&path, &err.to_string());
            MakeCodeDictionary::new()
        }
    }
}

fn warn_dictionary_fallback(path: &Path, reason: &str) {
    eprintln!(
        "{} could not load make dictionary {}: {}",
        style("warning:").yellow().bold(),
        path.display(),
        reason
    );
}
