//! Code fact row and per-make dictionary entries

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A diagnostic trouble code record as it appears in `Code.json`.
///
/// Foreign keys reference the dimension tables by id; a missing or
/// unmatched key resolves to a default label during the join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Code {
    /// The code string, e.g. "P0300"
    pub diagnostic_code: String,

    /// Human-readable fault description
    #[serde(default)]
    pub description: String,

    /// Foreign key into CodeType.json
    #[serde(default)]
    pub code_type_id: Option<i64>,

    /// Foreign key into PartType.json
    #[serde(default)]
    pub part_type_id: Option<i64>,

    /// Foreign key into SystemCategory.json
    #[serde(default)]
    pub system_category_id: Option<i64>,

    /// Foreign key into CarMake.json (absent = universal code)
    #[serde(default)]
    pub car_make_id: Option<i64>,

    /// External reference page for this code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,

    /// Known likely causes
    #[serde(default, rename = "causes", skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl Code {
    /// The details URL, if present and non-blank after trimming.
    pub fn details_url(&self) -> Option<&str> {
        self.details_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

/// A manufacturer-specific code entry from a per-make dictionary file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MakeCodeEntry {
    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,

    #[serde(default, rename = "causes", skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

/// A per-make code dictionary, keyed by code string.
///
/// Loaded from `ManufacturerSpecificCodes/<make>.json`; an unloadable
/// file degrades to an empty dictionary.
pub type MakeCodeDictionary = HashMap<String, MakeCodeEntry>;
