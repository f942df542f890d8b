//! Dimension tables - small id-keyed reference tables

use serde::{Deserialize, Serialize};

/// Common interface for id-keyed dimension rows.
///
/// Each dimension table lives in its own JSON file and resolves a
/// foreign key on the fact row to a human-readable label.
pub trait Dimension: serde::de::DeserializeOwned {
    /// File name of the table within the data directory
    const TABLE: &'static str;

    /// The row's unique id
    fn id(&self) -> i64;

    /// The label substituted into the joined view
    fn label(&self) -> &str;
}

/// Code type (generic/manufacturer, powertrain, body...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeType {
    pub code_type_id: i64,
    #[serde(default)]
    pub name: String,
}

impl Dimension for CodeType {
    const TABLE: &'static str = "CodeType.json";

    fn id(&self) -> i64 {
        self.code_type_id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Affected part classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartType {
    pub part_type_id: i64,
    /// The source data names this column after the table itself
    #[serde(default)]
    pub part_type: String,
}

impl Dimension for PartType {
    const TABLE: &'static str = "PartType.json";

    fn id(&self) -> i64 {
        self.part_type_id
    }

    fn label(&self) -> &str {
        &self.part_type
    }
}

/// Vehicle system category (fuel and air metering, ignition...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemCategory {
    pub system_category_id: i64,
    #[serde(default)]
    pub name: String,
}

impl Dimension for SystemCategory {
    const TABLE: &'static str = "SystemCategory.json";

    fn id(&self) -> i64 {
        self.system_category_id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Vehicle manufacturer.
///
/// `name` is the short key used for per-make dictionary files;
/// `description` is the display name substituted into the joined view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarMake {
    pub car_make_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Dimension for CarMake {
    const TABLE: &'static str = "CarMake.json";

    fn id(&self) -> i64 {
        self.car_make_id
    }

    fn label(&self) -> &str {
        &self.description
    }
}

impl CarMake {
    /// True if `input` names this make by either its short key or its
    /// display name, case-insensitively.
    pub fn matches(&self, input: &str) -> bool {
        self.name.eq_ignore_ascii_case(input) || self.description.eq_ignore_ascii_case(input)
    }
}
