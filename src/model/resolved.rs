//! Joined view of a fact row with resolved dimension labels

use serde::Serialize;

use crate::model::code::Code;

/// Default label for an unmatched type/part/category foreign key
pub const UNKNOWN: &str = "Unknown";

/// Default label for an unmatched make foreign key
pub const UNIVERSAL: &str = "Universal";

/// A `Code` annotated with the labels resolved from the dimension
/// tables. Produced by the join; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedCode {
    #[serde(flatten)]
    pub code: Code,

    #[serde(rename = "CodeType")]
    pub code_type: String,

    #[serde(rename = "PartType")]
    pub part_type: String,

    #[serde(rename = "SystemCategory")]
    pub system_category: String,

    #[serde(rename = "CarMake")]
    pub make: String,
}

impl ResolvedCode {
    /// The metadata line the details column shows.
    pub fn metadata(&self) -> String {
        format!(
            "{} - {} - {} - {}",
            self.code_type, self.part_type, self.system_category, self.make
        )
    }
}
