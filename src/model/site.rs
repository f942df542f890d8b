//! Site/build metadata from `site.json`

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Build metadata published alongside the datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub revision: String,
    #[serde(default)]
    pub built_on: String,
}

impl SiteInfo {
    /// The build timestamp parsed as RFC 3339, when it is one.
    pub fn built_on_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.built_on).ok()
    }

    /// Build timestamp for display: normalized when parseable, the raw
    /// string otherwise.
    pub fn built_on_display(&self) -> String {
        match self.built_on_parsed() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M UTC%:z").to_string(),
            None => self.built_on.clone(),
        }
    }
}
