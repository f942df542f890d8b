//! CLI command implementations

pub mod completions;
pub mod info;
pub mod list;
pub mod lookup;
pub mod makes;
