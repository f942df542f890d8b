//! Core module - dataset loading, joining, and filtering

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod loader;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use dataset::Dataset;
pub use filter::CodeFilter;
pub use loader::LoadError;
