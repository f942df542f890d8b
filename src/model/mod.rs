//! Dataset row types - fact and dimension tables

pub mod code;
pub mod dimensions;
pub mod resolved;
pub mod site;

pub use code::{Code, MakeCodeDictionary, MakeCodeEntry};
pub use dimensions::{CarMake, CodeType, Dimension, PartType, SystemCategory};
pub use resolved::{ResolvedCode, UNIVERSAL, UNKNOWN};
pub use site::SiteInfo;
